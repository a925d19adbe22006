use super::*;

// =============================================================================
// PlanViewError::error_code
// =============================================================================

#[test]
fn error_code_io() {
    let err = PlanViewError::io("plans.json", std::io::Error::from(std::io::ErrorKind::NotFound));
    assert_eq!(err.error_code(), "E_IO");
}

#[test]
fn error_code_json() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PlanViewError::json("catalog", source);
    assert_eq!(err.error_code(), "E_JSON");
}

#[test]
fn error_code_duplicate_slug() {
    let err = PlanViewError::DuplicateSlug("value_bundle".into());
    assert_eq!(err.error_code(), "E_DUPLICATE_SLUG");
}

#[test]
fn error_code_empty_slug() {
    assert_eq!(PlanViewError::EmptySlug.error_code(), "E_EMPTY_SLUG");
}

#[test]
fn error_code_config_parse() {
    let err = PlanViewError::ConfigParse("bad".into());
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn io_display_names_path() {
    let err = PlanViewError::io("/tmp/missing.json", std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(err.to_string().contains("/tmp/missing.json"));
}

#[test]
fn duplicate_slug_display_names_slug() {
    let err = PlanViewError::DuplicateSlug("personal-bundle".into());
    assert_eq!(err.to_string(), "duplicate plan slug in catalog: personal-bundle");
}
