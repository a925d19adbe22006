use super::*;
use crate::i18n::{EnglishLocale, TranslationTable};

// =============================================================================
// PlanCatalogEntry
// =============================================================================

#[test]
fn bare_entry_has_no_capabilities() {
    let entry = PlanCatalogEntry::new("free_plan");
    assert_eq!(entry.slug(), "free_plan");
    assert!(entry.title(&EnglishLocale).is_none());
    assert!(entry.tagline(&EnglishLocale).is_none());
}

#[test]
fn entry_title_provider_is_invoked() {
    let entry = PlanCatalogEntry::new("value_bundle").with_title(|_| "Premium".to_string());
    assert_eq!(entry.title(&EnglishLocale).as_deref(), Some("Premium"));
}

#[test]
fn record_without_tagline_has_title_only() {
    let record = PlanRecord { slug: "value_bundle".into(), title: Some("Premium".into()), tagline: None };
    let entry = PlanCatalogEntry::from(record);
    assert_eq!(entry.title(&EnglishLocale).as_deref(), Some("Premium"));
    assert!(entry.tagline(&EnglishLocale).is_none());
}

#[test]
fn record_title_is_translated() {
    let record = PlanRecord { slug: "free_plan".into(), title: Some("Free".into()), tagline: None };
    let entry = PlanCatalogEntry::from(record);
    let table = TranslationTable::from_json(r#"{ "locale": "de", "entries": { "Free": "Kostenlos" } }"#).unwrap();
    assert_eq!(entry.title(&table).as_deref(), Some("Kostenlos"));
}

#[test]
fn entry_debug_reports_capabilities() {
    let entry = PlanCatalogEntry::new("jetpack_free").with_tagline(|_| "x".into());
    let rendered = format!("{entry:?}");
    assert!(rendered.contains("has_title: false"));
    assert!(rendered.contains("has_tagline: true"));
}

// =============================================================================
// PlanCatalog
// =============================================================================

#[test]
fn from_entries_rejects_duplicate_slug() {
    let err = PlanCatalog::from_entries([PlanCatalogEntry::new("a"), PlanCatalogEntry::new("a")]).unwrap_err();
    assert!(matches!(err, PlanViewError::DuplicateSlug(ref slug) if slug == "a"));
}

#[test]
fn from_entries_rejects_empty_slug() {
    let err = PlanCatalog::from_entries([PlanCatalogEntry::new("")]).unwrap_err();
    assert!(matches!(err, PlanViewError::EmptySlug));
}

#[test]
fn lookup_unknown_slug_is_none() {
    let catalog = PlanCatalog::from_entries([PlanCatalogEntry::new("a")]).unwrap();
    assert!(catalog.lookup("b").is_none());
    assert!(catalog.lookup("a").is_some());
}

#[test]
fn from_json_reads_records() {
    let catalog = PlanCatalog::from_json(
        r#"{ "plans": [
            { "slug": "value_bundle", "title": "Premium" },
            { "slug": "jetpack_free", "title": "Free", "tagline": "Upgrade" }
        ] }"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.slugs(), vec!["jetpack_free", "value_bundle"]);
    let entry = catalog.lookup("jetpack_free").unwrap();
    assert_eq!(entry.tagline(&EnglishLocale).as_deref(), Some("Upgrade"));
}

#[test]
fn from_json_missing_plans_key_is_error() {
    let err = PlanCatalog::from_json("{}").unwrap_err();
    assert!(matches!(err, PlanViewError::Json { .. }));
}

#[test]
fn default_catalog_is_empty() {
    assert!(PlanCatalog::default().is_empty());
}

#[test]
fn builtin_catalog_parses() {
    let catalog = PlanCatalog::builtin().unwrap();
    assert!(!catalog.is_empty());
    let premium = catalog.lookup("value_bundle").unwrap();
    assert_eq!(premium.title(&EnglishLocale).as_deref(), Some("Premium"));
    assert!(premium.tagline(&EnglishLocale).is_none());
}

#[test]
fn builtin_jetpack_plans_have_taglines() {
    let catalog = PlanCatalog::builtin().unwrap();
    for slug in ["jetpack_free", "jetpack_personal", "jetpack_premium", "jetpack_business"] {
        let entry = catalog.lookup(slug).unwrap();
        assert!(entry.tagline(&EnglishLocale).is_some(), "{slug} has no tagline");
    }
}

#[test]
fn load_reads_catalog_file() {
    let path = std::env::temp_dir().join(format!("current-plan-catalog-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "plans": [ { "slug": "custom", "title": "Custom" } ] }"#).unwrap();
    let catalog = PlanCatalog::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(catalog.slugs(), vec!["custom"]);
}
