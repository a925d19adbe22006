//! Errors raised while loading catalogs, translation tables, snapshots and
//! configuration. Deriving a view state never fails.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Stable machine-readable code for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum PlanViewError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected shape.
    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog records share a product slug.
    #[error("duplicate plan slug in catalog: {0}")]
    DuplicateSlug(String),

    /// A catalog record has an empty product slug.
    #[error("catalog record has an empty product slug")]
    EmptySlug,

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl PlanViewError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json { what: what.into(), source }
    }
}

impl ErrorCode for PlanViewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_IO",
            Self::Json { .. } => "E_JSON",
            Self::DuplicateSlug(_) => "E_DUPLICATE_SLUG",
            Self::EmptySlug => "E_EMPTY_SLUG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}
