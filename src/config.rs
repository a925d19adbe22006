//! Page configuration parsed from environment variables.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::catalog::PlanCatalog;
use crate::error::PlanViewError;
use crate::i18n::{EnglishLocale, Translate, TranslationTable};

pub const ENV_CATALOG_PATH: &str = "PLAN_CATALOG_PATH";
pub const ENV_TRANSLATIONS_PATH: &str = "PLAN_TRANSLATIONS_PATH";
pub const ENV_FEATURE_FLAGS: &str = "PLAN_FEATURE_FLAGS";

/// Set of enabled feature flags such as `jetpack/checklist`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: BTreeSet<String>,
}

impl FeatureFlags {
    /// Build from flag names. Names must be non-empty and free of whitespace.
    pub fn from_names<I, S>(names: I) -> Result<Self, PlanViewError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut enabled = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name.chars().any(char::is_whitespace) {
                return Err(PlanViewError::ConfigParse(format!("invalid feature flag name '{name}'")));
            }
            enabled.insert(name.to_string());
        }
        Ok(Self { enabled })
    }

    /// Parse a comma-separated list, e.g. `jetpack/checklist,login`.
    pub fn parse(raw: &str) -> Result<Self, PlanViewError> {
        Self::from_names(raw.split(','))
    }

    pub fn is_enabled(&self, flag: &str) -> bool {
        self.enabled.contains(flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub catalog_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub features: FeatureFlags,
}

impl PageConfig {
    /// Build page config from environment variables.
    ///
    /// Optional:
    /// - `PLAN_CATALOG_PATH`: JSON plan catalog, built-in catalog when absent
    /// - `PLAN_TRANSLATIONS_PATH`: JSON translation table, English when absent
    /// - `PLAN_FEATURE_FLAGS`: comma-separated enabled feature flags
    pub fn from_env() -> Result<Self, PlanViewError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build page config from an arbitrary variable source.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, PlanViewError> {
        let catalog_path = path_var(&get, ENV_CATALOG_PATH);
        let translations_path = path_var(&get, ENV_TRANSLATIONS_PATH);
        let features = match get(ENV_FEATURE_FLAGS) {
            Some(raw) => FeatureFlags::parse(&raw)?,
            None => FeatureFlags::default(),
        };
        Ok(Self { catalog_path, translations_path, features })
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<PlanCatalog, PlanViewError> {
        match &self.catalog_path {
            Some(path) => PlanCatalog::load(path),
            None => PlanCatalog::builtin(),
        }
    }

    /// Load the configured translation table, or the English identity locale.
    pub fn translator(&self) -> Result<Box<dyn Translate + Send + Sync>, PlanViewError> {
        match &self.translations_path {
            Some(path) => Ok(Box::new(TranslationTable::load(path)?)),
            None => Ok(Box::new(EnglishLocale)),
        }
    }
}

fn path_var(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    let raw = get(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::warn!(var = key, "ignoring empty path variable");
        return None;
    }
    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
