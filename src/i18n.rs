//! Localization seam.
//!
//! DESIGN
//! ======
//! Templates use named sprintf-style placeholders (`%(planName)s`). The
//! source (English) template doubles as the lookup key, so a table that is
//! missing a key still renders a readable string.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::PlanViewError;

/// Named interpolation arguments, e.g. `&[("planName", "Premium")]`.
pub type Args<'a> = [(&'a str, &'a str)];

/// Translates a source template and fills in its named arguments.
pub trait Translate {
    fn translate(&self, template: &str, args: &Args<'_>) -> String;

    /// Translate a template that takes no arguments.
    fn text(&self, template: &str) -> String {
        self.translate(template, &[])
    }
}

/// Identity localizer: renders source templates as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishLocale;

impl Translate for EnglishLocale {
    fn translate(&self, template: &str, args: &Args<'_>) -> String {
        interpolate(template, args)
    }
}

/// Source template to localized template mapping for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationTable {
    pub locale: String,
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parse a table from its JSON form:
    /// `{ "locale": "de", "entries": { "My Plan": "Mein Tarif" } }`.
    pub fn from_json(raw: &str) -> Result<Self, PlanViewError> {
        serde_json::from_str(raw).map_err(|e| PlanViewError::json("translation table", e))
    }

    pub fn load(path: &Path) -> Result<Self, PlanViewError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanViewError::io(path.display().to_string(), e))?;
        let table = Self::from_json(&raw)?;
        tracing::info!(locale = %table.locale, entries = table.entries.len(), path = %path.display(), "translation table loaded");
        Ok(table)
    }
}

impl Translate for TranslationTable {
    fn translate(&self, template: &str, args: &Args<'_>) -> String {
        let localized = self.entries.get(template).map_or(template, String::as_str);
        interpolate(localized, args)
    }
}

/// Replace every `%(name)s` placeholder whose name appears in `args`.
/// Unknown placeholders and unterminated `%(` sequences are left untouched.
pub fn interpolate(template: &str, args: &Args<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find(")s") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
