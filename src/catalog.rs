//! Plan catalog: product slug to display metadata.
//!
//! DESIGN
//! ======
//! An entry exposes its title and tagline as optional providers rather than
//! plain strings. Providers receive the active localizer so the plan name is
//! rendered in the page's locale. Entries loaded from JSON get providers that
//! translate their stored text.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::PlanViewError;
use crate::i18n::Translate;

const BUILTIN_CATALOG: &str = include_str!("../assets/plans.json");

/// Produces a display string in the active locale.
pub type TextProvider = Arc<dyn Fn(&dyn Translate) -> String + Send + Sync>;

/// Display metadata for one plan.
#[derive(Clone)]
pub struct PlanCatalogEntry {
    slug: String,
    title: Option<TextProvider>,
    tagline: Option<TextProvider>,
}

impl PlanCatalogEntry {
    /// An entry with neither a title nor a tagline.
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into(), title: None, tagline: None }
    }

    #[must_use]
    pub fn with_title(mut self, provider: impl Fn(&dyn Translate) -> String + Send + Sync + 'static) -> Self {
        let provider: TextProvider = Arc::new(provider);
        self.title = Some(provider);
        self
    }

    #[must_use]
    pub fn with_tagline(mut self, provider: impl Fn(&dyn Translate) -> String + Send + Sync + 'static) -> Self {
        let provider: TextProvider = Arc::new(provider);
        self.tagline = Some(provider);
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Plan name, if this entry can produce one.
    pub fn title(&self, translator: &dyn Translate) -> Option<String> {
        self.title.as_ref().map(|provider| provider(translator))
    }

    /// Plan tagline, if this entry can produce one.
    pub fn tagline(&self, translator: &dyn Translate) -> Option<String> {
        self.tagline.as_ref().map(|provider| provider(translator))
    }
}

impl fmt::Debug for PlanCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanCatalogEntry")
            .field("slug", &self.slug)
            .field("has_title", &self.title.is_some())
            .field("has_tagline", &self.tagline.is_some())
            .finish()
    }
}

/// Serialized form of a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlanRecord {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

impl From<PlanRecord> for PlanCatalogEntry {
    fn from(record: PlanRecord) -> Self {
        let mut entry = Self::new(record.slug);
        if let Some(title) = record.title {
            entry = entry.with_title(move |t| t.text(&title));
        }
        if let Some(tagline) = record.tagline {
            entry = entry.with_tagline(move |t| t.text(&tagline));
        }
        entry
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    plans: Vec<PlanRecord>,
}

/// Read-only slug lookup. Absence is a normal outcome.
pub trait PlanLookup {
    fn lookup(&self, slug: &str) -> Option<&PlanCatalogEntry>;
}

/// In-memory plan catalog keyed by product slug.
#[derive(Clone, Debug, Default)]
pub struct PlanCatalog {
    entries: HashMap<String, PlanCatalogEntry>,
}

impl PlanCatalog {
    /// Build a catalog, rejecting empty and duplicate slugs.
    pub fn from_entries(entries: impl IntoIterator<Item = PlanCatalogEntry>) -> Result<Self, PlanViewError> {
        let mut map = HashMap::new();
        for entry in entries {
            if entry.slug.is_empty() {
                return Err(PlanViewError::EmptySlug);
            }
            if map.contains_key(&entry.slug) {
                return Err(PlanViewError::DuplicateSlug(entry.slug));
            }
            map.insert(entry.slug.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// Parse `{ "plans": [ { "slug": ..., "title": ..., "tagline": ... } ] }`.
    pub fn from_json(raw: &str) -> Result<Self, PlanViewError> {
        let doc: CatalogDocument = serde_json::from_str(raw).map_err(|e| PlanViewError::json("plan catalog", e))?;
        Self::from_entries(doc.plans.into_iter().map(PlanCatalogEntry::from))
    }

    pub fn load(path: &Path) -> Result<Self, PlanViewError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanViewError::io(path.display().to_string(), e))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(plans = catalog.len(), path = %path.display(), "plan catalog loaded");
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, PlanViewError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog slugs in sorted order.
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

impl PlanLookup for PlanCatalog {
    fn lookup(&self, slug: &str) -> Option<&PlanCatalogEntry> {
        self.entries.get(slug)
    }
}
