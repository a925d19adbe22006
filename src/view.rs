//! My Plan page view state.
//!
//! DESIGN
//! ======
//! The deriver borrows its collaborators (plan catalog, localizer, feature
//! flags) and turns one `PlanPageSnapshot` into one `PlanViewState`. It owns
//! no state, so the latest snapshot's view state is always the current one.
//!
//! Catalog misses and entries without a title or tagline are ordinary
//! branches. They fall back to empty titles and the default tagline.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;

use crate::catalog::{PlanCatalogEntry, PlanLookup};
use crate::config::FeatureFlags;
use crate::i18n::Translate;
use crate::state::{CurrentPlanSummary, Domain, PlanPageSnapshot, Site, SiteId};

pub const PLAN_NAME_ARG: &str = "planName";
pub const TITLE_TEMPLATE: &str = "Your site is on a %(planName)s plan";
pub const FEATURES_HEADER_TEMPLATE: &str = "%(planName)s plan features";
pub const DEFAULT_TAGLINE: &str =
    "Unlock the full potential of your site with all the features included in your plan.";
pub const DOCUMENT_TITLE: &str = "My Plan";

pub const DOMAIN_WARNINGS_POSITION: &str = "current-plan";

/// Domain warning rules shown on this page, in display priority order.
pub const DOMAIN_WARNING_RULES: [&str; 7] = [
    "newDomainsWithPrimary",
    "newDomains",
    "unverifiedDomainsCanManage",
    "pendingGappsTosAcceptanceDomains",
    "unverifiedDomainsCannotManage",
    "wrongNSMappedDomains",
    "newTransfersWrongNS",
];

pub const JETPACK_CHECKLIST_FLAG: &str = "jetpack/checklist";

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlanTitles {
    pub title: String,
    pub features_header: String,
}

/// Props for the domain warnings panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainWarningsPanel {
    pub position: &'static str,
    pub rules: &'static [&'static str],
    pub domains: Vec<Domain>,
}

/// Props for the Jetpack onboarding checklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JetpackChecklist {
    /// Sites whose Jetpack plugins must be fetched for the checklist.
    pub plugin_query_site_ids: Vec<SiteId>,
}

/// Render-ready state for one pass of the My Plan page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanViewState {
    pub document_title: String,
    pub title: String,
    pub features_header: String,
    pub tag_line: String,
    pub is_loading: bool,
    pub show_domain_warnings: bool,
    pub should_query_site_domains: bool,
    /// Slug handed to the purchase-features list.
    pub current_plan_slug: Option<String>,
    /// The features list renders as a placeholder while loading.
    pub features_placeholder: bool,
    pub current_plan: Option<CurrentPlanSummary>,
    pub domain_warnings: Option<DomainWarningsPanel>,
    pub jetpack_checklist: Option<JetpackChecklist>,
}

// =============================================================================
// PURE RULES
// =============================================================================

/// The page is loading until a site is selected and its plans have arrived.
pub fn compute_loading(site: Option<&Site>, is_requesting_plans: bool) -> bool {
    site.is_none() || is_requesting_plans
}

pub fn derive_domain_warning_visibility(has_domains_loaded: bool, should_show_domain_warnings: bool) -> bool {
    has_domains_loaded && should_show_domain_warnings
}

/// Whether the site's domains should be fetched.
pub fn derive_domain_query_needed(selected_site_id: Option<SiteId>, should_show_domain_warnings: bool) -> bool {
    selected_site_id.is_some() && should_show_domain_warnings
}

pub fn jetpack_checklist_visible(flags: &FeatureFlags, is_jetpack: bool, is_automated_transfer: bool) -> bool {
    flags.is_enabled(JETPACK_CHECKLIST_FLAG) && is_jetpack && !is_automated_transfer
}

// =============================================================================
// DERIVER
// =============================================================================

pub struct PlanViewStateDeriver<'a> {
    catalog: &'a dyn PlanLookup,
    translator: &'a dyn Translate,
    features: &'a FeatureFlags,
}

impl<'a> PlanViewStateDeriver<'a> {
    pub fn new(catalog: &'a dyn PlanLookup, translator: &'a dyn Translate, features: &'a FeatureFlags) -> Self {
        Self { catalog, translator, features }
    }

    /// Look up the catalog entry for a slug. A missing slug is a miss.
    pub fn resolve_plan_catalog_entry(&self, product_slug: Option<&str>) -> Option<&'a PlanCatalogEntry> {
        let slug = product_slug?;
        let catalog: &'a dyn PlanLookup = self.catalog;
        let entry = catalog.lookup(slug);
        if entry.is_none() {
            tracing::debug!(slug, "plan slug not in catalog");
        }
        entry
    }

    pub fn derive_titles(&self, entry: Option<&PlanCatalogEntry>) -> PlanTitles {
        let Some(plan_name) = entry.and_then(|e| e.title(self.translator)) else {
            return PlanTitles::default();
        };
        let args = [(PLAN_NAME_ARG, plan_name.as_str())];
        PlanTitles {
            title: self.translator.translate(TITLE_TEMPLATE, &args),
            features_header: self.translator.translate(FEATURES_HEADER_TEMPLATE, &args),
        }
    }

    /// The entry's own tagline replaces the default outright.
    pub fn derive_tagline(&self, entry: Option<&PlanCatalogEntry>) -> String {
        entry
            .and_then(|e| e.tagline(self.translator))
            .unwrap_or_else(|| self.translator.text(DEFAULT_TAGLINE))
    }

    pub fn derive(&self, snapshot: &PlanPageSnapshot) -> PlanViewState {
        let site = snapshot.selected_site.as_ref();
        let slug = site.and_then(Site::plan_slug);
        let flags = snapshot.loading_flags();
        let should_show_domain_warnings = snapshot.should_show_domain_warnings();

        let is_loading = compute_loading(site, flags.is_requesting_plans);
        let entry = self.resolve_plan_catalog_entry(slug);
        let PlanTitles { title, features_header } = self.derive_titles(entry);
        let tag_line = self.derive_tagline(entry);

        let show_domain_warnings = derive_domain_warning_visibility(flags.has_domains_loaded, should_show_domain_warnings);
        let should_query_site_domains = derive_domain_query_needed(snapshot.selected_site_id, should_show_domain_warnings);

        let domain_warnings = show_domain_warnings.then(|| DomainWarningsPanel {
            position: DOMAIN_WARNINGS_POSITION,
            rules: &DOMAIN_WARNING_RULES,
            domains: snapshot.domains.clone().unwrap_or_default(),
        });

        let jetpack_checklist = jetpack_checklist_visible(self.features, snapshot.is_jetpack, snapshot.is_automated_transfer)
            .then(|| JetpackChecklist { plugin_query_site_ids: snapshot.selected_site_id.into_iter().collect() });

        tracing::debug!(
            site_id = ?snapshot.selected_site_id,
            slug = ?slug,
            is_loading,
            show_domain_warnings,
            "derived plan view state"
        );

        PlanViewState {
            document_title: self.translator.text(DOCUMENT_TITLE),
            title,
            features_header,
            tag_line,
            is_loading,
            show_domain_warnings,
            should_query_site_domains,
            current_plan_slug: slug.map(str::to_string),
            features_placeholder: is_loading,
            current_plan: snapshot.current_plan,
            domain_warnings,
            jetpack_checklist,
        }
    }
}
