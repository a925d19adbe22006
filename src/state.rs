//! Page inputs as handed over by the application store.
//!
//! Everything here is a read-only snapshot. The two selector helpers at the
//! bottom mirror how the store maps raw site state onto the flags the view
//! deriver consumes.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::error::PlanViewError;

pub type SiteId = u64;

/// Plan attached to a site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    pub product_slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    #[serde(default)]
    pub plan: Option<PlanDescriptor>,
}

impl Site {
    pub fn plan_slug(&self) -> Option<&str> {
        self.plan.as_ref().map(|plan| plan.product_slug.as_str())
    }
}

/// A domain attached to the site, with the status flags domain warnings read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub name: String,
    pub is_primary: bool,
    pub is_pending_verification: bool,
    pub current_user_can_manage: bool,
    pub points_to_wpcom: bool,
}

/// Server-side summary of the site's current plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPlanSummary {
    pub is_expiring: bool,
    pub is_free: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub is_requesting_plans: bool,
    pub has_domains_loaded: bool,
}

/// Everything the My Plan page reads from the store for one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPageSnapshot {
    pub selected_site_id: Option<SiteId>,
    pub selected_site: Option<Site>,
    /// `None` until the site's domains have been fetched.
    pub domains: Option<Vec<Domain>>,
    pub current_plan: Option<CurrentPlanSummary>,
    pub is_requesting_site_plans: bool,
    pub is_jetpack: bool,
    pub is_automated_transfer: bool,
}

impl PlanPageSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, PlanViewError> {
        serde_json::from_str(raw).map_err(|e| PlanViewError::json("page snapshot", e))
    }

    pub fn loading_flags(&self) -> LoadingFlags {
        LoadingFlags {
            is_requesting_plans: self.is_requesting_site_plans,
            has_domains_loaded: has_domains_loaded(self.domains.as_deref()),
        }
    }

    pub fn should_show_domain_warnings(&self) -> bool {
        should_show_domain_warnings(self.is_jetpack, self.is_automated_transfer)
    }
}

/// Domain warnings apply to WordPress.com sites and to Jetpack sites that
/// went through automated transfer.
pub fn should_show_domain_warnings(is_jetpack: bool, is_automated_transfer: bool) -> bool {
    !is_jetpack || is_automated_transfer
}

pub fn has_domains_loaded(domains: Option<&[Domain]>) -> bool {
    domains.is_some()
}
