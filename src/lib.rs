//! # current-plan
//!
//! View state for the "My Plan" page of a site-management dashboard.
//!
//! A `PlanViewStateDeriver` combines an injected plan catalog, a localizer
//! and feature flags with a `PlanPageSnapshot` of store state, and produces
//! the `PlanViewState` the page renders: headline and features header for
//! the current plan, tagline, loading placeholders, and which optional
//! panels (domain warnings, Jetpack checklist) to mount.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod state;
pub mod view;

pub use catalog::{PlanCatalog, PlanCatalogEntry, PlanLookup, PlanRecord};
pub use config::{FeatureFlags, PageConfig};
pub use error::{ErrorCode, PlanViewError};
pub use i18n::{EnglishLocale, Translate, TranslationTable};
pub use state::{CurrentPlanSummary, Domain, LoadingFlags, PlanDescriptor, PlanPageSnapshot, Site, SiteId};
pub use view::{PlanTitles, PlanViewState, PlanViewStateDeriver};
