//! The individual startup steps.
//!
//! Each step takes the host services it needs plus the slice of
//! configuration it applies, and is safe to run again on an already
//! configured platform.

mod apps;
mod forms;
mod global_properties;
mod locations;
mod metadata;

pub use apps::disable_apps;
pub use forms::{FormSetupOutcome, setup_forms};
pub use global_properties::{set_global_property, setup_global_properties};
pub use locations::{LegacyLocationOutcome, remove_legacy_location_tags};
pub use metadata::deploy_metadata_packages;
