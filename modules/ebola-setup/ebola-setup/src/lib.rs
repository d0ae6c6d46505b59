// === PUBLIC API (from SDK) ===
pub use ebola_setup_sdk::{
    AdministrationService, AppRegistry, BundleRegistry, FormResolutionError, FormResolver,
    FormService, LocationService, LocationTagProvider, MetadataDeployService, ModuleManager,
    ServiceError,
};

// === MODULE DEFINITION ===
pub mod lifecycle;
pub mod module;
pub use lifecycle::ModuleActivator;
pub use module::EbolaSetupModule;

pub mod config;
pub mod hub;
pub use config::{EbolaSetupConfig, GlobalPropertySetting, LegacyLocationConfig};
pub use hub::{HubError, ServiceHub};

pub mod domain;
pub use domain::configurator::{SetupReport, StartupConfigurator};
pub use domain::error::{SetupError, SetupStep, StartupError};

pub mod infra;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
