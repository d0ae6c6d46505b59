pub mod api;
pub mod error;

pub mod models;

pub use models::{
    AppDescriptor, FormDefinition, GlobalProperty, Location, LocationTag, MetadataBundle,
    ModuleStatus,
};

pub use api::{
    AdministrationService, AppRegistry, BundleRegistry, FormResolver, FormService,
    LocationService, LocationTagProvider, MetadataDeployService, ModuleManager,
};
pub use error::{FormResolutionError, ServiceError};
