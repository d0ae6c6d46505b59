//! Host platform services the setup module talks to.
//!
//! The host owns persistence and lifecycle for every entity touched here.
//! Implementations are registered in the module's service hub before the
//! module is started.

use async_trait::async_trait;

use crate::error::{FormResolutionError, ServiceError};
use crate::models::{FormDefinition, GlobalProperty, Location, LocationTag, MetadataBundle};

/// Resolves metadata bundles registered with the host by name.
#[async_trait]
pub trait BundleRegistry: Send + Sync {
    /// Returns `Ok(None)` when no bundle is registered under `name`.
    ///
    /// # Errors
    /// Returns `ServiceError` if the registry cannot be queried.
    async fn bundle(&self, name: &str) -> Result<Option<MetadataBundle>, ServiceError>;
}

#[async_trait]
pub trait MetadataDeployService: Send + Sync {
    /// Install the given bundles. Installing an already installed bundle is a no-op.
    ///
    /// Ordering between bundles is the deploy service's responsibility.
    ///
    /// # Errors
    /// Returns `ServiceError` if any bundle fails to install. Bundles installed
    /// before the failure are not rolled back.
    async fn install_bundles(&self, bundles: &[MetadataBundle]) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait AdministrationService: Send + Sync {
    /// # Errors
    /// Returns `ServiceError` if the property store cannot be queried.
    async fn global_property(&self, name: &str) -> Result<Option<GlobalProperty>, ServiceError>;

    /// Create or update the property with the same name.
    ///
    /// # Errors
    /// Returns `ServiceError` if the property cannot be persisted.
    async fn save_global_property(
        &self,
        property: GlobalProperty,
    ) -> Result<GlobalProperty, ServiceError>;
}

/// Loads form definitions from UI resources.
#[async_trait]
pub trait FormResolver: Send + Sync {
    /// # Errors
    /// Returns `FormResolutionError::ResourceProviderUnavailable` when the
    /// resource loading subsystem is not initialized, or another variant when
    /// the resource itself cannot be loaded.
    async fn resolve(&self, resource_path: &str) -> Result<FormDefinition, FormResolutionError>;
}

#[async_trait]
pub trait FormService: Send + Sync {
    /// Register a form definition, replacing any form with the same name.
    ///
    /// # Errors
    /// Returns `ServiceError` if the form cannot be persisted.
    async fn register_form(&self, form: FormDefinition) -> Result<FormDefinition, ServiceError>;
}

#[async_trait]
pub trait LocationService: Send + Sync {
    /// Look up a location by exact name.
    ///
    /// # Errors
    /// Returns `ServiceError` if the location store cannot be queried.
    async fn location(&self, name: &str) -> Result<Option<Location>, ServiceError>;

    /// # Errors
    /// Returns `ServiceError` if the tag store cannot be queried.
    async fn location_tag_by_name(&self, name: &str) -> Result<Option<LocationTag>, ServiceError>;

    /// # Errors
    /// Returns `ServiceError` if the location cannot be persisted.
    async fn save_location(&self, location: Location) -> Result<Location, ServiceError>;
}

/// Supplies the location tags the EMR API is configured with.
#[async_trait]
pub trait LocationTagProvider: Send + Sync {
    /// # Errors
    /// Returns `ServiceError` if the configured tag cannot be looked up.
    async fn supports_admission_tag(&self) -> Result<Option<LocationTag>, ServiceError>;

    /// # Errors
    /// Returns `ServiceError` if the configured tag cannot be looked up.
    async fn supports_transfer_tag(&self) -> Result<Option<LocationTag>, ServiceError>;
}

#[async_trait]
pub trait AppRegistry: Send + Sync {
    /// Disable an app shortcut. Unknown or already disabled keys are a no-op.
    ///
    /// # Errors
    /// Returns `ServiceError` if the app state cannot be persisted.
    async fn disable_app(&self, key: &str) -> Result<(), ServiceError>;
}

/// Host-side module management.
#[async_trait]
pub trait ModuleManager: Send + Sync {
    /// # Errors
    /// Returns `ServiceError::NotFound` if no module with `module_id` is loaded.
    async fn stop_module(&self, module_id: &str) -> Result<(), ServiceError>;
}
