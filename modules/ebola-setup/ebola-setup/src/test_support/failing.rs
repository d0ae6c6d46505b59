//! Host services that fail on demand.

use std::sync::atomic::{AtomicUsize, Ordering};

use ebola_setup_sdk::{
    AdministrationService, AppRegistry, FormDefinition, FormResolutionError, FormResolver,
    GlobalProperty, Location, LocationService, LocationTag, LocationTagProvider, MetadataBundle,
    MetadataDeployService, ServiceError,
};

/// Deploy service whose every install fails.
#[derive(Default)]
pub struct FailingDeployService {
    calls: AtomicUsize,
}

impl FailingDeployService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataDeployService for FailingDeployService {
    async fn install_bundles(&self, _bundles: &[MetadataBundle]) -> Result<(), ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ServiceError::internal("bundle installation failed"))
    }
}

/// Form resolver that always returns the configured error.
pub struct FailingFormResolver {
    error: FormResolutionError,
}

impl FailingFormResolver {
    #[must_use]
    pub fn new(error: FormResolutionError) -> Self {
        Self { error }
    }
}

#[async_trait::async_trait]
impl FormResolver for FailingFormResolver {
    async fn resolve(&self, _resource_path: &str) -> Result<FormDefinition, FormResolutionError> {
        Err(self.error.clone())
    }
}

/// App registry that rejects every update.
#[derive(Default)]
pub struct FailingAppRegistry;

#[async_trait::async_trait]
impl AppRegistry for FailingAppRegistry {
    async fn disable_app(&self, key: &str) -> Result<(), ServiceError> {
        Err(ServiceError::unavailable(format!("app store offline: {key}")))
    }
}

/// Administration service whose backing store is down.
#[derive(Default)]
pub struct FailingAdministrationService;

#[async_trait::async_trait]
impl AdministrationService for FailingAdministrationService {
    async fn global_property(&self, name: &str) -> Result<Option<GlobalProperty>, ServiceError> {
        Err(ServiceError::internal(format!("cannot read global property {name}")))
    }

    async fn save_global_property(
        &self,
        property: GlobalProperty,
    ) -> Result<GlobalProperty, ServiceError> {
        Err(ServiceError::internal(format!(
            "cannot save global property {}",
            property.name
        )))
    }
}

/// Location service that cannot reach its store.
#[derive(Default)]
pub struct FailingLocationService;

#[async_trait::async_trait]
impl LocationService for FailingLocationService {
    async fn location(&self, name: &str) -> Result<Option<Location>, ServiceError> {
        Err(ServiceError::unavailable(format!("location lookup failed: {name}")))
    }

    async fn location_tag_by_name(&self, name: &str) -> Result<Option<LocationTag>, ServiceError> {
        Err(ServiceError::unavailable(format!("tag lookup failed: {name}")))
    }

    async fn save_location(&self, location: Location) -> Result<Location, ServiceError> {
        Err(ServiceError::unavailable(format!(
            "location save failed: {}",
            location.name
        )))
    }
}

/// Tag provider whose lookups fail.
#[derive(Default)]
pub struct FailingLocationTagProvider;

#[async_trait::async_trait]
impl LocationTagProvider for FailingLocationTagProvider {
    async fn supports_admission_tag(&self) -> Result<Option<LocationTag>, ServiceError> {
        Err(ServiceError::internal("admission tag lookup failed"))
    }

    async fn supports_transfer_tag(&self) -> Result<Option<LocationTag>, ServiceError> {
        Err(ServiceError::internal("transfer tag lookup failed"))
    }
}
