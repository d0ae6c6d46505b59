//! Wires the module to an in-memory platform.

use std::sync::Arc;

use ebola_setup_sdk::{
    AdministrationService, AppRegistry, FormResolutionError, FormResolver, LocationService,
    LocationTagProvider, MetadataDeployService,
};

use crate::config::EbolaSetupConfig;
use crate::hub::ServiceHub;
use crate::infra::memory::{InMemoryPlatform, PlatformSnapshot};
use crate::module::EbolaSetupModule;

use super::failing::{
    FailingAdministrationService, FailingAppRegistry, FailingDeployService, FailingFormResolver,
    FailingLocationService, FailingLocationTagProvider,
};

/// Module plus the platform it configures.
pub struct SetupHarness {
    pub platform: InMemoryPlatform,
    pub hub: Arc<ServiceHub>,
    pub module: EbolaSetupModule,
    pub failing_deploy: Option<Arc<FailingDeployService>>,
}

impl SetupHarness {
    #[must_use]
    pub fn builder() -> SetupHarnessBuilder {
        SetupHarnessBuilder::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> PlatformSnapshot {
        self.platform.snapshot()
    }
}

/// Host service replaced by one that always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailingService {
    Deploy,
    Administration,
    Apps,
    Locations,
    TagProvider,
}

#[derive(Default)]
pub struct SetupHarnessBuilder {
    config: Option<EbolaSetupConfig>,
    empty_platform: bool,
    failing: Vec<FailingService>,
    form_error: Option<FormResolutionError>,
    without_resource_provider: bool,
}

impl SetupHarnessBuilder {
    #[must_use]
    pub fn with_config(mut self, config: EbolaSetupConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from a platform with no seeded data.
    #[must_use]
    pub fn empty_platform(mut self) -> Self {
        self.empty_platform = true;
        self
    }

    #[must_use]
    pub fn with_failing_deploy(mut self) -> Self {
        self.failing.push(FailingService::Deploy);
        self
    }

    #[must_use]
    pub fn with_failing_admin(mut self) -> Self {
        self.failing.push(FailingService::Administration);
        self
    }

    #[must_use]
    pub fn with_failing_apps(mut self) -> Self {
        self.failing.push(FailingService::Apps);
        self
    }

    #[must_use]
    pub fn with_failing_locations(mut self) -> Self {
        self.failing.push(FailingService::Locations);
        self
    }

    #[must_use]
    pub fn with_failing_tag_provider(mut self) -> Self {
        self.failing.push(FailingService::TagProvider);
        self
    }

    #[must_use]
    pub fn with_form_error(mut self, error: FormResolutionError) -> Self {
        self.form_error = Some(error);
        self
    }

    /// Leave the UI resource provider uninitialized.
    #[must_use]
    pub fn without_resource_provider(mut self) -> Self {
        self.without_resource_provider = true;
        self
    }

    #[must_use]
    pub fn build(self) -> SetupHarness {
        let platform = if self.empty_platform {
            InMemoryPlatform::empty()
        } else {
            InMemoryPlatform::seeded()
        };
        if self.without_resource_provider {
            platform.form_resolver.set_provider_available(false);
        }

        let hub = Arc::new(ServiceHub::new());
        platform.register_into(&hub);

        let mut failing_deploy = None;
        for service in self.failing {
            match service {
                FailingService::Deploy => {
                    let deploy = Arc::new(FailingDeployService::new());
                    hub.register::<dyn MetadataDeployService>(deploy.clone());
                    failing_deploy = Some(deploy);
                }
                FailingService::Administration => {
                    hub.register::<dyn AdministrationService>(Arc::new(
                        FailingAdministrationService,
                    ));
                }
                FailingService::Apps => {
                    hub.register::<dyn AppRegistry>(Arc::new(FailingAppRegistry));
                }
                FailingService::Locations => {
                    hub.register::<dyn LocationService>(Arc::new(FailingLocationService));
                }
                FailingService::TagProvider => {
                    hub.register::<dyn LocationTagProvider>(Arc::new(FailingLocationTagProvider));
                }
            }
        }
        if let Some(error) = self.form_error {
            hub.register::<dyn FormResolver>(Arc::new(FailingFormResolver::new(error)));
        }

        let module = EbolaSetupModule::new(self.config.unwrap_or_default(), hub.clone());

        SetupHarness {
            platform,
            hub,
            module,
            failing_deploy,
        }
    }
}
