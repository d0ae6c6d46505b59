use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use ebola_setup_sdk::ModuleManager;
use tracing::{error, info};

use crate::config::EbolaSetupConfig;
use crate::domain::configurator::{SetupReport, StartupConfigurator};
use crate::domain::error::{SetupError, StartupError};
use crate::hub::ServiceHub;
use crate::lifecycle::ModuleActivator;

/// Ebola example module: configures the platform every time it is started.
pub struct EbolaSetupModule {
    config: EbolaSetupConfig,
    hub: Arc<ServiceHub>,
    last_report: ArcSwapOption<SetupReport>,
}

impl EbolaSetupModule {
    #[must_use]
    pub fn new(config: EbolaSetupConfig, hub: Arc<ServiceHub>) -> Self {
        Self {
            config,
            hub,
            last_report: ArcSwapOption::from(None),
        }
    }

    /// Report of the most recent successful start.
    #[must_use]
    pub fn last_report(&self) -> Option<Arc<SetupReport>> {
        self.last_report.load_full()
    }

    async fn configure(&self) -> Result<SetupReport, SetupError> {
        let configurator = StartupConfigurator::from_hub(&self.hub, self.config.clone())?;
        configurator.run().await
    }

    /// Ask the host to stop this module. Failures here are logged so they do
    /// not mask the startup cause.
    async fn stop_owning_module(&self) {
        let manager = match self.hub.get::<dyn ModuleManager>() {
            Ok(manager) => manager,
            Err(e) => {
                error!(module = %self.module_id(), error = %e, "Cannot stop module");
                return;
            }
        };
        if let Err(e) = manager.stop_module(self.module_id()).await {
            error!(module = %self.module_id(), error = %e, "Failed to stop module");
        }
    }
}

#[async_trait]
impl ModuleActivator for EbolaSetupModule {
    fn module_id(&self) -> &str {
        &self.config.module_id
    }

    async fn started(&self) -> Result<(), StartupError> {
        info!(module = %self.module_id(), "Starting Ebola example module");

        match self.configure().await {
            Ok(report) => {
                self.last_report.store(Some(Arc::new(report)));
                info!(module = %self.module_id(), "Started Ebola example module");
                Ok(())
            }
            Err(source) => {
                error!(
                    module = %self.module_id(),
                    step = %source.step(),
                    error = %source,
                    "Startup configuration failed, stopping module"
                );
                self.stop_owning_module().await;
                Err(StartupError::new(self.module_id(), source))
            }
        }
    }

    async fn stopped(&self) {
        // Startup configuration is one-way: nothing is rolled back.
        info!(module = %self.module_id(), "Stopped Ebola example module");
    }
}

#[cfg(test)]
mod tests {
    use ebola_setup_sdk::{BundleRegistry, ModuleStatus};

    use super::*;
    use crate::domain::error::SetupStep;
    use crate::infra::memory::{InMemoryBundleRegistry, InMemoryPlatform};

    #[tokio::test]
    async fn stores_report_after_successful_start() {
        let platform = InMemoryPlatform::seeded();
        let hub = Arc::new(ServiceHub::new());
        platform.register_into(&hub);
        let module = EbolaSetupModule::new(EbolaSetupConfig::default(), hub);

        assert!(module.last_report().is_none());
        module.started().await.unwrap();

        let report = module.last_report().unwrap();
        assert_eq!(report.apps_disabled.len(), 5);
        assert!(report.legacy_location_found);
    }

    #[tokio::test]
    async fn missing_service_is_fatal_and_stops_module() {
        let platform = InMemoryPlatform::seeded();
        let hub = Arc::new(ServiceHub::new());
        hub.register::<dyn ModuleManager>(platform.modules.clone());
        let module = EbolaSetupModule::new(EbolaSetupConfig::default(), hub);

        let err = module.started().await.unwrap_err();

        assert_eq!(err.step, SetupStep::ServiceAcquisition);
        assert_eq!(platform.modules.stop_calls(), 1);
        assert!(module.last_report().is_none());
    }

    #[tokio::test]
    async fn stops_the_configured_module_id() {
        let platform = InMemoryPlatform::seeded();
        platform.modules.load("ebola-site-a");
        let hub = Arc::new(ServiceHub::new());
        platform.register_into(&hub);
        hub.register::<dyn BundleRegistry>(Arc::new(InMemoryBundleRegistry::new()));
        let config = EbolaSetupConfig {
            module_id: "ebola-site-a".to_owned(),
            ..EbolaSetupConfig::default()
        };
        let module = EbolaSetupModule::new(config, hub);
        assert_eq!(module.module_id(), "ebola-site-a");

        let err = module.started().await.unwrap_err();

        assert_eq!(err.module_id, "ebola-site-a");
        assert_eq!(platform.modules.status("ebola-site-a"), Some(ModuleStatus::Stopped));
        assert_eq!(
            platform.modules.status(crate::domain::catalog::MODULE_ID),
            Some(ModuleStatus::Started)
        );
    }

    #[tokio::test]
    async fn missing_module_manager_still_surfaces_startup_cause() {
        let hub = Arc::new(ServiceHub::new());
        let module = EbolaSetupModule::new(EbolaSetupConfig::default(), hub);

        let err = module.started().await.unwrap_err();
        assert_eq!(err.module_id, "ebolaexample");
        assert!(matches!(err.source, SetupError::ServiceUnavailable(_)));
    }
}
