use std::sync::Arc;

use ebola_setup_sdk::{
    AdministrationService, AppRegistry, BundleRegistry, FormResolver, FormService,
    LocationService, LocationTagProvider, MetadataDeployService,
};
use serde::Serialize;
use tracing::info;

use crate::config::EbolaSetupConfig;
use crate::domain::error::SetupError;
use crate::domain::steps;
use crate::hub::ServiceHub;

/// What a successful startup sequence changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    pub bundles_installed: Vec<String>,
    pub global_properties: Vec<String>,
    pub forms_registered: Vec<String>,
    pub forms_skipped: Vec<String>,
    pub apps_disabled: Vec<String>,
    pub legacy_location_found: bool,
    pub location_tags_removed: Vec<String>,
}

/// Runs the fixed startup sequence against host services.
///
/// Steps run strictly in order; the first failure aborts the rest.
pub struct StartupConfigurator {
    bundle_registry: Arc<dyn BundleRegistry>,
    deploy: Arc<dyn MetadataDeployService>,
    admin: Arc<dyn AdministrationService>,
    form_resolver: Arc<dyn FormResolver>,
    forms: Arc<dyn FormService>,
    locations: Arc<dyn LocationService>,
    tag_provider: Arc<dyn LocationTagProvider>,
    apps: Arc<dyn AppRegistry>,
    config: EbolaSetupConfig,
}

impl StartupConfigurator {
    /// Acquire every collaborator from `hub`.
    ///
    /// # Errors
    /// Returns `SetupError::ServiceUnavailable` naming the first missing service.
    pub fn from_hub(hub: &ServiceHub, config: EbolaSetupConfig) -> Result<Self, SetupError> {
        Ok(Self {
            bundle_registry: hub.get::<dyn BundleRegistry>()?,
            deploy: hub.get::<dyn MetadataDeployService>()?,
            admin: hub.get::<dyn AdministrationService>()?,
            form_resolver: hub.get::<dyn FormResolver>()?,
            forms: hub.get::<dyn FormService>()?,
            locations: hub.get::<dyn LocationService>()?,
            tag_provider: hub.get::<dyn LocationTagProvider>()?,
            apps: hub.get::<dyn AppRegistry>()?,
            config,
        })
    }

    /// # Errors
    /// Returns the `SetupError` of the first failing step.
    pub async fn run(&self) -> Result<SetupReport, SetupError> {
        let cfg = &self.config;

        let bundles_installed = steps::deploy_metadata_packages(
            self.bundle_registry.as_ref(),
            self.deploy.as_ref(),
            &cfg.bundles,
        )
        .await?;

        let global_properties =
            steps::setup_global_properties(self.admin.as_ref(), &cfg.global_properties).await?;

        let forms =
            steps::setup_forms(self.form_resolver.as_ref(), self.forms.as_ref(), &cfg.forms)
                .await?;

        let apps_disabled = steps::disable_apps(self.apps.as_ref(), &cfg.disabled_apps).await?;

        let legacy = steps::remove_legacy_location_tags(
            self.locations.as_ref(),
            self.tag_provider.as_ref(),
            &cfg.legacy_location,
        )
        .await?;

        let report = SetupReport {
            bundles_installed,
            global_properties,
            forms_registered: forms.registered,
            forms_skipped: forms.skipped,
            apps_disabled,
            legacy_location_found: legacy.found,
            location_tags_removed: legacy.tags_removed,
        };
        info!(
            bundles = report.bundles_installed.len(),
            properties = report.global_properties.len(),
            forms = report.forms_registered.len(),
            apps = report.apps_disabled.len(),
            tags_removed = report.location_tags_removed.len(),
            "Startup configuration applied"
        );
        Ok(report)
    }
}
