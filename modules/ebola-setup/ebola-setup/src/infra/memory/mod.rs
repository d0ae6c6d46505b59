mod administration;
mod apps;
mod forms;
mod locations;
mod metadata;
mod modules;

use std::sync::Arc;

use ebola_setup_sdk::{
    AdministrationService, AppDescriptor, AppRegistry, BundleRegistry, FormDefinition,
    FormResolver, FormService, GlobalProperty, Location, LocationService, LocationTag,
    LocationTagProvider, MetadataBundle, MetadataDeployService, ModuleManager, ModuleStatus,
};
use serde::Serialize;

pub use administration::InMemoryAdministrationService;
pub use apps::InMemoryAppRegistry;
pub use forms::{InMemoryFormResolver, InMemoryFormService};
pub use locations::{ConfiguredLocationTagProvider, InMemoryLocationService};
pub use metadata::{InMemoryBundleRegistry, InMemoryMetadataDeployer};
pub use modules::InMemoryModuleManager;

use crate::domain::catalog;
use crate::hub::ServiceHub;

/// A complete in-process host: one instance of every service the module uses.
pub struct InMemoryPlatform {
    pub bundles: Arc<InMemoryBundleRegistry>,
    pub deployer: Arc<InMemoryMetadataDeployer>,
    pub admin: Arc<InMemoryAdministrationService>,
    pub form_resolver: Arc<InMemoryFormResolver>,
    pub forms: Arc<InMemoryFormService>,
    pub locations: Arc<InMemoryLocationService>,
    pub tag_provider: Arc<ConfiguredLocationTagProvider>,
    pub apps: Arc<InMemoryAppRegistry>,
    pub modules: Arc<InMemoryModuleManager>,
}

impl InMemoryPlatform {
    /// Empty platform: no bundles, forms, locations, tags or apps.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_form_resolver(InMemoryFormResolver::new())
    }

    /// Platform resembling a fresh reference application install with the
    /// Ebola module loaded but not yet configured.
    #[must_use]
    pub fn seeded() -> Self {
        let platform = Self::with_form_resolver(
            InMemoryFormResolver::new().with_resource(catalog::HTML_FORMS[0], "Triage"),
        );

        for name in catalog::METADATA_BUNDLES {
            platform.bundles.register(MetadataBundle::new(*name));
        }

        let login = LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_LOGIN);
        let admission = LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_ADMISSION);
        let transfer = LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_TRANSFER);
        let visit = LocationTag::new("Visit Location");
        for tag in [&login, &admission, &transfer, &visit] {
            platform.locations.add_tag(tag.clone());
        }
        platform.locations.add_location(
            Location::new(catalog::UNKNOWN_LOCATION)
                .with_tag(login.clone())
                .with_tag(admission)
                .with_tag(transfer),
        );
        platform.locations.add_location(
            Location::new("Ebola Treatment Unit")
                .with_tag(login)
                .with_tag(visit),
        );

        for key in catalog::DISABLED_APPS {
            platform.apps.register(AppDescriptor::enabled(*key));
        }
        platform
            .apps
            .register(AppDescriptor::enabled("coreapps.systemadministration"));

        platform.modules.load(catalog::MODULE_ID);
        platform
    }

    fn with_form_resolver(form_resolver: InMemoryFormResolver) -> Self {
        let locations = Arc::new(InMemoryLocationService::new());
        let tag_provider = Arc::new(ConfiguredLocationTagProvider::new(
            locations.clone(),
            catalog::LOCATION_TAG_SUPPORTS_ADMISSION,
            catalog::LOCATION_TAG_SUPPORTS_TRANSFER,
        ));
        Self {
            bundles: Arc::new(InMemoryBundleRegistry::new()),
            deployer: Arc::new(InMemoryMetadataDeployer::new()),
            admin: Arc::new(InMemoryAdministrationService::new()),
            form_resolver: Arc::new(form_resolver),
            forms: Arc::new(InMemoryFormService::new()),
            locations,
            tag_provider,
            apps: Arc::new(InMemoryAppRegistry::new()),
            modules: Arc::new(InMemoryModuleManager::new()),
        }
    }

    /// Register every service under its trait.
    pub fn register_into(&self, hub: &ServiceHub) {
        hub.register::<dyn BundleRegistry>(self.bundles.clone());
        hub.register::<dyn MetadataDeployService>(self.deployer.clone());
        hub.register::<dyn AdministrationService>(self.admin.clone());
        hub.register::<dyn FormResolver>(self.form_resolver.clone());
        hub.register::<dyn FormService>(self.forms.clone());
        hub.register::<dyn LocationService>(self.locations.clone());
        hub.register::<dyn LocationTagProvider>(self.tag_provider.clone());
        hub.register::<dyn AppRegistry>(self.apps.clone());
        hub.register::<dyn ModuleManager>(self.modules.clone());
    }

    /// Deterministic view of everything the module can change.
    #[must_use]
    pub fn snapshot(&self) -> PlatformSnapshot {
        PlatformSnapshot {
            installed_bundles: self.deployer.installed(),
            global_properties: self.admin.properties(),
            forms: self.forms.forms(),
            locations: self.locations.locations(),
            apps: self.apps.apps(),
            modules: self
                .modules
                .modules()
                .into_iter()
                .map(|(id, status)| ModuleSnapshot { id, status })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSnapshot {
    pub installed_bundles: Vec<String>,
    pub global_properties: Vec<GlobalProperty>,
    pub forms: Vec<FormDefinition>,
    pub locations: Vec<Location>,
    pub apps: Vec<AppDescriptor>,
    pub modules: Vec<ModuleSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSnapshot {
    pub id: String,
    pub status: ModuleStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_platform_has_unconfigured_state() {
        let platform = InMemoryPlatform::seeded();
        let snapshot = platform.snapshot();

        assert!(snapshot.installed_bundles.is_empty());
        assert!(snapshot.global_properties.is_empty());
        assert!(snapshot.apps.iter().all(|a| a.enabled));
        assert_eq!(
            platform.modules.status(catalog::MODULE_ID),
            Some(ModuleStatus::Started)
        );
        let unknown = platform.locations.get(catalog::UNKNOWN_LOCATION).unwrap();
        assert_eq!(unknown.tags().count(), 3);
    }

    #[test]
    fn register_into_fills_every_service() {
        let hub = ServiceHub::new();
        InMemoryPlatform::empty().register_into(&hub);

        assert!(hub.contains::<dyn BundleRegistry>());
        assert!(hub.contains::<dyn MetadataDeployService>());
        assert!(hub.contains::<dyn AdministrationService>());
        assert!(hub.contains::<dyn FormResolver>());
        assert!(hub.contains::<dyn FormService>());
        assert!(hub.contains::<dyn LocationService>());
        assert!(hub.contains::<dyn LocationTagProvider>());
        assert!(hub.contains::<dyn AppRegistry>());
        assert!(hub.contains::<dyn ModuleManager>());
    }
}
