use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use ebola_setup_sdk::{BundleRegistry, MetadataBundle, MetadataDeployService, ServiceError};

/// Bundles known to the host, by name.
#[derive(Default)]
pub struct InMemoryBundleRegistry {
    bundles: DashMap<String, MetadataBundle>,
}

impl InMemoryBundleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bundles(names: &[&str]) -> Self {
        let registry = Self::new();
        for name in names {
            registry.register(MetadataBundle::new(*name));
        }
        registry
    }

    pub fn register(&self, bundle: MetadataBundle) {
        self.bundles.insert(bundle.name.clone(), bundle);
    }
}

#[async_trait::async_trait]
impl BundleRegistry for InMemoryBundleRegistry {
    async fn bundle(&self, name: &str) -> Result<Option<MetadataBundle>, ServiceError> {
        Ok(self.bundles.get(name).map(|b| b.clone()))
    }
}

/// Records installed bundles. Reinstalling is a no-op.
#[derive(Default)]
pub struct InMemoryMetadataDeployer {
    installed: DashMap<String, MetadataBundle>,
    install_calls: AtomicUsize,
}

impl InMemoryMetadataDeployer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installed bundle names, sorted.
    #[must_use]
    pub fn installed(&self) -> Vec<String> {
        let mut names: Vec<String> = self.installed.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn install_calls(&self) -> usize {
        self.install_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataDeployService for InMemoryMetadataDeployer {
    async fn install_bundles(&self, bundles: &[MetadataBundle]) -> Result<(), ServiceError> {
        self.install_calls.fetch_add(1, Ordering::SeqCst);
        for bundle in bundles {
            self.installed
                .entry(bundle.name.clone())
                .or_insert_with(|| bundle.clone());
        }
        Ok(())
    }
}
