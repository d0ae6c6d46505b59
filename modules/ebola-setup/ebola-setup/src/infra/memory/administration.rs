use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use ebola_setup_sdk::{AdministrationService, GlobalProperty, ServiceError};

/// Global property store keyed by property name.
#[derive(Default)]
pub struct InMemoryAdministrationService {
    properties: DashMap<String, GlobalProperty>,
    saves: AtomicUsize,
}

impl InMemoryAdministrationService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All properties, sorted by name.
    #[must_use]
    pub fn properties(&self) -> Vec<GlobalProperty> {
        let mut props: Vec<GlobalProperty> =
            self.properties.iter().map(|e| e.value().clone()).collect();
        props.sort_by(|a, b| a.name.cmp(&b.name));
        props
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AdministrationService for InMemoryAdministrationService {
    async fn global_property(&self, name: &str) -> Result<Option<GlobalProperty>, ServiceError> {
        Ok(self.properties.get(name).map(|p| p.clone()))
    }

    async fn save_global_property(
        &self,
        property: GlobalProperty,
    ) -> Result<GlobalProperty, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.properties
            .insert(property.name.clone(), property.clone());
        Ok(property)
    }
}
