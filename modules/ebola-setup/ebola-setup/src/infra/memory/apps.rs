use dashmap::DashMap;
use ebola_setup_sdk::{AppDescriptor, AppRegistry, ServiceError};
use tracing::debug;

#[derive(Default)]
pub struct InMemoryAppRegistry {
    apps: DashMap<String, AppDescriptor>,
}

impl InMemoryAppRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every key present and enabled.
    #[must_use]
    pub fn with_apps(keys: &[&str]) -> Self {
        let registry = Self::new();
        for key in keys {
            registry.register(AppDescriptor::enabled(*key));
        }
        registry
    }

    pub fn register(&self, app: AppDescriptor) {
        self.apps.insert(app.key.clone(), app);
    }

    #[must_use]
    pub fn app(&self, key: &str) -> Option<AppDescriptor> {
        self.apps.get(key).map(|a| a.clone())
    }

    /// All apps, sorted by key.
    #[must_use]
    pub fn apps(&self) -> Vec<AppDescriptor> {
        let mut apps: Vec<AppDescriptor> = self.apps.iter().map(|e| e.value().clone()).collect();
        apps.sort_by(|a, b| a.key.cmp(&b.key));
        apps
    }
}

#[async_trait::async_trait]
impl AppRegistry for InMemoryAppRegistry {
    async fn disable_app(&self, key: &str) -> Result<(), ServiceError> {
        match self.apps.get_mut(key) {
            Some(mut app) => app.enabled = false,
            None => debug!(key, "App not registered, nothing to disable"),
        }
        Ok(())
    }
}
