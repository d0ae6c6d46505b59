use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use ebola_setup_sdk::{ModuleManager, ModuleStatus, ServiceError};
use tracing::warn;

/// Tracks the status of loaded modules.
#[derive(Default)]
pub struct InMemoryModuleManager {
    modules: DashMap<String, ModuleStatus>,
    stop_calls: AtomicUsize,
}

impl InMemoryModuleManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `module_id` as loaded and started.
    pub fn load(&self, module_id: &str) {
        self.modules
            .insert(module_id.to_owned(), ModuleStatus::Started);
    }

    #[must_use]
    pub fn status(&self, module_id: &str) -> Option<ModuleStatus> {
        self.modules.get(module_id).map(|s| *s)
    }

    /// Module ids with their status, sorted by id.
    #[must_use]
    pub fn modules(&self) -> Vec<(String, ModuleStatus)> {
        let mut modules: Vec<(String, ModuleStatus)> = self
            .modules
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect();
        modules.sort_by(|a, b| a.0.cmp(&b.0));
        modules
    }

    #[must_use]
    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ModuleManager for InMemoryModuleManager {
    async fn stop_module(&self, module_id: &str) -> Result<(), ServiceError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        let mut status = self
            .modules
            .get_mut(module_id)
            .ok_or_else(|| ServiceError::not_found("module", module_id))?;
        *status = ModuleStatus::Stopped;
        warn!(module = module_id, "Module stopped by host");
        Ok(())
    }
}
