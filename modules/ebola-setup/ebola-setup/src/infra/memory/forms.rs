use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use ebola_setup_sdk::{
    FormDefinition, FormResolutionError, FormResolver, FormService, ServiceError,
};

/// UI resources available to the form loader, keyed by `provider:path`.
pub struct InMemoryFormResolver {
    resources: DashMap<String, String>,
    provider_available: AtomicBool,
}

impl InMemoryFormResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: DashMap::new(),
            provider_available: AtomicBool::new(true),
        }
    }

    /// Make `resource_path` resolvable to a form named `form_name`.
    #[must_use]
    pub fn with_resource(self, resource_path: &str, form_name: &str) -> Self {
        self.resources
            .insert(resource_path.to_owned(), form_name.to_owned());
        self
    }

    /// Simulate the resource provider being (un)initialized.
    pub fn set_provider_available(&self, available: bool) {
        self.provider_available.store(available, Ordering::SeqCst);
    }
}

impl Default for InMemoryFormResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FormResolver for InMemoryFormResolver {
    async fn resolve(&self, resource_path: &str) -> Result<FormDefinition, FormResolutionError> {
        if !self.provider_available.load(Ordering::SeqCst) {
            return Err(FormResolutionError::ResourceProviderUnavailable);
        }

        let Some((provider, path)) = resource_path.split_once(':') else {
            return Err(FormResolutionError::Invalid {
                path: resource_path.to_owned(),
                detail: "expected provider:path".to_owned(),
            });
        };
        if provider.is_empty() || path.is_empty() {
            return Err(FormResolutionError::Invalid {
                path: resource_path.to_owned(),
                detail: "provider and path must be non-empty".to_owned(),
            });
        }

        self.resources
            .get(resource_path)
            .map(|name| FormDefinition::new(name.value().clone(), resource_path))
            .ok_or_else(|| FormResolutionError::ResourceNotFound {
                path: resource_path.to_owned(),
            })
    }
}

/// Registered forms keyed by form name.
#[derive(Default)]
pub struct InMemoryFormService {
    forms: DashMap<String, FormDefinition>,
}

impl InMemoryFormService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered forms, sorted by name.
    #[must_use]
    pub fn forms(&self) -> Vec<FormDefinition> {
        let mut forms: Vec<FormDefinition> =
            self.forms.iter().map(|e| e.value().clone()).collect();
        forms.sort_by(|a, b| a.name.cmp(&b.name));
        forms
    }
}

#[async_trait::async_trait]
impl FormService for InMemoryFormService {
    async fn register_form(&self, form: FormDefinition) -> Result<FormDefinition, ServiceError> {
        self.forms.insert(form.name.clone(), form.clone());
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_paths_without_provider() {
        let resolver = InMemoryFormResolver::new();
        let err = resolver.resolve("htmlforms/triage.xml").await.unwrap_err();
        assert!(matches!(err, FormResolutionError::Invalid { .. }));
    }

    #[tokio::test]
    async fn unavailable_provider_wins_over_missing_resource() {
        let resolver = InMemoryFormResolver::new();
        resolver.set_provider_available(false);
        let err = resolver
            .resolve("ebolaexample:htmlforms/missing.xml")
            .await
            .unwrap_err();
        assert!(err.is_resource_provider_unavailable());
    }
}
