//! Typed registry of host services, keyed by the service trait.
//!
//! The host registers `Arc<dyn Trait>` handles before starting the module;
//! the module looks them up by the same trait type.

use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use dashmap::DashMap;

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("service not registered: {type_name}")]
    NotRegistered { type_name: &'static str },
}

#[derive(Default)]
pub struct ServiceHub {
    services: DashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` under `T`, replacing any earlier registration.
    pub fn register<T>(&self, service: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services.insert(TypeId::of::<T>(), Box::new(service));
    }

    /// # Errors
    /// Returns `HubError::NotRegistered` if nothing was registered under `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, HubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value().downcast_ref::<Arc<T>>().cloned())
            .ok_or(HubError::NotRegistered {
                type_name: type_name::<T>(),
            })
    }

    #[must_use]
    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("services", &self.services.len())
            .finish()
    }
}
