use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use ebola_setup_sdk::{Location, LocationService, LocationTag, LocationTagProvider, ServiceError};

/// Locations and location tags keyed by exact name.
#[derive(Default)]
pub struct InMemoryLocationService {
    locations: DashMap<String, Location>,
    tags: DashMap<String, LocationTag>,
    saves: AtomicUsize,
}

impl InMemoryLocationService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tag(&self, tag: LocationTag) {
        self.tags.insert(tag.name.clone(), tag);
    }

    /// Seed a location without counting it as a save.
    pub fn add_location(&self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Location> {
        self.locations.get(name).map(|l| l.clone())
    }

    /// All locations, sorted by name.
    #[must_use]
    pub fn locations(&self) -> Vec<Location> {
        let mut locations: Vec<Location> =
            self.locations.iter().map(|e| e.value().clone()).collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        locations
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LocationService for InMemoryLocationService {
    async fn location(&self, name: &str) -> Result<Option<Location>, ServiceError> {
        Ok(self.get(name))
    }

    async fn location_tag_by_name(&self, name: &str) -> Result<Option<LocationTag>, ServiceError> {
        Ok(self.tags.get(name).map(|t| t.clone()))
    }

    async fn save_location(&self, location: Location) -> Result<Location, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.locations
            .insert(location.name.clone(), location.clone());
        Ok(location)
    }
}

/// Resolves the admission and transfer tags from configured tag names,
/// the way the EMR API reads them from its settings.
pub struct ConfiguredLocationTagProvider {
    locations: Arc<dyn LocationService>,
    admission_tag: String,
    transfer_tag: String,
}

impl ConfiguredLocationTagProvider {
    #[must_use]
    pub fn new(
        locations: Arc<dyn LocationService>,
        admission_tag: impl Into<String>,
        transfer_tag: impl Into<String>,
    ) -> Self {
        Self {
            locations,
            admission_tag: admission_tag.into(),
            transfer_tag: transfer_tag.into(),
        }
    }
}

#[async_trait::async_trait]
impl LocationTagProvider for ConfiguredLocationTagProvider {
    async fn supports_admission_tag(&self) -> Result<Option<LocationTag>, ServiceError> {
        self.locations.location_tag_by_name(&self.admission_tag).await
    }

    async fn supports_transfer_tag(&self) -> Result<Option<LocationTag>, ServiceError> {
        self.locations.location_tag_by_name(&self.transfer_tag).await
    }
}
