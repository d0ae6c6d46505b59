use ebola_setup_sdk::{LocationService, LocationTagProvider};
use tracing::{debug, info};

use crate::config::LegacyLocationConfig;
use crate::domain::error::SetupError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyLocationOutcome {
    pub found: bool,
    pub tags_removed: Vec<String>,
}

/// Strip the login, admission and transfer tags from the legacy location.
///
/// A missing location is not an error. Tags that do not exist on the
/// platform are skipped. The location is saved whenever it was found.
///
/// # Errors
/// Returns `SetupError::Location` or `SetupError::TagProvider` when a host
/// service fails.
pub async fn remove_legacy_location_tags(
    locations: &dyn LocationService,
    tag_provider: &dyn LocationTagProvider,
    cfg: &LegacyLocationConfig,
) -> Result<LegacyLocationOutcome, SetupError> {
    let wrap = |source| SetupError::Location {
        location: cfg.name.clone(),
        source,
    };

    let Some(mut location) = locations.location(&cfg.name).await.map_err(wrap)? else {
        debug!(location = %cfg.name, "Legacy location not present, nothing to clean up");
        return Ok(LegacyLocationOutcome::default());
    };

    let login = locations
        .location_tag_by_name(&cfg.login_tag)
        .await
        .map_err(wrap)?;
    let admission = tag_provider
        .supports_admission_tag()
        .await
        .map_err(SetupError::TagProvider)?;
    let transfer = tag_provider
        .supports_transfer_tag()
        .await
        .map_err(SetupError::TagProvider)?;

    let mut tags_removed = Vec::new();
    for tag in [login, admission, transfer].into_iter().flatten() {
        if location.remove_tag(&tag) {
            tags_removed.push(tag.name);
        }
    }

    locations.save_location(location).await.map_err(wrap)?;
    info!(
        location = %cfg.name,
        removed = tags_removed.len(),
        "Removed legacy location tags"
    );

    Ok(LegacyLocationOutcome {
        found: true,
        tags_removed,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ebola_setup_sdk::{Location, LocationTag};

    use super::*;
    use crate::domain::catalog;
    use crate::infra::memory::{ConfiguredLocationTagProvider, InMemoryLocationService};

    fn platform() -> (Arc<InMemoryLocationService>, ConfiguredLocationTagProvider) {
        let locations = Arc::new(InMemoryLocationService::new());
        for name in [
            catalog::LOCATION_TAG_SUPPORTS_LOGIN,
            catalog::LOCATION_TAG_SUPPORTS_ADMISSION,
            catalog::LOCATION_TAG_SUPPORTS_TRANSFER,
        ] {
            locations.add_tag(LocationTag::new(name));
        }
        let provider = ConfiguredLocationTagProvider::new(
            locations.clone(),
            catalog::LOCATION_TAG_SUPPORTS_ADMISSION,
            catalog::LOCATION_TAG_SUPPORTS_TRANSFER,
        );
        (locations, provider)
    }

    #[tokio::test]
    async fn removes_three_tags_and_keeps_others() {
        let (locations, provider) = platform();
        locations.add_location(
            Location::new(catalog::UNKNOWN_LOCATION)
                .with_tag(LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_LOGIN))
                .with_tag(LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_ADMISSION))
                .with_tag(LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_TRANSFER))
                .with_tag(LocationTag::new("Visit Location")),
        );

        let outcome = remove_legacy_location_tags(
            locations.as_ref(),
            &provider,
            &LegacyLocationConfig::default(),
        )
        .await
        .unwrap();

        assert!(outcome.found);
        assert_eq!(outcome.tags_removed.len(), 3);
        let stored = locations.get(catalog::UNKNOWN_LOCATION).unwrap();
        assert!(stored.has_tag("Visit Location"));
        assert_eq!(stored.tags().count(), 1);
    }

    #[tokio::test]
    async fn absent_location_is_a_silent_no_op() {
        let (locations, provider) = platform();
        locations.add_location(
            Location::new("Triage").with_tag(LocationTag::new(catalog::LOCATION_TAG_SUPPORTS_LOGIN)),
        );
        let before = locations.locations();

        let outcome = remove_legacy_location_tags(
            locations.as_ref(),
            &provider,
            &LegacyLocationConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, LegacyLocationOutcome::default());
        assert_eq!(locations.locations(), before);
        assert_eq!(locations.save_count(), 0);
    }

    #[tokio::test]
    async fn already_clean_location_stays_clean() {
        let (locations, provider) = platform();
        locations.add_location(Location::new(catalog::UNKNOWN_LOCATION));

        let outcome = remove_legacy_location_tags(
            locations.as_ref(),
            &provider,
            &LegacyLocationConfig::default(),
        )
        .await
        .unwrap();

        assert!(outcome.found);
        assert!(outcome.tags_removed.is_empty());
        assert_eq!(
            locations
                .get(catalog::UNKNOWN_LOCATION)
                .unwrap()
                .tags()
                .count(),
            0
        );
    }

    #[tokio::test]
    async fn undefined_tags_are_skipped() {
        let locations = Arc::new(InMemoryLocationService::new());
        let provider = ConfiguredLocationTagProvider::new(
            locations.clone(),
            catalog::LOCATION_TAG_SUPPORTS_ADMISSION,
            catalog::LOCATION_TAG_SUPPORTS_TRANSFER,
        );
        locations.add_location(Location::new(catalog::UNKNOWN_LOCATION));

        let outcome = remove_legacy_location_tags(
            locations.as_ref(),
            &provider,
            &LegacyLocationConfig::default(),
        )
        .await
        .unwrap();

        assert!(outcome.found);
        assert_eq!(locations.save_count(), 1);
    }
}
