use ebola_setup_sdk::{BundleRegistry, MetadataBundle, MetadataDeployService};
use tracing::info;

use crate::domain::error::SetupError;

/// Resolve every bundle by name, then install them in one call.
///
/// Nothing is installed when any name is unregistered.
///
/// # Errors
/// Returns `SetupError::UnregisteredBundle` for an unknown name, or the
/// lookup/install failure reported by the host.
pub async fn deploy_metadata_packages(
    registry: &dyn BundleRegistry,
    deploy: &dyn MetadataDeployService,
    names: &[String],
) -> Result<Vec<String>, SetupError> {
    let mut bundles: Vec<MetadataBundle> = Vec::with_capacity(names.len());
    for name in names {
        let bundle = registry
            .bundle(name)
            .await
            .map_err(|source| SetupError::BundleLookup {
                name: name.clone(),
                source,
            })?
            .ok_or_else(|| SetupError::UnregisteredBundle { name: name.clone() })?;
        bundles.push(bundle);
    }

    deploy
        .install_bundles(&bundles)
        .await
        .map_err(SetupError::BundleInstall)?;

    info!(count = bundles.len(), "Installed metadata bundles");
    Ok(bundles.into_iter().map(|b| b.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::{InMemoryBundleRegistry, InMemoryMetadataDeployer};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[tokio::test]
    async fn installs_all_bundles_in_a_single_call() {
        let registry = InMemoryBundleRegistry::with_bundles(&["ebolaMetadata", "ebolaDemoData"]);
        let deployer = InMemoryMetadataDeployer::new();

        let installed = deploy_metadata_packages(
            &registry,
            &deployer,
            &names(&["ebolaMetadata", "ebolaDemoData"]),
        )
        .await
        .unwrap();

        assert_eq!(installed, vec!["ebolaMetadata", "ebolaDemoData"]);
        assert_eq!(deployer.install_calls(), 1);
        assert_eq!(deployer.installed(), vec!["ebolaDemoData", "ebolaMetadata"]);
    }

    #[tokio::test]
    async fn unregistered_bundle_installs_nothing() {
        let registry = InMemoryBundleRegistry::with_bundles(&["ebolaMetadata"]);
        let deployer = InMemoryMetadataDeployer::new();

        let err = deploy_metadata_packages(
            &registry,
            &deployer,
            &names(&["ebolaMetadata", "ebolaDemoData"]),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, SetupError::UnregisteredBundle { ref name } if name == "ebolaDemoData"));
        assert_eq!(deployer.install_calls(), 0);
        assert!(deployer.installed().is_empty());
    }

    #[tokio::test]
    async fn reinstalling_is_idempotent() {
        let registry = InMemoryBundleRegistry::with_bundles(&["ebolaMetadata"]);
        let deployer = InMemoryMetadataDeployer::new();
        let list = names(&["ebolaMetadata"]);

        deploy_metadata_packages(&registry, &deployer, &list)
            .await
            .unwrap();
        deploy_metadata_packages(&registry, &deployer, &list)
            .await
            .unwrap();

        assert_eq!(deployer.install_calls(), 2);
        assert_eq!(deployer.installed(), vec!["ebolaMetadata"]);
    }
}
