use ebola_setup_sdk::AppRegistry;
use tracing::info;

use crate::domain::error::SetupError;

/// # Errors
/// Returns `SetupError::DisableApp` for the first app the registry fails to update.
pub async fn disable_apps(
    registry: &dyn AppRegistry,
    keys: &[String],
) -> Result<Vec<String>, SetupError> {
    for key in keys {
        registry
            .disable_app(key)
            .await
            .map_err(|source| SetupError::DisableApp {
                key: key.clone(),
                source,
            })?;
    }
    info!(count = keys.len(), "Disabled app shortcuts");
    Ok(keys.to_vec())
}
