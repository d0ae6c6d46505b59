use ebola_setup_sdk::{AdministrationService, GlobalProperty};
use tracing::debug;

use crate::config::GlobalPropertySetting;
use crate::domain::error::SetupError;

/// Upsert a single global property: reuse the stored one if present, always
/// overwrite its value, then save.
///
/// # Errors
/// Returns `SetupError::GlobalProperty` if the property cannot be read or saved.
pub async fn set_global_property(
    admin: &dyn AdministrationService,
    setting: &GlobalPropertySetting,
) -> Result<GlobalProperty, SetupError> {
    let wrap = |source| SetupError::GlobalProperty {
        name: setting.name.clone(),
        source,
    };

    let existing = admin.global_property(&setting.name).await.map_err(wrap)?;
    let created = existing.is_none();
    let mut property =
        existing.unwrap_or_else(|| GlobalProperty::new(&setting.name, &setting.value));
    property.set_value(&setting.value);
    if let Some(description) = &setting.description {
        property.description = Some(description.clone());
    }

    let saved = admin.save_global_property(property).await.map_err(wrap)?;
    debug!(name = %saved.name, created, "Saved global property");
    Ok(saved)
}

/// # Errors
/// Stops at the first property that fails; see [`set_global_property`].
pub async fn setup_global_properties(
    admin: &dyn AdministrationService,
    table: &[GlobalPropertySetting],
) -> Result<Vec<String>, SetupError> {
    let mut written = Vec::with_capacity(table.len());
    for setting in table {
        let saved = set_global_property(admin, setting).await?;
        written.push(saved.name);
    }
    Ok(written)
}
