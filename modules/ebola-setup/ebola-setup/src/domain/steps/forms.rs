use ebola_setup_sdk::{FormResolutionError, FormResolver, FormService};
use tracing::{error, info};

use crate::domain::error::SetupError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSetupOutcome {
    pub registered: Vec<String>,
    /// Paths left unloaded because the resource provider was not initialized.
    pub skipped: Vec<String>,
}

/// Resolve and register each HTML form resource.
///
/// When the UI resource provider is not initialized (component tests run
/// without a web layer) the remaining forms are skipped and the step
/// succeeds. Every other failure propagates.
///
/// # Errors
/// Returns `SetupError::FormResolution` or `SetupError::FormRegistration`.
pub async fn setup_forms(
    resolver: &dyn FormResolver,
    forms: &dyn FormService,
    paths: &[String],
) -> Result<FormSetupOutcome, SetupError> {
    let mut outcome = FormSetupOutcome::default();

    for (idx, path) in paths.iter().enumerate() {
        let form = match resolver.resolve(path).await {
            Ok(form) => form,
            Err(FormResolutionError::ResourceProviderUnavailable) => {
                error!(
                    path = %path,
                    "Unable to load HTML forms--this error is expected when running component tests, but it is an error if you see it in production"
                );
                outcome.skipped.extend_from_slice(&paths[idx..]);
                return Ok(outcome);
            }
            Err(source) => {
                return Err(SetupError::FormResolution {
                    path: path.clone(),
                    source,
                });
            }
        };

        let registered =
            forms
                .register_form(form)
                .await
                .map_err(|source| SetupError::FormRegistration {
                    path: path.clone(),
                    source,
                })?;
        info!(form = %registered.name, path = %path, "Registered HTML form");
        outcome.registered.push(registered.name);
    }

    Ok(outcome)
}
