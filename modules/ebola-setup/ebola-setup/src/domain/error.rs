use std::fmt;

use ebola_setup_sdk::{FormResolutionError, ServiceError};

use crate::hub::HubError;

/// Stage of the startup sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SetupStep {
    ServiceAcquisition,
    MetadataDeploy,
    GlobalProperties,
    Forms,
    DisableApps,
    LegacyLocationTags,
}

impl SetupStep {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServiceAcquisition => "service acquisition",
            Self::MetadataDeploy => "metadata deploy",
            Self::GlobalProperties => "global properties",
            Self::Forms => "forms",
            Self::DisableApps => "disable apps",
            Self::LegacyLocationTags => "legacy location tags",
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single startup step.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("required host service is missing")]
    ServiceUnavailable(#[from] HubError),

    #[error("metadata bundle '{name}' is not registered")]
    UnregisteredBundle { name: String },

    #[error("failed to look up metadata bundle '{name}'")]
    BundleLookup {
        name: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to install metadata bundles")]
    BundleInstall(#[source] ServiceError),

    #[error("failed to set global property '{name}'")]
    GlobalProperty {
        name: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to resolve form resource '{path}'")]
    FormResolution {
        path: String,
        #[source]
        source: FormResolutionError,
    },

    #[error("failed to register form from '{path}'")]
    FormRegistration {
        path: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to disable app '{key}'")]
    DisableApp {
        key: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to update location '{location}'")]
    Location {
        location: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to resolve configured location tags")]
    TagProvider(#[source] ServiceError),
}

impl SetupError {
    #[must_use]
    pub fn step(&self) -> SetupStep {
        match self {
            Self::ServiceUnavailable(_) => SetupStep::ServiceAcquisition,
            Self::UnregisteredBundle { .. } | Self::BundleLookup { .. } | Self::BundleInstall(_) => {
                SetupStep::MetadataDeploy
            }
            Self::GlobalProperty { .. } => SetupStep::GlobalProperties,
            Self::FormResolution { .. } | Self::FormRegistration { .. } => SetupStep::Forms,
            Self::DisableApp { .. } => SetupStep::DisableApps,
            Self::Location { .. } | Self::TagProvider(_) => SetupStep::LegacyLocationTags,
        }
    }
}

/// Fatal startup failure surfaced to the host after the module was stopped.
#[derive(Debug, thiserror::Error)]
#[error("failed to set up the {module_id} module ({step} step)")]
pub struct StartupError {
    pub module_id: String,
    pub step: SetupStep,
    #[source]
    pub source: SetupError,
}

impl StartupError {
    #[must_use]
    pub fn new(module_id: impl Into<String>, source: SetupError) -> Self {
        Self {
            module_id: module_id.into(),
            step: source.step(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn startup_error_keeps_original_cause() {
        let err = StartupError::new(
            "ebolaexample",
            SetupError::BundleInstall(ServiceError::internal("disk full")),
        );

        assert_eq!(err.step, SetupStep::MetadataDeploy);
        assert_eq!(
            err.to_string(),
            "failed to set up the ebolaexample module (metadata deploy step)"
        );

        let cause = err.source().unwrap();
        assert_eq!(cause.to_string(), "failed to install metadata bundles");
        assert_eq!(cause.source().unwrap().to_string(), "internal: disk full");
    }

    #[test]
    fn steps_are_ordered_as_executed() {
        assert!(SetupStep::ServiceAcquisition < SetupStep::MetadataDeploy);
        assert!(SetupStep::MetadataDeploy < SetupStep::GlobalProperties);
        assert!(SetupStep::GlobalProperties < SetupStep::Forms);
        assert!(SetupStep::Forms < SetupStep::DisableApps);
        assert!(SetupStep::DisableApps < SetupStep::LegacyLocationTags);
    }

    #[test]
    fn form_errors_map_to_forms_step() {
        let err = SetupError::FormResolution {
            path: "ebolaexample:htmlforms/triage.xml".to_owned(),
            source: FormResolutionError::ResourceNotFound {
                path: "htmlforms/triage.xml".to_owned(),
            },
        };
        assert_eq!(err.step(), SetupStep::Forms);
    }
}
