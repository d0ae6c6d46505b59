/// Failure reported by a host platform service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("service unavailable: {detail}")]
    Unavailable { detail: String },

    #[error("internal: {message}")]
    Internal { message: String },
}

impl ServiceError {
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable {
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Failure while turning a form resource path into a form definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormResolutionError {
    /// The UI resource loading subsystem has not been initialized.
    ///
    /// This is the normal state in isolated component tests where no web
    /// layer is running.
    #[error("resource provider is not initialized")]
    ResourceProviderUnavailable,

    #[error("form resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("invalid form resource '{path}': {detail}")]
    Invalid { path: String, detail: String },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl FormResolutionError {
    #[must_use]
    pub fn is_resource_provider_unavailable(&self) -> bool {
        matches!(self, Self::ResourceProviderUnavailable)
    }
}
