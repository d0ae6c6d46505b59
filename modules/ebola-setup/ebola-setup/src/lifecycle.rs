use async_trait::async_trait;

use crate::domain::error::StartupError;

/// Lifecycle hooks the host invokes when it starts or stops a module.
///
/// The host guarantees at most one `started()` call in flight per module.
#[async_trait]
pub trait ModuleActivator: Send + Sync {
    fn module_id(&self) -> &str;

    /// # Errors
    /// Returns `StartupError` when the module could not be configured. The
    /// module has already been stopped through the host when this is returned.
    async fn started(&self) -> Result<(), StartupError>;

    async fn stopped(&self);
}
