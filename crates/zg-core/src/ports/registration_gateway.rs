use anyhow::Result;

use crate::registration::RegistrationRequest;

#[async_trait::async_trait]
pub trait RegistrationGatewayPort: Send + Sync {
    /// Submit a new-user payload to the registration endpoint.
    ///
    /// Resolves `Ok` for any 2xx response; the response body is not
    /// inspected. Transport failures and non-2xx statuses resolve `Err`.
    async fn register(&self, request: &RegistrationRequest) -> Result<()>;
}
