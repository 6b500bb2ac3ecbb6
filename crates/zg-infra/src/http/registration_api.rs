//! HTTP implementation of the registration gateway port.

use anyhow::Result;
use log::debug;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use zg_core::ports::RegistrationGatewayPort;
use zg_core::registration::RegistrationRequest;
use zg_core::routes::REGISTRATION_PATH;

#[derive(Debug, Error)]
pub enum RegistrationApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("registration endpoint returned {0}")]
    Status(StatusCode),
}

/// Gateway that POSTs new-user payloads to the registration server.
///
/// One plain JSON POST per call; no timeout beyond the client defaults, no
/// retries, and the response body is never read. Any 2xx status counts as
/// success.
#[derive(Debug, Clone)]
pub struct HttpRegistrationGateway {
    client: Client,
    base_url: String,
}

impl HttpRegistrationGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            REGISTRATION_PATH
        )
    }
}

#[async_trait::async_trait]
impl RegistrationGatewayPort for HttpRegistrationGateway {
    async fn register(&self, request: &RegistrationRequest) -> Result<()> {
        let url = self.endpoint();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(RegistrationApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistrationApiError::Status(status).into());
        }

        debug!("registration endpoint answered {}", status);
        Ok(())
    }
}
