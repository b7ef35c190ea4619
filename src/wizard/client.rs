//! HTTP submission client for the wizard.

use crate::lead::Lead;
use crate::notify::routes::SendResponse;

/// Posts completed Lead Records to the notification dispatcher.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send the record. Errors carry a human-readable message suitable
    /// for the inline form banner: the server's `message` when present,
    /// a generic fallback otherwise, or the network error text.
    pub async fn send(&self, lead: &Lead) -> Result<SendResponse, String> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = res.status();
        let body = res.json::<SendResponse>().await.unwrap_or(SendResponse {
            success: false,
            message: String::new(),
        });

        if !status.is_success() || !body.success {
            let message = if body.message.is_empty() {
                "Failed to send enquiry".to_string()
            } else {
                body.message
            };
            return Err(message);
        }

        Ok(body)
    }
}
