//! EmailJS REST client

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{ContactError, EmailSender, TemplateParams};

/// Send endpoint, relative to the API origin
pub const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// [`EmailSender`] backed by the EmailJS HTTP API
#[derive(Clone, Debug)]
pub struct EmailJsSender {
    client: reqwest::Client,
    url: String,
    service_id: String,
    public_key: String,
}

impl EmailJsSender {
    /// Create a sender posting to `<endpoint>/api/v1.0/email/send`
    pub fn new(
        endpoint: &str,
        service_id: &str,
        public_key: &str,
        timeout: Duration,
    ) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: format!("{}{}", endpoint.trim_end_matches('/'), EMAILJS_SEND_PATH),
            service_id: service_id.to_string(),
            public_key: public_key.to_string(),
        })
    }

    /// Full send URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), ContactError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(template_id, "Email accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(template_id, status = status.as_u16(), %body, "Email rejected");
        Err(ContactError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
