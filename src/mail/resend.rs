use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::mail::OutgoingEmail;

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ResendMailer {
    /// Every provider call is bounded by `timeout`; an elapsed call is a provider error.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one email and return the provider-assigned message id.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<String> {
        #[derive(Serialize)]
        struct Payload<'a> {
            from: &'a str,
            to: &'a [String],
            subject: &'a str,
            html: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_to: Option<&'a str>,
        }

        #[derive(Deserialize)]
        struct Sent {
            id: String,
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Provider("RESEND_API_KEY is not configured".to_string()))?;

        let payload = Payload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        };

        let res = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::provider_status(status.as_u16(), &body));
        }

        let sent: Sent = res.json().await?;
        Ok(sent.id)
    }
}
