use std::future::Future;

use reqwest::Client;
use serde::Deserialize;

use crate::models::{RsvpResponse, RsvpSubmission};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Dispatcher unreachable: {0}")]
    Transport(String),

    #[error("Dispatcher answered {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Transport(err.without_url().to_string())
    }
}

/// Something that can deliver one RSVP submission to the dispatcher
pub trait DispatchClient {
    fn dispatch(
        &self,
        submission: &RsvpSubmission,
    ) -> impl Future<Output = Result<RsvpResponse, DispatchError>> + Send;
}

/// Posts submissions to the dispatcher endpoint over HTTP
#[derive(Clone)]
pub struct HttpDispatchClient {
    client: Client,
    endpoint: String,
}

impl HttpDispatchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl DispatchClient for HttpDispatchClient {
    fn dispatch(
        &self,
        submission: &RsvpSubmission,
    ) -> impl Future<Output = Result<RsvpResponse, DispatchError>> + Send {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let request = self.client.post(&self.endpoint).json(submission);

        async move {
            let res = request.send().await?;

            let status = res.status();
            if !status.is_success() {
                let message = res
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.error)
                    .unwrap_or_else(|_| status.to_string());
                return Err(DispatchError::Rejected {
                    status: status.as_u16(),
                    message,
                });
            }

            Ok(res.json::<RsvpResponse>().await?)
        }
    }
}
