use std::sync::Arc;

use crate::config::{Config, DispatchPolicy};
use crate::mail::Mailer;

/// Shared application state
///
/// Read-only after startup; each request works on its own submission.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mailer: Arc<Mailer>,
}

impl AppState {
    pub fn new(config: Config, mailer: Mailer) -> Self {
        Self {
            config: Arc::new(config),
            mailer: Arc::new(mailer),
        }
    }

    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.config.dispatch_policy
    }
}
