pub mod resend;
pub mod templates;

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;
use crate::i18n::Locale;
use crate::models::RsvpSubmission;

/// One message handed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Mailer abstraction (currently backed by Resend)
#[derive(Clone)]
pub struct Mailer {
    inner: resend::ResendMailer,
    from: String,
    no_reply: String,
    organizers: Vec<String>,
}

impl Mailer {
    pub fn new(
        inner: resend::ResendMailer,
        from: String,
        no_reply: String,
        organizers: Vec<String>,
    ) -> Self {
        Self {
            inner,
            from,
            no_reply,
            organizers,
        }
    }

    /// Create mailer from config (RESEND_API_KEY, MAIL_FROM, etc.)
    pub fn from_config(config: &Config) -> Result<Self> {
        let inner = resend::ResendMailer::new(
            config.resend_api_key.clone(),
            &config.resend_api_url,
            Duration::from_secs(config.request_timeout_seconds),
        )?;

        Ok(Self::new(
            inner,
            config.mail_from.clone(),
            config.mail_no_reply.clone(),
            config.organizer_emails.clone(),
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_configured()
    }

    /// Confirmation addressed to the guest; replies go nowhere.
    pub fn confirmation_email(&self, submission: &RsvpSubmission, locale: Locale) -> OutgoingEmail {
        let rendered = templates::render_confirmation(submission, locale);
        OutgoingEmail {
            from: self.from.clone(),
            to: vec![submission.email.trim().to_string()],
            reply_to: Some(self.no_reply.clone()),
            subject: rendered.subject,
            html: rendered.html,
        }
    }

    /// Notification addressed to the organizers; replies go to the guest when
    /// they left an address.
    pub fn notification_email(
        &self,
        submission: &RsvpSubmission,
        locale: Locale,
        received_at: DateTime<Utc>,
    ) -> OutgoingEmail {
        let rendered = templates::render_notification(submission, locale, received_at);
        OutgoingEmail {
            from: self.from.clone(),
            to: self.organizers.clone(),
            reply_to: Some(submission.email.trim())
                .filter(|email| !email.is_empty())
                .map(str::to_string),
            subject: rendered.subject,
            html: rendered.html,
        }
    }

    pub async fn send(&self, email: &OutgoingEmail) -> Result<String> {
        self.inner.send(email).await
    }
}
