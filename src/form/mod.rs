//! RSVP form controller.
//!
//! Holds the guest's answers as an explicit state object, validates them
//! locally and hands exactly one normalized submission to a
//! [`DispatchClient`] per submit.

pub mod client;

use lazy_static::lazy_static;
use regex::Regex;

pub use client::{DispatchClient, DispatchError, HttpDispatchClient};

use crate::i18n::Locale;
use crate::models::{Attendance, Companion, DaysSelection, MealChoice, RsvpResponse, RsvpSubmission};

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Basic `local@domain.tld` shape check; not a deliverability check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Reasons the form refuses to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("attendance not chosen")]
    AttendanceUnset,
    #[error("name is required")]
    NameRequired,
    #[error("email is not valid")]
    InvalidEmail,
    #[error("companion name is required")]
    CompanionNameRequired,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl FormError {
    /// Inline text shown next to the form
    pub fn message(self, locale: Locale) -> &'static str {
        let messages = locale.form_messages();
        match self {
            FormError::AttendanceUnset => messages.attendance_unset,
            FormError::NameRequired => messages.name_required,
            FormError::InvalidEmail => messages.email_invalid,
            FormError::CompanionNameRequired => messages.companion_name_required,
            FormError::AlreadySubmitting => messages.already_submitting,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid(FormError),
    Submitting,
    Succeeded,
    Failed,
}

/// Answers collected by the RSVP form, plus where the submission stands.
#[derive(Debug, Clone, Default)]
pub struct RsvpForm {
    pub attending: Option<Attendance>,
    pub name: String,
    pub email: String,
    pub days: DaysSelection,
    pub bring_companion: bool,
    pub companion_name: String,
    pub companion_days: DaysSelection,
    pub meal: Option<MealChoice>,
    pub shuttle: Option<bool>,
    pub dietary: String,
    pub song: String,
    pub message: String,
    locale: Locale,
    status: FormStatus,
}

impl RsvpForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    /// Localized notice for the current status, if any
    pub fn status_message(&self) -> Option<&'static str> {
        let messages = self.locale.form_messages();
        match self.status {
            FormStatus::Idle | FormStatus::Submitting => None,
            FormStatus::Invalid(err) => Some(err.message(self.locale)),
            FormStatus::Succeeded => Some(messages.success),
            FormStatus::Failed => Some(messages.generic_error),
        }
    }

    /// Check the answers and build the payload the dispatcher receives.
    pub fn validate(&self) -> Result<RsvpSubmission, FormError> {
        let attending = self.attending.ok_or(FormError::AttendanceUnset)?;

        let mut submission = RsvpSubmission {
            attending,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            days: DaysSelection::default(),
            companion: None,
            meal: None,
            shuttle: None,
            dietary: self.dietary.trim().to_string(),
            song: self.song.trim().to_string(),
            message: self.message.trim().to_string(),
            locale: self.locale.tag().to_string(),
        };

        if !attending.is_attending() {
            // Declines are not validated, so only pass on an address that could be mailed.
            if !is_valid_email(&submission.email) {
                submission.email.clear();
            }
            return Ok(submission);
        }

        if submission.name.is_empty() {
            return Err(FormError::NameRequired);
        }
        if !is_valid_email(&submission.email) {
            return Err(FormError::InvalidEmail);
        }

        if self.bring_companion {
            let companion_name = self.companion_name.trim();
            if companion_name.is_empty() {
                return Err(FormError::CompanionNameRequired);
            }
            submission.companion = Some(Companion {
                name: companion_name.to_string(),
                days: self.companion_days,
            });
        }

        submission.days = self.days;
        submission.meal = self.meal;
        submission.shuttle = self.shuttle;

        Ok(submission)
    }

    /// Validate and lock the form for sending.
    ///
    /// Fails while another submission is in flight; on a validation error the
    /// form shows the error and no request may be made.
    pub fn begin_submit(&mut self) -> Result<RsvpSubmission, FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::AlreadySubmitting);
        }

        match self.validate() {
            Ok(submission) => {
                self.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(err) => {
                self.status = FormStatus::Invalid(err);
                Err(err)
            }
        }
    }

    /// Record the dispatcher's answer: clear on success, keep answers on failure.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.reset();
            self.status = FormStatus::Succeeded;
        } else {
            self.status = FormStatus::Failed;
        }
    }

    /// Validate, send once, and update the form with the outcome.
    pub async fn submit<C: DispatchClient>(
        &mut self,
        client: &C,
    ) -> Result<RsvpResponse, SubmitError> {
        let submission = self.begin_submit()?;

        let mut in_flight = InFlight { form: self };
        let result = client.dispatch(&submission).await;
        in_flight.form.finish_submit(result.is_ok());
        drop(in_flight);

        if let Err(err) = &result {
            tracing::warn!(error = %err, "RSVP submission failed");
        }
        Ok(result?)
    }

    /// Back to an empty form, keeping the chosen language.
    pub fn reset(&mut self) {
        *self = Self::new(self.locale);
    }
}

/// Unlocks the form if a submit future is dropped before the dispatcher answers.
struct InFlight<'a> {
    form: &'a mut RsvpForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.form.status == FormStatus::Submitting {
            tracing::debug!("RSVP submission abandoned before completion");
            self.form.status = FormStatus::Failed;
        }
    }
}
