use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::DispatchPolicy;
use crate::error::Result;
use crate::i18n::Locale;
use crate::models::{RsvpRequest, RsvpResponse, RsvpSubmission};
use crate::state::AppState;

/// RSVP routes
pub fn rsvp_routes() -> Router<AppState> {
    Router::new().route("/rsvp", post(submit_rsvp))
}

/// POST /api/rsvp - Render and send the confirmation and notification emails
///
/// The body is parsed by hand so malformed JSON is reported as a server
/// error rather than an extractor rejection.
async fn submit_rsvp(State(state): State<AppState>, body: Bytes) -> Result<Json<RsvpResponse>> {
    let submission_id = Uuid::new_v4();

    let request: RsvpRequest = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::warn!(%submission_id, error = %e, "Rejected malformed RSVP body");
    })?;

    let submission = request.into_submission().inspect_err(|_| {
        tracing::warn!(%submission_id, "Rejected RSVP with missing required fields");
    })?;

    let locale = Locale::from_tag(&submission.locale);
    let span = tracing::info_span!(
        "rsvp",
        %submission_id,
        locale = locale.tag(),
        attending = submission.attending.is_attending()
    );

    dispatch(&state, &submission, locale)
        .instrument(span)
        .await
        .map(Json)
}

/// Send the guest confirmation, then the organizer notification.
///
/// No retries. What happens after a failed confirmation depends on the
/// configured [`DispatchPolicy`].
pub async fn dispatch(
    state: &AppState,
    submission: &RsvpSubmission,
    locale: Locale,
) -> Result<RsvpResponse> {
    let mailer = &state.mailer;
    let notification = mailer.notification_email(submission, locale, Utc::now());

    let confirmation_id = if submission.email.trim().is_empty() {
        tracing::info!("No guest address given, skipping confirmation");
        None
    } else {
        let confirmation = mailer.confirmation_email(submission, locale);
        match mailer.send(&confirmation).await {
            Ok(id) => {
                tracing::info!(message_id = %id, "Guest confirmation sent");
                Some(id)
            }
            Err(err) => {
                match state.dispatch_policy() {
                    DispatchPolicy::AbortOnFirstFailure => {
                        tracing::error!(
                            error = %err,
                            "Guest confirmation failed, organizer notification not attempted"
                        );
                    }
                    DispatchPolicy::AlwaysNotifyOrganizers => {
                        tracing::error!(
                            error = %err,
                            "Guest confirmation failed, notifying organizers anyway"
                        );
                        match mailer.send(&notification).await {
                            Ok(id) => tracing::info!(message_id = %id, "Organizer notification sent"),
                            Err(e) => tracing::error!(error = %e, "Organizer notification failed"),
                        }
                    }
                }
                return Err(err);
            }
        }
    };

    let notification_id = mailer.send(&notification).await.inspect_err(|e| {
        tracing::error!(error = %e, "Organizer notification failed");
    })?;
    tracing::info!(message_id = %notification_id, "Organizer notification sent");

    Ok(RsvpResponse {
        success: true,
        confirmation_id,
        notification_id,
    })
}
