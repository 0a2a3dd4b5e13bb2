//! HTML bodies for the RSVP emails, built by plain string substitution.
//!
//! Every guest-supplied value goes through `html_escape` before it lands in
//! the markup; label text comes from the static locale tables.

use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::i18n::{EmailLabels, Locale};
use crate::models::RsvpSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

const STYLE: &str = "body{font-family:Georgia,serif;color:#3b3b3b;max-width:600px;margin:0 auto;padding:24px;}\
table{border-collapse:collapse;width:100%;}\
th{text-align:left;padding:6px 12px 6px 0;vertical-align:top;white-space:nowrap;}\
td{padding:6px 0;white-space:pre-wrap;}\
.note{font-size:12px;color:#8a8a8a;}";

/// Guest-facing confirmation
pub fn render_confirmation(submission: &RsvpSubmission, locale: Locale) -> RenderedEmail {
    let labels = locale.email_labels();

    let name = submission.name.trim();
    let heading = if name.is_empty() {
        format!("{}!", labels.greeting)
    } else {
        format!("{} {}!", labels.greeting, encode_text(name))
    };

    let intro = if submission.attending.is_attending() {
        labels.thanks_attending
    } else {
        labels.thanks_not_attending
    };

    let body = format!(
        "<h1>{}</h1><p>{}</p><h2>{}</h2><table>{}</table><p>{}</p><p class=\"note\">{}</p>",
        heading,
        intro,
        labels.summary_heading,
        summary_rows(submission, labels),
        labels.sign_off,
        labels.no_reply_note
    );

    RenderedEmail {
        subject: labels.confirmation_subject.to_string(),
        html: document(locale, &body),
    }
}

/// Organizer-facing notification
pub fn render_notification(
    submission: &RsvpSubmission,
    locale: Locale,
    received_at: DateTime<Utc>,
) -> RenderedEmail {
    let labels = locale.email_labels();

    let who = [submission.name.trim(), submission.email.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(labels.none_given);
    let subject = format!(
        "{} {} ({})",
        labels.notification_subject,
        who,
        labels.attendance_text(submission.attending)
    );

    let mut rows = summary_rows(submission, labels);
    push_row(
        &mut rows,
        labels.received_at,
        &received_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );

    let mut body = format!(
        "<h1>{}</h1><p>{}</p><table>{}</table>",
        encode_text(&subject),
        labels.notification_intro,
        rows
    );
    if !submission.email.trim().is_empty() {
        body.push_str(&format!("<p class=\"note\">{}</p>", labels.reply_hint));
    }

    RenderedEmail {
        subject,
        html: document(locale, &body),
    }
}

fn document(locale: Locale, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"utf-8\"><style>{}</style></head><body>{}</body></html>",
        locale.tag(),
        STYLE,
        body
    )
}

fn summary_rows(submission: &RsvpSubmission, labels: &EmailLabels) -> String {
    let mut rows = String::new();

    push_row(&mut rows, labels.name, or_none(&submission.name, labels));
    push_row(&mut rows, labels.email, or_none(&submission.email, labels));
    push_row(
        &mut rows,
        labels.attendance,
        labels.attendance_text(submission.attending),
    );

    if submission.attending.is_attending() {
        push_row(&mut rows, labels.days, labels.days_text(submission.days));

        let companion = submission
            .companion
            .as_ref()
            .map(|c| format!("{} ({})", c.name.trim(), labels.days_text(c.days)))
            .unwrap_or_else(|| labels.none_given.to_string());
        push_row(&mut rows, labels.companion, &companion);

        let meal = submission
            .meal
            .map(|m| labels.meal_text(m))
            .unwrap_or(labels.none_given);
        push_row(&mut rows, labels.meal, meal);

        let shuttle = submission
            .shuttle
            .map(|s| labels.yes_no(s))
            .unwrap_or(labels.none_given);
        push_row(&mut rows, labels.shuttle, shuttle);
    }

    push_row(&mut rows, labels.dietary, or_none(&submission.dietary, labels));
    push_row(&mut rows, labels.song, or_none(&submission.song, labels));
    push_row(&mut rows, labels.message, or_none(&submission.message, labels));

    rows
}

fn or_none<'a>(value: &'a str, labels: &'a EmailLabels) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        labels.none_given
    } else {
        value
    }
}

fn push_row(rows: &mut String, label: &str, value: &str) {
    rows.push_str("<tr><th>");
    rows.push_str(label);
    rows.push_str("</th><td>");
    rows.push_str(&encode_text(value));
    rows.push_str("</td></tr>");
}
