use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Whether the guest is coming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    #[serde(rename = "yes")]
    Attending,
    #[serde(rename = "no")]
    NotAttending,
}

impl Attendance {
    pub fn is_attending(self) -> bool {
        matches!(self, Attendance::Attending)
    }
}

/// Which days of the celebration a guest attends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DaysSelection {
    #[default]
    #[serde(rename = "both")]
    BothDays,
    #[serde(rename = "single")]
    SingleDay,
}

/// Meal preference for the dinner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealChoice {
    Standard,
    Vegetarian,
    Vegan,
}

/// Companion guest, only present when the primary guest opted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    pub name: String,
    #[serde(default)]
    pub days: DaysSelection,
}

/// Normalized RSVP payload sent from the form to the dispatcher.
///
/// Lives for a single request: built at submit time, consumed by the
/// dispatcher, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSubmission {
    pub attending: Attendance,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub days: DaysSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion: Option<Companion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<MealChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuttle: Option<bool>,
    #[serde(default)]
    pub dietary: String,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locale: String,
}

/// Lenient view of the dispatcher's request body.
///
/// Everything is optional so a missing field turns into a 400 instead of a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpRequest {
    pub attending: Option<Attendance>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub days: Option<DaysSelection>,
    pub companion: Option<Companion>,
    pub meal: Option<MealChoice>,
    pub shuttle: Option<bool>,
    pub dietary: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
    pub locale: Option<String>,
}

impl RsvpRequest {
    /// Check the required fields are present; email shape is not re-validated.
    pub fn into_submission(self) -> Result<RsvpSubmission> {
        let (Some(attending), Some(name), Some(email)) = (self.attending, self.name, self.email)
        else {
            return Err(AppError::MissingFields);
        };

        Ok(RsvpSubmission {
            attending,
            name,
            email,
            days: self.days.unwrap_or_default(),
            companion: self.companion.filter(|c| !c.name.trim().is_empty()),
            meal: self.meal,
            shuttle: self.shuttle,
            dietary: self.dietary.unwrap_or_default(),
            song: self.song.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            locale: self.locale.unwrap_or_default(),
        })
    }
}

/// Successful dispatcher response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResponse {
    pub success: bool,
    /// `None` when the guest left no address to confirm to.
    pub confirmation_id: Option<String>,
    pub notification_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_email_is_rejected() {
        let req: RsvpRequest =
            serde_json::from_value(json!({ "name": "Anna", "attending": "yes" })).unwrap();
        assert!(matches!(req.into_submission(), Err(AppError::MissingFields)));
    }

    #[test]
    fn test_request_null_attending_is_rejected() {
        let req: RsvpRequest = serde_json::from_value(
            json!({ "name": "Anna", "email": "anna@example.com", "attending": null }),
        )
        .unwrap();
        assert!(matches!(req.into_submission(), Err(AppError::MissingFields)));
    }

    #[test]
    fn test_request_defaults_optional_fields() {
        let req: RsvpRequest = serde_json::from_value(
            json!({ "name": "", "email": "", "attending": "no" }),
        )
        .unwrap();
        let submission = req.into_submission().unwrap();

        assert_eq!(submission.attending, Attendance::NotAttending);
        assert_eq!(submission.days, DaysSelection::BothDays);
        assert!(submission.companion.is_none());
        assert_eq!(submission.locale, "");
    }

    #[test]
    fn test_request_drops_nameless_companion() {
        let req: RsvpRequest = serde_json::from_value(json!({
            "name": "Anna",
            "email": "anna@example.com",
            "attending": "yes",
            "companion": { "name": "  ", "days": "single" }
        }))
        .unwrap();
        assert!(req.into_submission().unwrap().companion.is_none());
    }

    #[test]
    fn test_response_wire_names() {
        let resp = RsvpResponse {
            success: true,
            confirmation_id: Some("c-1".into()),
            notification_id: "n-1".into(),
        };
        assert_eq!(
            serde_json::to_value(resp).unwrap(),
            json!({ "success": true, "confirmationId": "c-1", "notificationId": "n-1" })
        );
    }
}
