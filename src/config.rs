use std::env;
use std::str::FromStr;

/// What the dispatcher does when the guest confirmation fails to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// The first provider error ends the request; the organizer notification
    /// is not attempted.
    #[default]
    AbortOnFirstFailure,
    /// Always attempt the organizer notification, even if the confirmation failed.
    AlwaysNotifyOrganizers,
}

impl FromStr for DispatchPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::AbortOnFirstFailure),
            "notify-organizers" => Ok(Self::AlwaysNotifyOrganizers),
            other => Err(ConfigError::InvalidDispatchPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub mail_from: String,
    pub mail_no_reply: String,
    pub organizer_emails: Vec<String>,
    pub dispatch_policy: DispatchPolicy,
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Read configuration from the process environment (`main` loads `.env` first).
    pub fn from_env() -> Result<Self, ConfigError> {
        let organizer_emails = parse_address_list(
            &env::var("ORGANIZER_EMAILS").map_err(|_| ConfigError::MissingOrganizers)?,
        );
        if organizer_emails.is_empty() {
            return Err(ConfigError::MissingOrganizers);
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            // An absent key is not fatal here: sends fail at the provider call instead.
            resend_api_key: env::var("RESEND_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Wedding RSVP <rsvp@resend.dev>".to_string()),
            mail_no_reply: env::var("MAIL_NO_REPLY")
                .unwrap_or_else(|_| "no-reply@resend.dev".to_string()),
            organizer_emails,
            dispatch_policy: match env::var("RSVP_DISPATCH_POLICY") {
                Ok(raw) => raw.parse()?,
                Err(_) => DispatchPolicy::default(),
            },
            request_timeout_seconds: parse_timeout(env::var("REQUEST_TIMEOUT_SECONDS").ok())?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Provider call timeout in seconds; defaults to 15, must be a positive integer.
pub fn parse_timeout(raw: Option<String>) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(15);
    };

    match raw.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ConfigError::InvalidTimeout(raw)),
    }
}

/// Split a comma separated address list, dropping blanks.
pub fn parse_address_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("Invalid REQUEST_TIMEOUT_SECONDS '{0}' (expected a positive number of seconds)")]
    InvalidTimeout(String),
    #[error("ORGANIZER_EMAILS environment variable is required")]
    MissingOrganizers,
    #[error("Unknown RSVP_DISPATCH_POLICY '{0}' (expected 'abort' or 'notify-organizers')")]
    InvalidDispatchPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_list() {
        assert_eq!(
            parse_address_list(" anna@example.com, ,erik@example.com "),
            vec!["anna@example.com".to_string(), "erik@example.com".to_string()]
        );
        assert!(parse_address_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(None).unwrap(), 15);
        assert_eq!(parse_timeout(Some(" 30 ".into())).unwrap(), 30);
        assert!(matches!(
            parse_timeout(Some("0".into())),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            parse_timeout(Some("soon".into())),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_dispatch_policy_parse() {
        assert_eq!(
            "abort".parse::<DispatchPolicy>().unwrap(),
            DispatchPolicy::AbortOnFirstFailure
        );
        assert_eq!(
            "Notify-Organizers".parse::<DispatchPolicy>().unwrap(),
            DispatchPolicy::AlwaysNotifyOrganizers
        );
        assert!("retry".parse::<DispatchPolicy>().is_err());
    }
}
