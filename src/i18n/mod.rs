//! Fixed-language text tables for the RSVP form and emails.

mod tables;

pub use tables::{EmailLabels, FormMessages};

/// Languages the site is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Sv,
}

impl Locale {
    /// Resolve a locale tag such as `"sv"` or `"sv-SE"`.
    /// Anything unrecognized falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "sv" => Locale::Sv,
            _ => Locale::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sv => "sv",
        }
    }

    pub fn email_labels(self) -> &'static EmailLabels {
        match self {
            Locale::En => &tables::EN_EMAIL,
            Locale::Sv => &tables::SV_EMAIL,
        }
    }

    pub fn form_messages(self) -> &'static FormMessages {
        match self {
            Locale::En => &tables::EN_FORM,
            Locale::Sv => &tables::SV_FORM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("sv"), Locale::Sv);
        assert_eq!(Locale::from_tag("SV-se"), Locale::Sv);
        assert_eq!(Locale::from_tag("sv_FI"), Locale::Sv);
        assert_eq!(Locale::from_tag("en"), Locale::En);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag("svenska"), Locale::En);
    }

    #[test]
    fn test_tag_round_trips() {
        for locale in [Locale::En, Locale::Sv] {
            assert_eq!(Locale::from_tag(locale.tag()), locale);
        }
    }
}
