// src/common/config.rs
//! Form configuration
//! Element ids, border colors and the confirmation text, overridable from the environment

use std::env;

pub const DEFAULT_FORM_ID: &str = "bookingForm";
pub const DEFAULT_DATE_FIELD_ID: &str = "appointmentDate";
pub const DEFAULT_INVALID_BORDER: &str = "#dc3545";
pub const DEFAULT_NEUTRAL_BORDER: &str = "#e9ecef";
pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Thank you for your booking! You will receive a confirmation email shortly. Remember: You get 25% discount on your visit!";

/// Suffix appended to a field name to find its error node by id
pub const ERROR_ID_SUFFIX: &str = "Error";

/// Class of the fallback error container inside a field's parent
pub const ERROR_CLASS: &str = "error-message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub form_id: String,
    pub date_field_id: String,
    pub invalid_border: String,
    pub neutral_border: String,
    pub confirmation_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.to_string(),
            date_field_id: DEFAULT_DATE_FIELD_ID.to_string(),
            invalid_border: DEFAULT_INVALID_BORDER.to_string(),
            neutral_border: DEFAULT_NEUTRAL_BORDER.to_string(),
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; empty values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            form_id: read("BOOKING_FORM_ID", defaults.form_id),
            date_field_id: read("BOOKING_DATE_FIELD_ID", defaults.date_field_id),
            invalid_border: read("BOOKING_INVALID_BORDER", defaults.invalid_border),
            neutral_border: read("BOOKING_NEUTRAL_BORDER", defaults.neutral_border),
            confirmation_message: read(
                "BOOKING_CONFIRMATION_MESSAGE",
                defaults.confirmation_message,
            ),
        }
    }
}
