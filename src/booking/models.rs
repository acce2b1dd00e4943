use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical names of the booking fields that carry a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName = 0,
    Email = 1,
    Phone = 2,
    AppointmentDate = 3,
    AppointmentTime = 4,
    ServiceType = 5,
    Consent = 6,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::AppointmentDate,
        FieldName::AppointmentTime,
        FieldName::ServiceType,
        FieldName::Consent,
    ];

    /// Maps a `name` attribute to a known field; anything else has no rule
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fullName" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "appointmentDate" => Some(Self::AppointmentDate),
            "appointmentTime" => Some(Self::AppointmentTime),
            "serviceType" => Some(Self::ServiceType),
            "consent" => Some(Self::Consent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AppointmentDate => "appointmentDate",
            Self::AppointmentTime => "appointmentTime",
            Self::ServiceType => "serviceType",
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current contents of one form control, as read from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl FieldSnapshot {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            checked: false,
        }
    }

    pub fn checkbox(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            value: "on".to_string(),
            checked,
        }
    }
}

/// Outcome of validating a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl Verdict {
    pub const VALID: Verdict = Verdict {
        valid: true,
        message: None,
    };

    pub fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Source of "today" for date rules and the date input's minimum
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned date, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
