// src/booking/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Format of a date input's value and `min` attribute
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Whitespace as the page's `trim()` and regex `\s` see it: ECMAScript
/// WhiteSpace plus LineTerminator. Includes U+FEFF, excludes U+0085.
const PAGE_WHITESPACE_CLASS: &str =
    r"\t\x0B\x0C\x20\x{A0}\x{FEFF}\n\r\x{2028}\x{2029}\x{1680}\x{2000}-\x{200A}\x{202F}\x{205F}\x{3000}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let ws = PAGE_WHITESPACE_CLASS;
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).expect("email pattern is valid")
});

// `\d` on the page matches ASCII digits only
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let ws = PAGE_WHITESPACE_CLASS;
    Regex::new(&format!(r"^[0-9{ws}\-+()]{{10,}}$")).expect("phone pattern is valid")
});

/// Same set as `PAGE_WHITESPACE_CLASS`
pub fn is_page_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}'
            | '\u{0C}'
            | ' '
            | '\u{A0}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Trims the way the page's `String.prototype.trim` does
pub fn page_trim(value: &str) -> &str {
    value.trim_matches(is_page_whitespace)
}

// ============================================================================
// Rule Table
// ============================================================================

/// What a rule gets to look at: the trimmed value, the checkbox state and today
pub struct RuleInput<'a> {
    pub value: &'a str,
    pub checked: bool,
    pub today: NaiveDate,
}

/// One field's predicate and the message shown when it fails
pub struct FieldRule {
    pub field: FieldName,
    pub message: &'static str,
    check: fn(&RuleInput<'_>) -> bool,
}

impl FieldRule {
    pub fn passes(&self, input: &RuleInput<'_>) -> bool {
        (self.check)(input)
    }
}

/// Indexed by the `FieldName` discriminant
pub static RULES: [FieldRule; 7] = [
    FieldRule {
        field: FieldName::FullName,
        message: "Name must be at least 2 characters long",
        check: |input| utf16_len(input.value) >= 2,
    },
    FieldRule {
        field: FieldName::Email,
        message: "Please enter a valid email address",
        check: |input| is_valid_email(input.value),
    },
    FieldRule {
        field: FieldName::Phone,
        message: "Please enter a valid phone number",
        check: |input| is_valid_phone(input.value),
    },
    FieldRule {
        field: FieldName::AppointmentDate,
        message: "Please select a future date",
        check: |input| is_today_or_later(input.value, input.today),
    },
    FieldRule {
        field: FieldName::AppointmentTime,
        message: "Please select a time",
        check: |input| !input.value.is_empty(),
    },
    FieldRule {
        field: FieldName::ServiceType,
        message: "Please select a service",
        check: |input| !input.value.is_empty(),
    },
    FieldRule {
        field: FieldName::Consent,
        message: "You must agree to the terms and conditions",
        check: |input| input.checked,
    },
];

pub fn rule_for(field: FieldName) -> &'static FieldRule {
    &RULES[field as usize]
}

// ============================================================================
// Field Validator
// ============================================================================

pub struct FieldValidator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> FieldValidator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Checks one field by name. Names without a rule are always valid.
    pub fn validate(&self, field_name: &str, raw_value: &str, checked: bool) -> Verdict {
        let Some(field) = FieldName::from_name(field_name) else {
            return Verdict::VALID;
        };

        let rule = rule_for(field);
        let input = RuleInput {
            value: page_trim(raw_value),
            checked,
            today: self.clock.today(),
        };

        if rule.passes(&input) {
            Verdict::VALID
        } else {
            Verdict::invalid(rule.message)
        }
    }
}

impl<C: Clock> Validator<FieldSnapshot> for FieldValidator<C> {
    fn validate(&self, data: &FieldSnapshot) -> ValidationResult {
        let mut result = ValidationResult::new();

        let verdict = FieldValidator::validate(self, &data.name, &data.value, data.checked);
        if let Some(message) = verdict.message {
            result.add_error(&data.name, message);
        }

        result
    }
}

/// Every field is checked; one failure does not stop the rest
impl<C: Clock> Validator<[FieldSnapshot]> for FieldValidator<C> {
    fn validate(&self, data: &[FieldSnapshot]) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in data {
            result.merge(Validator::<FieldSnapshot>::validate(self, field));
        }

        result
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Length as the page counts it, in UTF-16 code units
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !is_page_whitespace(*c)).collect();
    PHONE_REGEX.is_match(&compact)
}

fn is_today_or_later(value: &str, today: NaiveDate) -> bool {
    if value.is_empty() {
        return false;
    }

    match NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT) {
        Ok(selected) => selected >= today,
        Err(_) => false,
    }
}
