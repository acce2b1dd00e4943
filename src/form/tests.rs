//! Tests for the booking form controller
//!
//! These tests drive the controller through the in-memory page:
//! - Document-ready initialization
//! - Per-keystroke validation and error clearing
//! - Submission, confirmation and reset

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::booking::FixedClock;
    use crate::common::config::{
        DEFAULT_CONFIRMATION_MESSAGE, DEFAULT_INVALID_BORDER, DEFAULT_NEUTRAL_BORDER,
    };
    use crate::common::{FormConfig, FormError};
    use crate::dom::{BookingDocument, Element, FieldQuery};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn ready_form() -> BookingForm<BookingDocument, FixedClock> {
        BookingForm::ready(
            BookingDocument::standard(),
            FixedClock(today()),
            FormConfig::default(),
        )
        .expect("standard page has a form and a date input")
    }

    fn type_into(form: &mut BookingForm<BookingDocument, FixedClock>, id: &str, value: &str) {
        let node = form.page_mut().set_value(id, value).expect("control exists");
        form.on_input(node).expect("input event on a control");
    }

    fn fill_valid(form: &mut BookingForm<BookingDocument, FixedClock>) {
        type_into(form, "fullName", "Jane Doe");
        type_into(form, "email", "jane@clinic.example");
        type_into(form, "phone", "555 123 4567");
        type_into(form, "appointmentDate", "2026-10-19");
        type_into(form, "appointmentTime", "10:00");
        type_into(form, "serviceType", "consultation");
        let consent = form
            .page_mut()
            .set_checked("consent", true)
            .expect("checkbox exists");
        form.on_input(consent).expect("input event on a control");
    }

    fn consent_error_text(form: &BookingForm<BookingDocument, FixedClock>) -> String {
        let page = form.page();
        let consent = page.element_by_id("consent").expect("consent exists");
        let span = page
            .closest_with_class(consent, "error-message")
            .expect("consent has an error span");
        page.text_of(span).unwrap_or_default().to_string()
    }

    #[test]
    fn test_ready_sets_min_date_to_today() {
        let form = ready_form();
        assert_eq!(form.page().min("appointmentDate"), Some("2026-10-19"));
    }

    #[test]
    fn test_ready_requires_form_and_date_input() {
        let mut page = BookingDocument::new();
        page.append(None, Element::form("otherForm"));
        let result = BookingForm::ready(page, FixedClock(today()), FormConfig::default());
        assert!(matches!(result, Err(FormError::FormNotFound(id)) if id == "bookingForm"));

        let mut page = BookingDocument::new();
        let form = page.append(None, Element::form("bookingForm"));
        page.append(Some(form), Element::input("text", "fullName").required());
        let result = BookingForm::ready(page, FixedClock(today()), FormConfig::default());
        assert!(matches!(result, Err(FormError::ElementNotFound(id)) if id == "appointmentDate"));
    }

    #[test]
    fn test_input_shows_and_clears_error() {
        let mut form = ready_form();

        type_into(&mut form, "email", "jane@");
        assert_eq!(
            form.page().text("emailError"),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.page().border_color("email"), Some(DEFAULT_INVALID_BORDER));

        type_into(&mut form, "email", "jane@clinic.example");
        assert_eq!(form.page().text("emailError"), Some(""));
        assert_eq!(form.page().border_color("email"), Some(DEFAULT_NEUTRAL_BORDER));
    }

    #[test]
    fn test_input_with_blank_value_only_clears() {
        let mut form = ready_form();

        type_into(&mut form, "fullName", "J");
        assert_eq!(
            form.page().text("fullNameError"),
            Some("Name must be at least 2 characters long")
        );

        // Whitespace counts as blank: the error goes away and nothing is re-checked
        type_into(&mut form, "fullName", "   ");
        assert_eq!(form.page().text("fullNameError"), Some(""));
        assert_eq!(form.page().border_color("fullName"), Some(DEFAULT_NEUTRAL_BORDER));
    }

    #[test]
    fn test_input_on_checkbox_uses_fallback_error_span() {
        let mut form = ready_form();
        let consent = form.page().element_by_id("consent").expect("consent exists");

        form.on_input(consent).expect("input event on a control");
        assert_eq!(
            consent_error_text(&form),
            "You must agree to the terms and conditions"
        );

        form.page_mut().set_checked("consent", true).expect("checkbox");
        form.on_input(consent).expect("input event on a control");
        assert_eq!(consent_error_text(&form), "");
    }

    #[test]
    fn test_input_on_non_control_is_an_error() {
        let mut form = ready_form();
        let span = form.page().element_by_id("emailError").expect("span exists");
        assert!(matches!(
            form.on_input(span),
            Err(FormError::NotAFormControl(_))
        ));
    }

    #[test]
    fn test_optional_field_never_shows_error() {
        let mut form = ready_form();
        type_into(&mut form, "notes", "x");
        assert_eq!(form.page().border_color("notes"), Some(DEFAULT_NEUTRAL_BORDER));
    }

    #[test]
    fn test_submit_valid_form_confirms_and_resets() {
        let mut form = ready_form();
        fill_valid(&mut form);
        type_into(&mut form, "notes", "First visit");

        let outcome = form.on_submit();

        assert_eq!(outcome, SubmitOutcome::Confirmed);
        assert_eq!(form.page().alerts(), [DEFAULT_CONFIRMATION_MESSAGE.to_string()]);
        for id in [
            "fullName",
            "email",
            "phone",
            "appointmentDate",
            "appointmentTime",
            "serviceType",
            "notes",
        ] {
            assert_eq!(form.page().value(id), Some(""), "{id} should be reset");
        }
        assert!(!form.page().is_checked("consent"));
        // The minimum date survives a reset
        assert_eq!(form.page().min("appointmentDate"), Some("2026-10-19"));
    }

    #[test]
    fn test_submit_with_one_invalid_field_is_blocked() {
        let mut form = ready_form();
        fill_valid(&mut form);
        type_into(&mut form, "phone", "12345");

        let outcome = form.on_submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                invalid_fields: vec!["phone".to_string()]
            }
        );
        assert!(form.page().alerts().is_empty());
        assert_eq!(
            form.page().text("phoneError"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(form.page().value("fullName"), Some("Jane Doe"));
        assert_eq!(form.page().value("phone"), Some("12345"));
        assert!(form.page().is_checked("consent"));
    }

    #[test]
    fn test_submit_empty_form_shows_every_error() {
        let mut form = ready_form();

        let outcome = form.on_submit();

        let SubmitOutcome::Blocked { invalid_fields } = outcome else {
            panic!("empty form must be blocked");
        };
        assert_eq!(invalid_fields.len(), 7);
        assert_eq!(
            form.page().text("fullNameError"),
            Some("Name must be at least 2 characters long")
        );
        assert_eq!(
            form.page().text("emailError"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            form.page().text("phoneError"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            form.page().text("appointmentDateError"),
            Some("Please select a future date")
        );
        assert_eq!(
            form.page().text("appointmentTimeError"),
            Some("Please select a time")
        );
        assert_eq!(
            form.page().text("serviceTypeError"),
            Some("Please select a service")
        );
        assert_eq!(
            consent_error_text(&form),
            "You must agree to the terms and conditions"
        );
    }

    #[test]
    fn test_past_date_blocks_submission() {
        let mut form = ready_form();
        fill_valid(&mut form);
        type_into(&mut form, "appointmentDate", "2026-10-18");

        assert!(!form.validate_all());
        assert_eq!(
            form.page().text("appointmentDateError"),
            Some("Please select a future date")
        );

        type_into(&mut form, "appointmentDate", "2026-10-20");
        assert!(form.validate_all());
    }

    #[test]
    fn test_validate_all_clears_stale_errors() {
        let mut form = ready_form();
        fill_valid(&mut form);
        let email = form.page().element_by_id("email").expect("email exists");
        form.show_error(email, "stale");

        assert!(form.validate_all());
        assert_eq!(form.page().text("emailError"), Some(""));
        assert_eq!(form.page().border_color("email"), Some(DEFAULT_NEUTRAL_BORDER));
    }

    #[test]
    fn test_custom_config_colors_and_message() {
        let config = FormConfig {
            invalid_border: "red".to_string(),
            confirmation_message: "Booked!".to_string(),
            ..FormConfig::default()
        };
        let mut form = BookingForm::ready(BookingDocument::standard(), FixedClock(today()), config)
            .expect("standard page");

        type_into(&mut form, "phone", "1");
        assert_eq!(form.page().border_color("phone"), Some("red"));

        type_into(&mut form, "phone", "555-123-4567");
        fill_valid(&mut form);
        assert!(form.on_submit().is_confirmed());
        assert_eq!(form.page().alerts(), ["Booked!".to_string()]);
    }

    #[test]
    fn test_validate_field_updates_feedback() {
        let mut form = ready_form();
        let email = form.page().element_by_id("email").expect("email exists");

        form.page_mut().set_value("email", "a@b").expect("set");
        assert!(!form.validate_field(email));
        assert_eq!(
            form.page().text("emailError"),
            Some("Please enter a valid email address")
        );

        form.page_mut().set_value("email", "a@b.co").expect("set");
        assert!(form.validate_field(email));
        assert_eq!(form.page().text("emailError"), Some(""));
        assert_eq!(form.page().border_color("email"), Some(DEFAULT_NEUTRAL_BORDER));

        let span = form.page().element_by_id("emailError").expect("span exists");
        assert!(form.validate_field(span));
    }

    #[test]
    fn test_input_blank_check_uses_page_whitespace() {
        let mut form = ready_form();

        // U+FEFF alone is blank on the page: cleared, not re-checked
        type_into(&mut form, "fullName", "\u{FEFF}");
        assert_eq!(form.page().text("fullNameError"), Some(""));

        // U+0085 is not whitespace on the page, so the value is checked
        type_into(&mut form, "fullName", "\u{85}");
        assert_eq!(
            form.page().text("fullNameError"),
            Some("Name must be at least 2 characters long")
        );
    }
}
