// src/form/controller.rs

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::models::SubmitOutcome;
use crate::booking::validators::{page_trim, DATE_INPUT_FORMAT};
use crate::booking::{Clock, FieldSnapshot, FieldValidator, SystemClock};
use crate::common::config::{ERROR_CLASS, ERROR_ID_SUFFIX};
use crate::common::{safe_field_log, FormConfig, FormError, ValidationResult, Validator};
use crate::dom::{NodeId, Page};

/// The booking form wired to a page: input, submit and ready handlers
pub struct BookingForm<P, C = SystemClock> {
    page: P,
    validator: FieldValidator<C>,
    config: FormConfig,
    form: NodeId,
}

impl<P: Page, C: Clock> BookingForm<P, C> {
    /// Document-ready hook. Resolves the form and limits the date input to today onwards.
    pub fn ready(mut page: P, clock: C, config: FormConfig) -> Result<Self, FormError> {
        let form = page
            .element_by_id(&config.form_id)
            .ok_or_else(|| FormError::FormNotFound(config.form_id.clone()))?;
        let date_input = page
            .element_by_id(&config.date_field_id)
            .ok_or_else(|| FormError::ElementNotFound(config.date_field_id.clone()))?;

        let today = format_date_input(clock.today());
        page.set_min(date_input, &today);
        info!(form = %config.form_id, min_date = %today, "Booking form ready");

        Ok(Self {
            page,
            validator: FieldValidator::new(clock),
            config,
            form,
        })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    /// Input event on `field`: drop its error, then re-check it unless it is blank
    pub fn on_input(&mut self, field: NodeId) -> Result<(), FormError> {
        let snapshot = self
            .page
            .snapshot(field)
            .ok_or_else(|| FormError::NotAFormControl(field.to_string()))?;

        self.clear_error(field);

        if !page_trim(&snapshot.value).is_empty() {
            self.check_field(field, &snapshot);
        }

        Ok(())
    }

    /// Submit event. The default action is always withheld; a valid form is
    /// confirmed and reset, an invalid one is left as the user filled it.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let result = self.check_required_fields();

        if !result.is_valid {
            let invalid_fields = result.invalid_fields();
            info!(invalid = ?invalid_fields, "Booking submission blocked");
            return SubmitOutcome::Blocked { invalid_fields };
        }

        self.page.alert(&self.config.confirmation_message);
        self.page.reset_form(self.form);
        info!("Booking submission confirmed");

        SubmitOutcome::Confirmed
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Checks every required field, showing each failure; true when all pass
    pub fn validate_all(&mut self) -> bool {
        self.check_required_fields().is_valid
    }

    /// Checks one field and updates its feedback; true when it passes
    pub fn validate_field(&mut self, field: NodeId) -> bool {
        match self.page.snapshot(field) {
            Some(snapshot) => self.check_field(field, &snapshot),
            None => true,
        }
    }

    fn check_required_fields(&mut self) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in self.page.required_fields(self.form) {
            let Some(snapshot) = self.page.snapshot(field) else {
                continue;
            };
            let field_result = self.validator_result(&snapshot);
            self.present(field, &field_result);
            result.merge(field_result);
        }

        result
    }

    fn check_field(&mut self, field: NodeId, snapshot: &FieldSnapshot) -> bool {
        let result = self.validator_result(snapshot);
        self.present(field, &result);
        result.is_valid
    }

    fn validator_result(&self, snapshot: &FieldSnapshot) -> ValidationResult {
        let result = Validator::<FieldSnapshot>::validate(&self.validator, snapshot);
        debug!(
            field = %snapshot.name,
            value = %safe_field_log(&snapshot.name, &snapshot.value),
            checked = snapshot.checked,
            valid = result.is_valid,
            "Validated field"
        );
        result
    }

    fn present(&mut self, field: NodeId, result: &ValidationResult) {
        match result.errors.first() {
            Some(error) => self.show_error(field, &error.message),
            None => self.clear_error(field),
        }
    }

    // ========================================================================
    // Feedback
    // ========================================================================

    /// Marks the field invalid and writes `message` into its error node
    pub fn show_error(&mut self, field: NodeId, message: &str) {
        let name = self.field_name(field);
        let error_node = self.error_node(field, &name);
        self.page.set_border_color(field, &self.config.invalid_border);
        match error_node {
            Some(node) => self.page.set_text(node, message),
            None => warn!(field = %name, "No error element for field"),
        }
    }

    /// Restores the neutral border and blanks the error node
    pub fn clear_error(&mut self, field: NodeId) {
        let name = self.field_name(field);
        let error_node = self.error_node(field, &name);
        self.page.set_border_color(field, &self.config.neutral_border);
        if let Some(node) = error_node {
            self.page.set_text(node, "");
        }
    }

    fn field_name(&self, field: NodeId) -> String {
        self.page
            .snapshot(field)
            .map(|snapshot| snapshot.name)
            .unwrap_or_default()
    }

    /// `<name>Error` by id, else the first `.error-message` next to the field
    fn error_node(&self, field: NodeId, name: &str) -> Option<NodeId> {
        self.page
            .element_by_id(&format!("{}{}", name, ERROR_ID_SUFFIX))
            .or_else(|| self.page.closest_with_class(field, ERROR_CLASS))
    }
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}
