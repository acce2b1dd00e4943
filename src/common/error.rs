// Error types for the booking form

use thiserror::Error;

/// Structural faults: the page is missing something the form needs, or a
/// replayed event cannot be applied. Invalid field values are never errors.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Form not found: #{0}")]
    FormNotFound(String),

    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Element #{0} is not a form control")]
    NotAFormControl(String),

    #[error("Element #{0} is not a checkbox")]
    NotACheckbox(String),

    #[error("Failed to read scenario: {0}")]
    ScenarioIo(#[from] std::io::Error),

    #[error("Invalid scenario: {0}")]
    ScenarioParse(#[from] serde_json::Error),
}
