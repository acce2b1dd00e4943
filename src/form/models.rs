use serde::Serialize;

/// What happened to a submit event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Every required field passed; the confirmation was shown and the form reset
    Confirmed,
    /// Submission withheld; these fields failed, in document order
    Blocked { invalid_fields: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed)
    }
}
