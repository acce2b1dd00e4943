// src/replay.rs
//! Replays a recorded user session against a booking form

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::booking::Clock;
use crate::common::FormError;
use crate::dom::BookingDocument;
use crate::form::{BookingForm, SubmitOutcome};

/// One user action on the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// Typing into (or choosing an option of) the control with this id
    Input { field: String, value: String },
    /// Ticking or unticking a checkbox
    Check { field: String, checked: bool },
    Submit,
}

pub fn parse_scenario(json: &str) -> Result<Vec<ScenarioEvent>, FormError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_scenario(path: &Path) -> Result<Vec<ScenarioEvent>, FormError> {
    let json = fs::read_to_string(path)?;
    parse_scenario(&json)
}

/// Applies every event in order and returns the outcome of each submit
pub fn run_scenario<C: Clock>(
    form: &mut BookingForm<BookingDocument, C>,
    events: &[ScenarioEvent],
) -> Result<Vec<SubmitOutcome>, FormError> {
    let mut outcomes = Vec::new();

    for event in events {
        match event {
            ScenarioEvent::Input { field, value } => {
                let node = form.page_mut().set_value(field, value)?;
                form.on_input(node)?;
            }
            ScenarioEvent::Check { field, checked } => {
                let node = form.page_mut().set_checked(field, *checked)?;
                form.on_input(node)?;
            }
            ScenarioEvent::Submit => {
                let outcome = form.on_submit();
                info!(confirmed = outcome.is_confirmed(), "Replayed submit");
                outcomes.push(outcome);
            }
        }
    }

    Ok(outcomes)
}
