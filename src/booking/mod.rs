//! # Booking Module
//!
//! Field rules for the booking form:
//! - Field identity (`FieldName`) and snapshots read from the page
//! - The fixed rule table and `FieldValidator`
//! - The clock used for the appointment date rule

pub mod models;
pub mod validators;


// Re-export commonly used items
pub use models::*;
pub use validators::{rule_for, FieldRule, FieldValidator, RULES};
