// src/form/mod.rs

pub mod controller;
pub mod models;

#[cfg(test)]
mod tests;

pub use controller::{format_date_input, BookingForm};
pub use models::SubmitOutcome;
