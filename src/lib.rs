//! Booking form validation.
//!
//! Field rules (`booking`), the page ports and an in-memory page (`dom`), the
//! form controller that wires input, submit and ready handlers (`form`), and a
//! session replayer (`replay`).

pub mod booking;
pub mod common;
pub mod dom;
pub mod form;
pub mod replay;

pub use booking::{Clock, FieldName, FieldValidator, FixedClock, SystemClock, Verdict};
pub use common::{FormConfig, FormError};
pub use dom::{BookingDocument, FieldQuery, Page, PresentationSink};
pub use form::{BookingForm, SubmitOutcome};
