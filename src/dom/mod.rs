//! # Page Module
//!
//! The booking form never touches a browser directly. It reads the page through
//! `FieldQuery` and writes feedback through `PresentationSink`; `BookingDocument`
//! implements both over an in-memory element tree.

pub mod document;


use crate::booking::FieldSnapshot;
use std::fmt;

pub use document::{BookingDocument, Element, Tag};

/// Handle to an element in a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Read side of the page
pub trait FieldQuery {
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// `input[required], select[required]` under `form`, in document order
    fn required_fields(&self, form: NodeId) -> Vec<NodeId>;

    /// Name, value and checked state of a form control; `None` for anything else
    fn snapshot(&self, field: NodeId) -> Option<FieldSnapshot>;

    /// First element with `class` among the descendants of the field's parent
    fn closest_with_class(&self, field: NodeId, class: &str) -> Option<NodeId>;
}

/// Write side of the page
pub trait PresentationSink {
    fn set_border_color(&mut self, field: NodeId, color: &str);

    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_min(&mut self, field: NodeId, min: &str);

    /// Blocking confirmation dialog
    fn alert(&mut self, message: &str);

    /// Restores every control under `form` to its default value and checked state
    fn reset_form(&mut self, form: NodeId);
}

/// Anything the form controller can drive
pub trait Page: FieldQuery + PresentationSink {}

impl<T: FieldQuery + PresentationSink> Page for T {}
