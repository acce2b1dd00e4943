// src/dom/document.rs

use super::{FieldQuery, NodeId, PresentationSink};
use crate::booking::FieldSnapshot;
use crate::common::config::{DEFAULT_FORM_ID, ERROR_CLASS, ERROR_ID_SUFFIX};
use crate::common::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Form,
    Div,
    Label,
    Input,
    Select,
    Textarea,
    Span,
}

impl Tag {
    pub fn is_control(&self) -> bool {
        matches!(self, Tag::Input | Tag::Select | Tag::Textarea)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub name: Option<String>,
    pub input_type: Option<String>,
    pub classes: Vec<String>,
    pub required: bool,
    pub options: Vec<String>,
    pub value: String,
    pub default_value: String,
    pub checked: bool,
    pub default_checked: bool,
    pub min: Option<String>,
    pub border_color: Option<String>,
    pub text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn bare(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            name: None,
            input_type: None,
            classes: Vec::new(),
            required: false,
            options: Vec::new(),
            value: String::new(),
            default_value: String::new(),
            checked: false,
            default_checked: false,
            min: None,
            border_color: None,
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn form(id: &str) -> Self {
        Self::bare(Tag::Form).with_id(id)
    }

    pub fn div(class: &str) -> Self {
        Self::bare(Tag::Div).with_class(class)
    }

    pub fn label(text: &str) -> Self {
        let mut label = Self::bare(Tag::Label);
        label.text = text.to_string();
        label
    }

    /// Input named and identified by `name`. Checkboxes carry the value "on".
    pub fn input(input_type: &str, name: &str) -> Self {
        let mut input = Self::bare(Tag::Input).with_id(name);
        input.name = Some(name.to_string());
        input.input_type = Some(input_type.to_string());
        if input_type == "checkbox" {
            input.value = "on".to_string();
            input.default_value = "on".to_string();
        }
        input
    }

    /// Select whose first option is the empty placeholder
    pub fn select(name: &str, options: &[&str]) -> Self {
        let mut select = Self::bare(Tag::Select).with_id(name);
        select.name = Some(name.to_string());
        select.options.push(String::new());
        select
            .options
            .extend(options.iter().map(|o| o.to_string()));
        select
    }

    pub fn textarea(name: &str) -> Self {
        let mut textarea = Self::bare(Tag::Textarea).with_id(name);
        textarea.name = Some(name.to_string());
        textarea
    }

    pub fn error_span() -> Self {
        Self::bare(Tag::Span).with_class(ERROR_CLASS)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_checkbox(&self) -> bool {
        self.input_type.as_deref() == Some("checkbox")
    }
}

/// In-memory booking page
#[derive(Debug, Clone, Default)]
pub struct BookingDocument {
    elements: Vec<Element>,
    alerts: Vec<String>,
}

impl BookingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The booking page: one form group per field, each with its error span.
    /// The consent group's span has no id and is found through its class.
    pub fn standard() -> Self {
        let mut doc = Self::new();
        let form = doc.append(None, Element::form(DEFAULT_FORM_ID));

        let text_fields = [
            ("text", "fullName", "Full Name"),
            ("email", "email", "Email Address"),
            ("tel", "phone", "Phone Number"),
            ("date", "appointmentDate", "Preferred Date"),
        ];
        for (input_type, name, label) in text_fields {
            let group = doc.append(Some(form), Element::div("form-group"));
            doc.append(Some(group), Element::label(label));
            doc.append(Some(group), Element::input(input_type, name).required());
            doc.append(
                Some(group),
                Element::error_span().with_id(&format!("{}{}", name, ERROR_ID_SUFFIX)),
            );
        }

        let group = doc.append(Some(form), Element::div("form-group"));
        doc.append(Some(group), Element::label("Preferred Time"));
        doc.append(
            Some(group),
            Element::select(
                "appointmentTime",
                &["09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00"],
            )
            .required(),
        );
        doc.append(Some(group), Element::error_span().with_id("appointmentTimeError"));

        let group = doc.append(Some(form), Element::div("form-group"));
        doc.append(Some(group), Element::label("Service"));
        doc.append(
            Some(group),
            Element::select(
                "serviceType",
                &["consultation", "treatment", "follow-up", "therapy"],
            )
            .required(),
        );
        doc.append(Some(group), Element::error_span().with_id("serviceTypeError"));

        let group = doc.append(Some(form), Element::div("form-group"));
        doc.append(Some(group), Element::label("Additional Notes"));
        doc.append(Some(group), Element::textarea("notes"));

        let group = doc.append(Some(form), Element::div("form-group").with_class("checkbox-group"));
        doc.append(Some(group), Element::input("checkbox", "consent").required());
        doc.append(
            Some(group),
            Element::label("I agree to the terms and conditions"),
        );
        doc.append(Some(group), Element::error_span());

        doc
    }

    pub fn append(&mut self, parent: Option<NodeId>, mut element: Element) -> NodeId {
        let id = NodeId(self.elements.len());
        element.parent = parent;
        element.value = element.default_value.clone();
        element.checked = element.default_checked;
        self.elements.push(element);
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(id);
        }
        id
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    /// Element by id, as an error when it is missing
    pub fn require(&self, id: &str) -> Result<NodeId, FormError> {
        self.element_by_id(id)
            .ok_or_else(|| FormError::ElementNotFound(id.to_string()))
    }

    // ========================================================================
    // User edits
    // ========================================================================

    /// Types into a control. A select only takes one of its options and
    /// otherwise ends up empty.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<NodeId, FormError> {
        let node = self.require(id)?;
        let element = &mut self.elements[node.0];
        if !element.tag.is_control() {
            return Err(FormError::NotAFormControl(id.to_string()));
        }

        element.value = if element.tag == Tag::Select && !element.options.iter().any(|o| o == value)
        {
            String::new()
        } else {
            value.to_string()
        };
        Ok(node)
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<NodeId, FormError> {
        let node = self.require(id)?;
        let element = &mut self.elements[node.0];
        if !element.is_checkbox() {
            return Err(FormError::NotACheckbox(id.to_string()));
        }
        element.checked = checked;
        Ok(node)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn value(&self, id: &str) -> Option<&str> {
        self.element_by_id(id)
            .and_then(|node| self.get(node))
            .map(|e| e.value.as_str())
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.element_by_id(id)
            .and_then(|node| self.get(node))
            .map(|e| e.checked)
            .unwrap_or(false)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element_by_id(id)
            .and_then(|node| self.get(node))
            .map(|e| e.text.as_str())
    }

    pub fn text_of(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|e| e.text.as_str())
    }

    pub fn border_color(&self, id: &str) -> Option<&str> {
        self.element_by_id(id)
            .and_then(|node| self.get(node))
            .and_then(|e| e.border_color.as_deref())
    }

    pub fn min(&self, id: &str) -> Option<&str> {
        self.element_by_id(id)
            .and_then(|node| self.get(node))
            .and_then(|e| e.min.as_deref())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Descendants of `root` in document order, `root` excluded
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(root) {
            Some(element) => element.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(element) = self.get(node) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        out
    }
}

impl FieldQuery for BookingDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn required_fields(&self, form: NodeId) -> Vec<NodeId> {
        self.descendants(form)
            .into_iter()
            .filter(|node| {
                self.get(*node)
                    .map(|e| e.required && matches!(e.tag, Tag::Input | Tag::Select))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn snapshot(&self, field: NodeId) -> Option<FieldSnapshot> {
        let element = self.get(field)?;
        if !element.tag.is_control() {
            return None;
        }

        Some(FieldSnapshot {
            name: element.name.clone().unwrap_or_default(),
            value: element.value.clone(),
            checked: element.checked,
        })
    }

    fn closest_with_class(&self, field: NodeId, class: &str) -> Option<NodeId> {
        let parent = self.get(field)?.parent?;
        self.descendants(parent)
            .into_iter()
            .find(|node| self.get(*node).map(|e| e.has_class(class)).unwrap_or(false))
    }
}

impl PresentationSink for BookingDocument {
    fn set_border_color(&mut self, field: NodeId, color: &str) {
        if let Some(element) = self.elements.get_mut(field.0) {
            element.border_color = Some(color.to_string());
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.text = text.to_string();
        }
    }

    fn set_min(&mut self, field: NodeId, min: &str) {
        if let Some(element) = self.elements.get_mut(field.0) {
            element.min = Some(min.to_string());
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reset_form(&mut self, form: NodeId) {
        for node in self.descendants(form) {
            let element = &mut self.elements[node.0];
            if element.tag.is_control() {
                element.value = element.default_value.clone();
                element.checked = element.default_checked;
            }
        }
    }
}
