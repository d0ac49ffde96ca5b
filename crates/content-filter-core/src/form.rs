//! Typed form view-models
//!
//! The UI layer consumes these instead of an untyped field array: every
//! field carries its kind, label, options, and defaults, and the whole
//! form serializes as one JSON document.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One selectable option of a select or checkbox-group field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOption {
	pub value: String,
	pub label: String,
}

impl FormOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self { value: value.into(), label: label.into() }
	}
}

/// A single form field.
///
/// `default_value` on option-bearing fields holds the selected/checked
/// option values; values without a matching option are simply never
/// rendered as selected.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FormField {
	/// Static informational text, no input.
	Markup { body: String },
	Select {
		name: String,
		label: String,
		description: Option<String>,
		options: Vec<FormOption>,
		default_value: Vec<String>,
		multiple: bool,
		required: bool,
	},
	Checkboxes {
		name: String,
		label: String,
		description: Option<String>,
		options: Vec<FormOption>,
		default_value: Vec<String>,
	},
	Checkbox {
		name: String,
		label: String,
		description: Option<String>,
		default_value: bool,
	},
}

impl FormField {
	/// Whether the field accepts input at all.
	pub fn is_input(&self) -> bool {
		!matches!(self, FormField::Markup { .. })
	}
}

/// A complete form as handed to the UI layer.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
	pub form_id: String,
	pub title: Option<String>,
	pub description: Option<String>,
	pub fields: Vec<FormField>,
}

impl FormView {
	pub fn new(form_id: impl Into<String>) -> Self {
		Self { form_id: form_id.into(), title: None, description: None, fields: Vec::new() }
	}

	pub fn has_input_fields(&self) -> bool {
		self.fields.iter().any(FormField::is_input)
	}
}

/// User-facing notification attached to a submit response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
	pub severity: NoticeSeverity,
	pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
	Status,
	Warning,
	Error,
}

impl Notice {
	pub fn status(message: impl Into<String>) -> Self {
		Self { severity: NoticeSeverity::Status, message: message.into() }
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self { severity: NoticeSeverity::Warning, message: message.into() }
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn form_field_serializes_with_kind_tag() {
		let field = FormField::Checkbox {
			name: "rebuild".into(),
			label: "Rebuild now".into(),
			description: None,
			default_value: false,
		};
		let json = serde_json::to_value(&field).unwrap();
		assert_eq!(json["kind"], "checkbox");
		assert_eq!(json["defaultValue"], false);
		// absent description is omitted entirely
		assert!(json.get("description").is_none());
	}

	#[test]
	fn markup_only_form_has_no_input_fields() {
		let mut form = FormView::new("content_filter_admin_settings");
		form.fields.push(FormField::Markup { body: "create a vocabulary first".into() });
		assert!(!form.has_input_fields());
	}
}

// vim: ts=4
