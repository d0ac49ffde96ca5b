//! The per-user preference form
//!
//! Renders the configured vocabulary's term tree as either a checkbox
//! group or a multi-select, pre-populated from the user's saved scheme,
//! and persists submissions.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::scheme::{self, SchemeSelection};
use content_filter_core::extract::{OptionalAuth, OptionalRequestId};
use content_filter_core::form::{FormField, FormOption, FormView};
use content_filter_types::taxonomy_adapter::{TermNode, VocabularyInfo};

pub const PREFERENCE_FORM_ID: &str = "content_filter_preferences";

/// Flatten the term tree into form options. The tree arrives ordered
/// depth-first; each label gets one dash per level of depth.
fn term_options(tree: &[TermNode]) -> Vec<FormOption> {
	tree.iter()
		.map(|term| {
			let label = format!("{}{}", "-".repeat(term.depth as usize), term.name);
			FormOption::new(term.term_id.to_string(), label)
		})
		.collect()
}

/// Term selection as a checkbox group, one checkbox per term.
fn term_display_checkboxes(
	vocabulary: &VocabularyInfo,
	tree: &[TermNode],
	default_value: Vec<String>,
) -> FormField {
	FormField::Checkboxes {
		name: vocabulary.vid.clone(),
		label: vocabulary.name.clone(),
		description: vocabulary.description.clone(),
		options: term_options(tree),
		default_value,
	}
}

/// Term selection as a multi-select; option zero is `<none>`.
fn term_display_select(
	vocabulary: &VocabularyInfo,
	tree: &[TermNode],
	default_value: Vec<String>,
) -> FormField {
	let mut options = vec![FormOption::new("0", "<none>")];
	options.extend(term_options(tree));
	FormField::Select {
		name: vocabulary.vid.clone(),
		label: vocabulary.name.clone(),
		description: vocabulary.description.clone(),
		options,
		default_value,
		multiple: true,
		required: false,
	}
}

/// Build the preference form for `user_id`.
///
/// An unconfigured module, or a configured vocabulary that no longer
/// exists, yields a form without fields rather than an error. Saved term
/// ids from other vocabularies stay stored but match no option here.
pub async fn build_form(app: &App, user_id: UserId) -> CfResult<FormView> {
	let mut form = FormView::new(PREFERENCE_FORM_ID);
	form.title = Some("Content Filter".into());
	form.description = Some("Filter content by preferences.".into());

	let Some(config) = scheme::load_config(app).await? else {
		return Ok(form);
	};
	let Some(vocabulary) = app.taxonomy_adapter.read_vocabulary(&config.vocabulary_id).await?
	else {
		return Ok(form);
	};

	let tree = app.taxonomy_adapter.read_term_tree(&vocabulary.vid).await?;
	let saved = scheme::load_selection(app, user_id).await?;
	let default_value: Vec<String> = saved
		.get(&vocabulary.vid)
		.map(|ids| ids.iter().map(ToString::to_string).collect())
		.unwrap_or_default();

	let field = match config.display_style {
		DisplayStyle::Checkboxes => term_display_checkboxes(&vocabulary, &tree, default_value),
		DisplayStyle::Select => term_display_select(&vocabulary, &tree, default_value),
	};
	form.fields.push(field);

	Ok(form)
}

#[derive(Debug, Deserialize)]
pub struct PreferenceRequest {
	/// Vocabulary id -> selected term ids. Stored as submitted.
	pub selection: SchemeSelection,
}

#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
	pub selection: SchemeSelection,
}

/// PUT /api/content-filter/preferences - save the current user's selection
///
/// The submitted mapping replaces the stored one wholesale; term ids are
/// not checked against the tree (stale ids are simply never rendered).
pub async fn update_preferences(
	State(app): State<App>,
	auth: OptionalAuth,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<PreferenceRequest>,
) -> CfResult<(StatusCode, Json<ApiResponse<PreferenceResponse>>)> {
	let user_id = auth.user_id();

	scheme::store_selection(&app, user_id, &req.selection).await?;
	info!("Stored content-filter selection for user {}", user_id);

	let mut response = ApiResponse::new(PreferenceResponse { selection: req.selection });
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}

	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
