//! Admin configuration: which vocabulary filters content, and how the
//! preference form renders it

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::settings::{DISPLAY_STYLE_KEY, VOCABULARY_ID_KEY};
use content_filter_core::extract::{Auth, OptionalRequestId};
use content_filter_core::form::{FormField, FormOption, FormView, Notice};
use content_filter_core::settings::{PermissionLevel, SettingValue};
use content_filter_types::auth::AuthCtx;

pub const ADMIN_FORM_ID: &str = "content_filter_admin_settings";

const NO_VOCABULARY_BODY: &str =
	"You must create a vocabulary before you can use content filtering.";
const VOCABULARY_DESCRIPTION: &str = "Select a vocabulary to filter content. \
	Use caution with hierarchical (nested) taxonomies as visibility settings \
	may cause problems on node edit forms. Do not select free tagging \
	vocabularies, they are not supported.";
const REBUILD_DESCRIPTION: &str =
	"Do this once, after you have fully configured access by taxonomy.";
const REBUILD_REMINDER: &str = "Do not forget to rebuild node access permissions \
	after you have configured taxonomy-based access.";

/// Build the admin settings form. With no vocabularies to offer, the form
/// degrades to a single informational message.
pub async fn build_form(app: &App) -> CfResult<FormView> {
	let vocabularies = app.taxonomy_adapter.list_vocabularies().await?;

	let mut form = FormView::new(ADMIN_FORM_ID);
	if vocabularies.is_empty() {
		form.fields.push(FormField::Markup { body: NO_VOCABULARY_BODY.into() });
		return Ok(form);
	}

	let vocabulary_default =
		app.settings.get_string_opt(VOCABULARY_ID_KEY).await?.map_or_else(Vec::new, |v| vec![v]);
	let display = app.settings.get_string(DISPLAY_STYLE_KEY).await?;
	let display_default = DisplayStyle::parse(&display).unwrap_or_default();

	form.fields.push(FormField::Select {
		name: "vocabulary".into(),
		label: "Vocabulary".into(),
		description: Some(VOCABULARY_DESCRIPTION.into()),
		options: vocabularies
			.into_iter()
			.map(|v| FormOption::new(v.vid, v.name))
			.collect(),
		default_value: vocabulary_default,
		multiple: false,
		required: true,
	});
	form.fields.push(FormField::Select {
		name: "display".into(),
		label: "Display settings".into(),
		description: Some("Display settings for selecting taxonomies.".into()),
		options: vec![
			FormOption::new(DisplayStyle::Checkboxes.as_str(), "Checkboxes"),
			FormOption::new(DisplayStyle::Select.as_str(), "Select"),
		],
		default_value: vec![display_default.as_str().to_owned()],
		multiple: false,
		required: false,
	});
	// Default false because the rebuild is usually only needed after the
	// scheme has been changed.
	form.fields.push(FormField::Checkbox {
		name: "rebuild".into(),
		label: "Rebuild content permissions now".into(),
		description: Some(REBUILD_DESCRIPTION.into()),
		default_value: false,
	});

	Ok(form)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsRequest {
	pub vocabulary_id: String,
	pub display_style: DisplayStyle,
	#[serde(default)]
	pub rebuild: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsResponse {
	pub saved: VocabularySelection,
	pub notices: Vec<Notice>,
}

fn check_admin(auth: &AuthCtx) -> CfResult<()> {
	if !PermissionLevel::Admin.check(&auth.roles) {
		warn!("User {} attempted to access content-filter administration", auth.user_id);
		return Err(Error::PermissionDenied);
	}
	Ok(())
}

/// GET /api/admin/content-filter - the admin settings form
pub async fn get_admin_settings(
	State(app): State<App>,
	Auth(auth): Auth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CfResult<(StatusCode, Json<ApiResponse<FormView>>)> {
	check_admin(&auth)?;

	let form = build_form(&app).await?;

	let mut response = ApiResponse::new(form);
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}

	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/admin/content-filter - persist the vocabulary selection
///
/// Persists both settings, optionally runs the node-access rebuild right
/// away (blocking), and always rebuilds routes afterward since the number
/// of active access schemes may have changed.
pub async fn update_admin_settings(
	State(app): State<App>,
	Auth(auth): Auth,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<AdminSettingsRequest>,
) -> CfResult<(StatusCode, Json<ApiResponse<AdminSettingsResponse>>)> {
	check_admin(&auth)?;

	if req.vocabulary_id.is_empty() {
		return Err(Error::ValidationError("A vocabulary is required".into()));
	}
	if app.taxonomy_adapter.list_vocabularies().await?.is_empty() {
		// The form had no submittable fields; nothing to persist.
		return Err(Error::ValidationError(NO_VOCABULARY_BODY.into()));
	}

	app.settings
		.set(VOCABULARY_ID_KEY, SettingValue::String(req.vocabulary_id.clone()), &auth.roles)
		.await?;
	app.settings
		.set(
			DISPLAY_STYLE_KEY,
			SettingValue::String(req.display_style.as_str().into()),
			&auth.roles,
		)
		.await?;

	let mut notices = Vec::new();
	if req.rebuild {
		info!("Rebuilding node access permissions");
		app.access_adapter.rebuild_node_access(true).await?;
		notices.push(Notice::status("Content access permissions have been rebuilt."));
	} else {
		warn!("Content-filter configuration saved without a node access rebuild");
		notices.push(Notice::warning(REBUILD_REMINDER));
	}

	// The route rebuild accounts for any access-scheme count change.
	app.access_adapter.rebuild_routes().await?;

	let saved = VocabularySelection {
		vocabulary_id: req.vocabulary_id,
		display_style: req.display_style,
	};
	let mut response = ApiResponse::new(AdminSettingsResponse { saved, notices });
	if let Some(id) = req_id {
		response = response.with_req_id(id);
	}

	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
