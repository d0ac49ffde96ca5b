//! Admin configuration form tests
//!
//! Covers the degraded no-vocabulary rendering, defaults on the settings
//! form, permission enforcement, and the rebuild/notice behavior on
//! submit.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use axum::Json;
use axum::extract::State;

use common::adapters::{StaticTaxonomyAdapter, TestApp, build_app};
use common::fixtures::two_vocabulary_taxonomy;
use content_filter::admin::{self, AdminSettingsRequest};
use content_filter::settings::{DISPLAY_STYLE_KEY, VOCABULARY_ID_KEY};
use content_filter_core::extract::{Auth, OptionalRequestId};
use content_filter_core::form::{FormField, NoticeSeverity};
use content_filter_types::auth::AuthCtx;
use content_filter_types::error::Error;
use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::types::{DisplayStyle, UserId};

fn admin_auth() -> Auth {
	Auth(AuthCtx { user_id: UserId(1), roles: vec!["ADMN".into()] })
}

fn plain_auth() -> Auth {
	Auth(AuthCtx { user_id: UserId(9), roles: Vec::new() })
}

fn request(vid: &str, style: DisplayStyle, rebuild: bool) -> AdminSettingsRequest {
	AdminSettingsRequest { vocabulary_id: vid.to_string(), display_style: style, rebuild }
}

async fn submit(
	test: &TestApp,
	auth: Auth,
	req: AdminSettingsRequest,
) -> Result<admin::AdminSettingsResponse, Error> {
	admin::update_admin_settings(State(test.app.clone()), auth, OptionalRequestId(None), Json(req))
		.await
		.map(|(_, Json(body))| body.data)
}

#[tokio::test]
async fn zero_vocabularies_degrades_to_an_informational_message() {
	let test = build_app(StaticTaxonomyAdapter::default());

	let form = admin::build_form(&test.app).await.expect("build failed");

	assert_eq!(form.fields.len(), 1);
	assert!(matches!(&form.fields[0], FormField::Markup { body } if body.contains("vocabulary")));
	assert!(!form.has_input_fields());
}

#[tokio::test]
async fn settings_form_lists_vocabularies_and_configured_defaults() {
	let test = build_app(two_vocabulary_taxonomy());
	submit(&test, admin_auth(), request("topics", DisplayStyle::Select, false))
		.await
		.expect("submit failed");

	let form = admin::build_form(&test.app).await.expect("build failed");
	assert_eq!(form.fields.len(), 3);

	let FormField::Select { options, default_value, required, .. } = &form.fields[0] else {
		panic!("expected the vocabulary select");
	};
	assert!(required);
	let vids: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
	assert_eq!(vids, ["genres", "topics"]);
	assert_eq!(default_value.as_slice(), ["topics".to_string()]);

	let FormField::Select { default_value, .. } = &form.fields[1] else {
		panic!("expected the display-style select");
	};
	assert_eq!(default_value.as_slice(), ["select".to_string()]);

	let FormField::Checkbox { default_value, .. } = &form.fields[2] else {
		panic!("expected the rebuild checkbox");
	};
	assert!(!default_value);
}

#[tokio::test]
async fn unconfigured_module_shows_no_vocabulary_default() {
	let test = build_app(two_vocabulary_taxonomy());

	let form = admin::build_form(&test.app).await.expect("build failed");

	let FormField::Select { default_value, .. } = &form.fields[0] else {
		panic!("expected the vocabulary select");
	};
	assert!(default_value.is_empty());
}

#[tokio::test]
async fn reading_the_settings_form_requires_the_admin_role() {
	let test = build_app(two_vocabulary_taxonomy());

	let res = admin::get_admin_settings(
		State(test.app.clone()),
		plain_auth(),
		OptionalRequestId(None),
	)
	.await;

	assert!(matches!(res, Err(Error::PermissionDenied)));
}

#[tokio::test]
async fn submitting_requires_the_admin_role() {
	let test = build_app(two_vocabulary_taxonomy());

	let res =
		submit(&test, plain_auth(), request("genres", DisplayStyle::Checkboxes, false)).await;

	assert!(matches!(res, Err(Error::PermissionDenied)));
	let stored = test.meta.read_setting(VOCABULARY_ID_KEY).await.expect("read failed");
	assert_eq!(stored, None);
}

#[tokio::test]
async fn submit_persists_settings_and_warns_without_a_rebuild() {
	let test = build_app(two_vocabulary_taxonomy());

	let response = submit(&test, admin_auth(), request("genres", DisplayStyle::Checkboxes, false))
		.await
		.expect("submit failed");

	assert_eq!(response.saved.vocabulary_id, "genres");
	assert_eq!(response.notices.len(), 1);
	assert_eq!(response.notices[0].severity, NoticeSeverity::Warning);

	let vid = test.meta.read_setting(VOCABULARY_ID_KEY).await.expect("read failed");
	assert_eq!(vid, Some(serde_json::json!("genres")));
	let style = test.meta.read_setting(DISPLAY_STYLE_KEY).await.expect("read failed");
	assert_eq!(style, Some(serde_json::json!("checkboxes")));

	// no node-access rebuild, but routes are rebuilt regardless
	assert!(test.access.node_access_rebuilds.lock().expect("poisoned").is_empty());
	assert_eq!(*test.access.route_rebuilds.lock().expect("poisoned"), 1);
}

#[tokio::test]
async fn submit_with_rebuild_runs_the_node_access_rebuild() {
	let test = build_app(two_vocabulary_taxonomy());

	let response = submit(&test, admin_auth(), request("genres", DisplayStyle::Select, true))
		.await
		.expect("submit failed");

	assert_eq!(response.notices.len(), 1);
	assert_eq!(response.notices[0].severity, NoticeSeverity::Status);
	assert_eq!(test.access.node_access_rebuilds.lock().expect("poisoned").as_slice(), [true]);
	assert_eq!(*test.access.route_rebuilds.lock().expect("poisoned"), 1);
}

#[tokio::test]
async fn submit_without_a_vocabulary_is_a_validation_error() {
	let test = build_app(two_vocabulary_taxonomy());

	let res = submit(&test, admin_auth(), request("", DisplayStyle::Checkboxes, false)).await;

	assert!(matches!(res, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn submit_with_zero_vocabularies_persists_nothing() {
	let test = build_app(StaticTaxonomyAdapter::default());

	let res = submit(&test, admin_auth(), request("genres", DisplayStyle::Checkboxes, false)).await;

	assert!(matches!(res, Err(Error::ValidationError(_))));
	let stored = test.meta.read_setting(VOCABULARY_ID_KEY).await.expect("read failed");
	assert_eq!(stored, None);
	assert_eq!(*test.access.route_rebuilds.lock().expect("poisoned"), 0);
}

// vim: ts=4
