//! The preference scheme: one saved term selection per user
//!
//! A scheme maps a vocabulary id to the set of term ids its owner wants to
//! see. Exactly one scheme exists; its storage key is fixed.

use std::collections::HashMap;

use crate::prelude::*;
use crate::settings::{DISPLAY_STYLE_KEY, VOCABULARY_ID_KEY};

/// Namespace in the per-user data store.
pub const MODULE: &str = "content_filter";

/// Storage key of the single preference scheme.
pub const SCHEME_KEY: &str = "content_filter_scheme_1";

/// Stored shape of a scheme: vocabulary id -> selected term ids.
pub type SchemeSelection = HashMap<String, Vec<TermId>>;

/// Read the administrator's vocabulary selection, or `None` while the
/// module is unconfigured.
pub async fn load_config(app: &App) -> CfResult<Option<VocabularySelection>> {
	let Some(vocabulary_id) = app.settings.get_string_opt(VOCABULARY_ID_KEY).await? else {
		return Ok(None);
	};

	let display_raw = app.settings.get_string(DISPLAY_STYLE_KEY).await?;
	let display_style = DisplayStyle::parse(&display_raw).unwrap_or_else(|| {
		warn!("Stored display style '{}' is unknown, falling back to checkboxes", display_raw);
		DisplayStyle::default()
	});

	Ok(Some(VocabularySelection { vocabulary_id, display_style }))
}

/// Load a user's saved scheme. Missing or unreadable data yields an empty
/// selection; stale entries for other vocabularies are kept as stored.
pub async fn load_selection(app: &App, user_id: UserId) -> CfResult<SchemeSelection> {
	let Some(value) = app.meta_adapter.read_user_data(user_id, MODULE, SCHEME_KEY).await? else {
		return Ok(SchemeSelection::new());
	};

	match serde_json::from_value::<SchemeSelection>(value) {
		Ok(selection) => Ok(selection),
		Err(err) => {
			warn!("Discarding unreadable scheme data for user {}: {}", user_id, err);
			Ok(SchemeSelection::new())
		}
	}
}

/// Overwrite a user's saved scheme with `selection`. No merge and no
/// membership validation: the submitted mapping replaces the stored one.
pub async fn store_selection(
	app: &App,
	user_id: UserId,
	selection: &SchemeSelection,
) -> CfResult<()> {
	let value = serde_json::to_value(selection)
		.map_err(|e| Error::Internal(format!("Failed to serialize scheme data: {}", e)))?;
	app.meta_adapter.update_user_data(user_id, MODULE, SCHEME_KEY, Some(value)).await
}

// vim: ts=4
