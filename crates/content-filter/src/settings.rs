//! Content-filter settings registration

use crate::prelude::*;
use content_filter_core::settings::{
	PermissionLevel, SettingDefinition, SettingValue, SettingsRegistry,
};

/// Machine name of the vocabulary used as the filtering dimension.
pub const VOCABULARY_ID_KEY: &str = "content_filter.vocabulary_id";

/// Widget used on the preference form ('checkboxes' or 'select').
pub const DISPLAY_STYLE_KEY: &str = "content_filter.display_style";

/// Register all content-filter settings
pub fn register_settings(registry: &mut SettingsRegistry) -> CfResult<()> {
	// Unconfigured until an administrator picks a vocabulary
	registry.register(
		SettingDefinition::builder(VOCABULARY_ID_KEY)
			.description("Machine name of the vocabulary whose terms filter content")
			.permission(PermissionLevel::Admin)
			.optional(true)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(DISPLAY_STYLE_KEY)
			.description("Widget for selecting terms on the preference form: 'checkboxes' or 'select'")
			.default(SettingValue::String(DisplayStyle::Checkboxes.as_str().into()))
			.permission(PermissionLevel::Admin)
			.validator(|v| {
				if let SettingValue::String(s) = v {
					if DisplayStyle::parse(s).is_some() {
						return Ok(());
					}
				}
				Err(Error::ValidationError(
					"Display style must be 'checkboxes' or 'select'".into(),
				))
			})
			.build()?,
	)?;

	Ok(())
}


// vim: ts=4
