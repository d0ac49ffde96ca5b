//! Settings service with caching, validation, and permission checks

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use content_filter_types::error::{CfResult, Error};
use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::types::Timestamp;

use super::types::{FrozenSettingsRegistry, Setting, SettingValue};

const FALLBACK_CACHE_CAPACITY: usize = 100;

/// LRU cache for settings values
pub struct SettingsCache {
	cache: Arc<parking_lot::RwLock<LruCache<String, SettingValue>>>,
}

impl SettingsCache {
	pub fn new(capacity: usize) -> Self {
		let non_zero = NonZeroUsize::new(capacity)
			.or(NonZeroUsize::new(FALLBACK_CACHE_CAPACITY))
			.unwrap_or(NonZeroUsize::MIN);
		Self { cache: Arc::new(parking_lot::RwLock::new(LruCache::new(non_zero))) }
	}

	pub fn get(&self, key: &str) -> Option<SettingValue> {
		let mut cache = self.cache.write();
		cache.get(key).cloned()
	}

	pub fn put(&self, key: String, value: SettingValue) {
		let mut cache = self.cache.write();
		cache.put(key, value);
	}

	/// Invalidate all cached settings
	pub fn clear(&self) {
		let mut cache = self.cache.write();
		cache.clear();
	}
}

/// Settings service - main interface for accessing and managing settings
pub struct SettingsService {
	registry: Arc<FrozenSettingsRegistry>,
	cache: SettingsCache,
	meta: Arc<dyn MetaAdapter>,
}

impl SettingsService {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		meta: Arc<dyn MetaAdapter>,
		cache_size: usize,
	) -> Self {
		Self { registry, cache: SettingsCache::new(cache_size), meta }
	}

	/// Get setting value with full resolution (stored value -> default)
	pub async fn get(&self, key: &str) -> CfResult<SettingValue> {
		// Check cache
		if let Some(value) = self.cache.get(key) {
			debug!("Setting cache hit: {}", key);
			return Ok(value);
		}

		// Get definition
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		// Try stored setting
		if let Some(json_value) = self.meta.read_setting(key).await? {
			let value = serde_json::from_value::<SettingValue>(json_value)
				.map_err(|e| Error::ValidationError(format!("Invalid setting value: {}", e)))?;
			self.cache.put(key.to_string(), value.clone());
			return Ok(value);
		}

		// Use default (or error if no default)
		match &def.default {
			Some(default) => {
				let value = default.clone();
				self.cache.put(key.to_string(), value.clone());
				Ok(value)
			}
			None => Err(Error::ValidationError(format!(
				"Setting '{}' has no default and must be configured",
				key
			))),
		}
	}

	/// Set setting value with validation and permission checks
	/// The `roles` parameter should be the authenticated user's roles
	pub async fn set<S: AsRef<str>>(
		&self,
		key: &str,
		value: SettingValue,
		roles: &[S],
	) -> CfResult<Setting> {
		// Get definition
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		// Check permission level
		if !def.permission.check(roles) {
			warn!("Permission denied for setting '{}': requires {:?}", key, def.permission);
			return Err(Error::PermissionDenied);
		}

		// Validate type matches definition (if default exists)
		if let Some(default) = &def.default {
			if !value.matches_type(default) {
				return Err(Error::ValidationError(format!(
					"Type mismatch for setting '{}': expected {}, got {}",
					key,
					default.type_name(),
					value.type_name()
				)));
			}
		}

		// Run custom validator if present
		if let Some(validator) = &def.validator {
			validator(&value)?;
		}

		// Convert to JSON and save to the store
		let json_value = serde_json::to_value(&value)
			.map_err(|e| Error::ValidationError(format!("Failed to serialize setting: {}", e)))?;
		self.meta.update_setting(key, Some(json_value)).await?;

		// Invalidate cache
		self.cache.clear();

		info!("Setting '{}' updated", key);

		Ok(Setting { key: key.to_string(), value, updated_at: Timestamp::now() })
	}

	/// Delete a setting (falls back to the default)
	pub async fn delete(&self, key: &str) -> CfResult<bool> {
		self.meta.update_setting(key, None).await?;
		self.cache.clear();

		info!("Setting '{}' deleted", key);
		Ok(true)
	}

	/// Validate that all required settings (no default and not optional)
	/// are configured
	pub async fn validate_required_settings(&self) -> CfResult<()> {
		for def in self.registry.list() {
			if def.optional || def.default.is_some() {
				continue;
			}

			if self.meta.read_setting(&def.key).await?.is_none() {
				return Err(Error::ValidationError(format!(
					"Required setting '{}' is not configured",
					def.key
				)));
			}
		}
		Ok(())
	}

	/// Type-safe getter (required - returns error if not found)
	pub async fn get_string(&self, key: &str) -> CfResult<String> {
		match self.get(key).await? {
			SettingValue::String(s) => Ok(s),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not a string, got {}",
				key,
				v.type_name()
			))),
		}
	}

	/// Type-safe optional getter (returns None if not configured and
	/// without a default). Still returns an error on a type mismatch.
	pub async fn get_string_opt(&self, key: &str) -> CfResult<Option<String>> {
		match self.get(key).await {
			Ok(SettingValue::String(s)) => Ok(Some(s)),
			Ok(v) => Err(Error::ValidationError(format!(
				"Setting '{}' is not a string, got {}",
				key,
				v.type_name()
			))),
			Err(Error::ValidationError(msg)) if msg.contains("has no default") => Ok(None),
			Err(Error::ValidationError(msg)) if msg.contains("Unknown setting") => Ok(None),
			Err(e) => Err(e),
		}
	}

	/// Get reference to registry (for listing all settings)
	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
	use super::*;
	use crate::settings::types::{PermissionLevel, SettingDefinition, SettingsRegistry};
	use async_trait::async_trait;
	use content_filter_types::meta_adapter::MetaAdapter;
	use content_filter_types::types::UserId;
	use std::collections::HashMap;
	use std::sync::Mutex;

	#[derive(Debug, Default)]
	struct MemoryMeta {
		settings: Mutex<HashMap<String, serde_json::Value>>,
	}

	#[async_trait]
	impl MetaAdapter for MemoryMeta {
		async fn read_setting(&self, key: &str) -> CfResult<Option<serde_json::Value>> {
			Ok(self.settings.lock().expect("poisoned").get(key).cloned())
		}

		async fn update_setting(
			&self,
			key: &str,
			value: Option<serde_json::Value>,
		) -> CfResult<()> {
			let mut settings = self.settings.lock().expect("poisoned");
			match value {
				Some(value) => {
					settings.insert(key.to_string(), value);
				}
				None => {
					settings.remove(key);
				}
			}
			Ok(())
		}

		async fn list_settings(
			&self,
			_prefix: Option<&str>,
		) -> CfResult<HashMap<String, serde_json::Value>> {
			Ok(self.settings.lock().expect("poisoned").clone())
		}

		async fn read_user_data(
			&self,
			_user_id: UserId,
			_module: &str,
			_name: &str,
		) -> CfResult<Option<serde_json::Value>> {
			Ok(None)
		}

		async fn update_user_data(
			&self,
			_user_id: UserId,
			_module: &str,
			_name: &str,
			_value: Option<serde_json::Value>,
		) -> CfResult<()> {
			Ok(())
		}
	}

	fn service() -> SettingsService {
		let mut registry = SettingsRegistry::new();
		registry
			.register(
				SettingDefinition::builder("test.widget")
					.description("widget style")
					.default(SettingValue::String("checkboxes".into()))
					.validator(|v| match v {
						SettingValue::String(s) if s == "checkboxes" || s == "select" => Ok(()),
						_ => Err(Error::ValidationError("unknown widget".into())),
					})
					.build()
					.unwrap(),
			)
			.unwrap();
		registry
			.register(
				SettingDefinition::builder("test.vocabulary")
					.description("vocabulary id")
					.permission(PermissionLevel::Admin)
					.optional(true)
					.build()
					.unwrap(),
			)
			.unwrap();
		let frozen = Arc::new(registry.freeze());
		SettingsService::new(frozen, Arc::new(MemoryMeta::default()), 10)
	}

	#[tokio::test]
	async fn get_falls_back_to_the_default() {
		let service = service();
		let value = service.get_string("test.widget").await.unwrap();
		assert_eq!(value, "checkboxes");
	}

	#[tokio::test]
	async fn set_then_get_round_trips() {
		let service = service();
		service
			.set("test.vocabulary", SettingValue::String("genres".into()), &["ADMN"])
			.await
			.unwrap();
		let value = service.get_string_opt("test.vocabulary").await.unwrap();
		assert_eq!(value, Some("genres".to_string()));
	}

	#[tokio::test]
	async fn unconfigured_optional_setting_reads_as_none() {
		let service = service();
		let value = service.get_string_opt("test.vocabulary").await.unwrap();
		assert_eq!(value, None);
	}

	#[tokio::test]
	async fn set_rejects_missing_admin_role() {
		let service = service();
		let res = service
			.set("test.vocabulary", SettingValue::String("genres".into()), &["USER"])
			.await;
		assert!(matches!(res, Err(Error::PermissionDenied)));
	}

	#[tokio::test]
	async fn set_runs_the_validator() {
		let service = service();
		let res = service.set("test.widget", SettingValue::String("radios".into()), &["ADMN"]).await;
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn set_rejects_type_mismatches() {
		let service = service();
		let res = service.set("test.widget", SettingValue::Bool(true), &["ADMN"]).await;
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn delete_restores_the_default() {
		let service = service();
		service.set("test.widget", SettingValue::String("select".into()), &["ADMN"]).await.unwrap();
		service.delete("test.widget").await.unwrap();
		let value = service.get_string("test.widget").await.unwrap();
		assert_eq!(value, "checkboxes");
	}
}

// vim: ts=4
