//! In-memory adapter fakes and app construction
//!
//! The fakes keep everything in maps behind mutexes so tests can inspect
//! stored state directly; the access adapter records each trigger call.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use content_filter::settings::register_settings;
use content_filter_core::app::{App, AppBuilderOpts, AppState};
use content_filter_core::settings::{SettingsRegistry, SettingsService};
use content_filter_types::access_adapter::AccessAdapter;
use content_filter_types::error::CfResult;
use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::taxonomy_adapter::{TaxonomyAdapter, TermNode, VocabularyInfo};
use content_filter_types::types::UserId;

#[derive(Debug, Default)]
pub struct MemoryMetaAdapter {
	settings: Mutex<HashMap<String, serde_json::Value>>,
	user_data: Mutex<HashMap<(u32, String, String), serde_json::Value>>,
}

#[async_trait]
impl MetaAdapter for MemoryMetaAdapter {
	async fn read_setting(&self, key: &str) -> CfResult<Option<serde_json::Value>> {
		Ok(self.settings.lock().expect("poisoned").get(key).cloned())
	}

	async fn update_setting(&self, key: &str, value: Option<serde_json::Value>) -> CfResult<()> {
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
		prefix: Option<&str>,
	) -> CfResult<HashMap<String, serde_json::Value>> {
		let settings = self.settings.lock().expect("poisoned");
		Ok(settings
			.iter()
			.filter(|(key, _)| prefix.is_none_or(|p| key.starts_with(p)))
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect())
	}

	async fn read_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
	) -> CfResult<Option<serde_json::Value>> {
		let user_data = self.user_data.lock().expect("poisoned");
		Ok(user_data.get(&(user_id.0, module.to_string(), name.to_string())).cloned())
	}

	async fn update_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
		value: Option<serde_json::Value>,
	) -> CfResult<()> {
		let mut user_data = self.user_data.lock().expect("poisoned");
		let key = (user_id.0, module.to_string(), name.to_string());
		match value {
			Some(value) => {
				user_data.insert(key, value);
			}
			None => {
				user_data.remove(&key);
			}
		}
		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct StaticTaxonomyAdapter {
	pub vocabularies: Vec<VocabularyInfo>,
	pub trees: HashMap<String, Vec<TermNode>>,
}

#[async_trait]
impl TaxonomyAdapter for StaticTaxonomyAdapter {
	async fn list_vocabularies(&self) -> CfResult<Vec<VocabularyInfo>> {
		Ok(self.vocabularies.clone())
	}

	async fn read_vocabulary(&self, vid: &str) -> CfResult<Option<VocabularyInfo>> {
		Ok(self.vocabularies.iter().find(|v| v.vid == vid).cloned())
	}

	async fn read_term_tree(&self, vid: &str) -> CfResult<Vec<TermNode>> {
		Ok(self.trees.get(vid).cloned().unwrap_or_default())
	}
}

#[derive(Debug, Default)]
pub struct RecordingAccessAdapter {
	pub node_access_rebuilds: Mutex<Vec<bool>>,
	pub route_rebuilds: Mutex<u32>,
}

#[async_trait]
impl AccessAdapter for RecordingAccessAdapter {
	async fn rebuild_node_access(&self, force: bool) -> CfResult<()> {
		self.node_access_rebuilds.lock().expect("poisoned").push(force);
		Ok(())
	}

	async fn rebuild_routes(&self) -> CfResult<()> {
		*self.route_rebuilds.lock().expect("poisoned") += 1;
		Ok(())
	}
}

pub struct TestApp {
	pub app: App,
	pub meta: Arc<MemoryMetaAdapter>,
	pub access: Arc<RecordingAccessAdapter>,
}

/// Build an app over in-memory adapters with the given taxonomy content.
pub fn build_app(taxonomy: StaticTaxonomyAdapter) -> TestApp {
	let meta = Arc::new(MemoryMetaAdapter::default());
	let access = Arc::new(RecordingAccessAdapter::default());

	let mut registry = SettingsRegistry::new();
	register_settings(&mut registry).expect("settings registration failed");
	let frozen = Arc::new(registry.freeze());
	let settings = Arc::new(SettingsService::new(frozen.clone(), meta.clone(), 100));

	let app = Arc::new(AppState {
		opts: AppBuilderOpts { listen: "127.0.0.1:0".into() },
		meta_adapter: meta.clone(),
		taxonomy_adapter: Arc::new(taxonomy),
		access_adapter: access.clone(),
		settings,
		settings_registry: frozen,
	});

	TestApp { app, meta, access }
}

// vim: ts=4
