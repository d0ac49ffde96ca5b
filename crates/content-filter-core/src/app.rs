//! App state type

use std::sync::Arc;

use content_filter_types::access_adapter::AccessAdapter;
use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::taxonomy_adapter::TaxonomyAdapter;

use crate::settings::service::SettingsService;
use crate::settings::types::FrozenSettingsRegistry;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub meta_adapter: Arc<dyn MetaAdapter>,
	pub taxonomy_adapter: Arc<dyn TaxonomyAdapter>,
	pub access_adapter: Arc<dyn AccessAdapter>,

	// Settings subsystem
	pub settings: Arc<SettingsService>,
	pub settings_registry: Arc<FrozenSettingsRegistry>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub meta_adapter: Option<Arc<dyn MetaAdapter>>,
	pub taxonomy_adapter: Option<Arc<dyn TaxonomyAdapter>>,
	pub access_adapter: Option<Arc<dyn AccessAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

// vim: ts=4
