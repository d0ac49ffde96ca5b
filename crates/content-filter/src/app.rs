//! App builder - constructs and runs the content-filter application

use axum::Router;
use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
use content_filter_core::app::{Adapters, AppBuilderOpts, AppState, VERSION};
use content_filter_core::settings::{SettingsRegistry, SettingsService};
use content_filter_types::access_adapter::AccessAdapter;
use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::taxonomy_adapter::TaxonomyAdapter;

const SETTINGS_CACHE_SIZE: usize = 100;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			adapters: Adapters {
				meta_adapter: None,
				taxonomy_adapter: None,
				access_adapter: None,
			},
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn meta_adapter(&mut self, meta_adapter: Arc<dyn MetaAdapter>) -> &mut Self {
		self.adapters.meta_adapter = Some(meta_adapter);
		self
	}
	pub fn taxonomy_adapter(&mut self, taxonomy_adapter: Arc<dyn TaxonomyAdapter>) -> &mut Self {
		self.adapters.taxonomy_adapter = Some(taxonomy_adapter);
		self
	}
	pub fn access_adapter(&mut self, access_adapter: Arc<dyn AccessAdapter>) -> &mut Self {
		self.adapters.access_adapter = Some(access_adapter);
		self
	}

	/// Assemble the app state and router without serving.
	pub async fn build(self) -> CfResult<(App, Router)> {
		let Some(meta_adapter) = self.adapters.meta_adapter else {
			error!("FATAL: No meta adapter configured");
			return Err(Error::Internal("No meta adapter configured".to_string()));
		};
		let Some(taxonomy_adapter) = self.adapters.taxonomy_adapter else {
			error!("FATAL: No taxonomy adapter configured");
			return Err(Error::Internal("No taxonomy adapter configured".to_string()));
		};
		let Some(access_adapter) = self.adapters.access_adapter else {
			error!("FATAL: No access adapter configured");
			return Err(Error::Internal("No access adapter configured".to_string()));
		};

		// Initialize settings registry and service
		let mut settings_registry = SettingsRegistry::new();
		crate::settings::register_settings(&mut settings_registry)?;
		info!("Registered {} settings", settings_registry.len());

		let frozen_registry = Arc::new(settings_registry.freeze());
		let settings_service = Arc::new(SettingsService::new(
			frozen_registry.clone(),
			meta_adapter.clone(),
			SETTINGS_CACHE_SIZE,
		));
		settings_service.validate_required_settings().await?;
		info!("Settings subsystem initialized and validated");

		let state = Arc::new(AppState {
			opts: self.opts,
			meta_adapter,
			taxonomy_adapter,
			access_adapter,
			settings: settings_service,
			settings_registry: frozen_registry,
		});
		let router = routes::init(state.clone());

		Ok((state, router))
	}

	pub async fn run(self) -> CfResult<()> {
		info!("Content Filter v{}", VERSION);

		let (app, router) = self.build().await?;

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

// vim: ts=4
