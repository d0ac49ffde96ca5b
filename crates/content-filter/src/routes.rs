use axum::{
	Router, middleware,
	routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::{admin, block, preference};
use content_filter_core::app::App;
use content_filter_core::route_auth::{optional_auth, require_auth};

pub fn init(app: App) -> Router {
	let admin_router = Router::new()
		.route(
			"/api/admin/content-filter",
			get(admin::get_admin_settings).put(admin::update_admin_settings),
		)
		.layer(middleware::from_fn(require_auth));

	let public_router = Router::new()
		.route("/api/content-filter/block", get(block::get_block))
		.route("/api/content-filter/preferences", put(preference::update_preferences));

	Router::new()
		.merge(public_router)
		.merge(admin_router)
		.layer(middleware::from_fn(optional_auth))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
