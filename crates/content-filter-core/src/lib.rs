//! Core infrastructure for the Content Filter module: application state,
//! the settings subsystem, typed form view-models, and request extractors.

pub mod app;
pub mod extract;
pub mod form;
pub mod prelude;
pub mod route_auth;
pub mod settings;

pub use app::{Adapters, App, AppBuilderOpts, AppState, VERSION};

// vim: ts=4
