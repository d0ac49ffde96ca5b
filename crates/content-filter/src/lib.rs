//! Content Filter lets an administrator pick one taxonomy vocabulary as an
//! access-control dimension, and lets each user choose which categories of
//! that vocabulary they want to see. Content tagged outside a user's
//! selection is hidden from listings by the platform's node-access rules.
//!
//! # Surfaces
//!
//! - an admin settings form (vocabulary, widget style, optional immediate
//!   node-access rebuild)
//! - a per-user preference form, rendered as an embeddable block
//!
//! Everything else — taxonomy storage, user-data persistence, the access
//! rebuild itself — is reached through adapter traits.

#![forbid(unsafe_code)]

pub mod admin;
pub mod app;
pub mod block;
pub mod preference;
pub mod prelude;
pub mod routes;
pub mod scheme;
pub mod settings;

pub use crate::app::AppBuilder;

// vim: ts=4
