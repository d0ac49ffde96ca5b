//! Platform key-value storage seam.
//!
//! Covers the two stores the module writes to: the global settings store
//! and the per-user keyed data store. Values are JSON; storing `None`
//! deletes the entry.

use async_trait::async_trait;
use std::{collections::HashMap, fmt::Debug};

use crate::error::CfResult;
use crate::types::UserId;

#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	/// # Global settings
	async fn read_setting(&self, key: &str) -> CfResult<Option<serde_json::Value>>;
	async fn update_setting(&self, key: &str, value: Option<serde_json::Value>) -> CfResult<()>;
	async fn list_settings(
		&self,
		prefix: Option<&str>,
	) -> CfResult<HashMap<String, serde_json::Value>>;

	/// # Per-user data
	/// Keyed by (user, module, name), mirroring the platform's user-data
	/// service. The module string namespaces keys between features.
	async fn read_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
	) -> CfResult<Option<serde_json::Value>>;
	async fn update_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
		value: Option<serde_json::Value>,
	) -> CfResult<()>;
}

// vim: ts=4
