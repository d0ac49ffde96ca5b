//! SQLite implementation of the Content Filter storage seam
//!
//! One database file holds both stores the module writes to: the global
//! settings table and the per-user data table.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::{collections::HashMap, path::Path};

use content_filter_types::meta_adapter::MetaAdapter;
use content_filter_types::prelude::*;

mod schema;
mod setting;
mod user_data;

use schema::init_db;

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> CfResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(|err| warn!("DB: {:#?}", err)).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// Global settings
	//*****************
	async fn read_setting(&self, key: &str) -> CfResult<Option<serde_json::Value>> {
		setting::read(&self.db, key).await
	}

	async fn update_setting(&self, key: &str, value: Option<serde_json::Value>) -> CfResult<()> {
		setting::update(&self.db, key, value).await
	}

	async fn list_settings(
		&self,
		prefix: Option<&str>,
	) -> CfResult<HashMap<String, serde_json::Value>> {
		setting::list(&self.db, prefix).await
	}

	// Per-user data
	//***************
	async fn read_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
	) -> CfResult<Option<serde_json::Value>> {
		user_data::read(&self.db, user_id, module, name).await
	}

	async fn update_user_data(
		&self,
		user_id: UserId,
		module: &str,
		name: &str,
		value: Option<serde_json::Value>,
	) -> CfResult<()> {
		user_data::update(&self.db, user_id, module, name, value).await
	}
}

// vim: ts=4
