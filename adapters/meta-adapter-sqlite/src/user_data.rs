//! Per-user keyed data storage
//!
//! Rows are keyed by (user, module, name); the module string namespaces
//! keys between features. Values are JSON, and storing `None` deletes
//! the row.

use sqlx::{Row, SqlitePool};

use content_filter_types::prelude::*;

/// Read one user-data value
pub(crate) async fn read(
	db: &SqlitePool,
	user_id: UserId,
	module: &str,
	name: &str,
) -> CfResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM user_data WHERE user_id = ? AND module = ? AND name = ?")
		.bind(user_id.0)
		.bind(module)
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Update or create one user-data value (upserts, refreshes updated_at)
pub(crate) async fn update(
	db: &SqlitePool,
	user_id: UserId,
	module: &str,
	name: &str,
	value: Option<serde_json::Value>,
) -> CfResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query(
			"INSERT INTO user_data (user_id, module, name, value, updated_at)
			 VALUES (?, ?, ?, ?, unixepoch())
			 ON CONFLICT (user_id, module, name) DO UPDATE SET
			 value = excluded.value,
			 updated_at = unixepoch()",
		)
		.bind(user_id.0)
		.bind(module)
		.bind(name)
		.bind(value_str)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;
	} else {
		sqlx::query("DELETE FROM user_data WHERE user_id = ? AND module = ? AND name = ?")
			.bind(user_id.0)
			.bind(module)
			.bind(name)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
