//! Vocabulary management

use sqlx::{Row, SqlitePool};

use content_filter_types::prelude::*;
use content_filter_types::taxonomy_adapter::VocabularyInfo;

/// List all vocabularies ordered by weight, then name
pub(crate) async fn list(db: &SqlitePool) -> CfResult<Vec<VocabularyInfo>> {
	let rows = sqlx::query("SELECT vid, name, description FROM vocabularies ORDER BY weight, name")
		.fetch_all(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(rows
		.iter()
		.map(|row| VocabularyInfo {
			vid: row.get("vid"),
			name: row.get("name"),
			description: row.get("description"),
		})
		.collect())
}

/// Read a single vocabulary by id
pub(crate) async fn read(db: &SqlitePool, vid: &str) -> CfResult<Option<VocabularyInfo>> {
	let row = sqlx::query("SELECT vid, name, description FROM vocabularies WHERE vid = ?")
		.bind(vid)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| VocabularyInfo {
		vid: r.get("vid"),
		name: r.get("name"),
		description: r.get("description"),
	}))
}

/// Create a vocabulary
pub(crate) async fn create(
	db: &SqlitePool,
	vid: &str,
	name: &str,
	description: Option<&str>,
) -> CfResult<()> {
	sqlx::query("INSERT INTO vocabularies (vid, name, description) VALUES (?, ?, ?)")
		.bind(vid)
		.bind(name)
		.bind(description)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
