//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Vocabularies
	//**************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vocabularies (
			vid text NOT NULL,
			name text NOT NULL,
			description text,
			weight integer NOT NULL DEFAULT 0,
			PRIMARY KEY(vid)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Terms
	//*******
	// parent_id = 0 marks a root-level term
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS terms (
			term_id integer PRIMARY KEY AUTOINCREMENT,
			vid text NOT NULL,
			parent_id integer NOT NULL DEFAULT 0,
			name text NOT NULL,
			description text,
			weight integer NOT NULL DEFAULT 0
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("CREATE INDEX IF NOT EXISTS idx_terms_vid ON terms(vid, parent_id)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
