//! Database schema initialization
//!
//! Creates the settings and user-data tables if they do not exist yet.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Global settings
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			name text NOT NULL,
			value text,
			updated_at datetime DEFAULT (unixepoch()),
			PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Per-user data
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_data (
			user_id integer NOT NULL,
			module text NOT NULL,
			name text NOT NULL,
			value text,
			updated_at datetime DEFAULT (unixepoch()),
			PRIMARY KEY(user_id, module, name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_data_module ON user_data(module, name)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
