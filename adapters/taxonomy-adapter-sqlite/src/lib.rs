//! SQLite implementation of the taxonomy read API
//!
//! Vocabularies and their parent-linked terms live in two tables;
//! `read_term_tree` flattens a vocabulary's terms into the depth-first,
//! depth-annotated order the preference form consumes. The adapter also
//! exposes inherent provisioning methods for seeding; the trait surface
//! itself stays read-only.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use content_filter_types::prelude::*;
use content_filter_types::taxonomy_adapter::{TaxonomyAdapter, TermNode, VocabularyInfo};

mod schema;
mod term;
mod vocabulary;

use schema::init_db;

#[derive(Debug)]
pub struct TaxonomyAdapterSqlite {
	db: SqlitePool,
}

impl TaxonomyAdapterSqlite {
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

	/// Create a vocabulary. Fails on a duplicate id.
	pub async fn create_vocabulary(
		&self,
		vid: &str,
		name: &str,
		description: Option<&str>,
	) -> CfResult<()> {
		vocabulary::create(&self.db, vid, name, description).await
	}

	/// Create a term under `parent` (or at the root level for `None`).
	pub async fn create_term(
		&self,
		vid: &str,
		parent: Option<TermId>,
		name: &str,
		description: Option<&str>,
	) -> CfResult<TermId> {
		term::create(&self.db, vid, parent, name, description).await
	}
}

#[async_trait]
impl TaxonomyAdapter for TaxonomyAdapterSqlite {
	async fn list_vocabularies(&self) -> CfResult<Vec<VocabularyInfo>> {
		vocabulary::list(&self.db).await
	}

	async fn read_vocabulary(&self, vid: &str) -> CfResult<Option<VocabularyInfo>> {
		vocabulary::read(&self.db, vid).await
	}

	async fn read_term_tree(&self, vid: &str) -> CfResult<Vec<TermNode>> {
		term::tree(&self.db, vid).await
	}
}

// vim: ts=4
