use std::{env, fs, path::PathBuf, sync::Arc};

use content_filter::AppBuilder;
use content_filter_meta_adapter_sqlite::MetaAdapterSqlite;
use content_filter_taxonomy_adapter_sqlite::TaxonomyAdapterSqlite;
use content_filter_types::error::CfResult;

mod access;

use access::LogAccessAdapter;

pub struct Config {
	pub db_dir: PathBuf,
	pub listen: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> CfResult<()> {
	let config = Config {
		db_dir: PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
		listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
	};
	fs::create_dir_all(&config.db_dir)?;

	let meta_adapter = Arc::new(MetaAdapterSqlite::new(config.db_dir.join("meta.db")).await?);
	let taxonomy_adapter =
		Arc::new(TaxonomyAdapterSqlite::new(config.db_dir.join("taxonomy.db")).await?);

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.meta_adapter(meta_adapter)
		.taxonomy_adapter(taxonomy_adapter)
		.access_adapter(Arc::new(LogAccessAdapter));
	builder.run().await
}

// vim: ts=4
