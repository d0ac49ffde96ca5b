//! Read-only seam to the platform's taxonomy service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::error::CfResult;
use crate::types::TermId;

/// A vocabulary as listed by the taxonomy service.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyInfo {
	pub vid: String,
	pub name: String,
	pub description: Option<String>,
}

/// One node of a vocabulary's term tree, as produced by `read_term_tree`:
/// already flattened depth-first, with `depth` counting from 0 at the root
/// level.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermNode {
	pub term_id: TermId,
	pub name: String,
	pub depth: u32,
	pub description: Option<String>,
}

#[async_trait]
pub trait TaxonomyAdapter: Debug + Send + Sync {
	async fn list_vocabularies(&self) -> CfResult<Vec<VocabularyInfo>>;

	/// Returns `None` for an unknown vocabulary id.
	async fn read_vocabulary(&self, vid: &str) -> CfResult<Option<VocabularyInfo>>;

	/// Full term tree of a vocabulary, ordered depth-first with parents
	/// before children. An unknown vocabulary yields an empty list.
	async fn read_term_tree(&self, vid: &str) -> CfResult<Vec<TermNode>>;
}

// vim: ts=4
