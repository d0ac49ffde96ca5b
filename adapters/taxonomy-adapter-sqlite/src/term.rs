//! Term storage and tree flattening
//!
//! Terms are stored parent-linked; `tree` turns one vocabulary's terms
//! into the flattened pre-order listing with depth annotations that the
//! trait contract promises. Siblings keep their stored weight-then-name
//! order.

use sqlx::{Row, SqlitePool};
use std::collections::{HashMap, HashSet};

use content_filter_types::prelude::*;
use content_filter_types::taxonomy_adapter::TermNode;

struct TermRow {
	term_id: i64,
	parent_id: i64,
	name: String,
	description: Option<String>,
}

/// Full term tree of a vocabulary, flattened depth-first
pub(crate) async fn tree(db: &SqlitePool, vid: &str) -> CfResult<Vec<TermNode>> {
	let rows = sqlx::query(
		"SELECT term_id, parent_id, name, description FROM terms WHERE vid = ? ORDER BY weight, name",
	)
	.bind(vid)
	.fetch_all(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	let terms: Vec<TermRow> = rows
		.iter()
		.map(|row| TermRow {
			term_id: row.get("term_id"),
			parent_id: row.get("parent_id"),
			name: row.get("name"),
			description: row.get("description"),
		})
		.collect();

	// Children indices per parent, in stored sibling order
	let mut children: HashMap<i64, Vec<usize>> = HashMap::new();
	for (idx, term) in terms.iter().enumerate() {
		children.entry(term.parent_id).or_default().push(idx);
	}

	// Iterative pre-order walk from the root level, tracking depth.
	// Terms whose parent chain never reaches the root (orphans, cycles)
	// are left out.
	let mut flattened = Vec::with_capacity(terms.len());
	let mut seen: HashSet<i64> = HashSet::new();
	let mut stack: Vec<(usize, u32)> = children
		.get(&0)
		.map(|roots| roots.iter().rev().map(|&idx| (idx, 0)).collect())
		.unwrap_or_default();

	while let Some((idx, depth)) = stack.pop() {
		let term = &terms[idx];
		if !seen.insert(term.term_id) {
			continue;
		}
		flattened.push(TermNode {
			term_id: TermId(term.term_id),
			name: term.name.clone(),
			depth,
			description: term.description.clone(),
		});
		if let Some(kids) = children.get(&term.term_id) {
			for &kid in kids.iter().rev() {
				stack.push((kid, depth + 1));
			}
		}
	}

	Ok(flattened)
}

/// Create a term; `parent` = None places it at the root level
pub(crate) async fn create(
	db: &SqlitePool,
	vid: &str,
	parent: Option<TermId>,
	name: &str,
	description: Option<&str>,
) -> CfResult<TermId> {
	let parent_id = parent.map_or(0, |p| p.0);
	let row = sqlx::query(
		"INSERT INTO terms (vid, parent_id, name, description) VALUES (?, ?, ?, ?)
		 RETURNING term_id",
	)
	.bind(vid)
	.bind(parent_id)
	.bind(name)
	.bind(description)
	.fetch_one(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	let term_id: i64 = row.try_get("term_id").map_err(|_| Error::DbError)?;
	Ok(TermId(term_id))
}

// vim: ts=4
