//! Reusable taxonomy fixtures

use std::collections::HashMap;

use content_filter_types::taxonomy_adapter::{TermNode, VocabularyInfo};
use content_filter_types::types::TermId;

use super::adapters::StaticTaxonomyAdapter;

pub fn term(id: i64, name: &str, depth: u32) -> TermNode {
	TermNode { term_id: TermId(id), name: name.to_string(), depth, description: None }
}

/// "Genres" vocabulary with a two-level tree, already flattened the way a
/// taxonomy adapter would hand it out:
///
/// Action / Car chase, Heist; Comedy / Romantic comedy
pub fn genres_taxonomy() -> StaticTaxonomyAdapter {
	let vocabulary = VocabularyInfo {
		vid: "genres".to_string(),
		name: "Genres".to_string(),
		description: Some("Film genres".to_string()),
	};
	let tree = vec![
		term(1, "Action", 0),
		term(4, "Car chase", 1),
		term(5, "Heist", 1),
		term(2, "Comedy", 0),
		term(3, "Romantic comedy", 1),
	];

	StaticTaxonomyAdapter {
		vocabularies: vec![vocabulary],
		trees: HashMap::from([("genres".to_string(), tree)]),
	}
}

/// Two vocabularies; "topics" has terms, "genres" stays empty.
pub fn two_vocabulary_taxonomy() -> StaticTaxonomyAdapter {
	let mut taxonomy = genres_taxonomy();
	taxonomy.vocabularies.push(VocabularyInfo {
		vid: "topics".to_string(),
		name: "Topics".to_string(),
		description: None,
	});
	taxonomy
		.trees
		.insert("topics".to_string(), vec![term(10, "Science", 0), term(11, "Sports", 0)]);
	taxonomy
}

/// A configured vocabulary whose term tree is empty.
pub fn empty_tree_taxonomy() -> StaticTaxonomyAdapter {
	StaticTaxonomyAdapter {
		vocabularies: vec![VocabularyInfo {
			vid: "genres".to_string(),
			name: "Genres".to_string(),
			description: None,
		}],
		trees: HashMap::new(),
	}
}

// vim: ts=4
