use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A node in the prefix trie backing the Markov model.
///
/// The first `prefix_size - 1` levels are `Branch` nodes mapping a single
/// word to the next level; the final level maps a word to a `Leaf` holding
/// the successor words observed after the full prefix. Duplicates in a leaf
/// are preserved, occurrence count encodes empirical frequency.
///
/// Serialized untagged: branches render as JSON objects, leaves as arrays.
///
/// # Invariants
/// - Under well-formed building every leaf is non-empty and sits at a
///   uniform depth of `prefix_size`.
/// - Deserialized trees are accepted without shape checks; violations
///   surface during generation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub(crate) enum TrieNode {
	/// Intermediate level: one prefix word to its child level.
	Branch(HashMap<String, TrieNode>),
	/// Final level: successor words, duplicates preserved.
	Leaf(Vec<String>),
}

impl Default for TrieNode {
	fn default() -> Self {
		Self::Branch(HashMap::new())
	}
}

impl TrieNode {
	/// Records `next_word` as a successor of the full `prefix`.
	///
	/// Intermediate branches are created on demand, never overwritten.
	/// Shape conflicts (a leaf found where a branch is needed, or the other
	/// way round) can only come from a foreign deserialized tree; they are
	/// skipped silently and surface at generation time.
	pub(crate) fn push_successor(&mut self, prefix: &[String], next_word: &str) {
		let Some((last, inner)) = prefix.split_last() else {
			return;
		};

		let mut node = self;
		for word in inner {
			match node {
				TrieNode::Branch(children) => {
					node = children.entry(word.to_owned()).or_default();
				}
				TrieNode::Leaf(_) => return,
			}
		}

		if let TrieNode::Branch(children) = node {
			let entry = children
				.entry(last.to_owned())
				.or_insert_with(|| TrieNode::Leaf(Vec::new()));
			if let TrieNode::Leaf(successors) = entry {
				successors.push(next_word.to_owned());
			}
		}
	}

	/// Follows `path` one branch level per word.
	///
	/// Returns `None` if a word is unknown or a leaf cuts the path short.
	pub(crate) fn descend(&self, path: &[String]) -> Option<&TrieNode> {
		let mut node = self;
		for word in path {
			match node {
				TrieNode::Branch(children) => node = children.get(word)?,
				TrieNode::Leaf(_) => return None,
			}
		}
		Some(node)
	}

	/// Keys available at this level, `None` on a leaf.
	pub(crate) fn keys(&self) -> Option<impl Iterator<Item = &String>> {
		match self {
			TrieNode::Branch(children) => Some(children.keys()),
			TrieNode::Leaf(_) => None,
		}
	}

	/// The successor list recorded under the full `prefix`, if any.
	pub(crate) fn successors(&self, prefix: &[String]) -> Option<&[String]> {
		match self.descend(prefix)? {
			TrieNode::Leaf(successors) => Some(successors),
			TrieNode::Branch(_) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::TrieNode;

	fn words(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|t| (*t).to_owned()).collect()
	}

	#[test]
	fn push_creates_levels_on_demand() {
		let mut root = TrieNode::default();
		root.push_successor(&words(&["the", "lazy"]), "dog.");

		assert_eq!(root.successors(&words(&["the", "lazy"])), Some(&["dog.".to_owned()][..]));
		assert!(root.descend(&words(&["the"])).is_some());
		assert!(root.descend(&words(&["lazy"])).is_none());
	}

	#[test]
	fn duplicates_are_preserved_in_order() {
		let mut root = TrieNode::default();
		root.push_successor(&words(&["the"]), "dog.");
		root.push_successor(&words(&["the"]), "cat.");
		root.push_successor(&words(&["the"]), "dog.");

		assert_eq!(
			root.successors(&words(&["the"])),
			Some(&["dog.".to_owned(), "cat.".to_owned(), "dog.".to_owned()][..])
		);
	}

	#[test]
	fn push_skips_shape_conflicts() {
		let mut root = TrieNode::default();
		root.push_successor(&words(&["the"]), "dog.");
		// "the" now holds a leaf; a deeper insert through it has nowhere to go
		root.push_successor(&words(&["the", "lazy"]), "dog.");

		assert_eq!(root.successors(&words(&["the"])), Some(&["dog.".to_owned()][..]));
		assert!(root.successors(&words(&["the", "lazy"])).is_none());
	}

	#[test]
	fn untagged_serialization_shape() {
		let mut root = TrieNode::default();
		root.push_successor(&words(&["The"]), "quick");
		root.push_successor(&words(&["The"]), "quick");

		let text = serde_json::to_string(&root).unwrap();
		assert_eq!(text, r#"{"The":["quick","quick"]}"#);

		let back: TrieNode = serde_json::from_str(&text).unwrap();
		assert_eq!(back, root);
	}
}
