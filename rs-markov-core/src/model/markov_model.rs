use std::collections::VecDeque;

use rand::seq::{IndexedRandom, IteratorRandom};
use serde::{Deserialize, Serialize};

use super::input::ModelConfig;
use super::trie::TrieNode;
use crate::error::MarkovError;

/// Sentinel successor value marking end-of-sentence.
///
/// Under well-formed building it only ever appears as a successor, never
/// as a prefix key; degenerate inputs (sentences shorter than the prefix
/// window) may still pull it into a key, which is accepted, not guarded.
pub(crate) const TERMINATOR: &str = "\n";

/// The persistent Markov model: a prefix trie of depth `prefix_size` plus
/// the configuration it was built with.
///
/// # Responsibilities
/// - Ingest sentences and accumulate successor lists per prefix window
/// - Sample a start window and perform one random walk per attempt
/// - Round-trip losslessly through the flat text form
///
/// # Invariants
/// - Building is additive; nothing is ever deleted or compacted
/// - Successor lists preserve insertion order and duplicates
///   (frequency is encoded by repetition, not by counts)
/// - Generation never mutates the trie
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MarkovModel {
	options: ModelConfig,
	model: TrieNode,
}

impl MarkovModel {
	/// Creates an empty model carrying `options`.
	pub(crate) fn new(options: ModelConfig) -> Self {
		Self { options, model: TrieNode::default() }
	}

	/// The configuration recorded alongside the model.
	pub fn options(&self) -> &ModelConfig {
		&self.options
	}

	pub(crate) fn options_mut(&mut self) -> &mut ModelConfig {
		&mut self.options
	}

	/// Read-only view of the successor list recorded for `prefix`.
	///
	/// `prefix` must name a full window (`prefix_size` words). Mostly
	/// useful for inspection and tests.
	pub fn successors(&self, prefix: &[&str]) -> Option<&[String]> {
		let owned: Vec<String> = prefix.iter().map(|w| (*w).to_owned()).collect();
		self.model.successors(&owned)
	}

	/// Adds one sentence to the model.
	///
	/// # Behavior
	/// - Splits on runs of whitespace; a trailing punctuation character
	///   stays attached to its word.
	/// - Appends the terminator, consumes the initial window from the
	///   front, then slides the window one word per recorded successor.
	///
	/// # Notes
	/// - A sentence with fewer tokens than the window (terminator
	///   included) records nothing.
	/// - Sentences are processed independently; there is no smoothing
	///   across them.
	pub(crate) fn add_sentence(&mut self, sentence: &str) {
		let prefix_size = self.options.prefix_size();

		let mut tokens: VecDeque<String> =
			sentence.split_whitespace().map(str::to_owned).collect();
		tokens.push_back(TERMINATOR.to_owned());

		let mut window: Vec<String> = Vec::with_capacity(prefix_size);
		while window.len() < prefix_size {
			match tokens.pop_front() {
				Some(token) => window.push(token),
				None => return,
			}
		}

		while let Some(next_word) = tokens.pop_front() {
			self.model.push_successor(&window, &next_word);
			window.remove(0);
			window.push(next_word);
		}
	}

	/// Eligible sentence-start words: top-level keys whose first character
	/// is uppercase. This is a derived view, recomputed per attempt.
	fn first_words(&self) -> Result<Vec<&String>, MarkovError> {
		let keys = self.model.keys().ok_or_else(|| {
			MarkovError::MalformedModel("top level of the model is not a mapping".to_owned())
		})?;

		let first_words: Vec<&String> = keys
			.filter(|w| w.chars().next().is_some_and(char::is_uppercase))
			.collect();

		if first_words.is_empty() {
			return Err(MarkovError::MalformedModel(
				"no capitalized first word to start a sentence from".to_owned(),
			));
		}
		Ok(first_words)
	}

	/// Builds the initial prefix window.
	///
	/// The first word is drawn uniformly among the eligible starts; each
	/// following slot is drawn uniformly among the keys reachable by
	/// descending the path chosen so far, so the window is always
	/// consistent with an existing model path.
	///
	/// # Errors
	/// A missing, empty or prematurely-leaf level is a malformed model.
	fn pick_window(&self) -> Result<Vec<String>, MarkovError> {
		let mut rng = rand::rng();
		let first_words = self.first_words()?;
		let prefix_size = self.options.prefix_size();

		let first = first_words.choose(&mut rng).ok_or_else(|| {
			MarkovError::MalformedModel("no capitalized first word to start a sentence from".to_owned())
		})?;

		let mut window: Vec<String> = Vec::with_capacity(prefix_size);
		window.push((*first).to_owned());

		while window.len() < prefix_size {
			let node = self.model.descend(&window).ok_or_else(|| {
				MarkovError::MalformedModel(format!("no branch recorded under prefix {:?}", window))
			})?;
			let keys = node.keys().ok_or_else(|| {
				MarkovError::MalformedModel(format!("prefix {:?} ends before the final level", window))
			})?;
			let next = keys.choose(&mut rng).ok_or_else(|| {
				MarkovError::MalformedModel(format!("no key to extend prefix {:?}", window))
			})?;
			window.push(next.to_owned());
		}

		Ok(window)
	}

	/// Performs one unconstrained random walk and returns the candidate
	/// sentence. The retry loop and acceptance checks live in the
	/// generator.
	///
	/// # Behavior
	/// - Draws the next word uniformly over the successor list, with
	///   replacement; repeated entries are proportionally more likely.
	/// - Drawing the terminator flushes the remaining window, in order,
	///   onto the sentence.
	///
	/// # Errors
	/// A window with no recorded successors is a malformed model.
	pub(crate) fn random_sentence(&self) -> Result<String, MarkovError> {
		let mut rng = rand::rng();
		let mut window = self.pick_window()?;
		let mut sentence: Vec<String> = Vec::new();

		loop {
			let successors = self.model.successors(&window).ok_or_else(|| {
				MarkovError::MalformedModel(format!("no successors recorded for prefix {:?}", window))
			})?;
			let next_word = successors.choose(&mut rng).ok_or_else(|| {
				MarkovError::MalformedModel(format!("empty successor list for prefix {:?}", window))
			})?;

			if next_word.as_str() == TERMINATOR {
				sentence.append(&mut window);
				break;
			}
			sentence.push(window.remove(0));
			window.push(next_word.to_owned());
		}

		Ok(sentence.join(" "))
	}
}
