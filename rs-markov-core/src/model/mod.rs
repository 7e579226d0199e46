//! Top-level module for the Markov sentence generation system.
//!
//! This module provides a word-level prefix-chain generator, including:
//! - The persistent model (`MarkovModel`) and its configuration (`ModelConfig`)
//! - Internal prefix-trie storage (`TrieNode`)
//! - Per-call generation constraints (`GenerateInput`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for building the model and generating sentences.
///
/// Exposes model construction, chainable building, constrained generation
/// and text serialization.
pub mod generator;

/// The persistent Markov model.
///
/// Handles sentence ingestion, prefix-window sampling and the random walk
/// that produces a single candidate sentence.
pub mod markov_model;

/// Configuration and per-call generation constraints.
///
/// Stores the model configuration (`prefix_size`, `max_tries`) and the
/// options accepted by `Generator::generate_sentence`.
pub mod input;

/// Internal prefix-trie node.
///
/// Maps prefix words level by level down to successor lists.
/// This module is not exposed publicly.
mod trie;
