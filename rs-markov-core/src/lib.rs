//! Prefix-based Markov sentence generation library.
//!
//! This crate provides a word-level Markov chain system including:
//! - Prefix-trie model construction from example sentences
//! - Random-walk sentence generation with retry-until-valid semantics
//! - Lossless text serialization of model and configuration
//!
//! The model only ever grows through building; generation is a read-only
//! traversal. Persistence media (files, key-value stores) are external
//! collaborators that store and retrieve the serialized text blob.

/// Core Markov model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// the internal trie representation private.
pub mod model;

/// Error types shared across the crate.
pub mod error;

/// I/O utilities (corpus loading, model text persistence).
pub mod io;
