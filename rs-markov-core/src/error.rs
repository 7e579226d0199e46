use std::error::Error;
use std::fmt;

/// Errors surfaced by configuration, loading and generation.
///
/// Model-shape problems surface at generation (or text-parse) time,
/// never during building.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkovError {
	/// No accepted sentence was produced within the configured retry bound.
	ExceededMaxTries {
		/// The bound that was exhausted.
		tries: usize,
	},
	/// The model text could not be parsed, or the trie cannot support a
	/// random walk (no eligible first word, missing or empty level).
	MalformedModel(String),
	/// A configuration value outside its valid range.
	InvalidConfig(String),
}

impl fmt::Display for MarkovError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ExceededMaxTries { tries } => {
				write!(f, "exceeded max tries: no accepted sentence within {} attempts", tries)
			}
			Self::MalformedModel(reason) => write!(f, "malformed model: {}", reason),
			Self::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
		}
	}
}

impl Error for MarkovError {}
