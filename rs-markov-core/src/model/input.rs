use serde::{Deserialize, Serialize};

use crate::error::MarkovError;

/// Default retry bound for validated generation.
pub const DEFAULT_MAX_TRIES: usize = 1000;

/// Default number of trailing words used as Markov state.
pub const DEFAULT_PREFIX_SIZE: usize = 3;

/// Model configuration, fixed at model-creation time and serialized
/// alongside the model.
///
/// Fields stay optional at rest so that a configuration loaded from text
/// round-trips exactly as recorded; resolution to the defaults happens in
/// the accessors.
///
/// # Invariants
/// - A recorded value is always strictly positive (enforced by the setters).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
	/// Retry bound for validated generation.
	#[serde(skip_serializing_if = "Option::is_none")]
	max_tries: Option<usize>,

	/// Number of trailing words used as Markov state.
	#[serde(skip_serializing_if = "Option::is_none")]
	prefix_size: Option<usize>,
}

impl ModelConfig {
	/// The configured retry bound, or [`DEFAULT_MAX_TRIES`] when unset.
	pub fn max_tries(&self) -> usize {
		self.max_tries.unwrap_or(DEFAULT_MAX_TRIES)
	}

	/// The configured prefix size, or [`DEFAULT_PREFIX_SIZE`] when unset.
	pub fn prefix_size(&self) -> usize {
		self.prefix_size.unwrap_or(DEFAULT_PREFIX_SIZE)
	}

	/// Sets the retry bound.
	///
	/// # Errors
	/// Returns an error if `max_tries` is zero.
	pub fn set_max_tries(&mut self, max_tries: usize) -> Result<(), MarkovError> {
		if max_tries == 0 {
			return Err(MarkovError::InvalidConfig("max_tries must be > 0".to_owned()));
		}
		self.max_tries = Some(max_tries);
		Ok(())
	}

	/// Sets the prefix size.
	///
	/// # Errors
	/// Returns an error if `prefix_size` is zero.
	pub fn set_prefix_size(&mut self, prefix_size: usize) -> Result<(), MarkovError> {
		if prefix_size == 0 {
			return Err(MarkovError::InvalidConfig("prefix_size must be > 0".to_owned()));
		}
		self.prefix_size = Some(prefix_size);
		Ok(())
	}

	/// Fills unset fields from `other`, never overriding recorded values.
	pub(crate) fn fill_gaps(&mut self, other: &Self) {
		if self.max_tries.is_none() {
			self.max_tries = other.max_tries;
		}
		if self.prefix_size.is_none() {
			self.prefix_size = other.prefix_size;
		}
	}
}

/// Per-call generation constraints for `Generator::generate_sentence`.
///
/// The default accepts any candidate sentence.
#[derive(Default)]
pub struct GenerateInput<'a> {
	/// Upper bound on the word-token count of an accepted sentence.
	/// Compared to the whitespace-split word count, not character length.
	pub max_length: Option<usize>,

	/// Predicate over the candidate sentence; `None` accepts everything.
	pub validator: Option<&'a dyn Fn(&str) -> bool>,
}

impl GenerateInput<'_> {
	/// Acceptance check: length bound first, validator second.
	///
	/// The validator only runs on candidates that pass the length bound.
	pub(crate) fn accepts(&self, candidate: &str) -> bool {
		if let Some(max_length) = self.max_length {
			if candidate.split_whitespace().count() > max_length {
				return false;
			}
		}
		match self.validator {
			Some(validator) => validator(candidate),
			None => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{DEFAULT_MAX_TRIES, DEFAULT_PREFIX_SIZE, GenerateInput, ModelConfig};

	#[test]
	fn unset_fields_resolve_to_defaults() {
		let config = ModelConfig::default();
		assert_eq!(config.max_tries(), DEFAULT_MAX_TRIES);
		assert_eq!(config.prefix_size(), DEFAULT_PREFIX_SIZE);
	}

	#[test]
	fn setters_reject_zero() {
		let mut config = ModelConfig::default();
		assert!(config.set_max_tries(0).is_err());
		assert!(config.set_prefix_size(0).is_err());
		assert_eq!(config, ModelConfig::default());
	}

	#[test]
	fn fill_gaps_never_overrides() {
		let mut recorded = ModelConfig::default();
		recorded.set_prefix_size(1).unwrap();

		let mut incoming = ModelConfig::default();
		incoming.set_prefix_size(2).unwrap();
		incoming.set_max_tries(5).unwrap();

		recorded.fill_gaps(&incoming);
		assert_eq!(recorded.prefix_size(), 1);
		assert_eq!(recorded.max_tries(), 5);
	}

	#[test]
	fn config_serializes_only_recorded_fields() {
		let mut config = ModelConfig::default();
		config.set_max_tries(5).unwrap();

		let text = serde_json::to_string(&config).unwrap();
		assert_eq!(text, r#"{"maxTries":5}"#);

		let back: ModelConfig = serde_json::from_str(&text).unwrap();
		assert_eq!(back, config);
		assert_eq!(back.prefix_size(), DEFAULT_PREFIX_SIZE);
	}

	#[test]
	fn length_bound_runs_before_validator() {
		let validator = |_: &str| -> bool { unreachable!("validator must not run on over-long candidates") };
		let input = GenerateInput { max_length: Some(2), validator: Some(&validator) };
		assert!(!input.accepts("one two three"));

		let accept = |_: &str| true;
		let input = GenerateInput { max_length: Some(3), validator: Some(&accept) };
		assert!(input.accepts("one two three"));
	}
}
