use log::debug;

use super::input::{GenerateInput, ModelConfig};
use super::markov_model::MarkovModel;
use crate::error::MarkovError;

/// High-level prefix-chain sentence generator.
///
/// # Responsibilities
/// - Own a `MarkovModel` and extend it additively with sentence batches
/// - Generate sentences under per-call constraints with bounded retries
/// - Serialize model and configuration to and from the flat text form
///
/// # Notes
/// - Building mutates the owned model in place; the design assumes a
///   single owner and no generation while mutating.
/// - Generation is read-only against the model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Generator {
	model: MarkovModel,
}

impl Generator {
	/// Creates a generator with an empty model carrying `config`.
	pub fn new(config: ModelConfig) -> Self {
		Self { model: MarkovModel::new(config) }
	}

	/// Wraps a previously built or deserialized model.
	///
	/// `config` only fills the gaps the model's own recorded configuration
	/// left unset; it never overrides a recorded value.
	pub fn from_model(config: ModelConfig, mut model: MarkovModel) -> Self {
		model.options_mut().fill_gaps(&config);
		Self { model }
	}

	/// Read-only access to the wrapped model.
	pub fn model(&self) -> &MarkovModel {
		&self.model
	}

	/// Appends a batch of sentences to the model.
	///
	/// Additive and chainable: repeated calls with different batches keep
	/// extending the same model, there is no reset between calls.
	pub fn build_model<S: AsRef<str>>(&mut self, sentences: &[S]) -> &mut Self {
		for sentence in sentences {
			self.model.add_sentence(sentence.as_ref());
		}
		debug!("added {} sentences to the model", sentences.len());
		self
	}

	/// Generates one sentence satisfying `input`.
	///
	/// Each attempt is a fresh independent random walk; a candidate is
	/// accepted when it passes the length bound (if any) and the validator
	/// (if any). Attempts stop at the model's configured `max_tries`.
	///
	/// # Errors
	/// - `ExceededMaxTries` when no candidate is accepted within the bound.
	/// - `MalformedModel` aborts immediately, without retrying: a walk that
	///   cannot start or continue will not be fixed by another draw.
	pub fn generate_sentence(&self, input: &GenerateInput) -> Result<String, MarkovError> {
		let max_tries = self.model.options().max_tries();

		for _ in 0..max_tries {
			let candidate = self.model.random_sentence()?;
			if input.accepts(&candidate) {
				return Ok(candidate);
			}
		}

		debug!("no accepted sentence within {} attempts", max_tries);
		Err(MarkovError::ExceededMaxTries { tries: max_tries })
	}

	/// Serializes the model and its configuration to the flat text form.
	pub fn to_text(&self) -> Result<String, MarkovError> {
		serde_json::to_string(&self.model)
			.map_err(|error| MarkovError::MalformedModel(error.to_string()))
	}

	/// Replaces the wrapped model with one parsed from `text`.
	///
	/// Shape is not validated beyond well-formedness: a tree with the
	/// wrong nesting depth for its recorded `prefix_size` is accepted
	/// uncritically and surfaces as a generation failure later.
	///
	/// # Errors
	/// Returns `MalformedModel` when `text` is not valid structured data.
	pub fn load_from_text(&mut self, text: &str) -> Result<(), MarkovError> {
		self.model = serde_json::from_str(text)
			.map_err(|error| MarkovError::MalformedModel(error.to_string()))?;
		Ok(())
	}
}
