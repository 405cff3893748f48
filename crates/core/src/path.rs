//! Phrase to DIRT path conversion.
//!
//! Test phrases look like `X cause Y`, `X confuse with Y` or `X caused by Y`.
//! The slot markers are dropped and the remaining one or two words are mapped
//! onto one of three fixed dependency templates.

use crate::stem::{PorterStemmer, Stemmer};

/// Marker that turns a two-word phrase into the passive template.
pub const AGENT_MARKER: &str = "by";

/// `X verb Y`: subject and direct object.
pub fn active_path(verb_stem: &str) -> String {
  format!("N:<nsubj:V:{}:>dobj:N", verb_stem)
}

/// `X verb prep Y`: subject and prepositional object.
pub fn prepositional_path(verb_stem: &str, preposition: &str) -> String {
  format!("N:<nsubj:V:{}:>prep:P:{}:>pobj:N", verb_stem, preposition)
}

/// `X verb by Y`: passive subject and agent.
pub fn passive_path(verb_stem: &str) -> String {
  format!("N:<nsubjpass:V:{}:>agent:P:{}:>pobj:N", verb_stem, AGENT_MARKER)
}

/// Converts test phrases into canonical path strings with an injected stemmer.
#[derive(Debug, Clone, Default)]
pub struct PathConverter<S = PorterStemmer> {
  stemmer: S,
}

impl<S: Stemmer> PathConverter<S> {
  pub fn new(stemmer: S) -> Self {
    Self { stemmer }
  }

  pub fn stemmer(&self) -> &S {
    &self.stemmer
  }

  /// Convert a phrase to its path, or `None` when it fits no template.
  ///
  /// Every `X` and `Y` character is removed, not only standalone tokens,
  /// so the result stays identical to the paths the labeled data was built
  /// against. The preposition is kept verbatim.
  pub fn convert(&self, phrase: &str) -> Option<String> {
    let inner = phrase.replace(['X', 'Y'], "");
    let words: Vec<&str> = inner.split_whitespace().collect();

    match words.as_slice() {
      [verb] => Some(active_path(&self.stemmer.stem(verb))),
      [verb, marker] if *marker == AGENT_MARKER => Some(passive_path(&self.stemmer.stem(verb))),
      [verb, preposition] => Some(prepositional_path(&self.stemmer.stem(verb), preposition)),
      _ => None,
    }
  }
}
