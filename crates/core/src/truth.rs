//! Hand-labeled ground truth.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pair::Pair;

/// Gold label of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
  Positive,
  Negative,
}

/// Positive and negative pair sets.
///
/// Sets are ordered so example selection is reproducible between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroundTruth {
  pub positive: BTreeSet<Pair>,
  pub negative: BTreeSet<Pair>,
}

impl GroundTruth {
  pub fn new(positive: BTreeSet<Pair>, negative: BTreeSet<Pair>) -> Self {
    Self { positive, negative }
  }

  /// Label of a pair; positive membership wins when a pair is in both sets.
  pub fn label(&self, pair: &Pair) -> Option<Label> {
    if self.positive.contains(pair) {
      Some(Label::Positive)
    } else if self.negative.contains(pair) {
      Some(Label::Negative)
    } else {
      None
    }
  }

  pub fn is_empty(&self) -> bool {
    self.positive.is_empty() && self.negative.is_empty()
  }
}
