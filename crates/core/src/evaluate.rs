//! One evaluation run over in-memory inputs.

use serde::{Deserialize, Serialize};

use crate::{
  CoreError, Result,
  analysis::{ErrorExamples, collect_examples},
  curve::PrCurve,
  ranked::RankedPairs,
  threshold::{ThresholdDecision, find_optimal_threshold},
  truth::GroundTruth,
};

/// Everything a report needs from one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
  /// Gold positive pairs
  pub positive_pairs: usize,
  /// Gold negative pairs
  pub negative_pairs: usize,
  /// Ranked system pairs with a positive score
  pub scored_pairs: usize,
  /// Ranked pairs that carry a gold label
  pub labeled_in_output: usize,
  pub decision: ThresholdDecision,
  pub examples: ErrorExamples,
  pub curve: PrCurve,
}

/// Run threshold search, error analysis and curve building.
///
/// Fails with [`CoreError::NoScores`] when the ranked list is empty.
pub fn evaluate(truth: &GroundTruth, ranked: &RankedPairs, fallback_threshold: f64) -> Result<Evaluation> {
  if ranked.is_empty() {
    return Err(CoreError::NoScores);
  }

  let decision = find_optimal_threshold(ranked, truth, fallback_threshold);
  let examples = collect_examples(ranked, truth, decision.threshold);
  let curve = PrCurve::build(ranked, truth);

  Ok(Evaluation {
    positive_pairs: truth.positive.len(),
    negative_pairs: truth.negative.len(),
    scored_pairs: ranked.len(),
    labeled_in_output: curve.len(),
    decision,
    examples,
    curve,
  })
}
