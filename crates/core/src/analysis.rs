//! Error analysis: a handful of examples per confusion-matrix cell.

use serde::{Deserialize, Serialize};

use crate::{
  pair::{Pair, ScoredPair},
  ranked::RankedPairs,
  truth::{GroundTruth, Label},
};

/// Maximum examples collected per category.
pub const EXAMPLES_PER_CATEGORY: usize = 5;

/// Confusion-matrix cell an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  TruePositive,
  FalsePositive,
  TrueNegative,
  FalseNegative,
}

impl Category {
  pub fn title(&self) -> &'static str {
    match self {
      Category::TruePositive => "True Positives (Good Matches)",
      Category::FalsePositive => "False Positives (System said yes, Truth said no)",
      Category::TrueNegative => "True Negatives (Correct Rejections)",
      Category::FalseNegative => "False Negatives (System missed these)",
    }
  }

  /// Message shown instead of an empty list.
  pub fn none_found(&self) -> &'static str {
    match self {
      Category::TruePositive | Category::FalsePositive => "(None found above threshold)",
      Category::TrueNegative => "(None found below threshold - unlikely, check inputs)",
      Category::FalseNegative => "(None found below threshold)",
    }
  }
}

/// Examples per category, each capped at [`EXAMPLES_PER_CATEGORY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorExamples {
  pub true_positives: Vec<ScoredPair>,
  pub false_positives: Vec<ScoredPair>,
  pub true_negatives: Vec<ScoredPair>,
  pub false_negatives: Vec<ScoredPair>,
}

impl ErrorExamples {
  pub fn get(&self, category: Category) -> &[ScoredPair] {
    match category {
      Category::TruePositive => &self.true_positives,
      Category::FalsePositive => &self.false_positives,
      Category::TrueNegative => &self.true_negatives,
      Category::FalseNegative => &self.false_negatives,
    }
  }

  /// Categories in report order.
  pub fn categories(&self) -> [(Category, &[ScoredPair]); 4] {
    [
      (Category::TruePositive, self.true_positives.as_slice()),
      (Category::FalsePositive, self.false_positives.as_slice()),
      (Category::TrueNegative, self.true_negatives.as_slice()),
      (Category::FalseNegative, self.false_negatives.as_slice()),
    ]
  }
}

fn push_capped(examples: &mut Vec<ScoredPair>, pair: &Pair, score: f64) {
  if examples.len() < EXAMPLES_PER_CATEGORY {
    examples.push(ScoredPair::new(pair.clone(), score));
  }
}

fn is_full(examples: &[ScoredPair]) -> bool {
  examples.len() >= EXAMPLES_PER_CATEGORY
}

/// Collect examples for each category at `threshold`.
///
/// - TP/FP: ranked pairs scoring at or above the threshold.
/// - FN: positive ranked pairs below the threshold, then positives the
///   system never produced (reported with score 0).
/// - TN: negatives whose best score, 0 when absent, is below the threshold.
pub fn collect_examples(ranked: &RankedPairs, truth: &GroundTruth, threshold: f64) -> ErrorExamples {
  let mut examples = ErrorExamples::default();
  let scores = ranked.score_map();

  for scored in ranked {
    let label = truth.label(&scored.pair);
    match (scored.score >= threshold, label) {
      (true, Some(Label::Positive)) => push_capped(&mut examples.true_positives, &scored.pair, scored.score),
      (true, Some(Label::Negative)) => push_capped(&mut examples.false_positives, &scored.pair, scored.score),
      (false, Some(Label::Positive)) => push_capped(&mut examples.false_negatives, &scored.pair, scored.score),
      _ => {}
    }

    if is_full(&examples.true_positives) && is_full(&examples.false_positives) && is_full(&examples.false_negatives) {
      break;
    }
  }

  for pair in &truth.positive {
    if is_full(&examples.false_negatives) {
      break;
    }
    if !scores.contains(pair) {
      examples.false_negatives.push(ScoredPair::new(pair.clone(), 0.0));
    }
  }

  for pair in &truth.negative {
    if is_full(&examples.true_negatives) {
      break;
    }
    let score = scores.score_or_zero(pair);
    if score < threshold {
      examples.true_negatives.push(ScoredPair::new(pair.clone(), score));
    }
  }

  examples
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p(name: &str) -> Pair {
    Pair::new(name, "anchor")
  }

  fn ranked(entries: &[(&str, f64)]) -> RankedPairs {
    RankedPairs::from_unsorted(entries.iter().map(|(n, s)| ScoredPair::new(p(n), *s)))
  }

  fn names(examples: &[ScoredPair]) -> Vec<String> {
    examples.iter().map(|e| e.pair.first().to_string()).collect()
  }

  #[test]
  fn test_categories_at_threshold() {
    let ranked = ranked(&[("P1", 0.9), ("N1", 0.8), ("P2", 0.5), ("N2", 0.4), ("U1", 0.3)]);
    let truth = GroundTruth::new(
      [p("P1"), p("P2"), p("P3")].into_iter().collect(),
      [p("N1"), p("N2"), p("N3")].into_iter().collect(),
    );

    let examples = collect_examples(&ranked, &truth, 0.8);

    assert_eq!(names(&examples.true_positives), vec!["P1"]);
    assert_eq!(names(&examples.false_positives), vec!["N1"]);
    // Ranked FN first, then the never-found positive at score 0.
    assert_eq!(names(&examples.false_negatives), vec!["P2", "P3"]);
    assert_eq!(examples.false_negatives[1].score, 0.0);
    // N1 scored above the cut; N2 below it; N3 never produced.
    assert_eq!(names(&examples.true_negatives), vec!["N2", "N3"]);
    assert!((examples.true_negatives[0].score - 0.4).abs() < f64::EPSILON);
    assert_eq!(examples.true_negatives[1].score, 0.0);
  }

  #[test]
  fn test_threshold_is_inclusive() {
    let ranked = ranked(&[("P1", 0.5)]);
    let truth = GroundTruth::new([p("P1")].into_iter().collect(), Default::default());

    let examples = collect_examples(&ranked, &truth, 0.5);
    assert_eq!(examples.true_positives.len(), 1);
    assert!(examples.false_negatives.is_empty());
  }

  #[test]
  fn test_categories_are_capped() {
    let entries: Vec<(String, f64)> = (0..20)
      .map(|i| (format!("P{:02}", i), 1.0 - i as f64 * 0.01))
      .chain((0..20).map(|i| (format!("N{:02}", i), 0.5 - i as f64 * 0.01)))
      .collect();
    let ranked = RankedPairs::from_unsorted(entries.iter().map(|(n, s)| ScoredPair::new(p(n), *s)));
    let truth = GroundTruth::new(
      (0..30).map(|i| p(&format!("P{:02}", i))).collect(),
      (0..30).map(|i| p(&format!("N{:02}", i))).collect(),
    );

    let examples = collect_examples(&ranked, &truth, 0.6);

    for (_, list) in examples.categories() {
      assert!(list.len() <= EXAMPLES_PER_CATEGORY);
    }
    assert_eq!(examples.true_positives.len(), EXAMPLES_PER_CATEGORY);
    assert_eq!(examples.false_negatives.len(), EXAMPLES_PER_CATEGORY);
    assert_eq!(examples.true_negatives.len(), EXAMPLES_PER_CATEGORY);
    assert!(examples.false_positives.is_empty());
  }

  #[test]
  fn test_empty_categories_have_messages() {
    let examples = ErrorExamples::default();
    for (category, list) in examples.categories() {
      assert!(list.is_empty());
      assert!(!category.none_found().is_empty());
    }
    assert!(examples.get(Category::TrueNegative).is_empty());
  }
}
