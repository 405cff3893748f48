//! Precision-recall curve points.

use serde::{Deserialize, Serialize};

use crate::{ranked::RankedPairs, threshold::Counts, truth::GroundTruth};

/// Cumulative (recall, precision) points, one per labeled pair encountered
/// in ranked order. Both sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrCurve {
  pub recalls: Vec<f64>,
  pub precisions: Vec<f64>,
}

impl PrCurve {
  pub fn build(ranked: &RankedPairs, truth: &GroundTruth) -> Self {
    let total_positives = truth.positive.len();
    let mut counts = Counts::default();
    let mut curve = Self::default();

    for scored in ranked {
      let Some(label) = truth.label(&scored.pair) else {
        continue;
      };
      counts.record(label);
      curve.recalls.push(counts.recall(total_positives));
      curve.precisions.push(counts.precision());
    }

    curve
  }

  pub fn len(&self) -> usize {
    self.recalls.len()
  }

  pub fn is_empty(&self) -> bool {
    self.recalls.is_empty()
  }

  pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
    self.recalls.iter().copied().zip(self.precisions.iter().copied())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pair::{Pair, ScoredPair};

  fn p(name: &str) -> Pair {
    Pair::new(name, "anchor")
  }

  #[test]
  fn test_curve_points() {
    let ranked = RankedPairs::from_unsorted(vec![
      ScoredPair::new(p("P1"), 0.9),
      ScoredPair::new(p("U1"), 0.85),
      ScoredPair::new(p("N1"), 0.8),
      ScoredPair::new(p("P2"), 0.7),
    ]);
    let truth = GroundTruth::new(
      [p("P1"), p("P2"), p("P3"), p("P4")].into_iter().collect(),
      [p("N1")].into_iter().collect(),
    );

    let curve = PrCurve::build(&ranked, &truth);

    assert_eq!(curve.len(), 3);
    assert_eq!(curve.recalls, vec![0.25, 0.25, 0.5]);
    assert_eq!(curve.precisions[0], 1.0);
    assert_eq!(curve.precisions[1], 0.5);
    assert!((curve.precisions[2] - 2.0 / 3.0).abs() < 1e-9);
  }

  #[test]
  fn test_recall_is_monotonic() {
    let ranked = RankedPairs::from_unsorted(
      (0..50).map(|i| ScoredPair::new(p(&format!("{}{}", if i % 3 == 0 { "N" } else { "P" }, i)), 1.0 / (i + 1) as f64)),
    );
    let truth = GroundTruth::new(
      (0..50).filter(|i| i % 3 != 0).map(|i| p(&format!("P{}", i))).collect(),
      (0..50).filter(|i| i % 3 == 0).map(|i| p(&format!("N{}", i))).collect(),
    );

    let curve = PrCurve::build(&ranked, &truth);

    assert_eq!(curve.recalls.len(), curve.precisions.len());
    assert_eq!(curve.len(), 50);
    assert!(curve.recalls.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(curve.recalls.last().copied(), Some(1.0));
  }

  #[test]
  fn test_unlabeled_only_gives_empty_curve() {
    let ranked = RankedPairs::from_unsorted(vec![ScoredPair::new(p("U1"), 0.5)]);
    let curve = PrCurve::build(&ranked, &GroundTruth::default());
    assert!(curve.is_empty());
    assert_eq!(curve.points().count(), 0);
  }
}
