//! F1-maximizing threshold search over the ranked output.

use serde::{Deserialize, Serialize};

use crate::{
  ranked::RankedPairs,
  truth::{GroundTruth, Label},
};

/// Threshold used when the search finds no useful cut.
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.01;

/// Running confusion counts over labeled pairs seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
  pub true_positives: usize,
  pub false_positives: usize,
}

impl Counts {
  /// Add one labeled pair.
  pub fn record(&mut self, label: Label) {
    match label {
      Label::Positive => self.true_positives += 1,
      Label::Negative => self.false_positives += 1,
    }
  }

  pub fn precision(&self) -> f64 {
    let predicted = self.true_positives + self.false_positives;
    if predicted > 0 {
      self.true_positives as f64 / predicted as f64
    } else {
      0.0
    }
  }

  pub fn recall(&self, total_positives: usize) -> f64 {
    if total_positives > 0 {
      self.true_positives as f64 / total_positives as f64
    } else {
      0.0
    }
  }
}

/// Harmonic mean of precision and recall, 0 when both are 0.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
  if precision + recall > 0.0 {
    2.0 * precision * recall / (precision + recall)
  } else {
    0.0
  }
}

/// The chosen cut and the statistics observed at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdDecision {
  /// Score cutoff; pairs scoring at or above it count as predicted matches
  pub threshold: f64,
  /// F1 at the cut (0 when nothing labeled was found)
  pub f1: f64,
  pub precision: f64,
  pub recall: f64,
  /// Counts accumulated down to the cut
  pub counts: Counts,
  /// Whether the fallback constant replaced a degenerate cut
  pub fallback_used: bool,
}

/// Walk the ranked list once, keeping the score where F1 peaks.
///
/// Unlabeled pairs are skipped and count toward neither precision nor
/// recall. Only a strictly better F1 moves the cut, so the first of several
/// equal peaks wins. When the best F1 is not positive the fallback
/// threshold is returned instead.
pub fn find_optimal_threshold(ranked: &RankedPairs, truth: &GroundTruth, fallback: f64) -> ThresholdDecision {
  let total_positives = truth.positive.len();
  let mut counts = Counts::default();
  let mut best: Option<ThresholdDecision> = None;

  for scored in ranked {
    let Some(label) = truth.label(&scored.pair) else {
      continue;
    };
    counts.record(label);

    let precision = counts.precision();
    let recall = counts.recall(total_positives);
    let f1 = f1_score(precision, recall);

    if best.is_none_or(|b| f1 > b.f1) {
      best = Some(ThresholdDecision {
        threshold: scored.score,
        f1,
        precision,
        recall,
        counts,
        fallback_used: false,
      });
    }
  }

  match best {
    Some(decision) if decision.f1 > 0.0 && decision.threshold > 0.0 => decision,
    Some(decision) => ThresholdDecision {
      threshold: fallback,
      fallback_used: true,
      ..decision
    },
    None => ThresholdDecision {
      threshold: fallback,
      f1: 0.0,
      precision: 0.0,
      recall: 0.0,
      counts: Counts::default(),
      fallback_used: true,
    },
  }
}
