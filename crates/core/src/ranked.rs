//! Ranked system output and the best-score lookup built from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pair::{Pair, ScoredPair};

/// System output sorted by descending score.
///
/// Only strictly positive scores are kept: the extraction side writes a
/// pair only when it found evidence for it, so zero carries no information.
/// Equal scores keep their input order. Duplicate pairs are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedPairs(Vec<ScoredPair>);

impl RankedPairs {
  pub fn from_unsorted(pairs: impl IntoIterator<Item = ScoredPair>) -> Self {
    let mut pairs: Vec<ScoredPair> = pairs.into_iter().filter(|p| p.score > 0.0).collect();
    // No NaN survives the filter, so total_cmp agrees with numeric order.
    pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
    Self(pairs)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, ScoredPair> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn as_slice(&self) -> &[ScoredPair] {
    &self.0
  }

  /// Build the pair -> best score lookup.
  pub fn score_map(&self) -> ScoreMap {
    ScoreMap::from_scored(self.iter())
  }
}

impl<'a> IntoIterator for &'a RankedPairs {
  type Item = &'a ScoredPair;
  type IntoIter = std::slice::Iter<'a, ScoredPair>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Maximum observed score per pair.
#[derive(Debug, Clone, Default)]
pub struct ScoreMap {
  scores: HashMap<Pair, f64>,
}

impl ScoreMap {
  pub fn from_scored<'a>(pairs: impl IntoIterator<Item = &'a ScoredPair>) -> Self {
    let mut scores: HashMap<Pair, f64> = HashMap::new();
    for scored in pairs {
      scores
        .entry(scored.pair.clone())
        .and_modify(|best| {
          if scored.score > *best {
            *best = scored.score;
          }
        })
        .or_insert(scored.score);
    }
    Self { scores }
  }

  pub fn get(&self, pair: &Pair) -> Option<f64> {
    self.scores.get(pair).copied()
  }

  /// Score of a pair, treating pairs the system never produced as 0.
  pub fn score_or_zero(&self, pair: &Pair) -> f64 {
    self.get(pair).unwrap_or(0.0)
  }

  pub fn contains(&self, pair: &Pair) -> bool {
    self.scores.contains_key(pair)
  }

  pub fn len(&self) -> usize {
    self.scores.len()
  }

  pub fn is_empty(&self) -> bool {
    self.scores.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scored(a: &str, b: &str, score: f64) -> ScoredPair {
    ScoredPair::new(Pair::new(a, b), score)
  }

  #[test]
  fn test_ranking_drops_non_positive_and_sorts() {
    let ranked = RankedPairs::from_unsorted(vec![
      scored("a", "b", 0.2),
      scored("c", "d", 0.0),
      scored("e", "f", 0.9),
      scored("g", "h", -1.0),
      scored("i", "j", f64::NAN),
      scored("k", "l", 0.5),
    ]);

    let scores: Vec<f64> = ranked.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![0.9, 0.5, 0.2]);
  }

  #[test]
  fn test_ranking_is_stable_on_ties() {
    let ranked = RankedPairs::from_unsorted(vec![
      scored("a", "1", 0.5),
      scored("b", "2", 0.5),
      scored("c", "3", 0.5),
    ]);
    let firsts: Vec<&str> = ranked.iter().map(|p| p.pair.first()).collect();
    assert_eq!(firsts, vec!["1", "2", "3"]);
  }

  #[test]
  fn test_score_map_keeps_maximum() {
    let ranked = RankedPairs::from_unsorted(vec![
      scored("a", "b", 0.3),
      scored("b", "a", 0.7),
      scored("a", "b", 0.5),
      scored("c", "d", 0.1),
    ]);
    let map = ranked.score_map();

    assert_eq!(map.len(), 2);
    assert!((map.score_or_zero(&Pair::new("a", "b")) - 0.7).abs() < f64::EPSILON);
    assert!((map.score_or_zero(&Pair::new("d", "c")) - 0.1).abs() < f64::EPSILON);
    assert_eq!(map.get(&Pair::new("x", "y")), None);
    assert_eq!(map.score_or_zero(&Pair::new("x", "y")), 0.0);
  }
}
