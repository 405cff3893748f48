//! Path pairs and scored pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unordered pair of paths, stored in lexicographic order.
///
/// `Pair::new(a, b) == Pair::new(b, a)` always holds; the fields are private
/// so an unsorted pair cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
  first: String,
  second: String,
}

impl Pair {
  pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
    let (a, b) = (a.into(), b.into());
    if a <= b {
      Self { first: a, second: b }
    } else {
      Self { first: b, second: a }
    }
  }

  pub fn first(&self) -> &str {
    &self.first
  }

  pub fn second(&self) -> &str {
    &self.second
  }
}

impl fmt::Display for Pair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.first, self.second)
  }
}

/// A pair with the score the extraction system assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
  pub pair: Pair,
  pub score: f64,
}

impl ScoredPair {
  pub fn new(pair: Pair, score: f64) -> Self {
    Self { pair, score }
  }
}
