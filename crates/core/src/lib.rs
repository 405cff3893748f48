//! DIRT paraphrase evaluation core.
//!
//! Pure building blocks for scoring an extraction system's path-pair output
//! against hand-labeled phrase pairs. Nothing here touches the file system.
//!
//! ## Key Concepts
//!
//! - **Stemming**: [`Stemmer`] implementations are injected, never global
//! - **Paths**: [`PathConverter`] maps `X verb [prep] Y` phrases to DIRT paths
//! - **Pairs**: [`Pair`] is order-independent; [`RankedPairs`] is the sorted system output
//! - **Evaluation**: threshold search, error examples and the PR curve, combined by [`evaluate`]

pub mod analysis;
pub mod curve;
pub mod evaluate;
pub mod pair;
pub mod path;
pub mod ranked;
pub mod records;
pub mod stem;
pub mod threshold;
pub mod truth;

pub use analysis::{Category, EXAMPLES_PER_CATEGORY, ErrorExamples, collect_examples};
pub use curve::PrCurve;
pub use evaluate::{Evaluation, evaluate};
pub use pair::{Pair, ScoredPair};
pub use path::PathConverter;
pub use ranked::{RankedPairs, ScoreMap};
pub use records::{RecordError, parse_label_line, parse_score_line};
pub use stem::{PorterStemmer, Stemmer, StemmerKind, SuffixStemmer};
pub use threshold::{Counts, DEFAULT_FALLBACK_THRESHOLD, ThresholdDecision, f1_score, find_optimal_threshold};
pub use truth::{GroundTruth, Label};

use thiserror::Error;

/// Core evaluation errors
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("no scored pairs to evaluate")]
  NoScores,
}

pub type Result<T> = std::result::Result<T, CoreError>;
