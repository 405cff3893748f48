//! Line-level parsing of ground-truth and system-output records.
//!
//! Both formats are tab-separated. Loaders in the I/O layer read lines and
//! hand them here, so every skip rule is testable without files.

use thiserror::Error;

use crate::{
  pair::{Pair, ScoredPair},
  path::PathConverter,
  stem::Stemmer,
};

/// Why a single line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
  #[error("expected at least {expected} tab-separated fields, found {found}")]
  MissingFields { expected: usize, found: usize },

  #[error("invalid score: {0:?}")]
  InvalidScore(String),

  #[error("phrase does not match a path template: {0:?}")]
  Unconvertible(String),
}

fn fields(line: &str) -> Vec<&str> {
  line.trim().split('\t').collect()
}

/// Parse `phrase<TAB>phrase[<TAB>...]` into a normalized pair of paths.
pub fn parse_label_line<S: Stemmer>(line: &str, converter: &PathConverter<S>) -> Result<Pair, RecordError> {
  let parts = fields(line);
  if parts.len() < 2 {
    return Err(RecordError::MissingFields {
      expected: 2,
      found: parts.len(),
    });
  }

  let first = converter
    .convert(parts[0])
    .ok_or_else(|| RecordError::Unconvertible(parts[0].to_string()))?;
  let second = converter
    .convert(parts[1])
    .ok_or_else(|| RecordError::Unconvertible(parts[1].to_string()))?;

  Ok(Pair::new(first, second))
}

/// Parse `path<TAB>path<TAB>score[<TAB>...]`.
///
/// The score is returned as written; dropping non-positive scores is the
/// ranking step's job.
pub fn parse_score_line(line: &str) -> Result<ScoredPair, RecordError> {
  let parts = fields(line);
  if parts.len() < 3 {
    return Err(RecordError::MissingFields {
      expected: 3,
      found: parts.len(),
    });
  }

  let score: f64 = parts[2]
    .trim()
    .parse()
    .map_err(|_| RecordError::InvalidScore(parts[2].to_string()))?;

  Ok(ScoredPair::new(Pair::new(parts[0], parts[1]), score))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stem::PorterStemmer;

  #[test]
  fn test_parse_label_line() {
    let converter = PathConverter::new(PorterStemmer::new());
    let pair = parse_label_line("X cause Y\tX caused by Y\n", &converter).unwrap();
    assert_eq!(
      pair,
      Pair::new(
        "N:<nsubjpass:V:caus:>agent:P:by:>pobj:N",
        "N:<nsubj:V:caus:>dobj:N"
      )
    );
  }

  #[test]
  fn test_parse_label_line_extra_columns() {
    let converter = PathConverter::new(PorterStemmer::new());
    assert!(parse_label_line("X cause Y\tX make Y\tyes\t1", &converter).is_ok());
  }

  #[test]
  fn test_parse_label_line_rejects() {
    let converter = PathConverter::new(PorterStemmer::new());
    assert_eq!(
      parse_label_line("X cause Y", &converter),
      Err(RecordError::MissingFields { expected: 2, found: 1 })
    );
    assert_eq!(
      parse_label_line("X Y\tX cause Y", &converter),
      Err(RecordError::Unconvertible("X Y".to_string()))
    );
    assert!(matches!(
      parse_label_line("X cause Y\tX is caused by Y", &converter),
      Err(RecordError::Unconvertible(_))
    ));
  }

  #[test]
  fn test_parse_score_line() {
    let scored = parse_score_line("pb\tpa\t0.25\n").unwrap();
    assert_eq!(scored.pair, Pair::new("pa", "pb"));
    assert!((scored.score - 0.25).abs() < f64::EPSILON);

    let zero = parse_score_line("pa\tpb\t0.0").unwrap();
    assert_eq!(zero.score, 0.0);
  }

  #[test]
  fn test_parse_score_line_rejects() {
    assert_eq!(
      parse_score_line("pa\tpb"),
      Err(RecordError::MissingFields { expected: 3, found: 2 })
    );
    assert_eq!(
      parse_score_line("pa\tpb\tabc"),
      Err(RecordError::InvalidScore("abc".to_string()))
    );
    assert!(matches!(parse_score_line(""), Err(RecordError::MissingFields { .. })));
  }
}
