//! File adapters for the labeled test pairs and the scored system output.
//!
//! Line rules live in [`dirt_core::records`]; this module only opens files,
//! counts what was skipped and logs it.

use std::{
  collections::BTreeSet,
  fs::File,
  io::{self, BufRead, BufReader},
  path::{Path, PathBuf},
};

use dirt_core::{Pair, PathConverter, RankedPairs, RecordError, ScoredPair, Stemmer, parse_label_line, parse_score_line};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{EvalError, Result};

/// Counters from one ground-truth file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStats {
  /// The file did not exist and was treated as empty
  pub missing: bool,
  pub lines: usize,
  /// Distinct pairs after normalization
  pub loaded: usize,
  /// Short lines and phrases without a path
  pub skipped: usize,
}

/// Counters from the system-output files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputStats {
  pub files: usize,
  pub lines: usize,
  /// Lines that made it into the ranked list
  pub kept: usize,
  /// Lines with fewer than three fields
  pub short_lines: usize,
  /// Lines whose score field is not a number
  pub invalid_scores: usize,
  /// Scores that are zero, negative or NaN
  pub non_positive: usize,
}

/// Ranked system output plus load counters.
#[derive(Debug, Clone)]
pub struct SystemOutput {
  pub ranked: RankedPairs,
  pub stats: OutputStats,
}

fn open(path: &Path) -> Result<BufReader<File>> {
  File::open(path).map(BufReader::new).map_err(|source| EvalError::Read {
    path: path.to_path_buf(),
    source,
  })
}

fn read_error(path: &Path) -> impl FnOnce(io::Error) -> EvalError + '_ {
  move |source| EvalError::Read {
    path: path.to_path_buf(),
    source,
  }
}

/// Load one labeled pair file.
///
/// A missing file yields an empty set with a warning. Any other read error,
/// including invalid UTF-8, is returned.
pub fn load_ground_truth<S: Stemmer>(path: &Path, converter: &PathConverter<S>) -> Result<(BTreeSet<Pair>, LabelStats)> {
  let mut stats = LabelStats::default();
  let mut pairs = BTreeSet::new();

  info!("Loading ground truth from: {}", path.display());
  let reader = match File::open(path) {
    Ok(file) => BufReader::new(file),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      warn!("File {} not found!", path.display());
      stats.missing = true;
      return Ok((pairs, stats));
    }
    Err(source) => {
      return Err(EvalError::Read {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  for line in reader.lines() {
    let line = line.map_err(read_error(path))?;
    stats.lines += 1;

    match parse_label_line(&line, converter) {
      Ok(pair) => {
        pairs.insert(pair);
      }
      Err(e) => {
        stats.skipped += 1;
        debug!("{}:{}: skipped ({})", path.display(), stats.lines, e);
      }
    }
  }

  stats.loaded = pairs.len();
  info!(" -> Loaded {} pairs.", stats.loaded);
  if stats.skipped > 0 {
    debug!("Skipped {} lines in {}", stats.skipped, path.display());
  }

  Ok((pairs, stats))
}

/// Files in `dir` matching `pattern`, regular files only, sorted by path.
pub fn discover_output_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
  let full = format!(
    "{}/{}",
    glob::Pattern::escape(&dir.to_string_lossy()).trim_end_matches('/'),
    pattern
  );

  let mut files: Vec<PathBuf> = glob::glob(&full)?
    .filter_map(|entry| match entry {
      Ok(path) => Some(path),
      Err(e) => {
        warn!("Skipping unreadable entry: {}", e);
        None
      }
    })
    .filter(|path| path.is_file())
    .collect();
  files.sort();
  Ok(files)
}

fn progress_bar(len: usize) -> ProgressBar {
  let pb = ProgressBar::new(len as u64);
  let style = ProgressStyle::default_bar()
    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    .map(|style| style.progress_chars("#>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
  pb.set_style(style);
  pb
}

/// Load every scored output file in `dir` matching `pattern`.
///
/// Pairs with a positive score are kept and ranked highest first.
pub fn load_system_output(dir: &Path, pattern: &str) -> Result<SystemOutput> {
  let files = discover_output_files(dir, pattern)?;
  info!("Loading system output from {} files in {}...", files.len(), dir.display());

  let mut stats = OutputStats {
    files: files.len(),
    ..Default::default()
  };
  let mut scored: Vec<ScoredPair> = Vec::new();

  let pb = progress_bar(files.len());
  for file in &files {
    pb.set_message(
      file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default(),
    );

    let before = scored.len();
    let mut file_lines = 0usize;
    for line in open(file)?.lines() {
      let line = line.map_err(read_error(file))?;
      file_lines += 1;

      match parse_score_line(&line) {
        Ok(pair) if pair.score > 0.0 => scored.push(pair),
        Ok(_) => stats.non_positive += 1,
        Err(RecordError::InvalidScore(_)) => stats.invalid_scores += 1,
        Err(_) => stats.short_lines += 1,
      }
    }
    stats.lines += file_lines;

    debug!(
      "{}: {} lines, {} kept",
      file.display(),
      file_lines,
      scored.len() - before
    );
    pb.inc(1);
  }
  pb.finish_and_clear();

  let ranked = RankedPairs::from_unsorted(scored);
  stats.kept = ranked.len();
  info!(" -> Loaded {} scored pairs (score > 0).", stats.kept);
  debug!(
    "Skipped {} short lines, {} invalid scores, {} non-positive scores",
    stats.short_lines, stats.invalid_scores, stats.non_positive
  );

  Ok(SystemOutput { ranked, stats })
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_discover_sorted_and_filtered() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("part-r-00001"), "").unwrap();
    std::fs::write(temp.path().join("part-r-00000"), "").unwrap();
    std::fs::write(temp.path().join("_SUCCESS"), "").unwrap();
    std::fs::create_dir(temp.path().join("part-r-dir")).unwrap();

    let files = discover_output_files(temp.path(), "part-r-*").unwrap();
    let names: Vec<_> = files
      .iter()
      .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
      .collect();
    assert_eq!(names, vec!["part-r-00000", "part-r-00001"]);
  }

  #[test]
  fn test_discover_escapes_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("run[1]");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("part-r-00000"), "").unwrap();

    assert_eq!(discover_output_files(&dir, "part-r-*").unwrap().len(), 1);
  }

  #[test]
  fn test_bad_pattern_is_error() {
    let temp = TempDir::new().unwrap();
    let result = discover_output_files(temp.path(), "part-[");
    assert!(matches!(result, Err(EvalError::Pattern(_))));
  }
}
