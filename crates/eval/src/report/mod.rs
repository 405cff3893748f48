//! Report generation for evaluation runs.
//!
//! - Console: the text report printed to stdout
//! - JSON: machine-readable copy of the whole run
//! - Plot: precision-recall curve image

mod console;
mod json;
mod plot;

use std::path::PathBuf;

use dirt_core::StemmerKind;
use serde::{Deserialize, Serialize};

pub use console::ConsoleReport;
pub use json::{JsonReport, ReportMetadata};
pub use plot::render_pr_curve;

use crate::{
  config::Config,
  loader::{LabelStats, OutputStats},
};

/// Where the inputs came from and what loading them skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
  pub positive_file: PathBuf,
  pub negative_file: PathBuf,
  pub output_dir: PathBuf,
  pub output_pattern: String,
  pub stemmer: StemmerKind,
  pub positive: LabelStats,
  pub negative: LabelStats,
  pub output: OutputStats,
}

impl InputSummary {
  pub fn new(config: &Config, positive: LabelStats, negative: LabelStats, output: OutputStats) -> Self {
    Self {
      positive_file: config.inputs.positive_file.clone(),
      negative_file: config.inputs.negative_file.clone(),
      output_dir: config.inputs.output_dir.clone(),
      output_pattern: config.inputs.output_pattern.clone(),
      stemmer: config.evaluation.stemmer,
      positive,
      negative,
      output,
    }
  }
}
