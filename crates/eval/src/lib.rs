//! Evaluation harness for DIRT paraphrase output.
//!
//! Reads the hand-labeled test pairs and the extraction system's scored
//! `part-r-*` files, runs the pure evaluation from [`dirt_core`], and writes
//! the console report, an optional JSON report and the PR-curve image.
//!
//! ## Key Concepts
//!
//! - **Config**: TOML file with CLI overrides ([`Config`])
//! - **Loaders**: thin file adapters around the core line parsers
//! - **Reports**: console text, JSON and a plotted precision-recall curve

pub mod config;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod report;

use std::path::PathBuf;

pub use config::{Config, ConfigOverrides, EvaluationConfig, InputConfig, OutputConfig};
pub use loader::{LabelStats, OutputStats, SystemOutput, load_ground_truth, load_system_output};
pub use pipeline::{RunOutcome, run};
pub use report::{ConsoleReport, InputSummary, JsonReport, render_pr_curve};

use thiserror::Error;

/// Evaluation harness errors
#[derive(Debug, Error)]
pub enum EvalError {
  #[error("Config error: {0}")]
  Config(String),

  #[error("Failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("TOML parse error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid file pattern: {0}")]
  Pattern(#[from] glob::PatternError),

  #[error("Plot error: {0}")]
  Plot(String),

  #[error("No scores found in {}. Check your output files.", .0.display())]
  NoScores(PathBuf),

  #[error("Evaluation error: {0}")]
  Core(#[from] dirt_core::CoreError),
}

pub type Result<T> = std::result::Result<T, EvalError>;
