//! Configuration for evaluation runs.
//!
//! Config priority: `--config` path > `./dirt-eval.toml` > user
//! (`~/.config/dirt-eval/config.toml`) > built-in defaults. CLI flags then
//! override individual values.

use std::path::{Path, PathBuf};

use dirt_core::{DEFAULT_FALLBACK_THRESHOLD, StemmerKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EvalError, Result};

/// Project-relative config file name
pub const CONFIG_FILE_NAME: &str = "dirt-eval.toml";

// ============================================================================
// Sections
// ============================================================================

/// Where the labeled pairs and the system output live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
  /// Directory holding the scored output files
  pub output_dir: PathBuf,
  /// Tab-separated positive phrase pairs
  pub positive_file: PathBuf,
  /// Tab-separated negative phrase pairs
  pub negative_file: PathBuf,
  /// Glob for output files inside `output_dir`
  pub output_pattern: String,
}

impl Default for InputConfig {
  fn default() -> Self {
    Self {
      output_dir: PathBuf::from("./output_large"),
      positive_file: PathBuf::from("positive-preds.txt"),
      negative_file: PathBuf::from("negative-preds.txt"),
      output_pattern: "part-r-*".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
  /// Stemmer used to turn test phrases into paths
  pub stemmer: StemmerKind,
  /// Threshold substituted when no labeled pair yields a positive F1
  pub fallback_threshold: f64,
}

impl Default for EvaluationConfig {
  fn default() -> Self {
    Self {
      stemmer: StemmerKind::Porter,
      fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  /// Render the precision-recall curve
  pub plot: bool,
  /// Image path; `.svg` selects SVG, otherwise the extension picks the bitmap format
  pub plot_path: PathBuf,
  pub plot_width: u32,
  pub plot_height: u32,
  /// Optional machine-readable report
  #[serde(skip_serializing_if = "Option::is_none")]
  pub json_report: Option<PathBuf>,
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      plot: true,
      plot_path: PathBuf::from("precision_recall_curve.png"),
      plot_width: 800,
      plot_height: 600,
      json_report: None,
    }
  }
}

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub inputs: InputConfig,
  pub evaluation: EvaluationConfig,
  pub output: OutputConfig,
}

impl Config {
  /// Load config from an explicit path, or discover one.
  ///
  /// An explicit path must exist and parse. Discovered files that fail to
  /// parse are skipped.
  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      return Self::load_from(path);
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists()
      && let Ok(config) = Self::load_from(&local)
    {
      debug!("Using config {}", local.display());
      return Ok(config);
    }

    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(config) = Self::load_from(&user_config_path)
    {
      debug!("Using config {}", user_config_path.display());
      return Ok(config);
    }

    Ok(Self::default())
  }

  /// Read and validate one config file.
  pub fn load_from(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path).map_err(|source| EvalError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("dirt-eval").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("dirt-eval").join("config.toml"))
  }

  pub fn validate(&self) -> Result<()> {
    let fallback = self.evaluation.fallback_threshold;
    if !fallback.is_finite() || fallback <= 0.0 {
      return Err(EvalError::Config(format!(
        "fallback_threshold must be a positive number, got {}",
        fallback
      )));
    }
    if self.output.plot_width == 0 || self.output.plot_height == 0 {
      return Err(EvalError::Config("plot dimensions must be non-zero".to_string()));
    }
    if self.inputs.output_pattern.trim().is_empty() {
      return Err(EvalError::Config("output_pattern must not be empty".to_string()));
    }
    Ok(())
  }

  /// Apply CLI overrides and re-validate.
  pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
    if let Some(dir) = overrides.output_dir {
      self.inputs.output_dir = dir;
    }
    if let Some(path) = overrides.positive_file {
      self.inputs.positive_file = path;
    }
    if let Some(path) = overrides.negative_file {
      self.inputs.negative_file = path;
    }
    if let Some(pattern) = overrides.output_pattern {
      self.inputs.output_pattern = pattern;
    }
    if let Some(stemmer) = overrides.stemmer {
      self.evaluation.stemmer = stemmer;
    }
    if let Some(fallback) = overrides.fallback_threshold {
      self.evaluation.fallback_threshold = fallback;
    }
    if let Some(path) = overrides.plot_path {
      self.output.plot_path = path;
    }
    if overrides.no_plot {
      self.output.plot = false;
    }
    if let Some(path) = overrides.json_report {
      self.output.json_report = Some(path);
    }
    self.validate()?;
    Ok(self)
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    format!(
      r#"# dirt-eval configuration
# Place as ./{file} or ~/.config/dirt-eval/config.toml

[inputs]
# Directory holding the scored pair files
output_dir = "./output_large"
# Labeled phrase pairs, one tab-separated pair per line
positive_file = "positive-preds.txt"
negative_file = "negative-preds.txt"
# Glob matched inside output_dir
output_pattern = "part-r-*"

[evaluation]
# "porter" for labeled test phrases, "suffix" mirrors the extraction-side stemmer
stemmer = "porter"
# Used when no labeled pair yields a positive F1
fallback_threshold = {fallback}

[output]
plot = true
# .svg selects SVG output, .png/.jpg/.bmp a bitmap
plot_path = "precision_recall_curve.png"
plot_width = 800
plot_height = 600
# json_report = "evaluation.json"
"#,
      file = CONFIG_FILE_NAME,
      fallback = DEFAULT_FALLBACK_THRESHOLD,
    )
  }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub output_dir: Option<PathBuf>,
  pub positive_file: Option<PathBuf>,
  pub negative_file: Option<PathBuf>,
  pub output_pattern: Option<String>,
  pub stemmer: Option<StemmerKind>,
  pub fallback_threshold: Option<f64>,
  pub plot_path: Option<PathBuf>,
  pub no_plot: bool,
  pub json_report: Option<PathBuf>,
}
