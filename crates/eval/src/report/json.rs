//! JSON report format for evaluation runs.

use std::path::Path;

use chrono::{DateTime, Utc};
use dirt_core::Evaluation;
use serde::{Deserialize, Serialize};

use super::InputSummary;
use crate::Result;

/// Complete evaluation report in JSON format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
  /// Report metadata
  pub metadata: ReportMetadata,
  /// Input locations and load counters
  pub inputs: InputSummary,
  /// Threshold, examples and curve
  pub evaluation: Evaluation,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
  /// Report generation timestamp
  pub timestamp: DateTime<Utc>,
  /// dirt-eval version
  pub version: String,
}

impl JsonReport {
  pub fn new(inputs: InputSummary, evaluation: Evaluation) -> Self {
    Self {
      metadata: ReportMetadata {
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
      },
      inputs,
      evaluation,
    }
  }

  /// Save report to a JSON file.
  pub fn save(&self, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(self)?;
    std::fs::write(path, json)?;
    Ok(())
  }

  /// Load report from a JSON file.
  pub fn load(path: &Path) -> Result<Self> {
    let json = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&json)?;
    Ok(report)
  }
}
