//! One evaluation run: load inputs, evaluate, write reports.

use std::path::PathBuf;

use dirt_core::{Evaluation, GroundTruth, PathConverter, evaluate};
use tracing::{info, warn};

use crate::{
  EvalError, Result,
  config::Config,
  loader::{load_ground_truth, load_system_output},
  report::{ConsoleReport, InputSummary, JsonReport, render_pr_curve},
};

/// Result of [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
  pub inputs: InputSummary,
  pub evaluation: Evaluation,
  /// Text report for stdout
  pub report: String,
  /// Image written, if any
  pub plot: Option<PathBuf>,
  /// JSON report written, if any
  pub json_report: Option<PathBuf>,
}

/// Run a full evaluation as described by `config`.
///
/// Fails with [`EvalError::NoScores`] when the output directory yields no
/// positively scored pair.
pub fn run(config: &Config) -> Result<RunOutcome> {
  let converter = PathConverter::new(config.evaluation.stemmer.build());

  let (positive, positive_stats) = load_ground_truth(&config.inputs.positive_file, &converter)?;
  let (negative, negative_stats) = load_ground_truth(&config.inputs.negative_file, &converter)?;
  let output = load_system_output(&config.inputs.output_dir, &config.inputs.output_pattern)?;

  if output.ranked.is_empty() {
    return Err(EvalError::NoScores(config.inputs.output_dir.clone()));
  }

  let overlap = positive.intersection(&negative).count();
  if overlap > 0 {
    warn!("{} pairs are labeled both positive and negative; treating them as positive", overlap);
  }

  let truth = GroundTruth::new(positive, negative);
  info!("Finding optimal threshold...");
  let evaluation = evaluate(&truth, &output.ranked, config.evaluation.fallback_threshold)?;

  if evaluation.decision.fallback_used {
    warn!(
      "No labeled pair gave a positive F1, falling back to threshold {}",
      evaluation.decision.threshold
    );
  }

  let inputs = InputSummary::new(config, positive_stats, negative_stats, output.stats);
  let report = ConsoleReport::new(&inputs, &evaluation).to_string();

  let plot = if !config.output.plot {
    None
  } else if evaluation.curve.is_empty() {
    info!("Not enough labeled data points to plot curve.");
    None
  } else {
    let path = config.output.plot_path.clone();
    render_pr_curve(
      &evaluation.curve,
      &evaluation.decision,
      &path,
      (config.output.plot_width, config.output.plot_height),
    )?;
    Some(path)
  };

  let json_report = match &config.output.json_report {
    Some(path) => {
      JsonReport::new(inputs.clone(), evaluation.clone()).save(path)?;
      info!("Report saved to {}", path.display());
      Some(path.clone())
    }
    None => None,
  };

  Ok(RunOutcome {
    inputs,
    evaluation,
    report,
    plot,
    json_report,
  })
}
