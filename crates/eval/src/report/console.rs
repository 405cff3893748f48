//! Plain-text report printed after a run.

use std::fmt::{self, Write as _};

use dirt_core::{Evaluation, ScoredPair};

use super::InputSummary;

const RULE_WIDTH: usize = 40;

/// Console report generator.
pub struct ConsoleReport {
  content: String,
}

impl ConsoleReport {
  pub fn new(inputs: &InputSummary, evaluation: &Evaluation) -> Self {
    let mut content = String::new();

    Self::write_inputs(&mut content, inputs, evaluation);
    Self::write_threshold(&mut content, evaluation);
    Self::write_examples(&mut content, evaluation);

    Self { content }
  }

  pub fn as_str(&self) -> &str {
    &self.content
  }

  fn write_inputs(out: &mut String, inputs: &InputSummary, evaluation: &Evaluation) {
    let _ = writeln!(
      out,
      "Ground truth: {} positive pairs ({}), {} negative pairs ({})",
      evaluation.positive_pairs,
      inputs.positive_file.display(),
      evaluation.negative_pairs,
      inputs.negative_file.display()
    );
    let _ = writeln!(
      out,
      "System output: {} scored pairs from {} files in {}",
      evaluation.scored_pairs,
      inputs.output.files,
      inputs.output_dir.display()
    );
    let _ = writeln!(out, "Labeled pairs in output: {}", evaluation.labeled_in_output);
    let _ = writeln!(out, "Stemmer: {}", inputs.stemmer);
  }

  fn write_threshold(out: &mut String, evaluation: &Evaluation) {
    let decision = &evaluation.decision;
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "BEST THRESHOLD: {:.6}", decision.threshold);
    let _ = writeln!(out, "Max F1:         {:.4}", decision.f1);
    let _ = writeln!(out, "Precision:      {:.4}", decision.precision);
    let _ = writeln!(out, "Recall:         {:.4}", decision.recall);
    let _ = writeln!(out, "{}", rule);

    if decision.fallback_used {
      let _ = writeln!(
        out,
        "No labeled pair gave a positive F1; using fallback threshold {:.6}",
        decision.threshold
      );
    }
  }

  fn write_examples(out: &mut String, evaluation: &Evaluation) {
    let _ = writeln!(out);
    let _ = writeln!(out, "=== ERROR ANALYSIS (For Report) ===");

    for (category, examples) in evaluation.examples.categories() {
      let _ = writeln!(out);
      let _ = writeln!(out, "--- {} {} ---", dirt_core::EXAMPLES_PER_CATEGORY, category.title());
      if examples.is_empty() {
        let _ = writeln!(out, "{}", category.none_found());
      }
      for example in examples {
        Self::write_example(out, example);
      }
    }

    let _ = writeln!(out, "===================================");
  }

  fn write_example(out: &mut String, example: &ScoredPair) {
    let _ = writeln!(out, "Score: {:.4} | {}", example.score, example.pair);
  }
}

impl fmt::Display for ConsoleReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.content)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use dirt_core::{
    DEFAULT_FALLBACK_THRESHOLD, GroundTruth, Pair, RankedPairs, StemmerKind, evaluate,
  };

  use super::*;
  use crate::loader::{LabelStats, OutputStats};

  fn summary() -> InputSummary {
    InputSummary {
      positive_file: "positive-preds.txt".into(),
      negative_file: "negative-preds.txt".into(),
      output_dir: "./output_large".into(),
      output_pattern: "part-r-*".to_string(),
      stemmer: StemmerKind::Porter,
      positive: LabelStats::default(),
      negative: LabelStats::default(),
      output: OutputStats {
        files: 2,
        ..Default::default()
      },
    }
  }

  #[test]
  fn test_report_sections() {
    let pos: BTreeSet<_> = [Pair::new("a", "b"), Pair::new("c", "d")].into_iter().collect();
    let neg: BTreeSet<_> = [Pair::new("e", "f")].into_iter().collect();
    let truth = GroundTruth::new(pos, neg);
    let ranked = RankedPairs::from_unsorted(vec![
      ScoredPair::new(Pair::new("b", "a"), 0.9),
      ScoredPair::new(Pair::new("e", "f"), 0.8),
      ScoredPair::new(Pair::new("c", "d"), 0.7),
    ]);
    let evaluation = evaluate(&truth, &ranked, DEFAULT_FALLBACK_THRESHOLD).unwrap();

    let report = ConsoleReport::new(&summary(), &evaluation);
    let text = report.as_str();

    assert!(text.contains("BEST THRESHOLD: 0.700000"));
    assert!(text.contains("Max F1:         0.8000"));
    assert!(text.contains("Precision:      0.6667"));
    assert!(text.contains("Recall:         1.0000"));
    assert!(text.contains("=== ERROR ANALYSIS (For Report) ==="));
    assert!(text.contains("--- 5 True Positives (Good Matches) ---"));
    assert!(text.contains("Score: 0.9000 | (a, b)"));
    assert!(text.contains("Score: 0.8000 | (e, f)"));
    assert!(text.contains("(None found below threshold - unlikely, check inputs)"));
    assert!(text.contains("(None found below threshold)"));
    assert!(!text.contains("fallback"));
  }

  #[test]
  fn test_fallback_notice() {
    let truth = GroundTruth::new(
      [Pair::new("a", "b")].into_iter().collect(),
      [Pair::new("e", "f")].into_iter().collect(),
    );
    let ranked = RankedPairs::from_unsorted(vec![ScoredPair::new(Pair::new("e", "f"), 0.5)]);
    let evaluation = evaluate(&truth, &ranked, DEFAULT_FALLBACK_THRESHOLD).unwrap();

    let text = ConsoleReport::new(&summary(), &evaluation).to_string();
    assert!(text.contains("BEST THRESHOLD: 0.010000"));
    assert!(text.contains("using fallback threshold 0.010000"));
    assert!(text.contains("--- 5 True Positives (Good Matches) ---\n(None found above threshold)"));
  }
}
