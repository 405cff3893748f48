//! Command-line entry point for DIRT paraphrase evaluation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dirt_eval::{Config, ConfigOverrides, EvalError, logging::init_logging, run};
use dirt_core::{PathConverter, StemmerKind};
use tracing::error;

#[derive(Parser)]
#[command(name = "dirt-eval")]
#[command(about = "Evaluate DIRT paraphrase scores against labeled phrase pairs")]
#[command(version)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Pick the F1-optimal threshold and report examples and the PR curve
  Evaluate {
    /// Config file (default: ./dirt-eval.toml, then the user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the scored output files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Positive phrase pairs
    #[arg(long)]
    positive: Option<PathBuf>,

    /// Negative phrase pairs
    #[arg(long)]
    negative: Option<PathBuf>,

    /// Output file glob inside the output directory
    #[arg(long)]
    pattern: Option<String>,

    /// Stemmer for test phrases (porter, suffix)
    #[arg(long)]
    stemmer: Option<StemmerKind>,

    /// PR-curve image path (.svg for SVG)
    #[arg(long, conflicts_with = "no_plot")]
    plot: Option<PathBuf>,

    /// Skip the PR-curve image
    #[arg(long)]
    no_plot: bool,

    /// Also write a JSON report
    #[arg(long)]
    json: Option<PathBuf>,

    /// Threshold used when no labeled pair gives a positive F1
    #[arg(long)]
    fallback_threshold: Option<f64>,
  },

  /// Show the path each phrase converts to
  Convert {
    /// Stemmer for the phrases (porter, suffix)
    #[arg(long, default_value = "porter")]
    stemmer: StemmerKind,

    /// Phrases such as "X caused by Y"
    #[arg(required = true)]
    phrases: Vec<String>,
  },

  /// Print a commented config template
  InitConfig,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match cli.command {
    Commands::Evaluate {
      config,
      output_dir,
      positive,
      negative,
      pattern,
      stemmer,
      plot,
      no_plot,
      json,
      fallback_threshold,
    } => {
      let overrides = ConfigOverrides {
        output_dir,
        positive_file: positive,
        negative_file: negative,
        output_pattern: pattern,
        stemmer,
        fallback_threshold,
        plot_path: plot,
        no_plot,
        json_report: json,
      };
      cmd_evaluate(config, overrides)
    }
    Commands::Convert { stemmer, phrases } => {
      cmd_convert(stemmer, &phrases);
      Ok(())
    }
    Commands::InitConfig => {
      print!("{}", Config::generate_template());
      Ok(())
    }
  }
}

fn cmd_evaluate(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> anyhow::Result<()> {
  let config = Config::load(config_path.as_deref())?.with_overrides(overrides)?;

  match run(&config) {
    Ok(outcome) => {
      print!("{}", outcome.report);
      Ok(())
    }
    Err(EvalError::NoScores(dir)) => {
      println!("No scores found. Check your output files.");
      error!("No positively scored pairs under {}", dir.display());
      std::process::exit(1);
    }
    Err(e) => Err(e.into()),
  }
}

fn cmd_convert(stemmer: StemmerKind, phrases: &[String]) {
  let converter = PathConverter::new(stemmer.build());
  for phrase in phrases {
    match converter.convert(phrase) {
      Some(path) => println!("{}\t{}", phrase, path),
      None => println!("{}\t<no path>", phrase),
    }
  }
}
