//! Precision-recall curve rendering.

use std::path::Path;

use dirt_core::{PrCurve, ThresholdDecision};
use plotters::{coord::Shift, prelude::*};
use tracing::info;

use crate::{EvalError, Result};

const CAPTION: &str = "Precision-Recall Curve";
const SERIES_LABEL: &str = "DIRT Algorithm";

fn is_svg(path: &Path) -> bool {
  path
    .extension()
    .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Render `curve` to `path`.
///
/// A `.svg` extension selects the SVG backend. Anything else is a bitmap
/// whose format follows the extension (`.png`, `.jpg`, `.bmp`). The chosen cut is marked unless it came from the fallback.
/// Bitmaps carry text only when built with the `fonts` feature, since
/// plotters cannot rasterize glyphs without a font backend.
pub fn render_pr_curve(curve: &PrCurve, decision: &ThresholdDecision, path: &Path, size: (u32, u32)) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)?;
  }

  let drawn = if is_svg(path) {
    draw_chart(SVGBackend::new(path, size).into_drawing_area(), curve, decision, true).map_err(|e| e.to_string())
  } else {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_chart(root, curve, decision, cfg!(feature = "fonts")).map_err(|e| e.to_string())
  };
  drawn.map_err(EvalError::Plot)?;

  info!("Graph saved as '{}'", path.display());
  Ok(())
}

fn draw_chart<DB: DrawingBackend>(
  root: DrawingArea<DB, Shift>,
  curve: &PrCurve,
  decision: &ThresholdDecision,
  with_text: bool,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
  root.fill(&WHITE)?;

  let mut builder = ChartBuilder::on(&root);
  builder.margin(10).x_label_area_size(40).y_label_area_size(50);
  if with_text {
    builder.caption(CAPTION, ("sans-serif", 20));
  }
  let mut chart = builder.build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.05f64)?;

  let mut mesh = chart.configure_mesh();
  if with_text {
    mesh.x_desc("Recall").y_desc("Precision").x_labels(11).y_labels(11);
  } else {
    mesh.x_labels(0).y_labels(0);
  }
  mesh.draw()?;

  chart
    .draw_series(LineSeries::new(curve.points(), BLUE))?
    .label(SERIES_LABEL)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

  if !decision.fallback_used {
    chart
      .draw_series(std::iter::once(Circle::new(
        (decision.recall, decision.precision),
        5,
        RED.filled(),
      )))?
      .label(format!("Best F1 = {:.4}", decision.f1))
      .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));
  }

  if with_text {
    chart
      .configure_series_labels()
      .position(SeriesLabelPosition::LowerLeft)
      .background_style(WHITE.mix(0.8))
      .border_style(BLACK)
      .draw()?;
  }

  root.present()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_svg_selection() {
    assert!(is_svg(Path::new("curve.svg")));
    assert!(is_svg(Path::new("out/curve.SVG")));
    assert!(!is_svg(Path::new("precision_recall_curve.png")));
    assert!(!is_svg(Path::new("curve")));
  }
}
