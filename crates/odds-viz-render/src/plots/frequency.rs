use odds_viz::frequency::FrequencyCurveArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::draw_title;
use crate::layout::axes::Axis;
use crate::layout::legend::{LegendEntry, draw_legend};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

/// Relative frequency vs. trials, with the exact probability and its sampling band.
pub fn render(artifact: &FrequencyCurveArtifact, config: &VizConfig) -> crate::Result<String> {
    if artifact.trials.is_empty() {
        return Ok(empty_svg());
    }
    if artifact.trials.len() != artifact.frequencies.len() {
        return Err(crate::RenderError::Layout(format!(
            "trials ({}) and frequencies ({}) differ in length",
            artifact.trials.len(),
            artifact.frequencies.len()
        )));
    }

    let mut canvas =
        Canvas::new(config.figure.width, config.figure.height)?.with_font_family(config.font.family.clone());

    let t_min = artifact.trials.first().copied().unwrap_or(1).max(1) as f64;
    let t_max = artifact.trials.last().copied().unwrap_or(1) as f64;
    let x_axis = if config.frequency.log_x {
        Axis::log(t_min, t_max)
    } else {
        Axis::linear(0.0, t_max, 6)
    }
    .with_label("trials");
    let y_axis = Axis::linear(0.0, 1.0, 6).with_label("relative frequency");

    let area = PlotArea::auto(&canvas, &y_axis, &x_axis, true, config);
    let note = match artifact.seed {
        Some(seed) => format!("n = {}, seed = {}", artifact.n_trials, seed),
        None => format!("n = {}", artifact.n_trials),
    };
    draw_title(&mut canvas, &area, "Relative frequency", Some(&note), config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    let px = |t: u64| x_axis.to_pixel((t as f64).max(t_min), area.left, area.right());
    let py = |v: f64| y_axis.to_pixel(v, area.bottom(), area.top);

    canvas.push_clip(area.left, area.top, area.width, area.height);

    if let Some(p) = artifact.expected {
        if config.frequency.show_band {
            let sd = (p * (1.0 - p)).sqrt();
            let xs: Vec<f64> = artifact.trials.iter().map(|&t| px(t)).collect();
            let (lo, hi): (Vec<f64>, Vec<f64>) = artifact
                .trials
                .iter()
                .map(|&t| {
                    let half = config.frequency.band_z * sd / (t.max(1) as f64).sqrt();
                    (py((p - half).max(0.0)), py((p + half).min(1.0)))
                })
                .unzip();
            canvas.fill_between(&xs, &lo, &hi, &Style::filled(config.colors.band.with_alpha(0.35)));
        }
        let y = py(p);
        canvas.line(area.left, y, area.right(), y, &LineStyle::dashed(config.colors.expected, 1.0, DASH_REFERENCE));
    }

    let points: Vec<(f64, f64)> =
        artifact.trials.iter().zip(&artifact.frequencies).map(|(&t, &f)| (px(t), py(f))).collect();
    canvas.polyline(&points, &LineStyle::solid(config.colors.observed, 1.2));

    canvas.pop_clip();

    let mut entries = vec![LegendEntry::line("simulated", config.colors.observed, None)];
    if let Some(p) = artifact.expected {
        entries.push(LegendEntry::line(format!("exact p = {:.4}", p), config.colors.expected, Some(DASH_REFERENCE)));
        if config.frequency.show_band {
            entries.push(LegendEntry::rect(
                format!("\u{00B1}{} \u{03C3} band", config.frequency.band_z),
                config.colors.band.with_alpha(0.35),
            ));
        }
    }
    draw_legend(&mut canvas, &area, &entries, config);

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No frequency data</text></svg>"#.into()
}
