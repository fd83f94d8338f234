use odds_viz::distribution::DistributionArtifact;

use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::header::draw_title;
use crate::layout::axes::{Axis, value_pitch};
use crate::layout::legend::{LegendEntry, draw_legend};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

/// Bar chart of a discrete distribution; bars inside the highlight interval get their own color.
pub fn render(artifact: &DistributionArtifact, config: &VizConfig) -> crate::Result<String> {
    if artifact.values.is_empty() {
        return Ok(empty_svg());
    }
    let heights: Vec<f64> = if config.distribution.show_weights {
        artifact.weights.iter().map(|&w| w as f64).collect()
    } else {
        artifact.probabilities.clone()
    };
    if heights.len() != artifact.values.len() {
        return Err(crate::RenderError::Layout(format!(
            "values ({}) and bar heights ({}) differ in length",
            artifact.values.len(),
            heights.len()
        )));
    }

    if artifact.values.windows(2).any(|w| w[0].partial_cmp(&w[1]) != Some(std::cmp::Ordering::Less)) {
        return Err(crate::RenderError::Layout("distribution values must be strictly ascending".into()));
    }

    let mut canvas =
        Canvas::new(config.figure.width, config.figure.height)?.with_font_family(config.font.family.clone());

    let x_axis = Axis::discrete(&artifact.values, 12).with_label("value");

    let h_max = heights.iter().copied().fold(0.0_f64, f64::max);
    let y_label = if config.distribution.show_weights { "weight" } else { "probability" };
    let y_axis = Axis::linear(0.0, h_max * 1.1, 5).with_label(y_label);

    let area = PlotArea::auto(&canvas, &y_axis, &x_axis, !artifact.title.is_empty(), config);
    let note = artifact
        .highlight
        .as_ref()
        .map(|h| format!("P({} \u{2264} X \u{2264} {}) = {:.6}", h.lo, h.hi, h.probability));
    draw_title(&mut canvas, &area, &artifact.title, note.as_deref(), config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    canvas.push_clip(area.left, area.top, area.width, area.height);

    let half_w = value_pitch(&artifact.values) * config.distribution.bar_width / 2.0;
    let base = y_axis.to_pixel(0.0, area.bottom(), area.top);
    for (&v, &h) in artifact.values.iter().zip(&heights) {
        let x0 = x_axis.to_pixel(v - half_w, area.left, area.right());
        let x1 = x_axis.to_pixel(v + half_w, area.left, area.right());
        let top = y_axis.to_pixel(h, area.bottom(), area.top);
        let highlighted = artifact.highlight.as_ref().is_some_and(|hl| hl.lo <= v && v <= hl.hi);
        let color = if highlighted { config.colors.highlight } else { config.colors.bar };
        canvas.rect(x0, top, (x1 - x0).max(0.5), (base - top).max(0.0), &Style::filled(color));
    }

    canvas.pop_clip();

    if artifact.highlight.is_some() {
        let entries = [
            LegendEntry::rect("outside interval", config.colors.bar),
            LegendEntry::rect("inside interval", config.colors.highlight),
        ];
        draw_legend(&mut canvas, &area, &entries, config);
    }

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No distribution data</text></svg>"#.into()
}
