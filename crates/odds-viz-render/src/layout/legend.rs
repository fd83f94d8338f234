use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

const SWATCH_WIDTH: f64 = 14.0;
const PADDING: f64 = 6.0;
const GAP: f64 = 6.0;

/// One legend row: a swatch and its label.
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub kind: LegendKind,
}

pub enum LegendKind {
    FilledRect,
    /// Stroke sample with an optional dash pattern.
    Line(Option<&'static str>),
}

impl LegendEntry {
    pub fn rect(label: impl Into<String>, color: Color) -> Self {
        Self { label: label.into(), color, kind: LegendKind::FilledRect }
    }

    pub fn line(label: impl Into<String>, color: Color, dash: Option<&'static str>) -> Self {
        Self { label: label.into(), color, kind: LegendKind::Line(dash) }
    }

    /// Draw the swatch with its left edge at `x`, centred on `y`.
    fn draw_swatch(&self, canvas: &mut Canvas, x: f64, y: f64, height: f64) {
        match self.kind {
            LegendKind::FilledRect => {
                canvas.rect(x, y - height / 2.0, SWATCH_WIDTH, height, &Style::filled(self.color));
            }
            LegendKind::Line(dash) => {
                let stroke = LineStyle { color: self.color, width: 1.5, dash };
                canvas.line(x, y, x + SWATCH_WIDTH, y, &stroke);
            }
        }
    }
}

/// Legend box in the top-right corner of the plot area. The box is outlined
/// when the axes frame is closed.
pub fn draw_legend(canvas: &mut Canvas, area: &PlotArea, entries: &[LegendEntry], config: &VizConfig) {
    if entries.is_empty() {
        return;
    }
    let font_size = config.font.size;
    let row = font_size + 4.0;
    let label_style = TextStyle::sized(font_size * 0.85).anchored(TextAnchor::Start, TextBaseline::Central);

    let widest = entries.iter().map(|e| canvas.measure_text(&e.label, &label_style).width).fold(0.0, f64::max);
    let width = 2.0 * PADDING + SWATCH_WIDTH + GAP + widest;
    let height = 2.0 * PADDING + row * entries.len() as f64;
    let (left, top) = (area.right() - width - 5.0, area.top + 5.0);

    let mut backdrop = Style::filled(Color::WHITE.with_alpha(0.9));
    if config.axes.full_frame {
        backdrop = backdrop.outlined(Color::rgb(200, 200, 200), 0.5);
    }
    canvas.rect(left, top, width, height, &backdrop);

    let swatch_x = left + PADDING;
    for (i, entry) in entries.iter().enumerate() {
        let y = top + PADDING + row * (i as f64 + 0.5);
        entry.draw_swatch(canvas, swatch_x, y, font_size - 2.0);
        canvas.text(swatch_x + SWATCH_WIDTH + GAP, y, &entry.label, &label_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_entry_order() {
        let cfg = VizConfig::default();
        let mut canvas = Canvas::new(300.0, 200.0).unwrap();
        let area = PlotArea { left: 40.0, top: 20.0, width: 240.0, height: 150.0 };
        let entries = [
            LegendEntry::line("simulated", Color::BLACK, None),
            LegendEntry::line("exact p = 0.5000", Color::rgb(220, 38, 38), Some(DASH_REFERENCE)),
            LegendEntry::rect("inside interval", Color::rgb(245, 133, 24)),
        ];
        draw_legend(&mut canvas, &area, &entries, &cfg);
        let svg = canvas.finish_svg();
        let pos = |s: &str| svg.find(s).unwrap();
        assert!(pos(">simulated<") < pos(">exact p = 0.5000<"));
        assert!(pos(">exact p = 0.5000<") < pos(">inside interval<"));
        assert!(svg.contains(r#"stroke-dasharray="6 3""#));
        assert!(svg.contains(r##"stroke="#c8c8c8""##));
    }

    #[test]
    fn open_frame_legend_has_no_outline() {
        let mut cfg = VizConfig::default();
        cfg.axes.full_frame = false;
        let mut canvas = Canvas::new(300.0, 200.0).unwrap();
        let area = PlotArea { left: 40.0, top: 20.0, width: 240.0, height: 150.0 };
        draw_legend(&mut canvas, &area, &[LegendEntry::rect("bar", Color::BLACK)], &cfg);
        draw_legend(&mut canvas, &area, &[], &cfg);
        let svg = canvas.finish_svg();
        assert!(!svg.contains("stroke="));
        assert_eq!(svg.matches(">bar<").count(), 1);
    }
}
