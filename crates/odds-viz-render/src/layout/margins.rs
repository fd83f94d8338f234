use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Width of the widest tick label of `axis` at `size`.
pub fn widest_tick_label(canvas: &Canvas, axis: &Axis, size: f64) -> f64 {
    let style = TextStyle::sized(size);
    axis.ticks.iter().map(|t| canvas.measure_text(&t.label, &style).width).fold(0.0, f64::max)
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Leave room for tick labels, axis titles, outward ticks and the plot title.
    pub fn auto(canvas: &Canvas, y_axis: &Axis, x_axis: &Axis, has_title: bool, config: &VizConfig) -> Self {
        let font = &config.font;
        let outset = config.axes.tick_direction.outset(config.axes.tick_length);
        let title_room = |label: &str| if label.is_empty() { 0.0 } else { font.label_size * 1.2 + 4.0 };

        let left = 10.0 + title_room(&y_axis.label) + widest_tick_label(canvas, y_axis, font.tick_size) + 4.0 + outset;
        let bottom = 8.0 + title_room(&x_axis.label) + font.tick_size * 1.2 + 3.0 + outset;
        let top = if has_title { font.label_size * 1.15 + 20.0 } else { 12.0 };
        let right = 15.0;

        Self {
            left,
            top,
            width: (canvas.width - left - right).max(50.0),
            height: (canvas.height - top - bottom).max(50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TickDirection, VizConfig};

    fn axes() -> (Axis, Axis) {
        (Axis::linear(0.0, 10.0, 6).with_label("x"), Axis::linear(0.0, 1.0, 5).with_label("y"))
    }

    #[test]
    fn title_reserves_top_margin() {
        let canvas = Canvas::new(400.0, 300.0).unwrap();
        let (x, y) = axes();
        let cfg = VizConfig::default();
        let with = PlotArea::auto(&canvas, &y, &x, true, &cfg);
        let without = PlotArea::auto(&canvas, &y, &x, false, &cfg);
        assert!(with.top > without.top);
        assert!(with.right() <= 400.0);
        assert!(with.bottom() <= 300.0);
    }

    #[test]
    fn outward_ticks_take_room() {
        let canvas = Canvas::new(400.0, 300.0).unwrap();
        let (x, y) = axes();
        let mut cfg = VizConfig::default();
        cfg.axes.tick_direction = TickDirection::In;
        let inward = PlotArea::auto(&canvas, &y, &x, false, &cfg);
        cfg.axes.tick_direction = TickDirection::Out;
        let outward = PlotArea::auto(&canvas, &y, &x, false, &cfg);
        assert!((outward.left - inward.left - cfg.axes.tick_length).abs() < 1e-9);
        assert!(outward.bottom() < inward.bottom());
    }
}
