use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::axes::{Axis, Tick};
use crate::layout::margins::{PlotArea, widest_tick_label};
use crate::primitives::*;

/// Grid, frame, ticks with labels, and axis titles around `area`.
///
/// The grid goes down first so the frame and bars stay on top of it. With
/// `axes.full_frame` off only the left and bottom spines are drawn.
pub fn draw_axes(canvas: &mut Canvas, area: &PlotArea, x_axis: &Axis, y_axis: &Axis, config: &VizConfig) {
    let ink = Color::BLACK;
    let direction = config.axes.tick_direction;
    let reach = direction.outward(config.axes.tick_length);
    let outset = direction.outset(config.axes.tick_length);

    let x_ticks: Vec<(f64, &Tick)> = x_axis.placed_ticks(area.left, area.right()).collect();
    let y_ticks: Vec<(f64, &Tick)> = y_axis.placed_ticks(area.bottom(), area.top).collect();

    if config.grid.show {
        let grid = LineStyle::dashed(config.grid.color.with_alpha(config.grid.alpha), 0.5, DASH_GRID);
        for &(px, _) in &x_ticks {
            canvas.line(px, area.top, px, area.bottom(), &grid);
        }
        for &(py, _) in &y_ticks {
            canvas.line(area.left, py, area.right(), py, &grid);
        }
    }

    if config.axes.full_frame {
        canvas.rect(area.left, area.top, area.width, area.height, &Style::default().outlined(ink, 0.8));
    } else {
        let spine = LineStyle::solid(ink, 0.8);
        canvas.line(area.left, area.top, area.left, area.bottom(), &spine);
        canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &spine);
    }

    let tick = LineStyle::solid(ink, 0.6);
    let label = TextStyle { color: ink, ..TextStyle::sized(config.font.tick_size) };

    let below = label.anchored(TextAnchor::Middle, TextBaseline::Hanging);
    for (px, t) in &x_ticks {
        canvas.line(*px, area.bottom(), *px, area.bottom() + reach, &tick);
        canvas.text(*px, area.bottom() + outset + 3.0, &t.label, &below);
    }

    let beside = label.anchored(TextAnchor::End, TextBaseline::Central);
    for (py, t) in &y_ticks {
        canvas.line(area.left, *py, area.left - reach, *py, &tick);
        canvas.text(area.left - outset - 4.0, *py, &t.label, &beside);
    }

    let title = TextStyle::sized(config.font.label_size).anchored(TextAnchor::Middle, TextBaseline::Alphabetic);
    if !x_axis.label.is_empty() {
        let y = area.bottom() + outset + 3.0 + config.font.tick_size * 1.2 + config.font.label_size;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &title);
    }
    if !y_axis.label.is_empty() {
        let x = area.left - outset - 8.0 - widest_tick_label(canvas, y_axis, config.font.tick_size);
        canvas.text_rotated(x, area.top + area.height / 2.0, &y_axis.label, &title, -90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TickDirection, VizConfig};

    fn render(config: &VizConfig) -> String {
        let mut canvas = Canvas::new(300.0, 200.0).unwrap();
        let x = Axis::discrete(&[0.0, 1.0, 2.0, 3.0], 12).with_label("heads");
        let y = Axis::linear(0.0, 0.4, 4).with_label("probability");
        let area = PlotArea::auto(&canvas, &y, &x, false, config);
        draw_axes(&mut canvas, &area, &x, &y, config);
        canvas.finish_svg()
    }

    #[test]
    fn full_frame_is_one_outlined_rect() {
        let svg = render(&VizConfig::default());
        assert!(svg.contains(r##"fill="none" stroke="#000000" stroke-width="0.80""##));
        assert!(svg.contains(">heads</text>"));
        assert!(svg.contains("rotate(-90.0"));
        assert_eq!(svg.matches(r#"stroke-dasharray="3 3""#).count(), 4 + 5);
    }

    #[test]
    fn open_frame_has_two_spines_and_no_grid() {
        let mut cfg = VizConfig::default();
        cfg.axes.full_frame = false;
        cfg.axes.tick_direction = TickDirection::Out;
        cfg.grid.show = false;
        let svg = render(&cfg);
        assert!(!svg.contains(r##"fill="none" stroke="#000000""##));
        assert_eq!(svg.matches(r#"stroke-width="0.80""#).count(), 2);
        assert!(!svg.contains("stroke-dasharray"));
        // One tick label per discrete value.
        for v in ["0", "1", "2", "3"] {
            assert!(svg.contains(&format!(">{v}</text>")));
        }
    }
}
