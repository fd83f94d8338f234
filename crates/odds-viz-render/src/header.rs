use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw the plot title (bold, left) and an optional note (right), above the frame.
pub fn draw_title(canvas: &mut Canvas, area: &PlotArea, title: &str, note: Option<&str>, config: &VizConfig) {
    let y = area.top - 6.0;

    if !title.is_empty() {
        let title_style = TextStyle { bold: true, ..TextStyle::sized(config.font.label_size * 1.15) };
        canvas.text(area.left, y, title, &title_style);
    }

    if let Some(note) = note.filter(|n| !n.is_empty()) {
        let note_style = TextStyle {
            color: Color::rgb(80, 80, 80),
            italic: true,
            anchor: TextAnchor::End,
            ..TextStyle::sized(config.font.tick_size)
        };
        canvas.text(area.right(), y, note, &note_style);
    }
}
