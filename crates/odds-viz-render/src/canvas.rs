use std::fmt::{Display, Write as FmtWrite};

use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_text};

/// Builder for one self-closing or text-bearing SVG tag.
struct Tag {
    buf: String,
}

impl Tag {
    fn open(name: &str) -> Self {
        Self { buf: format!("<{name}") }
    }

    fn attr(mut self, key: &str, value: impl Display) -> Self {
        let _ = write!(self.buf, r#" {key}="{value}""#);
        self
    }

    fn coord(self, key: &str, value: f64) -> Self {
        self.attr(key, format_args!("{value:.2}"))
    }

    fn paint(self, style: &Style) -> Self {
        let tag = self.attr("fill", style.fill.map_or_else(|| "none".to_string(), |c| c.to_svg_fill()));
        match style.stroke {
            Some((color, width)) => tag.attr("stroke", color).coord("stroke-width", width),
            None => tag,
        }
    }

    fn stroke(self, style: &LineStyle) -> Self {
        let tag = self.attr("stroke", style.color).coord("stroke-width", style.width);
        match style.dash {
            Some(dash) => tag.attr("stroke-dasharray", dash),
            None => tag,
        }
    }

    fn close(mut self) -> String {
        self.buf.push_str(" />\n");
        self.buf
    }

    fn wrap(mut self, name: &str, body: &str) -> String {
        self.buf.push('>');
        escape_into(&mut self.buf, body);
        let _ = writeln!(self.buf, "</{name}>");
        self.buf
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
///
/// Drawing calls append markup to the innermost open layer. The bottom layer is
/// the document body; each [`Canvas::push_clip`] opens a layer that
/// [`Canvas::pop_clip`] closes into a clipped `<g>`.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    font_family: String,
    defs: String,
    layers: Vec<(Option<String>, String)>,
    clip_count: usize,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> crate::Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(crate::RenderError::Layout(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            font_family: "Inter, sans-serif".into(),
            defs: String::new(),
            layers: vec![(None, String::new())],
            clip_count: 0,
        })
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    fn emit(&mut self, markup: String) {
        if let Some((_, body)) = self.layers.last_mut() {
            body.push_str(&markup);
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        let tag = Tag::open("rect").coord("x", x).coord("y", y).coord("width", w).coord("height", h);
        self.emit(tag.paint(style).close());
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        let tag = Tag::open("line").coord("x1", x1).coord("y1", y1).coord("x2", x2).coord("y2", y2);
        self.emit(tag.stroke(style).close());
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        let pts: Vec<String> = points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect();
        let tag = Tag::open("polyline").attr("points", pts.join(" ")).attr("fill", "none");
        self.emit(tag.stroke(style).close());
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.text_tag(x, y, content, style, None);
    }

    /// Text rotated by `angle` degrees around its anchor point.
    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.text_tag(x, y, content, style, Some(angle));
    }

    fn text_tag(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: Option<f64>) {
        let mut tag = Tag::open("text")
            .coord("x", x)
            .coord("y", y)
            .attr("font-family", &self.font_family)
            .attr("font-size", format_args!("{:.1}", style.size))
            .attr("fill", style.color)
            .attr("text-anchor", style.anchor.svg_value())
            .attr("dominant-baseline", style.baseline.svg_value());
        if style.bold {
            tag = tag.attr("font-weight", "bold");
        }
        if style.italic {
            tag = tag.attr("font-style", "italic");
        }
        if let Some(angle) = angle {
            tag = tag.attr("transform", format_args!("rotate({angle:.1},{x:.2},{y:.2})"));
        }
        self.emit(tag.wrap("text", content));
    }

    /// Closed region between `y_lo` and `y_hi` over the x positions. Mismatched or
    /// single-point input draws nothing.
    pub fn fill_between(&mut self, x: &[f64], y_lo: &[f64], y_hi: &[f64], style: &Style) {
        if x.len() < 2 || y_lo.len() != x.len() || y_hi.len() != x.len() {
            return;
        }
        let upper = x.iter().zip(y_hi);
        let lower = x.iter().zip(y_lo).rev();
        let d: Vec<String> = upper
            .chain(lower)
            .enumerate()
            .map(|(i, (x, y))| format!("{}{x:.2},{y:.2}", if i == 0 { 'M' } else { 'L' }))
            .collect();
        let tag = Tag::open("path").attr("d", format_args!("{}Z", d.join(" ")));
        self.emit(tag.paint(style).close());
    }

    /// Clip everything drawn until the matching [`Canvas::pop_clip`] to a rectangle.
    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.clip_count);
        self.clip_count += 1;
        let rect = Tag::open("rect").coord("x", x).coord("y", y).coord("width", w).coord("height", h).close();
        let _ = write!(self.defs, r#"<clipPath id="{id}">{}</clipPath>"#, rect.trim_end());
        self.defs.push('\n');
        self.layers.push((Some(id.clone()), String::new()));
        id
    }

    pub fn pop_clip(&mut self) {
        if self.layers.len() < 2 {
            return;
        }
        if let Some((Some(id), body)) = self.layers.pop() {
            self.emit(format!("<g clip-path=\"url(#{id})\">\n{body}</g>\n"));
        }
    }

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_text(content, style)
    }

    /// Close any open clip layers and serialize the document.
    pub fn finish_svg(mut self) -> String {
        while self.layers.len() > 1 {
            self.pop_clip();
        }
        let body = self.layers.pop().map(|(_, body)| body).unwrap_or_default();

        let mut out = String::with_capacity(body.len() + self.defs.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        if !self.defs.is_empty() {
            let _ = write!(out, "<defs>\n{}</defs>\n", self.defs);
        }
        out.push_str(&Tag::open("rect").attr("width", self.width).attr("height", self.height).attr("fill", Color::WHITE).close());
        out.push_str(&body);
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas_has_size_and_background() {
        let svg = Canvas::new(100.0, 50.0).unwrap().finish_svg();
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn rect_with_outline() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        c.rect(10.0, 20.0, 50.0, 30.0, &Style::filled(Color::hex("#ff0000")).outlined(Color::BLACK, 0.5));
        let svg = c.finish_svg();
        assert!(svg.contains(r##"<rect x="10.00" y="20.00" width="50.00" height="30.00" fill="#ff0000" stroke="#000000" stroke-width="0.50" />"##));
    }

    #[test]
    fn nested_clips_close_in_order() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        let outer = c.push_clip(0.0, 0.0, 100.0, 100.0);
        let inner = c.push_clip(10.0, 10.0, 50.0, 50.0);
        c.polyline(&[(0.0, 0.0), (100.0, 100.0)], &LineStyle::solid(Color::BLACK, 1.0));
        c.pop_clip();
        // The outer layer is left open; finish_svg closes it.
        let svg = c.finish_svg();
        let o = svg.find(&format!("url(#{outer})")).unwrap();
        let i = svg.find(&format!("url(#{inner})")).unwrap();
        assert!(o < i);
        assert!(svg.contains(r#"<clipPath id="clip1">"#));
        assert_eq!(svg.matches("</g>").count(), 2);
    }

    #[test]
    fn stray_pop_is_ignored() {
        let mut c = Canvas::new(10.0, 10.0).unwrap();
        c.pop_clip();
        c.line(0.0, 0.0, 1.0, 1.0, &LineStyle::dashed(Color::BLACK, 1.0, DASH_GRID));
        let svg = c.finish_svg();
        assert!(svg.contains(r#"stroke-dasharray="3 3""#));
    }

    #[test]
    fn fill_between_closes_path() {
        let mut c = Canvas::new(10.0, 10.0).unwrap();
        c.fill_between(&[0.0, 1.0], &[5.0, 5.0], &[2.0, 3.0], &Style::filled(Color::BLACK));
        c.fill_between(&[0.0, 1.0], &[5.0], &[2.0, 3.0], &Style::filled(Color::BLACK));
        let svg = c.finish_svg();
        assert!(svg.contains(r#"d="M0.00,2.00 L1.00,3.00 L1.00,5.00 L0.00,5.00Z""#));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn invalid_size_rejected() {
        assert!(Canvas::new(0.0, 10.0).is_err());
        assert!(Canvas::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn text_is_escaped_and_styled() {
        let mut c = Canvas::new(200.0, 100.0).unwrap();
        let style = TextStyle { italic: true, ..TextStyle::sized(9.0) };
        c.text(10.0, 20.0, "P(X < 3 & Y)", &style);
        let svg = c.finish_svg();
        assert!(svg.contains("P(X &lt; 3 &amp; Y)</text>"));
        assert!(svg.contains(r#"font-family="Inter, sans-serif" font-size="9.0""#));
        assert!(svg.contains(r#"font-style="italic""#));
    }
}
