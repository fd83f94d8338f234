use crate::primitives::TextStyle;

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Approximate advance width of one character, in em.
fn advance_em(ch: char, bold: bool) -> f64 {
    let base = match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
        ' ' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' => 0.34,
        'm' | 'w' | 'M' | 'W' => 0.86,
        c if c.is_ascii_digit() => 0.56,
        c if c.is_ascii_uppercase() => 0.66,
        _ => 0.54,
    };
    if bold { base * 1.06 } else { base }
}

/// Estimate text extents in points without loading font files.
///
/// Widths are per-character averages for a sans-serif face, accurate to a few
/// percent; good enough for margin and legend layout.
pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    let em: f64 = text.chars().map(|c| advance_em(c, style.bold)).sum();
    TextMetrics { width: em * style.size, height: style.size * 1.2, ascent: style.size * 0.93 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let m = measure_text("Hello", &TextStyle::sized(12.0));
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn bold_wider_than_regular() {
        let r = measure_text("Test", &TextStyle::sized(12.0));
        let b = measure_text("Test", &TextStyle { bold: true, ..TextStyle::sized(12.0) });
        assert!(b.width > r.width);
    }

    #[test]
    fn empty_is_zero_width() {
        assert_eq!(measure_text("", &TextStyle::default()).width, 0.0);
    }
}
