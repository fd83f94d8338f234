use serde::{Deserialize, Serialize};
use std::fmt;

/// sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).ok();
        match digits.len() {
            // Short form doubles each digit: `#abc` is `#aabbcc`.
            3 => {
                let mut it = digits.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Self::rgb(it.next()??, it.next()??, it.next()??))
            }
            6 | 8 => {
                let rgb = Self::rgb(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?);
                match digits.get(6..8) {
                    Some(a) => Some(rgb.with_alpha(f64::from(channel(a)?) / 255.0)),
                    None => Some(rgb),
                }
            }
            _ => None,
        }
    }

    /// Like [`Color::parse`] for trusted literals; malformed input gives black.
    pub fn hex(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::BLACK)
    }

    /// Value for an SVG `fill`/`stroke` attribute.
    pub fn to_svg_fill(&self) -> String {
        self.to_string()
    }

    fn is_opaque(&self) -> bool {
        self.a >= 1.0 - 1e-6
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let hex = format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        if self.is_opaque() {
            serializer.serialize_str(&hex)
        } else {
            serializer.serialize_str(&format!("{hex}{:02x}", (self.a.clamp(0.0, 1.0) * 255.0).round() as u8))
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color {:?}, expected #rrggbb", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_hex() {
        assert_eq!(Color::parse("#1D4ED8"), Some(Color::rgb(0x1D, 0x4E, 0xD8)));
        assert_eq!(Color::parse("6b7280"), Some(Color::rgb(0x6b, 0x72, 0x80)));
        assert_eq!(Color::parse("#fa0"), Some(Color::rgb(0xff, 0xaa, 0x00)));
        assert_eq!(Color::parse("#00000080"), Some(Color::BLACK.with_alpha(128.0 / 255.0)));
    }

    #[test]
    fn malformed_hex_rejected() {
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("blue"), None);
        assert_eq!(Color::parse("#ggg"), None);
        assert_eq!(Color::hex("nope"), Color::BLACK);
    }

    #[test]
    fn serializes_as_hex() {
        let c = Color::rgb(0x6b, 0x72, 0x80);
        assert_eq!(serde_json::to_string(&c).unwrap(), r##""#6b7280""##);
        let back: Color = serde_json::from_str(r##""#6b728080""##).unwrap();
        assert_eq!(serde_json::to_string(&back).unwrap(), r##""#6b728080""##);
    }

    #[test]
    fn svg_fill_forms() {
        assert_eq!(Color::rgb(29, 78, 216).to_svg_fill(), "#1d4ed8");
        assert_eq!(Color::rgb(29, 78, 216).with_alpha(0.5).to_svg_fill(), "rgba(29,78,216,0.500)");
    }
}
