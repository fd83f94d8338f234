use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub frequency: FrequencyConfig,
    pub distribution: DistributionConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Odds.base_config()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 518.4,  // 7.2" * 72
            height: 302.4, // 4.2" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { family: "Inter, sans-serif".into(), size: 10.0, label_size: 11.0, tick_size: 8.5 }
    }
}

/// Which side of the frame tick marks point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
}

impl TickDirection {
    /// Signed tick extent, positive away from the plot area.
    pub fn outward(self, length: f64) -> f64 {
        match self {
            TickDirection::In => -length,
            TickDirection::Out => length,
        }
    }

    /// Room ticks take outside the frame.
    pub fn outset(self, length: f64) -> f64 {
        self.outward(length).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: TickDirection,
    pub tick_length: f64,
    /// Close the frame with top and right edges; otherwise only the left and bottom spines.
    pub full_frame: bool,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self { tick_direction: TickDirection::In, tick_length: 5.0, full_frame: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub observed: Color,
    pub expected: Color,
    pub band: Color,
    pub bar: Color,
    pub highlight: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            observed: Color::hex("#111827"),
            expected: Color::hex("#DC2626"),
            band: Color::hex("#7BD389"),
            bar: Color::hex("#4C78A8"),
            highlight: Color::hex("#F58518"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Shade `expected ± z * sqrt(p(1-p)/n)` around the exact probability.
    pub show_band: bool,
    pub band_z: f64,
    pub log_x: bool,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self { show_band: true, band_z: 1.96, log_x: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Plot weights instead of probabilities on the y axis.
    pub show_weights: bool,
    /// Bar width as a fraction of the spacing between adjacent values.
    pub bar_width: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self { show_weights: false, bar_width: 0.8 }
    }
}

/// Resolve a VizConfig from optional YAML string.
///
/// `theme` picks the base config; every field the YAML sets overrides it, at
/// any nesting depth, and everything else keeps the theme's value.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    let Some(yaml) = user_yaml else {
        return Ok(VizConfig::default());
    };
    let config_err = |e: serde_yaml_ng::Error| crate::RenderError::Config(e.to_string());
    let user: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml).map_err(config_err)?;
    let theme = user.get("theme").and_then(|t| t.as_str()).unwrap_or("odds");
    let base = BuiltinTheme::parse(theme).base_config();

    let mut merged = serde_yaml_ng::to_value(&base).map_err(config_err)?;
    overlay(&mut merged, user);
    let mut config: VizConfig = serde_yaml_ng::from_value(merged).map_err(config_err)?;
    config.theme = base.theme;
    validate(&config)?;
    Ok(config)
}

/// Recursively replace `base` entries with those from `user`; mappings merge key by key.
fn overlay(base: &mut serde_yaml_ng::Value, user: serde_yaml_ng::Value) {
    match (base, user) {
        (serde_yaml_ng::Value::Mapping(base), serde_yaml_ng::Value::Mapping(user)) => {
            for (key, value) in user {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn validate(config: &VizConfig) -> crate::Result<()> {
    if !(config.figure.width > 0.0 && config.figure.height > 0.0) {
        return Err(crate::RenderError::Config(format!(
            "figure size must be positive, got {}x{}",
            config.figure.width, config.figure.height
        )));
    }
    if !(config.distribution.bar_width > 0.0 && config.distribution.bar_width <= 1.0) {
        return Err(crate::RenderError::Config(format!(
            "distribution.bar_width must be in (0, 1], got {}",
            config.distribution.bar_width
        )));
    }
    Ok(())
}
