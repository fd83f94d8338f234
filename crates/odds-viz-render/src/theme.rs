use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    Odds,
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Odds,
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Odds => odds(),
            Self::Minimal => minimal(),
        }
    }
}

fn odds() -> VizConfig {
    VizConfig {
        theme: "odds".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        frequency: FrequencyConfig::default(),
        distribution: DistributionConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 432.0, height: 302.4 },
        font: FontConfig { size: 9.0, label_size: 10.0, tick_size: 8.0, ..FontConfig::default() },
        axes: AxesConfig { tick_direction: TickDirection::Out, tick_length: 4.0, full_frame: false },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig { bar: Color::hex("#6B7280"), ..ColorsConfig::default() },
        ..odds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_to_odds() {
        assert_eq!(BuiltinTheme::parse("MINIMAL"), BuiltinTheme::Minimal);
        assert_eq!(BuiltinTheme::parse("atlas"), BuiltinTheme::Odds);
        assert_eq!(BuiltinTheme::Minimal.base_config().theme, "minimal");
    }
}
