//! SVG rendering of odds-viz artifacts.

pub mod canvas;
pub mod color;
pub mod config;
pub mod header;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::VizConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render an artifact JSON to SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    let svg = match kind {
        "frequency" => {
            let art: odds_viz::frequency::FrequencyCurveArtifact = serde_json::from_str(artifact_json)?;
            plots::frequency::render(&art, config)?
        }
        "distribution" => {
            let art: odds_viz::distribution::DistributionArtifact = serde_json::from_str(artifact_json)?;
            plots::distribution::render(&art, config)?
        }
        other => return Err(RenderError::UnknownKind(other.to_string())),
    };
    Ok(svg)
}

/// Render an artifact JSON to an SVG file.
pub fn render_to_file(artifact_json: &str, kind: &str, path: &std::path::Path, config: &VizConfig) -> Result<()> {
    let svg = render_svg(artifact_json, kind, config)?;
    output::svg::save_svg(&svg, path)
}
