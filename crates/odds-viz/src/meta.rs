use std::time::{SystemTime, UNIX_EPOCH};

use odds_core::Result;
use serde::{Deserialize, Serialize};

/// Provenance block attached to artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// Producing tool name.
    pub tool: String,
    /// Producing tool version.
    pub tool_version: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_unix_ms: u128,
}

impl ArtifactMeta {
    /// Metadata stamped with the current time.
    pub fn now() -> Result<Self> {
        let d = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| odds_core::Error::Validation(format!("system time error: {}", e)))?;
        Ok(Self {
            tool: "odds".into(),
            tool_version: odds_core::VERSION.into(),
            created_unix_ms: d.as_millis(),
        })
    }
}
