use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Feature switches for a single analysis run.
///
/// Every historical flavour of the report (plain totals, totals with a mana
/// curve, curve plus sorceries and sample hands) is one of these settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Recognize `Sorceries:` as a section header.
    pub include_sorceries: bool,
    /// Count entries per CMC and draw the mana-curve histogram.
    pub render_mana_curve: bool,
    /// Shuffle the pool and print an opening hand with draws.
    pub render_sample_hand: bool,
    /// Also treat lines starting with `/` as comments.
    pub legacy_comment_syntax: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Variant::Full.config()
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Named presets for [`AnalysisConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Section totals only; `/` starts a comment.
    Legacy,
    /// Section totals plus the mana curve.
    Curve,
    /// Sorceries, mana curve and sample hand.
    Full,
}

impl Variant {
    pub fn config(self) -> AnalysisConfig {
        match self {
            Variant::Legacy => AnalysisConfig {
                include_sorceries: false,
                render_mana_curve: false,
                render_sample_hand: false,
                legacy_comment_syntax: true,
            },
            Variant::Curve => AnalysisConfig {
                include_sorceries: false,
                render_mana_curve: true,
                render_sample_hand: false,
                legacy_comment_syntax: false,
            },
            Variant::Full => AnalysisConfig {
                include_sorceries: true,
                render_mana_curve: true,
                render_sample_hand: true,
                legacy_comment_syntax: false,
            },
        }
    }
}
