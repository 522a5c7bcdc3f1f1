//! Default filter parameters used when a directive carries none.
//!
//! Every field is optional in the JSON form; missing ones fall back to the
//! values the chat bot has always used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub blur: BlurConfig,
    pub salt_pepper: SaltPepperConfig,
    pub segment: SegmentConfig,
    pub median: MedianConfig,
    pub edge: EdgeConfig,
    /// Seed for the engine's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub kernel_size: usize,
    pub iterations: usize,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            kernel_size: 10,
            iterations: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaltPepperConfig {
    pub salt_prob: f32,
    pub pepper_prob: f32,
}

impl Default for SaltPepperConfig {
    fn default() -> Self {
        Self {
            salt_prob: 0.01,
            pepper_prob: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Pixels closer than this to a segment anchor join that segment.
    pub threshold: f32,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self { threshold: 10.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianConfig {
    pub intensity: f32,
}

impl Default for MedianConfig {
    fn default() -> Self {
        Self { intensity: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub intensity: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}

impl FilterConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

pub fn load_config(path: &Path) -> Result<FilterConfig> {
    let data = fs::read_to_string(path)?;
    let config = FilterConfig::from_json_str(&data)?;
    tracing::debug!(path = %path.display(), ?config, "loaded filter config");
    Ok(config)
}
