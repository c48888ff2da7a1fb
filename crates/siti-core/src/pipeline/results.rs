use serde::Serialize;

use super::config::PipelineConfig;

/// Resolved configuration echoed into the results for reproducibility.
#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub version: String,
    #[serde(flatten)]
    pub config: PipelineConfig,
}

impl Settings {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
        }
    }
}

/// Result artifact of one `calculate()` run.
///
/// `ti` always holds one value less than `si`: the first frame has no
/// predecessor to difference against.
#[derive(Clone, Debug, Serialize)]
pub struct SitiResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
    pub si: Vec<f64>,
    pub ti: Vec<f64>,
    pub num_frames: usize,
    pub settings: Settings,
}
