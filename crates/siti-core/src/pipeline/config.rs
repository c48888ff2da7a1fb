use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_GAMMA, DEFAULT_L_MAX, DEFAULT_L_MAX_HDR, DEFAULT_L_MIN, DEFAULT_L_MIN_HDR,
};
use crate::error::{Result, SitiError};

/// Mode of HDR calculation, SDR by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HdrMode {
    #[default]
    Sdr,
    Hdr10,
    Hlg,
}

impl HdrMode {
    pub fn is_hdr(self) -> bool {
        !matches!(self, Self::Sdr)
    }
}

/// Limited (16-235) or full (0-255) signal range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRange {
    #[default]
    Limited,
    Full,
}

/// EOTF used to map SDR signals to display luminance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EotfFunction {
    #[default]
    Bt1886,
    InvSrgb,
}

/// Perceptual domain the metrics are computed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationDomain {
    #[default]
    Pq,
    Pu21,
}

/// PU21 coefficient preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pu21Mode {
    Banding,
    #[default]
    BandingGlare,
    Peaks,
    PeaksGlare,
}

/// Raw, user-facing calculation options.
///
/// `l_min`/`l_max` are optional because their defaults depend on the
/// HDR mode; [`PipelineConfig::resolve`] fills them in. Loadable from a
/// TOML settings file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SitiOptions {
    pub hdr_mode: HdrMode,
    pub calculation_domain: CalculationDomain,
    pub color_range: ColorRange,
    pub bit_depth: u8,
    pub eotf_function: EotfFunction,
    pub gamma: f64,
    pub l_min: Option<f64>,
    pub l_max: Option<f64>,
    pub pu21_mode: Pu21Mode,
    pub legacy: bool,
}

impl Default for SitiOptions {
    fn default() -> Self {
        Self {
            hdr_mode: HdrMode::default(),
            calculation_domain: CalculationDomain::default(),
            color_range: ColorRange::default(),
            bit_depth: 8,
            eotf_function: EotfFunction::default(),
            gamma: DEFAULT_GAMMA,
            l_min: None,
            l_max: None,
            pu21_mode: Pu21Mode::default(),
            legacy: false,
        }
    }
}

/// Fully resolved, validated, immutable per-run configuration.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineConfig {
    pub hdr_mode: HdrMode,
    pub calculation_domain: CalculationDomain,
    pub color_range: ColorRange,
    pub bit_depth: u8,
    pub eotf_function: EotfFunction,
    pub gamma: f64,
    pub l_min: f64,
    pub l_max: f64,
    pub pu21_mode: Pu21Mode,
    pub legacy: bool,
}

impl PipelineConfig {
    /// Validate raw options, then resolve the display-luminance defaults
    /// that depend on the HDR mode.
    pub fn resolve(options: SitiOptions) -> Result<Self> {
        if !matches!(options.bit_depth, 8 | 10 | 12) {
            return Err(SitiError::Configuration(format!(
                "bit depth must be 8, 10 or 12, got {}",
                options.bit_depth
            )));
        }
        if options.gamma <= 0.0 {
            return Err(SitiError::Configuration(format!(
                "gamma must be positive, got {}",
                options.gamma
            )));
        }

        let (default_l_min, default_l_max) = if options.hdr_mode.is_hdr() {
            (DEFAULT_L_MIN_HDR, DEFAULT_L_MAX_HDR)
        } else {
            (DEFAULT_L_MIN, DEFAULT_L_MAX)
        };
        let l_min = options.l_min.unwrap_or(default_l_min);
        let l_max = options.l_max.unwrap_or(default_l_max);

        if l_min >= l_max {
            return Err(SitiError::Configuration(format!(
                "l_min ({l_min}) must be smaller than l_max ({l_max})"
            )));
        }

        Ok(Self {
            hdr_mode: options.hdr_mode,
            calculation_domain: options.calculation_domain,
            color_range: options.color_range,
            bit_depth: options.bit_depth,
            eotf_function: options.eotf_function,
            gamma: options.gamma,
            l_min,
            l_max,
            pu21_mode: options.pu21_mode,
            legacy: options.legacy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdr_defaults() {
        let config = PipelineConfig::resolve(SitiOptions::default()).unwrap();
        assert_eq!(config.l_min, 0.1);
        assert_eq!(config.l_max, 300.0);
        assert_eq!(config.gamma, 2.4);
        assert_eq!(config.bit_depth, 8);
    }

    #[test]
    fn test_hdr_defaults() {
        for hdr_mode in [HdrMode::Hdr10, HdrMode::Hlg] {
            let config = PipelineConfig::resolve(SitiOptions {
                hdr_mode,
                ..Default::default()
            })
            .unwrap();
            assert_eq!(config.l_min, 0.01);
            assert_eq!(config.l_max, 1000.0);
        }
    }

    #[test]
    fn test_explicit_luminance_wins() {
        let config = PipelineConfig::resolve(SitiOptions {
            l_min: Some(0.5),
            l_max: Some(500.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.l_min, 0.5);
        assert_eq!(config.l_max, 500.0);
    }

    #[test]
    fn test_rejects_invalid_options() {
        assert!(PipelineConfig::resolve(SitiOptions {
            bit_depth: 9,
            ..Default::default()
        })
        .is_err());
        assert!(PipelineConfig::resolve(SitiOptions {
            gamma: 0.0,
            ..Default::default()
        })
        .is_err());
        assert!(PipelineConfig::resolve(SitiOptions {
            l_min: Some(300.0),
            l_max: Some(0.1),
            ..Default::default()
        })
        .is_err());
    }
}
