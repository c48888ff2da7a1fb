//! Display model: maps a normalized signal to physical luminance.

use ndarray::Array2;
use tracing::warn;

use crate::error::{Result, SitiError};
use crate::pipeline::config::EotfFunction;
use crate::transfer::{bt1886, srgb};

/// Apply the configured SDR EOTF and rescale to physical display
/// luminance: `physical = (l_max - l_min) * eotf(x) + l_min`.
///
/// This top-level entry rejects input outside [0, 1] outright. The
/// scalar EOTFs themselves clamp instead, so they stay usable in a
/// standalone fashion; the two layers are intentionally distinct.
pub fn apply_display_model(
    data: &mut Array2<f64>,
    eotf_function: EotfFunction,
    l_max: f64,
    l_min: f64,
    gamma: f64,
) -> Result<()> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min < 0.0 || max > 1.0 {
        return Err(SitiError::Domain { min, max });
    }

    let span = l_max - l_min;
    match eotf_function {
        EotfFunction::Bt1886 => data.mapv_inplace(|x| span * bt1886::eotf(x, gamma) + l_min),
        EotfFunction::InvSrgb => data.mapv_inplace(|x| span * srgb::eotf_inv(x) + l_min),
    }
    Ok(())
}

/// Warn once per frame when samples had to be clamped into [0, 1].
///
/// Non-fatal by contract: clamp events inside the transfer stages are
/// logged, never raised.
pub fn warn_if_clamped(data: &Array2<f64>, stage: &str) {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min < 0.0 || max > 1.0 {
        warn!(stage, min, max, "input outside [0, 1], clamping");
    }
}
