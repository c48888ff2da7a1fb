//! Bit-depth normalization and limited/full range handling.

use ndarray::Array2;

use crate::consts::{LIMITED_RANGE_MAX, LIMITED_RANGE_MIN, RANGE_TOLERANCE};
use crate::error::{Result, SitiError};

/// Maximum code value for a given bit depth (255, 1023, 4095).
pub fn max_code_value(bit_depth: u8) -> f64 {
    (1u32 << bit_depth) as f64 - 1.0
}

/// Normalize raw integer samples into [0, 1] by dividing by
/// `2^bit_depth - 1`.
pub fn normalize_between_0_1(data: &mut Array2<f64>, bit_depth: u8) {
    let max_value = max_code_value(bit_depth);
    data.mapv_inplace(|x| x / max_value);
}

/// Expand an already-normalized limited-range signal to full range.
///
/// The footroom/headroom fractions are bit-depth independent since
/// normalization has already happened. Samples outside the nominal
/// limited range (with a small tolerance) mean the input was in fact
/// full range; that is a fatal misconfiguration, reported in the raw
/// code-value domain of the source.
pub fn handle_limited_range(data: &mut Array2<f64>, bit_depth: u8) -> Result<()> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min + RANGE_TOLERANCE < LIMITED_RANGE_MIN || max - RANGE_TOLERANCE > LIMITED_RANGE_MAX {
        let max_value = max_code_value(bit_depth);
        return Err(SitiError::RangeViolation {
            min: min * max_value,
            max: max * max_value,
            expected_min: LIMITED_RANGE_MIN * max_value,
            expected_max: LIMITED_RANGE_MAX * max_value,
        });
    }

    let span = LIMITED_RANGE_MAX - LIMITED_RANGE_MIN;
    data.mapv_inplace(|x| ((x - LIMITED_RANGE_MIN) / span).clamp(0.0, 1.0));
    Ok(())
}

/// Limited-range adjustment of the legacy calculation path.
///
/// Operates on raw samples assumed to sit in an 8-bit-like domain: hard
/// [16, 235] bounds with no tolerance, and the adjusted value stays in a
/// 0-255-like integer domain (rounded to nearest).
pub fn handle_limited_range_legacy(data: &mut Array2<f64>) -> Result<()> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min < 16.0 || max > 235.0 {
        return Err(SitiError::RangeViolation {
            min,
            max,
            expected_min: 16.0,
            expected_max: 235.0,
        });
    }

    data.mapv_inplace(|x| ((x - 16.0) / ((235.0 - 16.0) / 255.0)).round());
    Ok(())
}
