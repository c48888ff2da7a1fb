//! Spatial and temporal information metrics per ITU-T P.910.

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, SitiError};

/// Sobel gradient magnitudes for one interior row.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
fn sobel_row(data: &Array2<f64>, row: usize) -> Vec<f64> {
    let w = data.ncols();
    let mut out = Vec::with_capacity(w - 2);

    for col in 1..w - 1 {
        let gx = -data[[row - 1, col - 1]] + data[[row - 1, col + 1]]
            - 2.0 * data[[row, col - 1]]
            + 2.0 * data[[row, col + 1]]
            - data[[row + 1, col - 1]]
            + data[[row + 1, col + 1]];

        let gy = -data[[row - 1, col - 1]]
            - 2.0 * data[[row - 1, col]]
            - data[[row - 1, col + 1]]
            + data[[row + 1, col - 1]]
            + 2.0 * data[[row + 1, col]]
            + data[[row + 1, col + 1]];

        out.push(gx.hypot(gy));
    }

    out
}

/// Population standard deviation (divide by N, not N-1).
fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}

/// Spatial information of a frame: population standard deviation of the
/// Sobel gradient magnitude, with the 1-pixel border cropped to discard
/// boundary-convolution artifacts.
pub fn si(data: &Array2<f64>) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let magnitudes: Vec<f64> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (1..h - 1)
            .into_par_iter()
            .flat_map_iter(|row| sobel_row(data, row))
            .collect()
    } else {
        (1..h - 1).flat_map(|row| sobel_row(data, row)).collect()
    };

    population_std(&magnitudes)
}

/// Temporal information between two frames: population standard
/// deviation of the elementwise difference. `None` when there is no
/// previous frame.
pub fn ti(data: &Array2<f64>, previous: Option<&Array2<f64>>) -> Result<Option<f64>> {
    let Some(previous) = previous else {
        return Ok(None);
    };

    if data.dim() != previous.dim() {
        return Err(SitiError::DimensionMismatch {
            expected: previous.dim(),
            actual: data.dim(),
        });
    }

    let diff: Vec<f64> = data
        .iter()
        .zip(previous.iter())
        .map(|(a, b)| a - b)
        .collect();
    Ok(Some(population_std(&diff)))
}
