//! ITU-R BT.2100 Hybrid Log-Gamma (HLG) inverse transfer.

use ndarray::Array2;

use crate::transfer::display::warn_if_clamped;

// HLG constants from ITU-R BT.2100
const A: f64 = 0.17883277;
const B: f64 = 0.02372241;
const C: f64 = 1.00429347;

/// System gamma applied when mapping scene light to display luminance.
const SYSTEM_GAMMA: f64 = 1.2;

/// HLG inverse OETF: encoded signal [0, 1] to relative scene light.
///
/// Input outside [0, 1] is clamped.
#[inline]
pub fn eotf(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);

    if x <= 0.5 {
        x * x / 3.0
    } else {
        ((x - C) / A).exp() - B
    }
}

/// Apply the HLG EOTF to a whole frame and rescale to physical display
/// luminance via the BT.2100 system gamma:
/// `physical = (l_max - l_min) * y^(gamma - 1) + l_min`.
pub fn apply(data: &mut Array2<f64>, l_min: f64, l_max: f64) {
    warn_if_clamped(data, "hlg");

    let span = l_max - l_min;
    data.mapv_inplace(|x| span * eotf(x).powf(SYSTEM_GAMMA - 1.0) + l_min);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array2;

    #[test]
    fn test_piecewise_segments() {
        assert_abs_diff_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(0.5), 0.25 / 3.0, epsilon = 1e-12);
        // log segment at x = 1.0: exp((1 - c)/a) - b
        assert_abs_diff_eq!(
            eotf(1.0),
            ((1.0 - C) / A).exp() - B,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_apply_reference_values() {
        let mut data = Array2::from_shape_vec((1, 3), vec![0.0, 0.5, 1.0]).unwrap();
        apply(&mut data, 0.01, 1000.0);
        assert_abs_diff_eq!(data[[0, 0]], 0.01, epsilon = 1e-9);
        assert_abs_diff_eq!(data[[0, 1]], 608.3682582497869, epsilon = 1e-9);
        assert_abs_diff_eq!(data[[0, 2]], 990.3257532454198, epsilon = 1e-9);
    }
}
