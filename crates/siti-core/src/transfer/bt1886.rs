//! ITU-R BT.1886 reference EOTF for flat panel displays.
//!
//! The curve is evaluated with the screen luminance limits fixed at
//! `Lmin' = 0` and `Lmax' = 1`; mapping to physical display luminance
//! happens outside this function (see [`crate::transfer::display`]).
//! Changing these limits here would corrupt SI/TI results.

/// BT.1886 EOTF: encoded signal [0, 1] to relative luminance [0, 1].
///
/// Input outside [0, 1] is clamped.
#[inline]
pub fn eotf(x: f64, gamma: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);

    let l_max_pow = 1.0_f64.powf(1.0 / gamma);
    let l_min_pow = 0.0_f64.powf(1.0 / gamma);
    let a = (l_max_pow - l_min_pow).powf(gamma);
    let b = l_min_pow / (l_max_pow - l_min_pow);

    a * (x + b).max(0.0).powf(gamma)
}
