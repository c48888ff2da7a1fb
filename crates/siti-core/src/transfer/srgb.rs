//! Inverse sRGB EOTF (IEC 61966-2-1).

/// Inverse sRGB transfer: encoded signal [0, 1] to relative luminance
/// [0, 1]. Input outside [0, 1] is clamped.
#[inline]
pub fn eotf_inv(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);

    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}
