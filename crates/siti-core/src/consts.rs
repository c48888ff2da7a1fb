/// Default gamma exponent for the BT.1886 EOTF.
pub const DEFAULT_GAMMA: f64 = 2.4;

/// Default display luminance for black, SDR content (cd/m2).
pub const DEFAULT_L_MIN: f64 = 0.1;

/// Default nominal peak display luminance, SDR content (cd/m2).
pub const DEFAULT_L_MAX: f64 = 300.0;

/// Default display luminance for black, HDR content (cd/m2).
pub const DEFAULT_L_MIN_HDR: f64 = 0.01;

/// Default nominal peak display luminance, HDR content (cd/m2).
pub const DEFAULT_L_MAX_HDR: f64 = 1000.0;

/// Normalized footroom of a limited-range signal (16 in an 8-bit domain).
pub const LIMITED_RANGE_MIN: f64 = 16.0 / 255.0;

/// Normalized headroom of a limited-range signal (235 in an 8-bit domain).
pub const LIMITED_RANGE_MAX: f64 = 235.0 / 255.0;

/// Tolerance applied to the normalized limited-range check.
pub const RANGE_TOLERANCE: f64 = 0.001;

/// Factor mapping normalized metric values onto the canonical
/// 8-bit-equivalent reporting scale, regardless of source bit depth.
pub const METRIC_SCALE_8BIT: f64 = 255.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism in the
/// Sobel pass.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
