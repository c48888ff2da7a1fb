//! SMPTE ST 2084 / ITU-R BT.2100 Perceptual Quantizer (PQ) OETF.
//!
//! Encodes absolute luminance up to 10,000 cd/m2 into a perceptually
//! uniform [0, 1] signal.

// PQ constants from SMPTE ST 2084
const M: f64 = 78.84375;
const N: f64 = 0.1593017578125;
const C1: f64 = 0.8359375;
const C2: f64 = 18.8515625;
const C3: f64 = 18.6875;

/// PQ OETF: physical luminance (cd/m2) to encoded signal [0, 1].
///
/// Input is the physical luminance produced by the display model or the
/// HLG stage; no additional x10000 rescale is applied.
#[inline]
pub fn oetf(l: f64) -> f64 {
    let lm1 = 10000.0_f64.powf(N);
    let lm2 = l.powf(N);

    ((C1 * lm1 + C2 * lm2) / (lm1 + C3 * lm2)).powf(M)
}
