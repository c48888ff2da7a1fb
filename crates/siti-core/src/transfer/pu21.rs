//! PU21 perceptually uniform encoding (Mantiuk & Azimi 2021).
//!
//! Four calibrated coefficient presets; each maps physical luminance in
//! the 0.005 to 10,000 cd/m2 range onto a perceptually uniform scale,
//! normalized here to [0, 1] via the encoder value at the domain bounds.
//!
//! Input convention: the encoder operates directly on the physical
//! luminance produced by the upstream display model / HLG stage, with
//! no prior x10000 rescale.

use crate::pipeline::config::Pu21Mode;

/// One PU21 preset: the published 7-coefficient vector plus the raw
/// encoder values at 0.005 and 10,000 cd/m2 used for normalization.
#[derive(Clone, Copy, Debug)]
pub struct Pu21Coefficients {
    pub p: [f64; 7],
    pub p_min: f64,
    pub p_max: f64,
}

const BANDING: Pu21Coefficients = Pu21Coefficients {
    p: [
        1.070275272,
        0.4088273932,
        0.153224308,
        0.2520326168,
        1.063512885,
        1.14115047,
        521.4527484,
    ],
    p_min: -1.5580235412926413e-7,
    p_max: 520.4673070183067,
};

const BANDING_GLARE: Pu21Coefficients = Pu21Coefficients {
    p: [
        0.353487901,
        0.3734658629,
        8.277049286e-5,
        0.9062562627,
        0.09150303166,
        0.9099517204,
        596.3148142,
    ],
    p_min: 5.470610631164163e-10,
    p_max: 595.3939200200949,
};

const PEAKS: Pu21Coefficients = Pu21Coefficients {
    p: [
        1.043882782,
        0.6459495343,
        0.3194584211,
        0.374025247,
        1.114783422,
        1.095360363,
        384.9217577,
    ],
    p_min: 1.3673684406967368e-7,
    p_max: 380.9853161219772,
};

const PEAKS_GLARE: Pu21Coefficients = Pu21Coefficients {
    p: [
        816.885024,
        1479.463946,
        0.001253215609,
        0.9329636822,
        0.06746643971,
        1.573435413,
        419.6006374,
    ],
    p_min: -9.736038464325247e-8,
    p_max: 407.5066197009812,
};

/// Coefficient preset for a PU21 mode.
pub fn coefficients(mode: Pu21Mode) -> &'static Pu21Coefficients {
    match mode {
        Pu21Mode::Banding => &BANDING,
        Pu21Mode::BandingGlare => &BANDING_GLARE,
        Pu21Mode::Peaks => &PEAKS,
        Pu21Mode::PeaksGlare => &PEAKS_GLARE,
    }
}

/// PU21 encoding: physical luminance (cd/m2) to a normalized [0, 1]
/// perceptually uniform value.
#[inline]
pub fn encode(l: f64, mode: Pu21Mode) -> f64 {
    let c = coefficients(mode);
    let p = &c.p;

    let lp = l.powf(p[3]);
    let v = ((p[0] + p[1] * lp) / (1.0 + p[2] * lp)).powf(p[4]);
    let out = p[6] * v - p[6] * p[5];

    (out - c.p_min) / (c.p_max - c.p_min)
}
