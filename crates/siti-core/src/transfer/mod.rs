//! Electro-optical and opto-electrical transfer functions.
//!
//! Scalar functions clamp their input to the documented domain; the
//! frame-level appliers in [`display`] and [`hlg`] additionally log a
//! single warning per frame when clamping actually occurred.

pub mod bt1886;
pub mod display;
pub mod hlg;
pub mod pq;
pub mod pu21;
pub mod srgb;
