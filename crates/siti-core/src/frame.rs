use ndarray::Array2;
use num_traits::AsPrimitive;

use crate::error::{Result, SitiError};

/// A single decoded luma plane.
///
/// Samples are stored as f64 holding the raw integer magnitude of the
/// source representation (0..=255 for 8-bit, 0..=1023 for 10-bit, and so
/// on). No normalization happens at construction; the pipeline decides
/// how to scale.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Sample data, row-major, shape = (height, width)
    pub data: Array2<f64>,
    /// Bit depth of the source representation (8, 10 or 12)
    pub bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f64>, bit_depth: u8) -> Self {
        Self { data, bit_depth }
    }

    /// Build a frame from a flat row-major sample buffer of any integer
    /// width the decoder hands out.
    pub fn from_samples<T>(
        samples: &[T],
        width: usize,
        height: usize,
        bit_depth: u8,
    ) -> Result<Self>
    where
        T: AsPrimitive<f64>,
    {
        if samples.len() != width * height {
            return Err(SitiError::Decode(format!(
                "expected {} luma samples for {}x{}, got {}",
                width * height,
                width,
                height,
                samples.len()
            )));
        }
        let data = Array2::from_shape_fn((height, width), |(r, c)| samples[r * width + c].as_());
        Ok(Self { data, bit_depth })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Metrics produced for a single processed frame.
///
/// `ti` is `None` for the first frame of a sequence, which has no
/// predecessor to difference against.
#[derive(Clone, Copy, Debug)]
pub struct FrameMetrics {
    pub si: f64,
    pub ti: Option<f64>,
    pub frame_index: usize,
}
