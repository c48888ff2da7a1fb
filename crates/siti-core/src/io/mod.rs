//! Frame sources: Y4M and raw planar YUV readers.

pub mod y4m;
pub mod yuv;

use byteorder::ByteOrder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frame::Frame;

pub use y4m::Y4mReader;
pub use yuv::YuvReader;

/// Sequential source of decoded luma frames.
///
/// Samples are delivered at native bit width: 8-bit sources as 8-bit
/// values, 10/12-bit sources as 16-bit-wide values holding the true
/// magnitude, never shifted.
pub trait FrameSource {
    /// Next decodable frame, or `None` when the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<Frame>>;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn bit_depth(&self) -> u8;
}

/// Chroma subsampling layout of a planar YUV source. Only the luma
/// plane is consumed; chroma is skipped over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    Mono,
    #[default]
    Yuv420,
    Yuv422,
    Yuv444,
}

impl PixelFormat {
    /// Total chroma sample count per frame for the given luma dimensions.
    pub fn chroma_samples(self, width: usize, height: usize) -> usize {
        match self {
            Self::Mono => 0,
            Self::Yuv420 => 2 * ((width / 2) * (height / 2)),
            Self::Yuv422 => 2 * ((width / 2) * height),
            Self::Yuv444 => 2 * (width * height),
        }
    }
}

/// Bytes per sample at a given bit depth (1 for 8-bit, 2 for 9-16 bit).
pub(crate) fn bytes_per_sample(bit_depth: u8) -> usize {
    if bit_depth <= 8 {
        1
    } else {
        2
    }
}

/// Decode a raw little-endian sample buffer into a luma frame.
pub(crate) fn decode_luma_plane(
    bytes: &[u8],
    width: usize,
    height: usize,
    bit_depth: u8,
) -> Result<Frame> {
    if bit_depth <= 8 {
        Frame::from_samples(bytes, width, height, bit_depth)
    } else {
        let samples: Vec<u16> = bytes
            .chunks_exact(2)
            .map(byteorder::LittleEndian::read_u16)
            .collect();
        Frame::from_samples(&samples, width, height, bit_depth)
    }
}
