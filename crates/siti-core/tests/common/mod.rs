#![allow(dead_code)]

use ndarray::Array2;

use siti_core::error::Result;
use siti_core::frame::Frame;
use siti_core::io::FrameSource;

/// Fixed pseudo-random 8x8 8-bit frame. Reference SI/TI values for the
/// various pipeline configurations were computed with a high-precision
/// scalar implementation of the same formulas.
pub const FRAME_A: [[u16; 8]; 8] = [
    [246, 247, 100, 205, 130, 147, 208, 201],
    [206, 239, 252, 133, 218, 11, 232, 1],
    [166, 231, 148, 61, 50, 131, 0, 57],
    [126, 223, 44, 245, 138, 251, 24, 113],
    [86, 215, 196, 173, 226, 115, 48, 169],
    [46, 207, 92, 101, 58, 235, 72, 225],
    [6, 199, 244, 29, 146, 99, 96, 25],
    [222, 191, 140, 213, 234, 219, 120, 81],
];

/// Second fixed frame, used for TI fixtures.
pub const FRAME_B: [[u16; 8]; 8] = [
    [182, 183, 36, 141, 66, 83, 144, 137],
    [142, 175, 188, 69, 154, 203, 168, 193],
    [102, 167, 84, 253, 242, 67, 192, 249],
    [62, 159, 236, 181, 74, 187, 216, 49],
    [22, 151, 132, 109, 162, 51, 240, 105],
    [238, 143, 28, 37, 250, 171, 8, 161],
    [198, 135, 180, 221, 82, 35, 32, 217],
    [158, 127, 76, 149, 170, 155, 56, 17],
];

/// `FRAME_A` compressed into the limited [16, 235] range.
pub const FRAME_A_LIM: [[u16; 8]; 8] = [
    [227, 228, 101, 192, 127, 142, 194, 188],
    [192, 221, 232, 130, 203, 25, 215, 16],
    [158, 214, 143, 68, 58, 128, 16, 64],
    [124, 207, 53, 226, 134, 231, 36, 113],
    [89, 200, 184, 164, 210, 114, 57, 161],
    [55, 193, 95, 102, 65, 217, 77, 209],
    [21, 186, 225, 40, 141, 101, 98, 37],
    [206, 180, 136, 198, 216, 204, 119, 85],
];

/// `FRAME_B` compressed into the limited [16, 235] range.
pub const FRAME_B_LIM: [[u16; 8]; 8] = [
    [172, 173, 46, 137, 72, 87, 139, 133],
    [137, 166, 177, 75, 148, 190, 160, 181],
    [103, 159, 88, 233, 223, 73, 180, 229],
    [69, 152, 218, 171, 79, 176, 201, 58],
    [34, 145, 129, 109, 155, 59, 222, 106],
    [220, 138, 40, 47, 230, 162, 22, 154],
    [186, 131, 170, 205, 86, 46, 43, 202],
    [151, 125, 81, 143, 162, 149, 64, 30],
];

pub fn array_from(samples: &[[u16; 8]; 8]) -> Array2<f64> {
    Array2::from_shape_fn((8, 8), |(r, c)| samples[r][c] as f64)
}

pub fn frame_from(samples: &[[u16; 8]; 8], bit_depth: u8) -> Frame {
    Frame::new(array_from(samples), bit_depth)
}

/// `FRAME_A` widened to a 10-bit magnitude: `(v << 2) | (v & 3)`.
pub fn frame_a_10bit() -> Frame {
    let data = Array2::from_shape_fn((8, 8), |(r, c)| {
        let v = FRAME_A[r][c];
        ((v << 2) | (v & 3)) as f64
    });
    Frame::new(data, 10)
}

/// In-memory frame source for calculator tests.
pub struct VecSource {
    frames: Vec<Frame>,
    next: usize,
}

impl VecSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames, next: 0 }
    }
}

impl FrameSource for VecSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let frame = self.frames.get(self.next).cloned();
        self.next += 1;
        Ok(frame)
    }

    fn width(&self) -> usize {
        self.frames.first().map_or(0, |f| f.width())
    }

    fn height(&self) -> usize {
        self.frames.first().map_or(0, |f| f.height())
    }

    fn bit_depth(&self) -> u8 {
        self.frames.first().map_or(8, |f| f.bit_depth)
    }
}

/// Serialize one sample at the given bit depth (little-endian for wide
/// samples), appending to `buf`.
fn push_sample(buf: &mut Vec<u8>, value: u16, bit_depth: u8) {
    if bit_depth <= 8 {
        buf.push(value as u8);
    } else {
        buf.extend_from_slice(&value.to_le_bytes());
    }
}

/// Build a synthetic Y4M byte stream with the given luma planes. Chroma
/// planes (for non-mono colorspaces) are zero-filled.
pub fn build_y4m(
    width: usize,
    height: usize,
    colorspace: &str,
    bit_depth: u8,
    chroma_samples: usize,
    frames: &[&[[u16; 8]; 8]],
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(
        format!("YUV4MPEG2 W{width} H{height} F25:1 Ip A1:1 C{colorspace}\n").as_bytes(),
    );
    for frame in frames {
        buf.extend_from_slice(b"FRAME\n");
        for row in frame.iter() {
            for &v in row {
                push_sample(&mut buf, v, bit_depth);
            }
        }
        for _ in 0..chroma_samples {
            push_sample(&mut buf, 0, bit_depth);
        }
    }
    buf
}

/// Build a raw planar YUV byte buffer with the given luma planes and
/// zero-filled chroma.
pub fn build_yuv(bit_depth: u8, chroma_samples: usize, frames: &[&[[u16; 8]; 8]]) -> Vec<u8> {
    let mut buf = Vec::new();
    for frame in frames {
        for row in frame.iter() {
            for &v in row {
                push_sample(&mut buf, v, bit_depth);
            }
        }
        for _ in 0..chroma_samples {
            push_sample(&mut buf, 0, bit_depth);
        }
    }
    buf
}
