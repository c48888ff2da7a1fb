//! Memory-mapped raw planar YUV reader.
//!
//! Raw files carry no header; width, height, bit depth and chroma
//! subsampling come from the configuration and define the frame layout.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Result, SitiError};
use crate::frame::Frame;

use super::{bytes_per_sample, decode_luma_plane, FrameSource, PixelFormat};

#[derive(Debug)]
pub struct YuvReader {
    mmap: Mmap,
    width: usize,
    height: usize,
    bit_depth: u8,
    frame_byte_size: usize,
    luma_byte_size: usize,
    frame_count: usize,
    next_index: usize,
}

impl YuvReader {
    pub fn open(
        path: &Path,
        width: usize,
        height: usize,
        bit_depth: u8,
        pixel_format: PixelFormat,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SitiError::Decode(format!(
                "invalid raw YUV dimensions {width}x{height}"
            )));
        }

        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let sample_bytes = bytes_per_sample(bit_depth);
        let luma_byte_size = width * height * sample_bytes;
        let frame_byte_size =
            luma_byte_size + pixel_format.chroma_samples(width, height) * sample_bytes;

        if mmap.is_empty() || mmap.len() % frame_byte_size != 0 {
            return Err(SitiError::Decode(format!(
                "file size {} is not a multiple of the {frame_byte_size}-byte frame size \
                 ({width}x{height}, {bit_depth}-bit, {pixel_format:?})",
                mmap.len()
            )));
        }
        let frame_count = mmap.len() / frame_byte_size;

        Ok(Self {
            mmap,
            width,
            height,
            bit_depth,
            frame_byte_size,
            luma_byte_size,
            frame_count,
            next_index: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

impl FrameSource for YuvReader {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.next_index >= self.frame_count {
            return Ok(None);
        }
        let offset = self.next_index * self.frame_byte_size;
        let luma = &self.mmap[offset..offset + self.luma_byte_size];
        self.next_index += 1;

        decode_luma_plane(luma, self.width, self.height, self.bit_depth).map(Some)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn bit_depth(&self) -> u8 {
        self.bit_depth
    }
}
