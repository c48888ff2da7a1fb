//! Streaming YUV4MPEG2 (Y4M) reader.
//!
//! Parses the stream header and per-frame `FRAME` markers, yields the
//! luma plane and skips the chroma planes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, SitiError};
use crate::frame::Frame;

use super::{bytes_per_sample, decode_luma_plane, FrameSource, PixelFormat};

const Y4M_MAGIC: &str = "YUV4MPEG2";

#[derive(Debug)]
pub struct Y4mReader {
    reader: BufReader<File>,
    width: usize,
    height: usize,
    bit_depth: u8,
    pixel_format: PixelFormat,
}

impl Y4mReader {
    /// Open a Y4M file and parse its stream header.
    ///
    /// `expected_bit_depth` is the configured pipeline bit depth; a
    /// contradicting header is a decode error, not something to paper
    /// over.
    pub fn open(path: &Path, expected_bit_depth: u8) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let header = read_line(&mut reader)?;
        let (width, height, bit_depth, pixel_format) = parse_header(&header)?;

        if bit_depth != expected_bit_depth {
            return Err(SitiError::Decode(format!(
                "Y4M stream is {bit_depth}-bit but the configured bit depth is \
                 {expected_bit_depth}"
            )));
        }

        Ok(Self {
            reader,
            width,
            height,
            bit_depth,
            pixel_format,
        })
    }
}

impl FrameSource for Y4mReader {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        // Frame marker, with optional parameters up to the newline.
        let mut marker = [0u8; 5];
        match self.reader.read_exact(&mut marker) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        if &marker != b"FRAME" {
            return Err(SitiError::Decode("missing FRAME marker".into()));
        }
        loop {
            let mut byte = [0u8; 1];
            self.reader
                .read_exact(&mut byte)
                .map_err(|_| SitiError::Decode("truncated FRAME header".into()))?;
            if byte[0] == b'\n' {
                break;
            }
        }

        let sample_bytes = bytes_per_sample(self.bit_depth);
        let luma_bytes = self.width * self.height * sample_bytes;
        let mut luma = vec![0u8; luma_bytes];
        self.reader
            .read_exact(&mut luma)
            .map_err(|_| SitiError::Decode("truncated luma plane".into()))?;

        let chroma_bytes =
            self.pixel_format.chroma_samples(self.width, self.height) * sample_bytes;
        if chroma_bytes > 0 {
            let mut chroma = vec![0u8; chroma_bytes];
            self.reader
                .read_exact(&mut chroma)
                .map_err(|_| SitiError::Decode("truncated chroma planes".into()))?;
        }

        decode_luma_plane(&luma, self.width, self.height, self.bit_depth).map(Some)
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

fn read_line(reader: &mut impl Read) -> Result<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        reader
            .read_exact(&mut byte)
            .map_err(|_| SitiError::Decode("truncated Y4M header".into()))?;
        if byte[0] == b'\n' {
            break;
        }
        line.push(byte[0]);
        if line.len() > 1024 {
            return Err(SitiError::Decode("Y4M header too long".into()));
        }
    }
    String::from_utf8(line).map_err(|_| SitiError::Decode("Y4M header is not UTF-8".into()))
}

fn parse_header(header: &str) -> Result<(usize, usize, u8, PixelFormat)> {
    let mut tokens = header.split_ascii_whitespace();
    if tokens.next() != Some(Y4M_MAGIC) {
        return Err(SitiError::Decode(
            "no video stream found (missing YUV4MPEG2 magic)".into(),
        ));
    }

    let mut width = None;
    let mut height = None;
    let mut colorspace = None;
    for token in tokens {
        if let Some(v) = token.strip_prefix('W') {
            width = v.parse::<usize>().ok();
        } else if let Some(v) = token.strip_prefix('H') {
            height = v.parse::<usize>().ok();
        } else if let Some(v) = token.strip_prefix('C') {
            colorspace = Some(v.to_string());
        }
        // Frame rate, interlacing, aspect ratio and extensions do not
        // affect luma extraction. Tokens need not be ASCII.
    }

    let width = width.ok_or_else(|| SitiError::Decode("Y4M header missing width".into()))?;
    let height = height.ok_or_else(|| SitiError::Decode("Y4M header missing height".into()))?;

    // Default colorspace per the Y4M convention is 4:2:0, 8-bit.
    let (pixel_format, bit_depth) = match colorspace.as_deref() {
        None => (PixelFormat::Yuv420, 8),
        Some(c) => parse_colorspace(c)?,
    };

    Ok((width, height, bit_depth, pixel_format))
}

fn parse_colorspace(tag: &str) -> Result<(PixelFormat, u8)> {
    let (format, rest) = if let Some(rest) = tag.strip_prefix("mono") {
        (PixelFormat::Mono, rest)
    } else if let Some(rest) = tag.strip_prefix("420") {
        (PixelFormat::Yuv420, rest)
    } else if let Some(rest) = tag.strip_prefix("422") {
        (PixelFormat::Yuv422, rest)
    } else if let Some(rest) = tag.strip_prefix("444") {
        (PixelFormat::Yuv444, rest)
    } else {
        return Err(SitiError::Decode(format!("unsupported colorspace C{tag}")));
    };

    let bit_depth = match rest {
        "" | "jpeg" | "mpeg2" | "paldv" => 8,
        "p10" | "10" => 10,
        "p12" | "12" => 12,
        _ => return Err(SitiError::Decode(format!("unsupported colorspace C{tag}"))),
    };

    Ok((format, bit_depth))
}
