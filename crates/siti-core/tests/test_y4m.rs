mod common;

use std::io::Write;

use common::{build_y4m, FRAME_A, FRAME_B};
use siti_core::error::SitiError;
use siti_core::io::{FrameSource, Y4mReader};

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_reads_420_luma_plane() {
    // 8x8 4:2:0 -> 2 * (4*4) = 32 chroma samples per frame
    let bytes = build_y4m(8, 8, "420", 8, 32, &[&FRAME_A, &FRAME_B]);
    let file = write_temp(&bytes);

    let mut reader = Y4mReader::open(file.path(), 8).unwrap();
    assert_eq!(reader.width(), 8);
    assert_eq!(reader.height(), 8);
    assert_eq!(reader.bit_depth(), 8);

    let first = reader.next_frame().unwrap().unwrap();
    assert_eq!(first.data[[0, 0]], 246.0);
    assert_eq!(first.data[[2, 6]], 0.0);

    let second = reader.next_frame().unwrap().unwrap();
    assert_eq!(second.data[[0, 0]], 182.0);

    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_reads_10bit_magnitudes_unshifted() {
    let frame: [[u16; 8]; 8] = {
        let mut f = FRAME_A;
        f[0][0] = 1023;
        f[0][1] = 512;
        f
    };
    let bytes = build_y4m(8, 8, "420p10", 10, 32, &[&frame]);
    let file = write_temp(&bytes);

    let mut reader = Y4mReader::open(file.path(), 10).unwrap();
    assert_eq!(reader.bit_depth(), 10);
    let decoded = reader.next_frame().unwrap().unwrap();
    assert_eq!(decoded.data[[0, 0]], 1023.0);
    assert_eq!(decoded.data[[0, 1]], 512.0);
    assert_eq!(decoded.bit_depth, 10);
}

#[test]
fn test_mono_has_no_chroma_planes() {
    let bytes = build_y4m(8, 8, "mono", 8, 0, &[&FRAME_A, &FRAME_B]);
    let file = write_temp(&bytes);

    let mut reader = Y4mReader::open(file.path(), 8).unwrap();
    assert!(reader.next_frame().unwrap().is_some());
    assert!(reader.next_frame().unwrap().is_some());
    assert!(reader.next_frame().unwrap().is_none());
}

#[test]
fn test_ignores_unknown_non_ascii_header_tokens() {
    // Header tokens outside W/H/C are free-form and may contain
    // multi-byte characters; they must be skipped, not tripped over.
    let mut bytes = b"YUV4MPEG2 W8 H8 \xc3\xa9xtra Cmono\nFRAME\n".to_vec();
    for row in &FRAME_A {
        for &sample in row {
            bytes.push(sample as u8);
        }
    }
    let file = write_temp(&bytes);

    let mut reader = Y4mReader::open(file.path(), 8).unwrap();
    assert_eq!(reader.width(), 8);
    assert_eq!(reader.height(), 8);
    let frame = reader.next_frame().unwrap().unwrap();
    assert_eq!(frame.data[[0, 0]], 246.0);
}

#[test]
fn test_bad_magic_is_decode_error() {
    let file = write_temp(b"RIFF....not a y4m stream\n");
    match Y4mReader::open(file.path(), 8) {
        Err(SitiError::Decode(message)) => assert!(message.contains("no video stream")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[test]
fn test_bit_depth_mismatch_is_decode_error() {
    let bytes = build_y4m(8, 8, "420p10", 10, 32, &[&FRAME_A]);
    let file = write_temp(&bytes);
    assert!(matches!(
        Y4mReader::open(file.path(), 8),
        Err(SitiError::Decode(_))
    ));
}

#[test]
fn test_truncated_frame_is_decode_error() {
    let mut bytes = build_y4m(8, 8, "420", 8, 32, &[&FRAME_A]);
    bytes.truncate(bytes.len() - 10);
    let file = write_temp(&bytes);

    let mut reader = Y4mReader::open(file.path(), 8).unwrap();
    assert!(matches!(
        reader.next_frame(),
        Err(SitiError::Decode(_))
    ));
}
