use std::io::Read;

use crate::common::error::{Mp3MetaError, Result};
use crate::id3::frames::field_for_id;
use crate::id3::header::{FrameHeader, Id3v2Header};
use crate::id3::specs::decode_text_frame;
use crate::id3::Metadata;

/// Read an ID3v2 tag from a source positioned at its start.
///
/// The detector has already matched the "ID3" identifier; this only requires
/// the full 10-byte header region to exist. Frames are walked sequentially
/// inside the declared tag size: the running total starts at the 10 header
/// bytes and each frame is accounted (10-byte header plus declared payload)
/// before its payload is read. No read ever crosses the declared boundary;
/// a read that fails inside it means the source is shorter than the tag
/// claims, which is a `TruncatedTag` error.
pub fn read_id3v2<R: Read>(reader: &mut R) -> Result<Metadata> {
    let mut raw = [0u8; 10];
    reader.read_exact(&mut raw).map_err(Mp3MetaError::Read)?;
    let header = Id3v2Header::parse(&raw);

    let tag_size = u64::from(header.size);
    let mut bytes_consumed: u64 = 10;
    let mut metadata = Metadata::default();

    while bytes_consumed < tag_size {
        // A full frame header must fit inside the declared size.
        if bytes_consumed + 10 > tag_size {
            break;
        }

        let mut raw_frame = [0u8; 10];
        reader.read_exact(&mut raw_frame).map_err(|e| {
            Mp3MetaError::TruncatedTag(format!(
                "frame header at byte {bytes_consumed} runs past end of source: {e}"
            ))
        })?;

        // A zero byte in the ID position is padding, not a frame.
        if raw_frame[0] == 0 {
            break;
        }

        let frame = FrameHeader::parse(&raw_frame);
        bytes_consumed += 10;
        bytes_consumed += u64::from(frame.size);

        if frame.size > 0 {
            // A payload crossing the declared boundary ends iteration
            // without being read.
            if bytes_consumed > tag_size {
                break;
            }

            let mut payload = vec![0u8; frame.size as usize];
            reader.read_exact(&mut payload).map_err(|e| {
                Mp3MetaError::TruncatedTag(format!(
                    "frame {} declares {} bytes past end of source: {e}",
                    String::from_utf8_lossy(&frame.id),
                    frame.size
                ))
            })?;

            // Unrecognized frames are read to keep position, then dropped.
            if let Some(field) = field_for_id(frame.id) {
                field.assign(&mut metadata, decode_text_frame(&payload));
            }
        }

        if bytes_consumed >= tag_size {
            break;
        }
    }

    Ok(metadata)
}
