//! ID3 tag reading: format detection, the ID3v1 and ID3v2 readers, and the
//! `read_metadata` facade tying them together.

pub mod frames;
pub mod header;
pub mod id3v1;
pub mod specs;
pub mod tags;

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::common::error::{Mp3MetaError, Result};

/// Tag metadata extracted from an MP3 file.
///
/// Fields the file does not carry stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
}

/// Check whether the source starts with an ID3v2 tag.
///
/// Seeks to the start and consumes up to 3 bytes; callers re-seek before
/// handing the source to a reader. A source too short for the probe simply
/// has no ID3v2 tag.
pub fn has_id3v2<R: Read + Seek>(reader: &mut R) -> bool {
    if reader.seek(SeekFrom::Start(0)).is_err() {
        return false;
    }
    let mut marker = [0u8; 3];
    match reader.read_exact(&mut marker) {
        Ok(()) => &marker == b"ID3",
        Err(_) => false,
    }
}

/// Read tag metadata from a file on disk.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    let file = File::open(path).map_err(Mp3MetaError::Open)?;
    let mut reader = BufReader::new(file);
    read_metadata_from(&mut reader)
}

/// Read tag metadata from an already-open byte source.
///
/// An ID3v2 tag at the start of the source wins, even when an ID3v1 trailer
/// is also present; otherwise the final 128 bytes are tried as an ID3v1
/// trailer. Reader errors propagate unchanged.
pub fn read_metadata_from<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    if has_id3v2(reader) {
        // The probe consumed the identifier; the reader wants the full header.
        reader
            .seek(SeekFrom::Start(0))
            .map_err(Mp3MetaError::Read)?;
        tags::read_id3v2(reader)
    } else {
        id3v1::read_id3v1(reader)
    }
}
