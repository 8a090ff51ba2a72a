use std::io::{Read, Seek, SeekFrom};

use crate::common::error::{Mp3MetaError, Result};
use crate::id3::specs::{decode_text, TextEncoding};
use crate::id3::Metadata;

/// Size of the fixed ID3v1 trailer at the end of the file.
const TAG_LEN: usize = 128;

/// Read the ID3v1 trailer from the last 128 bytes of the source.
///
/// Fields come back exactly as stored: fixed-width, with their null/space
/// padding intact. Callers wanting clean strings trim the padding themselves.
///
/// A source shorter than 128 bytes fails with `Read`; a trailer without the
/// "TAG" marker fails with `TagNotFound`.
pub fn read_id3v1<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    reader
        .seek(SeekFrom::End(-(TAG_LEN as i64)))
        .map_err(Mp3MetaError::Read)?;

    let mut block = [0u8; TAG_LEN];
    reader.read_exact(&mut block).map_err(Mp3MetaError::Read)?;

    if &block[0..3] != b"TAG" {
        return Err(Mp3MetaError::TagNotFound);
    }

    Ok(Metadata {
        title: decode_text(&block[3..33], TextEncoding::Latin1),
        artist: decode_text(&block[33..63], TextEncoding::Latin1),
        album: decode_text(&block[63..93], TextEncoding::Latin1),
        year: decode_text(&block[93..97], TextEncoding::Latin1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn v1_field(text: &str, width: usize) -> Vec<u8> {
        let mut field = vec![0u8; width];
        field[..text.len()].copy_from_slice(text.as_bytes());
        field
    }

    fn v1_trailer(title: &str, artist: &str, album: &str, year: &str) -> Vec<u8> {
        let mut trailer = Vec::with_capacity(TAG_LEN);
        trailer.extend_from_slice(b"TAG");
        trailer.extend_from_slice(&v1_field(title, 30));
        trailer.extend_from_slice(&v1_field(artist, 30));
        trailer.extend_from_slice(&v1_field(album, 30));
        trailer.extend_from_slice(&v1_field(year, 4));
        trailer.resize(TAG_LEN, 0);
        trailer
    }

    #[test]
    fn fields_round_trip_untrimmed() {
        let mut file = vec![0xAAu8; 64]; // stand-in audio data
        file.extend_from_slice(&v1_trailer("Song Title", "Artist", "Album", "1999"));

        let metadata = read_id3v1(&mut Cursor::new(file)).unwrap();
        // padding is preserved verbatim
        assert_eq!(metadata.title.len(), 30);
        assert!(metadata.title.starts_with("Song Title"));
        assert!(metadata.title.ends_with('\0'));
        assert!(metadata.artist.starts_with("Artist"));
        assert!(metadata.album.starts_with("Album"));
        assert_eq!(metadata.year, "1999");
    }

    #[test]
    fn trailer_only_file() {
        let file = v1_trailer("T", "A", "B", "2001");
        let metadata = read_id3v1(&mut Cursor::new(file)).unwrap();
        assert!(metadata.title.starts_with('T'));
        assert_eq!(metadata.year, "2001");
    }

    #[test]
    fn missing_marker() {
        let file = vec![0u8; 256];
        let err = read_id3v1(&mut Cursor::new(file)).unwrap_err();
        assert!(matches!(err, Mp3MetaError::TagNotFound));
    }

    #[test]
    fn source_shorter_than_trailer() {
        let file = vec![0u8; 64];
        let err = read_id3v1(&mut Cursor::new(file)).unwrap_err();
        assert!(matches!(err, Mp3MetaError::Read(_)));
    }
}
