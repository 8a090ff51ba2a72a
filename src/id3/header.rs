use byteorder::{BigEndian, ByteOrder};

/// Decode a 4-byte synchsafe integer: big-endian, 7 significant bits per
/// byte, giving a value in `0..=0x0FFF_FFFF`. High bits are masked off
/// rather than validated; the ID3v2 spec requires them to be zero.
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 7) | u32::from(b & 0x7F))
}

/// ID3v2 tag header flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFlags {
    pub unsynchronisation: bool,
    pub extended: bool,
    pub experimental: bool,
    pub footer: bool,
}

/// Parsed 10-byte ID3v2 tag header.
///
/// The "ID3" identifier is matched by the detector before this runs and is
/// not re-validated here. Versions are recorded, never rejected.
#[derive(Debug, Clone, Copy)]
pub struct Id3v2Header {
    /// (major, revision), e.g. (3, 0) for ID3v2.3.0.
    pub version: (u8, u8),
    pub flags: TagFlags,
    /// Tag size excluding the 10-byte header, synchsafe on disk.
    pub size: u32,
}

impl Id3v2Header {
    pub fn parse(data: &[u8; 10]) -> Self {
        let flag_byte = data[5];
        Id3v2Header {
            version: (data[3], data[4]),
            flags: TagFlags {
                unsynchronisation: flag_byte & 0x80 != 0,
                extended: flag_byte & 0x40 != 0,
                experimental: flag_byte & 0x20 != 0,
                footer: flag_byte & 0x10 != 0,
            },
            size: decode_synchsafe([data[6], data[7], data[8], data[9]]),
        }
    }
}

/// Parsed 10-byte ID3v2 frame header.
#[derive(Debug, Clone, Copy)]
pub struct FrameHeader {
    /// 4-byte frame identifier, e.g. `TIT2`.
    pub id: [u8; 4],
    /// Payload size, synchsafe on disk.
    pub size: u32,
    pub flags: u16,
}

impl FrameHeader {
    pub fn parse(data: &[u8; 10]) -> Self {
        FrameHeader {
            id: [data[0], data[1], data[2], data[3]],
            size: decode_synchsafe([data[4], data[5], data[6], data[7]]),
            flags: BigEndian::read_u16(&data[8..10]),
        }
    }
}
