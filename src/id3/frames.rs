use crate::id3::Metadata;

/// Metadata fields a recognized text frame can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Artist,
    Album,
    Year,
}

impl TextField {
    /// Write a decoded value into its slot, replacing any earlier one.
    pub fn assign(self, metadata: &mut Metadata, value: String) {
        match self {
            TextField::Title => metadata.title = value,
            TextField::Artist => metadata.artist = value,
            TextField::Album => metadata.album = value,
            TextField::Year => metadata.year = value,
        }
    }
}

/// Recognized frame IDs and the field each one feeds. Future text frames
/// (TCON, TRCK, COMM, ...) are added here without touching the frame loop.
const FRAME_FIELDS: &[([u8; 4], TextField)] = &[
    (*b"TIT2", TextField::Title),
    (*b"TPE1", TextField::Artist),
    (*b"TALB", TextField::Album),
    (*b"TYER", TextField::Year),
];

/// Look up the field for a frame ID. `None` means the frame is skipped.
pub fn field_for_id(id: [u8; 4]) -> Option<TextField> {
    FRAME_FIELDS
        .iter()
        .find(|(frame_id, _)| *frame_id == id)
        .map(|&(_, field)| field)
}
