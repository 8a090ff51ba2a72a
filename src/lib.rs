//! Minimal tag metadata extraction for MP3 files.
//!
//! Reads the textual fields (title, artist, album, year) from either an
//! ID3v2 tag at the start of the file or an ID3v1 trailer at the end.
//!
//! ```no_run
//! let metadata = mp3meta::read_metadata("song.mp3")?;
//! println!("{} — {}", metadata.artist, metadata.title);
//! # Ok::<(), mp3meta::Mp3MetaError>(())
//! ```
//!
//! Known limitations, kept from the format's messier corners: ID3v1 fields
//! come back with their fixed-width padding intact, and UTF-16 frame text is
//! decoded only for the ASCII subset.

pub mod common;
pub mod id3;

pub use common::error::{Mp3MetaError, Result};
pub use id3::{read_metadata, read_metadata_from, Metadata};
