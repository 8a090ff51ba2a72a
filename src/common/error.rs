use thiserror::Error;

/// Errors surfaced while extracting MP3 tag metadata.
#[derive(Error, Debug)]
pub enum Mp3MetaError {
    /// The source could not be opened for reading.
    #[error("cannot open source: {0}")]
    Open(#[source] std::io::Error),

    /// The source is shorter than the structure being read requires.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    /// No "TAG" marker in the final 128 bytes (ID3v1 path).
    #[error("no ID3v1 tag found")]
    TagNotFound,

    /// An ID3v2 tag or frame declares more bytes than the source holds.
    #[error("truncated ID3v2 tag: {0}")]
    TruncatedTag(String),
}

pub type Result<T> = std::result::Result<T, Mp3MetaError>;
