//! Errors produced while reading font data

use font_types::Tag;

/// An error that occurs when reading font data.
///
/// Only [`ReadError::Io`] and [`ReadError::Truncated`] are returned by the
/// container readers: a stream that is not a font, or that lacks a required
/// table, is skipped instead (see [`SkipReason`](crate::SkipReason)). The
/// remaining variants are produced by
/// [`SfntOutcome::into_result`](crate::SfntOutcome::into_result) for callers
/// that want a single font or an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReadError {
    /// The source could not be opened, sought or read.
    #[error("unable to read font source: {0}")]
    Io(#[from] std::io::Error),
    /// The source ended before a field that the format requires.
    #[error("truncated data: {needed} bytes needed at offset {offset}")]
    Truncated { offset: u64, needed: u64 },
    /// The stream does not start with a TrueType or CFF sfnt version.
    #[error("invalid sfnt version 0x{0:08X}")]
    InvalidSfnt(u32),
    /// A table needed for identification is absent or unusable.
    #[error("the {0} table is missing")]
    TableIsMissing(Tag),
    /// The `name` table holds no usable family name.
    #[error("no family name found in the name table")]
    NoFamilyName,
}

impl ReadError {
    /// `true` if the error means the data ran out early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, ReadError::Truncated { .. })
    }
}
