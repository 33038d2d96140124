//! Single fonts and font collections.

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use font_types::{Tag, TTC_HEADER_TAG};

use crate::{
    table_directory::{self, SfntOutcome, SfntStream},
    ByteCursor, ReadError, TypographicFont,
};

/// What kind of container a file is, judged by its first four bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// A single sfnt stream starting at offset zero.
    Font,
    /// A `ttcf` font collection.
    Collection,
}

impl FileKind {
    pub fn detect(tag: Tag) -> Self {
        if tag == TTC_HEADER_TAG {
            FileKind::Collection
        } else {
            FileKind::Font
        }
    }
}

/// The header of a [font collection](https://learn.microsoft.com/en-us/typography/opentype/spec/otff#ttc-header),
/// following the `ttcf` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Major and minor version; not validated.
    pub version: u32,
    /// Start of each member font's table directory.
    pub offsets: Vec<u32>,
}

impl ContainerHeader {
    /// Read the header, with the cursor just past the `ttcf` tag.
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self, ReadError> {
        let version = cursor.read_u32()?;
        let num_fonts = cursor.read_u32()?;
        let needed = u64::from(num_fonts) * 4;
        if needed > cursor.remaining() {
            return Err(ReadError::Truncated {
                offset: cursor.position(),
                needed,
            });
        }
        let offsets = (0..num_fonts)
            .map(|_| cursor.read_u32())
            .collect::<Result<_, _>>()?;
        Ok(ContainerHeader { version, offsets })
    }

    pub fn num_fonts(&self) -> usize {
        self.offsets.len()
    }
}

/// What table record offsets inside a collection are relative to.
///
/// For a single font both choices are the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetBase {
    /// The start of the member's sfnt stream.
    #[default]
    Stream,
    /// The start of the file, as in collections written by common font
    /// tools.
    File,
}

/// Options for [`read_fonts_with`] and [`read_file_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadOptions {
    pub offset_base: OffsetBase,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_base(mut self, offset_base: OffsetBase) -> Self {
        self.offset_base = offset_base;
        self
    }

    fn stream_at(&self, start: u64) -> SfntStream {
        let table_base = match self.offset_base {
            OffsetBase::Stream => start,
            OffsetBase::File => 0,
        };
        SfntStream { start, table_base }
    }
}

/// Parse every sfnt stream in `source`, reporting each one's outcome in file
/// order.
///
/// Skipped streams are not errors. A truncated or unreadable source fails
/// the whole call.
pub fn read_outcomes<R: Read + Seek>(
    source: R,
    file_name: &Path,
    options: ReadOptions,
) -> Result<Vec<SfntOutcome>, ReadError> {
    let mut cursor = ByteCursor::new(source)?;
    let tag: Tag = cursor.read()?;
    match FileKind::detect(tag) {
        FileKind::Font => {
            let outcome = table_directory::read_sfnt(&mut cursor, options.stream_at(0), file_name)?;
            Ok(vec![outcome])
        }
        FileKind::Collection => {
            let header = ContainerHeader::read(&mut cursor)?;
            log::debug!(
                "{}: collection with {} fonts",
                file_name.display(),
                header.num_fonts()
            );
            header
                .offsets
                .iter()
                .map(|offset| {
                    let stream = options.stream_at(u64::from(*offset));
                    table_directory::read_sfnt(&mut cursor, stream, file_name)
                })
                .collect()
        }
    }
}

/// Identify the fonts in `source` using the default [`ReadOptions`].
///
/// `file_name` is recorded in each font; the source itself is not retained.
pub fn read_fonts<R: Read + Seek>(
    source: R,
    file_name: impl AsRef<Path>,
) -> Result<Vec<TypographicFont>, ReadError> {
    read_fonts_with(source, file_name, ReadOptions::default())
}

/// Identify the fonts in `source`.
///
/// Streams that are not fonts, or that lack a `name` or `OS/2` table, are
/// logged and left out of the result.
pub fn read_fonts_with<R: Read + Seek>(
    source: R,
    file_name: impl AsRef<Path>,
    options: ReadOptions,
) -> Result<Vec<TypographicFont>, ReadError> {
    let file_name = file_name.as_ref();
    let outcomes = read_outcomes(source, file_name, options)?;
    Ok(outcomes
        .into_iter()
        .enumerate()
        .filter_map(|(index, outcome)| match outcome {
            SfntOutcome::Font(font) => Some(font),
            SfntOutcome::Skipped(reason) => {
                log::warn!("{} (font {index}): skipped, {reason}", file_name.display());
                None
            }
        })
        .collect())
}

/// Open and identify the fonts in the file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<TypographicFont>, ReadError> {
    read_file_with(path, ReadOptions::default())
}

/// Open and identify the fonts in the file at `path`.
///
/// The file is closed before this returns, whether or not parsing
/// succeeded.
pub fn read_file_with(
    path: impl AsRef<Path>,
    options: ReadOptions,
) -> Result<Vec<TypographicFont>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_fonts_with(BufReader::new(file), path, options)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use font_test_data::be_buffer;

    use super::*;

    #[test]
    fn detect() {
        assert_eq!(FileKind::detect(Tag::new(b"ttcf")), FileKind::Collection);
        assert_eq!(FileKind::detect(Tag::new(b"OTTO")), FileKind::Font);
        assert_eq!(FileKind::detect(Tag::new(b"TTCF")), FileKind::Font);
    }

    #[test]
    fn header() {
        let data = be_buffer! {
            0x00020000u32, // version
            2u32,          // numFonts
            24u32,
            96u32
        };
        let mut cursor = ByteCursor::new(Cursor::new(data.as_slice())).unwrap();
        let header = ContainerHeader::read(&mut cursor).unwrap();
        assert_eq!(header.version, 0x00020000);
        assert_eq!(header.offsets, [24, 96]);
    }

    #[test]
    fn header_count_bounded_by_source() {
        let data = be_buffer! {
            0x00010000u32,
            0x4000_0000u32, // numFonts
            12u32,
            40u32
        };
        let mut cursor = ByteCursor::new(Cursor::new(data.as_slice())).unwrap();
        let err = ContainerHeader::read(&mut cursor).unwrap_err();
        assert!(
            matches!(err, ReadError::Truncated { offset: 8, needed } if needed == 0x4000_0000 * 4),
            "{err:?}"
        );
    }

    #[test]
    fn empty_collection() {
        let data = be_buffer! { TTC_HEADER_TAG, 0x00010000u32, 0u32 };
        let fonts = read_fonts(Cursor::new(data.as_slice()), "empty.ttc").unwrap();
        assert!(fonts.is_empty());
    }

    #[test]
    fn options_select_table_base() {
        let stream = ReadOptions::new().stream_at(40);
        assert_eq!(stream.table_base, 40);
        let file = ReadOptions::new()
            .offset_base(OffsetBase::File)
            .stream_at(40);
        assert_eq!(file.table_base, 0);
        assert_eq!(file.start, 40);
    }

    #[test]
    fn empty_source_is_truncation() {
        let err = read_fonts(Cursor::new(Vec::new()), "empty.ttf").unwrap_err();
        assert!(err.is_truncation());
    }
}
