//! The sfnt [table directory](https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory)

use std::{
    fmt,
    io::{Read, Seek},
    path::Path,
};

use font_types::{Tag, CFF_SFNT_VERSION, TT_SFNT_VERSION};

use crate::{
    tables::{
        name::{self, FamilyNamesInfo},
        os2::{self, Os2Info},
    },
    ByteCursor, ReadError, TypographicFont,
};

/// One table's location, as listed in the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    /// Not verified.
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    pub const RAW_BYTE_LEN: u64 = 16;

    fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self, ReadError> {
        Ok(TableRecord {
            tag: cursor.read()?,
            checksum: cursor.read()?,
            offset: cursor.read()?,
            length: cursor.read()?,
        })
    }
}

/// Why a stream in a file did not produce a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The stream does not start with a TrueType or CFF sfnt version; this is
    /// commonly a legacy bitmap font.
    NotAnSfnt(u32),
    /// A table needed for identification is absent, too short, or lies
    /// beyond the end of the file.
    MissingTable(Tag),
    /// The `name` table has neither a typographic nor a font family name.
    NoFamilyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnSfnt(version) => write!(f, "not an sfnt (version 0x{version:08X})"),
            SkipReason::MissingTable(tag) => write!(f, "no usable '{tag}' table"),
            SkipReason::NoFamilyName => f.write_str("no family name"),
        }
    }
}

/// The result of parsing one sfnt stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SfntOutcome {
    Font(TypographicFont),
    Skipped(SkipReason),
}

impl SfntOutcome {
    /// The font, if one was parsed.
    pub fn font(self) -> Option<TypographicFont> {
        match self {
            SfntOutcome::Font(font) => Some(font),
            SfntOutcome::Skipped(_) => None,
        }
    }

    /// Turn a skipped stream into the matching [`ReadError`].
    pub fn into_result(self) -> Result<TypographicFont, ReadError> {
        match self {
            SfntOutcome::Font(font) => Ok(font),
            SfntOutcome::Skipped(SkipReason::NotAnSfnt(version)) => {
                Err(ReadError::InvalidSfnt(version))
            }
            SfntOutcome::Skipped(SkipReason::MissingTable(tag)) => {
                Err(ReadError::TableIsMissing(tag))
            }
            SfntOutcome::Skipped(SkipReason::NoFamilyName) => Err(ReadError::NoFamilyName),
        }
    }
}

/// What the directory walk has found so far.
#[derive(Default)]
struct DirectoryScan {
    names: Option<Option<FamilyNamesInfo>>,
    os2: Option<Os2Info>,
}

impl DirectoryScan {
    fn is_complete(&self) -> bool {
        self.names.is_some() && self.os2.is_some()
    }

    fn finish(self, file_name: &Path) -> SfntOutcome {
        match (self.names, self.os2) {
            (Some(Some(names)), Some(os2)) => {
                SfntOutcome::Font(TypographicFont::new(names, os2, file_name))
            }
            (None, _) => SfntOutcome::Skipped(SkipReason::MissingTable(name::TAG)),
            (_, None) => SfntOutcome::Skipped(SkipReason::MissingTable(os2::TAG)),
            (Some(None), Some(_)) => SfntOutcome::Skipped(SkipReason::NoFamilyName),
        }
    }
}

/// Where one sfnt stream lives in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SfntStream {
    /// Offset of the table directory.
    pub start: u64,
    /// Added to every table record offset.
    pub table_base: u64,
}

/// Parse the sfnt stream at `stream.start` and identify its font.
///
/// Only the `name` and `OS/2` tables are read; the walk stops as soon as
/// both have been found. The cursor position after this call is
/// unspecified.
pub fn read_sfnt<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    stream: SfntStream,
    file_name: &Path,
) -> Result<SfntOutcome, ReadError> {
    cursor.seek(stream.start)?;
    let version = cursor.read_u32()?;
    if version != TT_SFNT_VERSION && version != CFF_SFNT_VERSION {
        return Ok(SfntOutcome::Skipped(SkipReason::NotAnSfnt(version)));
    }
    let num_tables = cursor.read_u16()?;
    let _search_range = cursor.read_u16()?;
    let _entry_selector = cursor.read_u16()?;
    let _range_shift = cursor.read_u16()?;

    let mut scan = DirectoryScan::default();
    for _ in 0..num_tables {
        let record = TableRecord::read(cursor)?;
        if record.tag != name::TAG && record.tag != os2::TAG {
            continue;
        }
        let table_start = stream.table_base + u64::from(record.offset);
        log::debug!("{}: '{}' table at {table_start}", file_name.display(), record.tag);
        if record.tag == name::TAG {
            let names = cursor.read_at(table_start, |c| {
                name::read_family_names(c, record.length)
            })?;
            scan.names = Some(names);
        } else if record.length < os2::MIN_TABLE_LEN {
            log::warn!(
                "{}: 'OS/2' table is {} bytes, too short to identify the font",
                file_name.display(),
                record.length
            );
        } else {
            scan.os2 = Some(cursor.read_at(table_start, os2::read_os2)?);
        }
        if scan.is_complete() {
            break;
        }
    }
    Ok(scan.finish(file_name))
}
