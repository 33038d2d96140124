//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use std::io::{Read, Seek};

use font_types::{NameId, Tag};

use crate::{ByteCursor, ReadError};

/// 'name'
pub const TAG: Tag = Tag::new(b"name");

/// The Windows LCID for U.S. English.
pub const WINDOWS_ENGLISH_US: u16 = 0x0409;

/// Platform identifiers used by name records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PlatformId {
    Unicode = 0,
    Macintosh = 1,
    Iso = 2,
    Windows = 3,
    Custom = 4,
}

impl PlatformId {
    pub const fn new(raw: u16) -> Option<Self> {
        Some(match raw {
            0 => Self::Unicode,
            1 => Self::Macintosh,
            2 => Self::Iso,
            3 => Self::Windows,
            4 => Self::Custom,
            _ => return None,
        })
    }
}

/// One entry in the name record array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: NameId,
    /// String length, in bytes.
    pub length: u16,
    /// Offset of the string from the start of the storage area.
    pub string_offset: u16,
}

impl NameRecord {
    pub const RAW_BYTE_LEN: u64 = 12;

    fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self, ReadError> {
        Ok(NameRecord {
            platform_id: cursor.read()?,
            encoding_id: cursor.read()?,
            language_id: cursor.read()?,
            name_id: cursor.read()?,
            length: cursor.read()?,
            string_offset: cursor.read()?,
        })
    }

    /// Whether this record's platform and language are ones we read.
    ///
    /// Unicode-platform records are always accepted. Windows records are
    /// accepted only in U.S. English. Everything else (Macintosh, ISO,
    /// custom) is ignored.
    pub fn is_accepted(&self) -> bool {
        match PlatformId::new(self.platform_id) {
            Some(PlatformId::Unicode) => true,
            Some(PlatformId::Windows) => self.language_id == WINDOWS_ENGLISH_US,
            _ => false,
        }
    }
}

/// The family and style names of a face.
///
/// `typographic_family` and `typographic_subfamily` hold the preferred
/// grouping names (ids 16 and 17). When a font has no typographic family,
/// they hold the font family and subfamily (ids 1 and 2) instead, so they
/// can always be used to group faces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyNamesInfo {
    pub typographic_family: String,
    pub typographic_subfamily: Option<String>,
    /// The font family name (id 1); this identifies the face to a host
    /// font API together with the style bits.
    pub font_name: String,
    pub sub_family: Option<String>,
}

/// The strings captured while walking the records; later records overwrite
/// earlier ones with the same id.
#[derive(Default)]
struct NameCapture {
    family: Option<String>,
    subfamily: Option<String>,
    typographic_family: Option<String>,
    typographic_subfamily: Option<String>,
}

impl NameCapture {
    fn slot(&mut self, name_id: NameId) -> Option<&mut Option<String>> {
        match name_id {
            NameId::FAMILY_NAME => Some(&mut self.family),
            NameId::SUBFAMILY_NAME => Some(&mut self.subfamily),
            NameId::TYPOGRAPHIC_FAMILY_NAME => Some(&mut self.typographic_family),
            NameId::TYPOGRAPHIC_SUBFAMILY_NAME => Some(&mut self.typographic_subfamily),
            _ => None,
        }
    }

    fn resolve(self) -> Option<FamilyNamesInfo> {
        match (self.typographic_family, self.family) {
            (Some(typographic_family), family) => Some(FamilyNamesInfo {
                font_name: family.unwrap_or_else(|| typographic_family.clone()),
                typographic_family,
                typographic_subfamily: self.typographic_subfamily,
                sub_family: self.subfamily,
            }),
            (None, Some(family)) => Some(FamilyNamesInfo {
                typographic_family: family.clone(),
                typographic_subfamily: self.subfamily.clone(),
                font_name: family,
                sub_family: self.subfamily,
            }),
            (None, None) => None,
        }
    }
}

/// Read the family and style names from a `name` table.
///
/// The cursor must be positioned at the start of the table; `table_len` is
/// the length from the table record and bounds every string read. Records
/// whose string lies outside the table are skipped.
///
/// Decoding is strict UTF-16BE: a string with an odd byte length or an
/// unpaired surrogate skips its record, so an earlier record for the same
/// id is kept instead of a string with U+FFFD in it.
///
/// Returns `None` if the table contains neither a typographic family nor a
/// font family name.
pub fn read_family_names<R: Read + Seek>(
    cursor: &mut ByteCursor<R>,
    table_len: u32,
) -> Result<Option<FamilyNamesInfo>, ReadError> {
    let table_start = cursor.position();
    let _format: u16 = cursor.read()?;
    let count: u16 = cursor.read()?;
    let storage_offset: u16 = cursor.read()?;

    let mut captured = NameCapture::default();
    for _ in 0..count {
        let record = NameRecord::read(cursor)?;
        if !record.is_accepted() {
            continue;
        }
        let Some(slot) = captured.slot(record.name_id) else {
            continue;
        };
        let start = u64::from(storage_offset) + u64::from(record.string_offset);
        let end = start + u64::from(record.length);
        if end > u64::from(table_len) {
            log::warn!(
                "name record {} ends at {end}, past the table end ({table_len})",
                record.name_id
            );
            continue;
        }
        let bytes = cursor.read_at(table_start + start, |c| {
            c.read_bytes(usize::from(record.length))
        })?;
        match decode_utf16_be(&bytes) {
            Some(text) => {
                log::trace!("name record {}: {text:?}", record.name_id);
                *slot = Some(text);
            }
            None => log::warn!("name record {} is not valid UTF-16", record.name_id),
        }
    }
    Ok(captured.resolve())
}

/// Decode big-endian UTF-16, failing on odd lengths and unpaired surrogates.
fn decode_utf16_be(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}
