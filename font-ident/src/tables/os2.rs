//! The [os2](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table

use std::io::{Read, Seek};

use font_types::{Panose, SelectionFlags, Tag, WeightClass};

use crate::{ByteCursor, ReadError};

/// 'OS/2'
pub const TAG: Tag = Tag::new(b"OS/2");

/// Bytes needed to reach the end of `fsSelection`.
///
/// Every table version (0 through 5) shares this prefix.
pub const MIN_TABLE_LEN: u32 = 64;

// ySubscript*, ySuperscript*, yStrikeout*, sFamilyClass, plus the width
// class and fsType that precede them
const METRICS_LEN: u64 = 26;
// ulUnicodeRange1-4
const UNICODE_RANGES_LEN: u64 = 16;

/// The style and weight identity of a face.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Os2Info {
    pub weight: WeightClass,
    pub style: SelectionFlags,
    pub panose: Panose,
    pub version: u16,
    pub vendor: Tag,
}

/// Read the identification fields of an `OS/2` table.
///
/// The cursor must be positioned at the start of the table.
pub fn read_os2<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Os2Info, ReadError> {
    let version = cursor.read_u16()?;
    let _x_avg_char_width: i16 = cursor.read()?;
    let weight = cursor.read()?;
    cursor.skip(METRICS_LEN)?;
    let panose = Panose::new(cursor.read_array()?);
    cursor.skip(UNICODE_RANGES_LEN)?;
    let vendor = cursor.read()?;
    let style = SelectionFlags::from_raw_word(cursor.read_u16()?);
    Ok(Os2Info {
        weight,
        style,
        panose,
        version,
        vendor,
    })
}
