//! Name Identifiers
//!
//! Although these are treated as u16s in OpenType, we choose to represent them
//! as a distinct type.

use core::fmt;

/// Identifier for an informational string in the `name` table.
///
/// The predefined identifiers are provided as associated constants. IDs 26
/// to 255 are reserved for future standard names; IDs 256 to 32767 are
/// font-specific.
///
/// For more detail, see <https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids>
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NameId(u16);

impl NameId {
    /// Copyright notice.
    pub const COPYRIGHT_NOTICE: Self = Self(0);

    /// Font family name.
    ///
    /// Shared by at most four faces that differ only in weight or style
    /// (the legacy R/I/B/BI style-linking group).
    pub const FAMILY_NAME: Self = Self(1);

    /// Font subfamily name, distinguishing the faces of a [`FAMILY_NAME`](Self::FAMILY_NAME) group.
    pub const SUBFAMILY_NAME: Self = Self(2);

    /// Unique font identifier.
    pub const UNIQUE_ID: Self = Self(3);

    /// Full font name.
    pub const FULL_NAME: Self = Self(4);

    /// Version string.
    pub const VERSION_STRING: Self = Self(5);

    /// PostScript name for the font.
    pub const POSTSCRIPT_NAME: Self = Self(6);

    /// Trademark notice.
    pub const TRADEMARK: Self = Self(7);

    /// Manufacturer name.
    pub const MANUFACTURER: Self = Self(8);

    /// Name of the designer of the typeface.
    pub const DESIGNER: Self = Self(9);

    /// Description of the typeface.
    pub const DESCRIPTION: Self = Self(10);

    /// URL of the font vendor.
    pub const VENDOR_URL: Self = Self(11);

    /// URL of the typeface designer.
    pub const DESIGNER_URL: Self = Self(12);

    /// License description.
    pub const LICENSE_DESCRIPTION: Self = Self(13);

    /// URL where additional licensing information can be found.
    pub const LICENSE_URL: Self = Self(14);

    /// Typographic family name.
    ///
    /// Unlike [`FAMILY_NAME`](Self::FAMILY_NAME), this grouping puts no limit
    /// on the number of faces: "Arial Black" and "Arial Narrow" both report
    /// "Arial" here.
    pub const TYPOGRAPHIC_FAMILY_NAME: Self = Self(16);

    /// Typographic subfamily name, unique within its typographic family.
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: Self = Self(17);

    /// Compatible full name (Macintosh only).
    pub const COMPATIBLE_FULL_NAME: Self = Self(18);

    /// Sample text.
    pub const SAMPLE_TEXT: Self = Self(19);

    /// PostScript CID findfont name.
    pub const POSTSCRIPT_CID_NAME: Self = Self(20);

    /// WWS family name.
    pub const WWS_FAMILY_NAME: Self = Self(21);

    /// WWS subfamily name.
    pub const WWS_SUBFAMILY_NAME: Self = Self(22);

    /// Light background palette.
    pub const LIGHT_BACKGROUND_PALETTE: Self = Self(23);

    /// Dark background palette.
    pub const DARK_BACKGROUND_PALETTE: Self = Self(24);

    /// Variations PostScript name prefix.
    pub const VARIATIONS_POSTSCRIPT_NAME_PREFIX: Self = Self(25);
}

impl NameId {
    /// Create a new identifier from a raw u16 value.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Return the identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for NameId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Self::COPYRIGHT_NOTICE => "COPYRIGHT_NOTICE",
            Self::FAMILY_NAME => "FAMILY_NAME",
            Self::SUBFAMILY_NAME => "SUBFAMILY_NAME",
            Self::UNIQUE_ID => "UNIQUE_ID",
            Self::FULL_NAME => "FULL_NAME",
            Self::VERSION_STRING => "VERSION_STRING",
            Self::POSTSCRIPT_NAME => "POSTSCRIPT_NAME",
            Self::TRADEMARK => "TRADEMARK",
            Self::MANUFACTURER => "MANUFACTURER",
            Self::DESIGNER => "DESIGNER",
            Self::DESCRIPTION => "DESCRIPTION",
            Self::VENDOR_URL => "VENDOR_URL",
            Self::DESIGNER_URL => "DESIGNER_URL",
            Self::LICENSE_DESCRIPTION => "LICENSE_DESCRIPTION",
            Self::LICENSE_URL => "LICENSE_URL",
            Self::TYPOGRAPHIC_FAMILY_NAME => "TYPOGRAPHIC_FAMILY_NAME",
            Self::TYPOGRAPHIC_SUBFAMILY_NAME => "TYPOGRAPHIC_SUBFAMILY_NAME",
            Self::COMPATIBLE_FULL_NAME => "COMPATIBLE_FULL_NAME",
            Self::SAMPLE_TEXT => "SAMPLE_TEXT",
            Self::POSTSCRIPT_CID_NAME => "POSTSCRIPT_CID_NAME",
            Self::WWS_FAMILY_NAME => "WWS_FAMILY_NAME",
            Self::WWS_SUBFAMILY_NAME => "WWS_SUBFAMILY_NAME",
            Self::LIGHT_BACKGROUND_PALETTE => "LIGHT_BACKGROUND_PALETTE",
            Self::DARK_BACKGROUND_PALETTE => "DARK_BACKGROUND_PALETTE",
            Self::VARIATIONS_POSTSCRIPT_NAME_PREFIX => "VARIATIONS_POSTSCRIPT_NAME_PREFIX",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(name)
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

crate::newtype_scalar!(NameId, [u8; 2]);

#[cfg(test)]
mod tests {
    use super::NameId;

    #[test]
    fn debug_names() {
        assert_eq!(format!("{:?}", NameId::new(16)), "TYPOGRAPHIC_FAMILY_NAME");
        assert_eq!(NameId::new(300).to_string(), "300");
    }
}
