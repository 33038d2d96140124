//! The identified face.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use font_types::{Panose, SelectionFlags, Tag, WeightClass};

use crate::tables::{name::FamilyNamesInfo, os2::Os2Info};

bitflags::bitflags! {
    /// The styles a host font API can request for a face: the subset of
    /// [`SelectionFlags`] that maps onto bold/italic/underline/strikeout
    /// font handles.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKEOUT = 1 << 3;
    }
}

/// One identified font face.
///
/// This combines the names from the `name` table with the weight, style and
/// classification from the `OS/2` table, and the file the face came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypographicFont {
    names: FamilyNamesInfo,
    os2: Os2Info,
    file_name: PathBuf,
}

impl TypographicFont {
    pub fn new(names: FamilyNamesInfo, os2: Os2Info, file_name: impl Into<PathBuf>) -> Self {
        Self {
            names,
            os2,
            file_name: file_name.into(),
        }
    }

    /// The typographic family.
    ///
    /// This is "Arial" for "Arial Black" and "Arial Narrow", which lets them
    /// be grouped with the other Arial faces even though their font family
    /// names differ.
    pub fn family(&self) -> &str {
        &self.names.typographic_family
    }

    /// The typographic subfamily, e.g. "Black" or "Narrow" alongside
    /// Arial's "Regular" and "Bold".
    pub fn sub_family(&self) -> Option<&str> {
        self.names.typographic_subfamily.as_deref()
    }

    /// The font family name. Together with the style bits, this is what
    /// identifies the face to a host font API.
    pub fn name(&self) -> &str {
        &self.names.font_name
    }

    pub fn weight(&self) -> WeightClass {
        self.os2.weight
    }

    pub fn bold(&self) -> bool {
        self.has(SelectionFlags::BOLD)
    }

    pub fn italic(&self) -> bool {
        self.has(SelectionFlags::ITALIC)
    }

    pub fn oblique(&self) -> bool {
        self.has(SelectionFlags::OBLIQUE)
    }

    pub fn underlined(&self) -> bool {
        self.has(SelectionFlags::UNDERSCORE)
    }

    pub fn negative(&self) -> bool {
        self.has(SelectionFlags::NEGATIVE)
    }

    pub fn outlined(&self) -> bool {
        self.has(SelectionFlags::OUTLINED)
    }

    pub fn strikeout(&self) -> bool {
        self.has(SelectionFlags::STRIKEOUT)
    }

    /// Glyphs are in the standard weight and style for the font.
    pub fn regular(&self) -> bool {
        self.has(SelectionFlags::REGULAR)
    }

    pub fn use_typo_metrics(&self) -> bool {
        self.has(SelectionFlags::USE_TYPO_METRICS)
    }

    pub fn wws(&self) -> bool {
        self.has(SelectionFlags::WWS)
    }

    /// The file (or collection) this face was read from.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn panose(&self) -> Panose {
        self.os2.panose
    }

    /// `true` if the PANOSE proportion marks a monospaced design.
    pub fn is_monospaced(&self) -> bool {
        self.os2.panose.is_monospaced()
    }

    pub fn vendor(&self) -> Tag {
        self.os2.vendor
    }

    pub fn os2_version(&self) -> u16 {
        self.os2.version
    }

    /// The style bits a host font API understands.
    pub fn font_style(&self) -> FontStyle {
        let mut style = FontStyle::empty();
        style.set(FontStyle::BOLD, self.bold());
        style.set(FontStyle::ITALIC, self.italic());
        style.set(FontStyle::UNDERLINE, self.underlined());
        style.set(FontStyle::STRIKEOUT, self.strikeout());
        style
    }

    pub fn family_names(&self) -> &FamilyNamesInfo {
        &self.names
    }

    pub fn os2(&self) -> &Os2Info {
        &self.os2
    }

    fn has(&self, flag: SelectionFlags) -> bool {
        self.os2.style.contains(flag)
    }
}

/// `Family` alone when there is no subfamily, else `"Family SubFamily"`.
impl fmt::Display for TypographicFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_family() {
            Some(sub_family) => write!(f, "{} {sub_family}", self.family()),
            None => f.write_str(self.family()),
        }
    }
}
