//! The `fsSelection` style bits.

bitflags::bitflags! {
    /// Font style bits from the `fsSelection` field of the `OS/2` table.
    ///
    /// Each bit is independent; a bold italic face sets both
    /// [`BOLD`](Self::BOLD) and [`ITALIC`](Self::ITALIC).
    ///
    /// See <https://learn.microsoft.com/en-us/typography/opentype/spec/os2#fsselection>
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SelectionFlags: u16 {
        /// Bit 0: font contains italic or oblique glyphs.
        const ITALIC = 1 << 0;
        /// Bit 1: glyphs are underscored.
        const UNDERSCORE = 1 << 1;
        /// Bit 2: glyphs have their foreground and background reversed.
        const NEGATIVE = 1 << 2;
        /// Bit 3: outline (hollow) glyphs.
        const OUTLINED = 1 << 3;
        /// Bit 4: glyphs are overstruck.
        const STRIKEOUT = 1 << 4;
        /// Bit 5: glyphs are emboldened.
        const BOLD = 1 << 5;
        /// Bit 6: glyphs are in the standard weight/style for the font.
        const REGULAR = 1 << 6;
        /// Bit 7: use the typo ascender/descender/line gap as default line spacing.
        const USE_TYPO_METRICS = 1 << 7;
        /// Bit 8: the name table strings follow the weight/width/slope model.
        const WWS = 1 << 8;
        /// Bit 9: font contains oblique glyphs.
        const OBLIQUE = 1 << 9;
    }
}

impl SelectionFlags {
    /// Interpret a raw `fsSelection` word, dropping reserved bits.
    pub const fn from_raw_word(raw: u16) -> Self {
        Self::from_bits_truncate(raw)
    }
}
