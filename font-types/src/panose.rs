//! PANOSE classification.

use core::fmt;

/// The ten-byte [PANOSE] classification stored in the `OS/2` table.
///
/// Only the proportion digit is interpreted; the other nine bytes are kept
/// verbatim.
///
/// [PANOSE]: https://learn.microsoft.com/en-us/typography/opentype/spec/os2#panose
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Panose([u8; 10]);

impl Panose {
    /// The number of bytes in a PANOSE classification.
    pub const LEN: usize = 10;

    const PROPORTION: usize = 3;

    /// Wrap raw classification bytes.
    pub const fn new(raw: [u8; 10]) -> Self {
        Self(raw)
    }

    /// The raw classification bytes.
    pub const fn as_bytes(&self) -> &[u8; 10] {
        &self.0
    }

    /// The proportion digit, or `None` if the byte is outside the defined
    /// range.
    pub fn proportion(&self) -> Option<PanoseProportion> {
        PanoseProportion::new(self.0[Self::PROPORTION])
    }

    /// `true` if the proportion digit marks a monospaced design.
    pub fn is_monospaced(&self) -> bool {
        self.proportion() == Some(PanoseProportion::Monospaced)
    }
}

impl From<[u8; 10]> for Panose {
    fn from(raw: [u8; 10]) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Panose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Panose({:?})", self.0)
    }
}

/// The proportion digit (byte 3) of a PANOSE classification, for the Latin
/// text family kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PanoseProportion {
    Any = 0,
    NoFit = 1,
    OldStyle = 2,
    Modern = 3,
    EvenWidth = 4,
    Expanded = 5,
    Condensed = 6,
    VeryExpanded = 7,
    VeryCondensed = 8,
    Monospaced = 9,
}

impl PanoseProportion {
    /// Map a raw digit to its proportion, if it is defined.
    pub const fn new(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Any,
            1 => Self::NoFit,
            2 => Self::OldStyle,
            3 => Self::Modern,
            4 => Self::EvenWidth,
            5 => Self::Expanded,
            6 => Self::Condensed,
            7 => Self::VeryExpanded,
            8 => Self::VeryCondensed,
            9 => Self::Monospaced,
            _ => return None,
        })
    }

    /// The raw digit.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportion_digit() {
        let mono = Panose::new([2, 11, 6, 9, 2, 2, 4, 3, 2, 4]);
        assert_eq!(mono.proportion(), Some(PanoseProportion::Monospaced));
        assert!(mono.is_monospaced());

        let modern = Panose::new([2, 11, 6, 3, 2, 2, 4, 3, 2, 4]);
        assert_eq!(modern.proportion(), Some(PanoseProportion::Modern));
        assert!(!modern.is_monospaced());
    }

    #[test]
    fn undefined_proportion() {
        let odd = Panose::new([0, 0, 0, 42, 0, 0, 0, 0, 0, 0]);
        assert_eq!(odd.proportion(), None);
        assert!(!odd.is_monospaced());
        assert_eq!(odd.as_bytes()[3], 42);
    }

    #[test]
    fn digits_round_trip() {
        for raw in 0..=9 {
            assert_eq!(PanoseProportion::new(raw).map(PanoseProportion::to_u8), Some(raw));
        }
    }
}
