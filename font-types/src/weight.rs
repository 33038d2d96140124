//! The `usWeightClass` visual weight.

use core::fmt;

/// Visual weight class of a face, from the `usWeightClass` field of `OS/2`.
///
/// The field is nominally in `1..=1000` with the standard steps available as
/// associated constants; other values are kept as-is.
///
/// See <https://learn.microsoft.com/en-us/typography/opentype/spec/os2#usweightclass>
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct WeightClass(u16);

impl WeightClass {
    /// Thin (Hairline), 100.
    pub const THIN: Self = Self(100);
    /// Extra-light (Ultra-light), 200.
    pub const EXTRA_LIGHT: Self = Self(200);
    /// Light, 300.
    pub const LIGHT: Self = Self(300);
    /// Normal (Regular), 400.
    pub const NORMAL: Self = Self(400);
    /// Medium, 500.
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold (Demi-bold), 600.
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold, 700.
    pub const BOLD: Self = Self(700);
    /// Extra-bold (Ultra-bold), 800.
    pub const EXTRA_BOLD: Self = Self(800);
    /// Black (Heavy), 900.
    pub const BLACK: Self = Self(900);

    const STEPS: [(Self, &'static str); 9] = [
        (Self::THIN, "Thin"),
        (Self::EXTRA_LIGHT, "ExtraLight"),
        (Self::LIGHT, "Light"),
        (Self::NORMAL, "Normal"),
        (Self::MEDIUM, "Medium"),
        (Self::SEMI_BOLD, "SemiBold"),
        (Self::BOLD, "Bold"),
        (Self::EXTRA_BOLD, "ExtraBold"),
        (Self::BLACK, "Black"),
    ];

    /// Create a weight class from the raw field value.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Return the raw field value.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// The name of the standard step, if this is one.
    pub fn name(self) -> Option<&'static str> {
        Self::STEPS
            .iter()
            .find(|(step, _)| *step == self)
            .map(|(_, name)| *name)
    }

    /// Absolute distance between two weights, used to find the face closest
    /// to a requested weight.
    pub const fn distance(self, other: Self) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl Default for WeightClass {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u16> for WeightClass {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Debug for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "WeightClass({})", self.0),
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

crate::newtype_scalar!(WeightClass, [u8; 2]);

#[cfg(test)]
mod tests {
    use super::WeightClass;

    #[test]
    fn standard_steps() {
        assert_eq!(WeightClass::new(700), WeightClass::BOLD);
        assert_eq!(WeightClass::BOLD.name(), Some("Bold"));
        assert_eq!(WeightClass::new(350).name(), None);
        assert_eq!(WeightClass::new(350).to_string(), "350");
        assert_eq!(format!("{:?}", WeightClass::BLACK), "Black(900)");
    }

    #[test]
    fn ordering_and_distance() {
        assert!(WeightClass::LIGHT < WeightClass::NORMAL);
        assert_eq!(WeightClass::LIGHT.distance(WeightClass::NORMAL), 100);
        assert_eq!(WeightClass::BOLD.distance(WeightClass::NORMAL), 300);
    }
}
