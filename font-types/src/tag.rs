use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

/// An OpenType tag.
///
/// In [OpenType][spec], a tag is a 4-byte array where each byte is in the
/// printable ASCII range `(0x20..=0x7E)`.
///
/// Tags read out of a table directory are not validated: a foreign or
/// damaged file can carry any four bytes, and those still need to be
/// representable so they can be compared and reported.
///
/// [spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#data-types
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes, without validation.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Attempt to create a `Tag` from raw bytes.
    ///
    /// The slice must contain between 1 and 4 bytes in the printable ascii
    /// range (`0x20..=0x7E`), must not start with a space, and may only be
    /// followed by spaces once a space is seen. Short input is padded with
    /// spaces.
    pub fn new_checked(src: &[u8]) -> Result<Self, InvalidTag> {
        if src.is_empty() || src.len() > 4 {
            return Err(InvalidTag::InvalidLength(src.len()));
        }
        let mut raw = [b' '; 4];
        let mut seen_space = false;
        for (pos, byte) in src.iter().copied().enumerate() {
            match byte {
                b' ' if pos == 0 => return Err(InvalidTag::InvalidByte { pos, byte }),
                b' ' => seen_space = true,
                0..=0x1F | 0x7F.. => return Err(InvalidTag::InvalidByte { pos, byte }),
                _ if seen_space => return Err(InvalidTag::ByteAfterSpace { pos }),
                _ => (),
            }
            raw[pos] = byte;
        }
        Ok(Tag(raw))
    }

    /// Construct a tag from a big-endian `u32`, as used for sfnt versions.
    pub const fn from_u32(src: u32) -> Self {
        Self(src.to_be_bytes())
    }

    /// Create a tag from raw big-endian bytes, without validation.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Return the tag as a big-endian `u32`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

/// An error representing an invalid tag.
///
/// This is returned as an error from [`Tag::new_checked`] and from the
/// [`FromStr`] impl.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidTag {
    /// The tag was not between 1 and 4 bytes in length.
    InvalidLength(usize),
    /// The tag contained a byte outside the printable ASCII range, or began
    /// with a space.
    InvalidByte { pos: usize, byte: u8 },
    /// The tag contained one or more non-space characters after a space.
    ByteAfterSpace { pos: usize },
}

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Tag::new_checked(src.as_bytes())
    }
}

impl crate::raw::Scalar for Tag {
    type Raw = [u8; 4];

    fn to_raw(self) -> Self::Raw {
        self.to_be_bytes()
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Self::from_be_bytes(raw)
    }
}

impl std::error::Error for InvalidTag {}

impl PartialEq<[u8; 4]> for Tag {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Display for InvalidTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTag::InvalidByte { pos, byte } => {
                write!(f, "Invalid byte 0x{byte:X} at index {pos}")
            }
            InvalidTag::InvalidLength(len) => write!(f, "Invalid length ({len})"),
            InvalidTag::ByteAfterSpace { .. } => write!(f, "Non-space character after first space"),
        }
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag([b' '; 4])
    }
}

// human-readable formats get a string, everything else the raw bytes.
#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let raw = String::deserialize(deserializer)?;
            match unescape(&raw) {
                Some(bytes) => Ok(Tag(bytes)),
                None => raw.parse().map_err(serde::de::Error::custom),
            }
        } else {
            <[u8; 4]>::deserialize(deserializer).map(|raw| Tag::new(&raw))
        }
    }
}

/// Reverse the [`Display`] impl: printable ASCII plus `{0xNN}` escapes.
///
/// Returns `None` unless the input spells exactly four bytes. A `{` that
/// does not start an escape is taken literally.
#[cfg(feature = "serde")]
fn unescape(src: &str) -> Option<[u8; 4]> {
    let src = src.as_bytes();
    let mut out = [0u8; 4];
    let mut len = 0;
    let mut pos = 0;
    while pos < src.len() {
        let byte = match escaped_byte(&src[pos..]) {
            Some(byte) => {
                pos += 6;
                byte
            }
            None if (0x20..=0x7E).contains(&src[pos]) => {
                pos += 1;
                src[pos - 1]
            }
            None => return None,
        };
        *out.get_mut(len)? = byte;
        len += 1;
    }
    (len == 4).then_some(out)
}

#[cfg(feature = "serde")]
fn escaped_byte(src: &[u8]) -> Option<u8> {
    match src {
        [b'{', b'0', b'x', hi, lo, b'}', ..] => {
            let hex = [*hi, *lo];
            let hex = std::str::from_utf8(&hex).ok()?;
            if !hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
                return None;
            }
            u8::from_str_radix(hex, 16).ok()
        }
        _ => None,
    }
}
