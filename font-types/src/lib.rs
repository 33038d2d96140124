//! Common [scalar data types][data types] and small value types used when
//! identifying font files.
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod name_id;
mod panose;
mod raw;
mod selection;
mod tag;
mod weight;


pub use name_id::NameId;
pub use panose::{Panose, PanoseProportion};
pub use raw::Scalar;
pub use selection::SelectionFlags;
pub use tag::{InvalidTag, Tag};
pub use weight::WeightClass;

/// The header tag for a font collection file.
pub const TTC_HEADER_TAG: Tag = Tag::new(b"ttcf");

/// The SFNT version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;

/// The SFNT version for fonts containing CFF outlines (`OTTO`).
pub const CFF_SFNT_VERSION: u32 = 0x4F54544F;
