//! Identifying OpenType fonts
//!
//! This crate reads just enough of a font file to tell what it is: the
//! family and style names from the [`name`][name] table, and the weight,
//! style flags and PANOSE classification from the [`OS/2`][os2] table.
//! Glyph outlines, hinting and layout data are never touched.
//!
//! Both single fonts (`.ttf`, `.otf`) and font collections (`.ttc`, `.otc`)
//! are supported. Every stream in a file is identified independently; a
//! stream that is not a font, or that lacks one of the two tables, is
//! skipped rather than failing the whole file.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! for font in font_ident::read_file(path_to_my_font_file).unwrap() {
//!     println!("{font}: weight {}, bold {}", font.weight(), font.bold());
//! }
//! ```
//!
//! Any `Read + Seek` source works; the path is only recorded in the output:
//!
//! ```
//! # let bytes: Vec<u8> = vec![0; 12];
//! use std::io::Cursor;
//! let fonts = font_ident::read_fonts(Cursor::new(bytes), "in-memory.ttf").unwrap();
//! # assert!(fonts.is_empty());
//! ```
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name
//! [os2]: https://learn.microsoft.com/en-us/typography/opentype/spec/os2

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod container;
mod cursor;
mod font;
mod read;
pub mod table_directory;
pub mod tables;

pub use container::{
    read_file, read_file_with, read_fonts, read_fonts_with, read_outcomes, ContainerHeader,
    FileKind, OffsetBase, ReadOptions,
};
pub use cursor::ByteCursor;
pub use font::{FontStyle, TypographicFont};
pub use read::ReadError;
pub use table_directory::{read_sfnt, SfntOutcome, SfntStream, SkipReason, TableRecord};
pub use tables::{name::FamilyNamesInfo, os2::Os2Info};

/// Public re-export of the font-types crate.
pub extern crate font_types as types;
