//! Listing the font families found in a set of files.
//!
//! The `fontlist` binary identifies every face with [`font_ident`], then
//! groups the faces into families the way a font picker presents them.

pub mod family;
pub mod files;
pub mod print;

pub use family::{face_label, FontFamily};
