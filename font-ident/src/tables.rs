//! Parsers for the tables used to identify a font.

pub mod name;
pub mod os2;
