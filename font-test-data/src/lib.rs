//! test data shared between the font-ident crates.

pub mod bebuffer;
pub mod sfnt;

pub use bebuffer::BeBuffer;

pub mod name {

    /// Three records: a Macintosh family name, then Windows U.S. English
    /// family ("Demo") and subfamily ("Regular") names.
    #[rustfmt::skip]
    pub static MAC_AND_WINDOWS: &[u8] = &[
        0x00, 0x00,             // format 0
        0x00, 0x03,             // count 3
        0x00, 0x2A,             // storage offset 42
        // platform, encoding, language, name id, length, offset
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x04, 0x00, 0x00,
        0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x01, 0x00, 0x08, 0x00, 0x04,
        0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x02, 0x00, 0x0E, 0x00, 0x0C,
        b'M', b'a', b'c', b'!', // mac roman
        0x00, b'D', 0x00, b'e', 0x00, b'm', 0x00, b'o',
        0x00, b'R', 0x00, b'e', 0x00, b'g', 0x00, b'u', 0x00, b'l', 0x00, b'a', 0x00, b'r',
    ];
}

pub mod os2 {

    /// A bold, monospaced face from vendor "GOOG".
    #[rustfmt::skip]
    pub static BOLD_MONO: &[u8] = &[
        0x00, 0x03,             // version 3
        0x02, 0x58,             // xAvgCharWidth 600
        0x02, 0xBC,             // usWeightClass 700
        0x00, 0x05,             // usWidthClass 5
        0x00, 0x00,             // fsType
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // subscript
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // superscript
        0x00, 0x00, 0x00, 0x00, // strikeout
        0x00, 0x00,             // sFamilyClass
        0x02, 0x0B, 0x08, 0x09, 0x03, 0x02, 0x02, 0x02, 0x02, 0x04, // panose
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ulUnicodeRange1-2
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ulUnicodeRange3-4
        b'G', b'O', b'O', b'G', // achVendID
        0x00, 0x20,             // fsSelection: bold
        0x00, 0x20, 0x00, 0x7E, // first/last char index
    ];
}
