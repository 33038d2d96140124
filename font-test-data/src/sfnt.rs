//! Builders for synthetic fonts and font collections.
//!
//! These only produce what identification needs: a table directory plus
//! whichever tables a test asks for. Checksums are left at zero.

use font_types::{NameId, Tag, CFF_SFNT_VERSION, TTC_HEADER_TAG, TT_SFNT_VERSION};

use crate::bebuffer::BeBuffer;

/// Platform ids used in `name` records.
pub const PLATFORM_UNICODE: u16 = 0;
pub const PLATFORM_MACINTOSH: u16 = 1;
pub const PLATFORM_WINDOWS: u16 = 3;

/// Windows LCID for U.S. English.
pub const LANGUAGE_EN_US: u16 = 0x0409;

const TABLE_RECORD_LEN: u32 = 16;
const DIRECTORY_HEADER_LEN: u32 = 12;

/// Builds a `name` table.
#[derive(Clone, Debug, Default)]
pub struct NameBuilder {
    records: Vec<NameEntry>,
}

#[derive(Clone, Debug)]
struct NameEntry {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: NameId,
    data: Vec<u8>,
}

impl NameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A Windows Unicode BMP record in U.S. English.
    pub fn windows_en(self, name_id: NameId, text: &str) -> Self {
        self.windows(LANGUAGE_EN_US, name_id, text)
    }

    /// A Windows Unicode BMP record in the given language.
    pub fn windows(self, language_id: u16, name_id: NameId, text: &str) -> Self {
        self.raw(PLATFORM_WINDOWS, 1, language_id, name_id, utf16_be(text))
    }

    /// A Unicode-platform record (encoding 3, language 0).
    pub fn unicode(self, name_id: NameId, text: &str) -> Self {
        self.raw(PLATFORM_UNICODE, 3, 0, name_id, utf16_be(text))
    }

    /// A Macintosh Roman record; `text` must be ASCII.
    pub fn mac_roman(self, name_id: NameId, text: &str) -> Self {
        self.raw(PLATFORM_MACINTOSH, 0, 0, name_id, text.as_bytes().to_vec())
    }

    /// A record with arbitrary ids and string bytes.
    pub fn raw(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: NameId,
        data: Vec<u8>,
    ) -> Self {
        self.records.push(NameEntry {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            data,
        });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.records.len() as u16;
        let storage_offset = 6 + 12 * count;
        let mut buf = BeBuffer::new().push(0u16).push(count).push(storage_offset);
        let mut string_offset = 0u16;
        for record in &self.records {
            buf = buf
                .push(record.platform_id)
                .push(record.encoding_id)
                .push(record.language_id)
                .push(record.name_id)
                .push(record.data.len() as u16)
                .push(string_offset);
            string_offset += record.data.len() as u16;
        }
        for record in &self.records {
            buf = buf.bytes(&record.data);
        }
        buf.into_vec()
    }
}

/// Encode text as UTF-16BE, the encoding of Unicode and Windows name strings.
pub fn utf16_be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Builds an `OS/2` table.
///
/// The output always has the 78-byte field layout of version 0, whatever
/// `version` says; identification reads nothing past `fsSelection`.
#[derive(Clone, Debug)]
pub struct Os2Builder {
    pub version: u16,
    pub weight_class: u16,
    pub panose: [u8; 10],
    pub vendor: Tag,
    pub fs_selection: u16,
}

impl Default for Os2Builder {
    fn default() -> Self {
        Self {
            version: 4,
            weight_class: 400,
            panose: [2, 11, 5, 3, 2, 2, 4, 2, 2, 4],
            vendor: Tag::new(b"NONE"),
            fs_selection: 1 << 6,
        }
    }
}

impl Os2Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight_class: u16) -> Self {
        self.weight_class = weight_class;
        self
    }

    pub fn selection(mut self, fs_selection: u16) -> Self {
        self.fs_selection = fs_selection;
        self
    }

    pub fn panose(mut self, panose: [u8; 10]) -> Self {
        self.panose = panose;
        self
    }

    pub fn vendor(mut self, vendor: &[u8; 4]) -> Self {
        self.vendor = Tag::new(vendor);
        self
    }

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        BeBuffer::new()
            .push(self.version)
            .push(500i16) // xAvgCharWidth
            .push(self.weight_class)
            .push(5u16) // usWidthClass
            .push(0u16) // fsType
            .extend([0i16; 11]) // sub/superscript, strikeout, family class
            .bytes(&self.panose)
            .extend([0u32; 4]) // ulUnicodeRange1-4
            .push(self.vendor)
            .push(self.fs_selection)
            .push(0x20u16) // usFirstCharIndex
            .push(0x7Eu16) // usLastCharIndex
            .extend([800i16, -200, 0]) // typo ascender, descender, line gap
            .extend([1000u16, 200]) // win ascent, descent
            .into_vec()
    }
}

/// Builds a single sfnt stream: a table directory followed by table data.
#[derive(Clone, Debug)]
pub struct SfntBuilder {
    version: u32,
    tables: Vec<(Tag, Vec<u8>)>,
}

impl SfntBuilder {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            tables: Vec::new(),
        }
    }

    /// A font with TrueType outlines.
    pub fn truetype() -> Self {
        Self::new(TT_SFNT_VERSION)
    }

    /// A font with CFF outlines (`OTTO`).
    pub fn cff() -> Self {
        Self::new(CFF_SFNT_VERSION)
    }

    /// Add a table; tables are written in the order they are added.
    pub fn table(mut self, tag: Tag, data: Vec<u8>) -> Self {
        self.tables.push((tag, data));
        self
    }

    pub fn name(self, name: &NameBuilder) -> Self {
        self.table(Tag::new(b"name"), name.build())
    }

    pub fn os2(self, os2: &Os2Builder) -> Self {
        self.table(Tag::new(b"OS/2"), os2.build())
    }

    /// The size of the table directory, in bytes.
    pub fn directory_len(&self) -> u32 {
        DIRECTORY_HEADER_LEN + TABLE_RECORD_LEN * self.tables.len() as u32
    }

    /// Build a standalone font file.
    pub fn build(&self) -> Vec<u8> {
        self.build_with_offset_base(0)
    }

    /// Build the stream, adding `base` to every table offset written in the
    /// directory.
    ///
    /// Inside a collection, `base` is the position of this stream in the
    /// file when table offsets are file-relative, or zero when they are
    /// relative to the stream.
    pub fn build_with_offset_base(&self, base: u32) -> Vec<u8> {
        let num_tables = self.tables.len() as u16;
        let entry_selector = num_tables.checked_ilog2().unwrap_or(0) as u16;
        let search_range = (1u16 << entry_selector) * 16;
        let range_shift = (num_tables * 16).saturating_sub(search_range);

        let mut directory = BeBuffer::new()
            .push(self.version)
            .push(num_tables)
            .push(search_range)
            .push(entry_selector)
            .push(range_shift);
        let mut data = BeBuffer::new();
        let data_start = self.directory_len();
        for (tag, table) in &self.tables {
            let offset = base + data_start + data.len() as u32;
            directory = directory
                .push(*tag)
                .push(0u32) // checksum
                .push(offset)
                .push(table.len() as u32);
            data = data.bytes(table).align4();
        }
        directory.bytes(&data).into_vec()
    }
}

/// How table offsets inside collection members are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionOffsets {
    /// Relative to the start of each member stream.
    Stream,
    /// Relative to the start of the file, as the OpenType spec describes.
    File,
}

/// One member of a collection under construction.
#[derive(Clone, Debug)]
pub enum Member {
    Font(SfntBuilder),
    /// Arbitrary bytes placed where a font stream would be.
    Raw(Vec<u8>),
}

/// Builds a `ttcf` font collection.
#[derive(Clone, Debug, Default)]
pub struct CollectionBuilder {
    members: Vec<Member>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: SfntBuilder) -> Self {
        self.members.push(Member::Font(font));
        self
    }

    pub fn raw(mut self, bytes: Vec<u8>) -> Self {
        self.members.push(Member::Raw(bytes));
        self
    }

    pub fn build(&self, offsets: CollectionOffsets) -> Vec<u8> {
        let header_len = 12 + 4 * self.members.len();
        let mut header = BeBuffer::new()
            .push(TTC_HEADER_TAG)
            .push(0x00010000u32)
            .push(self.members.len() as u32);
        let mut body = BeBuffer::new();
        for member in &self.members {
            let start = (header_len + body.len()) as u32;
            header = header.push(start);
            let bytes = match (member, offsets) {
                (Member::Font(font), CollectionOffsets::Stream) => font.build(),
                (Member::Font(font), CollectionOffsets::File) => font.build_with_offset_base(start),
                (Member::Raw(bytes), _) => bytes.clone(),
            };
            body = body.bytes(&bytes).align4();
        }
        header.bytes(&body).into_vec()
    }
}

/// A complete single font with the given family/subfamily names (Windows,
/// U.S. English) and `OS/2` table.
pub fn simple_font(family: &str, subfamily: &str, os2: &Os2Builder) -> Vec<u8> {
    SfntBuilder::truetype()
        .name(
            &NameBuilder::new()
                .windows_en(NameId::FAMILY_NAME, family)
                .windows_en(NameId::SUBFAMILY_NAME, subfamily),
        )
        .os2(os2)
        .build()
}
