//! Whole-file identification, from bytes to fonts.

use std::{io::Cursor, path::Path};

use font_test_data::sfnt::{
    simple_font, CollectionBuilder, CollectionOffsets, NameBuilder, Os2Builder, SfntBuilder,
};
use font_types::{NameId, PanoseProportion, SelectionFlags, WeightClass};
use pretty_assertions::assert_eq;

use crate::{
    read_file, read_fonts, read_fonts_with, read_outcomes, OffsetBase, ReadError, ReadOptions,
    SfntOutcome, SkipReason, TypographicFont,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn identify(data: &[u8]) -> Result<Vec<TypographicFont>, ReadError> {
    read_fonts(Cursor::new(data), "test.ttf")
}

fn demo_font() -> SfntBuilder {
    SfntBuilder::cff()
        .name(&NameBuilder::new().windows_en(NameId::FAMILY_NAME, "Demo"))
        .os2(
            &Os2Builder::new()
                .weight(700)
                .selection(SelectionFlags::BOLD.bits()),
        )
}

#[test]
fn cff_bold_font() {
    init_logging();
    let fonts = identify(&demo_font().build()).unwrap();
    assert_eq!(fonts.len(), 1);
    let font = &fonts[0];
    assert_eq!(font.family(), "Demo");
    assert_eq!(font.name(), "Demo");
    assert_eq!(font.sub_family(), None);
    assert_eq!(font.weight(), WeightClass::BOLD);
    assert!(font.bold());
    assert!(!font.italic());
    assert_eq!(font.to_string(), "Demo");
    assert_eq!(font.file_name().to_str(), Some("test.ttf"));
}

#[test]
fn collection_with_garbage_member() {
    init_logging();
    let data = CollectionBuilder::new()
        .font(demo_font())
        .raw(b"this is not a font at all".to_vec())
        .build(CollectionOffsets::Stream);
    let fonts = identify(&data).unwrap();
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].family(), "Demo");

    let outcomes =
        read_outcomes(Cursor::new(&data), Path::new("test.ttc"), ReadOptions::new()).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(
        outcomes[1],
        SfntOutcome::Skipped(SkipReason::NotAnSfnt(_))
    ));
}

#[test]
fn missing_os2_yields_nothing() {
    let data = SfntBuilder::truetype()
        .name(&NameBuilder::new().windows_en(NameId::FAMILY_NAME, "Demo"))
        .build();
    assert_eq!(identify(&data).unwrap(), Vec::new());
}

#[test]
fn monospaced_panose() {
    let os2 = Os2Builder::new().panose([2, 11, 6, 9, 2, 2, 4, 3, 2, 4]);
    let fonts = identify(&simple_font("Mono", "Regular", &os2)).unwrap();
    assert_eq!(
        fonts[0].panose().proportion(),
        Some(PanoseProportion::Monospaced)
    );
    assert!(fonts[0].is_monospaced());
}

#[test]
fn truncated_directory_is_an_error() {
    let data = demo_font().build();
    let err = identify(&data[..30]).unwrap_err();
    assert!(err.is_truncation(), "{err:?}");
}

#[test]
fn truncated_table_data_is_an_error() {
    init_logging();
    // the directory is intact but the last table is cut short
    let data = demo_font().build();
    let err = identify(&data[..data.len() - 40]).unwrap_err();
    assert!(err.is_truncation(), "{err:?}");
}

#[test]
fn truncated_collection_member_fails_the_file() {
    let member = demo_font().build();
    let data = CollectionBuilder::new()
        .font(demo_font())
        .raw(member[..20].to_vec())
        .build(CollectionOffsets::Stream);
    // the raw member is the last thing in the file
    let err = identify(&data[..data.len() - 4]).unwrap_err();
    assert!(err.is_truncation(), "{err:?}");
}

#[test]
fn bad_version_yields_nothing() {
    let data = SfntBuilder::new(0x00020000)
        .name(&NameBuilder::new().windows_en(NameId::FAMILY_NAME, "Demo"))
        .os2(&Os2Builder::new())
        .build();
    assert!(identify(&data).unwrap().is_empty());
}

#[test]
fn parsing_is_idempotent() {
    let data = CollectionBuilder::new()
        .font(demo_font())
        .font(
            SfntBuilder::truetype()
                .name(&NameBuilder::new().unicode(NameId::FAMILY_NAME, "Other"))
                .os2(&Os2Builder::new()),
        )
        .build(CollectionOffsets::Stream);
    let first = identify(&data).unwrap();
    let second = identify(&data).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

fn weights_collection(offsets: CollectionOffsets) -> Vec<u8> {
    [300u16, 700, 500]
        .iter()
        .fold(CollectionBuilder::new(), |builder, weight| {
            builder.font(
                SfntBuilder::truetype()
                    .name(&NameBuilder::new().windows_en(NameId::FAMILY_NAME, "Family"))
                    .os2(&Os2Builder::new().weight(*weight)),
            )
        })
        .build(offsets)
}

fn weights(fonts: &[TypographicFont]) -> Vec<u16> {
    fonts.iter().map(|font| font.weight().to_u16()).collect()
}

#[test]
fn collection_order_with_stream_offsets() {
    let data = weights_collection(CollectionOffsets::Stream);
    let fonts = identify(&data).unwrap();
    assert_eq!(weights(&fonts), [300, 700, 500]);
}

#[test]
fn collection_order_with_file_offsets() {
    let data = weights_collection(CollectionOffsets::File);
    let options = ReadOptions::new().offset_base(OffsetBase::File);
    let fonts = read_fonts_with(Cursor::new(&data), "test.ttc", options).unwrap();
    assert_eq!(weights(&fonts), [300, 700, 500]);
}

#[test]
fn offset_base_only_matters_in_collections() {
    let data = demo_font().build();
    let options = ReadOptions::new().offset_base(OffsetBase::File);
    let with_file = read_fonts_with(Cursor::new(&data), "test.otf", options).unwrap();
    assert_eq!(with_file, identify(&data).unwrap());
}

#[test]
fn fallback_to_font_family() {
    let fonts = identify(&simple_font("Arial Narrow", "Bold", &Os2Builder::new())).unwrap();
    let font = &fonts[0];
    assert_eq!(font.family(), "Arial Narrow");
    assert_eq!(font.sub_family(), Some("Bold"));
    assert_eq!(font.name(), "Arial Narrow");
    assert_eq!(font.to_string(), "Arial Narrow Bold");
}

#[test]
fn typographic_family_groups_faces() {
    let names = NameBuilder::new()
        .windows_en(NameId::FAMILY_NAME, "Arial Narrow")
        .windows_en(NameId::SUBFAMILY_NAME, "Bold")
        .windows_en(NameId::TYPOGRAPHIC_FAMILY_NAME, "Arial")
        .windows_en(NameId::TYPOGRAPHIC_SUBFAMILY_NAME, "Narrow Bold");
    let data = SfntBuilder::truetype()
        .name(&names)
        .os2(&Os2Builder::new().weight(700))
        .build();
    let font = identify(&data).unwrap().remove(0);
    assert_eq!(font.family(), "Arial");
    assert_eq!(font.sub_family(), Some("Narrow Bold"));
    assert_eq!(font.name(), "Arial Narrow");
    assert_eq!(font.family_names().sub_family.as_deref(), Some("Bold"));
}

#[test]
fn other_languages_never_override_unicode() {
    let names = NameBuilder::new()
        .unicode(NameId::FAMILY_NAME, "Unicode")
        .windows(0x0407, NameId::FAMILY_NAME, "Deutsch")
        .windows(0x0411, NameId::FAMILY_NAME, "Nihongo");
    let data = SfntBuilder::truetype()
        .name(&names)
        .os2(&Os2Builder::new())
        .build();
    assert_eq!(identify(&data).unwrap()[0].family(), "Unicode");
}

#[test]
fn bold_and_italic_are_independent() {
    for (bits, bold, italic) in [
        (0, false, false),
        (SelectionFlags::BOLD.bits(), true, false),
        (SelectionFlags::ITALIC.bits(), false, true),
        ((SelectionFlags::BOLD | SelectionFlags::ITALIC).bits(), true, true),
    ] {
        let data = simple_font("Demo", "Style", &Os2Builder::new().selection(bits));
        let font = identify(&data).unwrap().remove(0);
        assert_eq!((font.bold(), font.italic()), (bold, italic), "bits {bits:#06x}");
    }
}

#[test]
fn read_from_disk() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.otf");
    std::fs::write(&path, demo_font().build()).unwrap();
    let fonts = read_file(&path).unwrap();
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].file_name(), path);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.ttf");
    assert!(matches!(read_file(path), Err(ReadError::Io(_))));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let font = identify(&demo_font().build()).unwrap().remove(0);
    let json = serde_json::to_string(&font).unwrap();
    let back: TypographicFont = serde_json::from_str(&json).unwrap();
    assert_eq!(font, back);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_with_unprintable_vendor() {
    for vendor in [[0u8; 4], *b" ab ", *b"{}{}"] {
        let data = simple_font("Demo", "Regular", &Os2Builder::new().vendor(&vendor));
        let font = identify(&data).unwrap().remove(0);
        let json = serde_json::to_string(&font).unwrap();
        let back: TypographicFont = serde_json::from_str(&json).unwrap();
        assert_eq!(font, back);
    }
}
