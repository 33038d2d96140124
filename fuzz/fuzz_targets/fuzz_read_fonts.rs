#![no_main]
use std::{io::Cursor, path::Path};

use font_ident::{read_outcomes, OffsetBase, ReadOptions, SfntOutcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for base in [OffsetBase::Stream, OffsetBase::File] {
        let options = ReadOptions::new().offset_base(base);
        let Ok(outcomes) = read_outcomes(Cursor::new(data), Path::new("fuzz.ttc"), options) else {
            continue;
        };
        for font in outcomes.into_iter().filter_map(SfntOutcome::font) {
            let _ = font.to_string();
            let _ = font.panose().proportion();
            let _ = font.font_style();
        }
    }
});
