#![no_main]
use std::io::Cursor;

use font_ident::{tables::name::read_family_names, ByteCursor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut cursor) = ByteCursor::new(Cursor::new(data)) else {
        return;
    };
    let table_len = u32::try_from(data.len()).unwrap_or(u32::MAX);
    let _ = read_family_names(&mut cursor, table_len);
});
