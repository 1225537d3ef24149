#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Fuzz the main TOPS parsing API: line classification, metadata parsing,
    // box-row recovery, and accumulation.
    let _ = libtops::Model::from_reader(Cursor::new(data), "fuzz");
});
