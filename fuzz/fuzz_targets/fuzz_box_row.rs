#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the single box-row parser in isolation
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = libtops::parser::parse_box_row(line);
    }
});
