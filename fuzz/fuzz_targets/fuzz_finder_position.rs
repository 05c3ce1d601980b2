#![no_main]

use libfuzzer_sys::fuzz_target;
use zotero_collection::application::parse_position;

fuzz_target!(|data: (&str, u8)| {
    let (line, len) = data;
    if let Some(position) = parse_position(line, len as usize) {
        assert!(position < len as usize);
    }
});
