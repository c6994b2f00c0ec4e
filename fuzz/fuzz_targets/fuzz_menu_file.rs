#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing must never panic; a parsed tree must be internally consistent.
        if let Ok(tree) = shellmenu::parse_menu(content) {
            assert!(tree.depth() <= content.lines().count());
            assert!(tree.item_count() <= content.lines().count());
        }
    }
});
