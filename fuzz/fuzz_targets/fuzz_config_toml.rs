#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing, including unknown-key warnings, should never panic
        let _ = toml::from_str::<shellmenu::Config>(content);
        let _ = shellmenu::config::parse_with_warnings(content, Path::new("fuzz.toml"));
    }
});
