#![no_main]

use cargo2port::{extract_records, render_stanza, StanzaConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Extraction and rendering should never panic
        let outcome = extract_records(content);
        let stanza = render_stanza(&outcome.records, &StanzaConfig::default());
        assert!(stanza.starts_with("cargo.crates \\"));
    }
});
