//! Property tests for lockfile extraction.

use proptest::prelude::*;

use cargo2port::{extract_records, render_stanza, LockfileFormat, StanzaConfig};

#[derive(Debug, Clone)]
struct Package {
    name: String,
    version: String,
    checksum: Option<String>,
}

fn package() -> impl Strategy<Value = Package> {
    (
        "[a-z][a-z0-9_-]{0,20}",
        "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        proptest::option::of("[0-9a-f]{64}"),
    )
        .prop_map(|(name, version, checksum)| Package {
            name,
            version,
            checksum,
        })
}

fn current_lockfile(packages: &[Package]) -> String {
    let mut text = String::from("version = 3\n\n");
    for package in packages {
        text.push_str("[[package]]\n");
        text.push_str(&format!("name = \"{}\"\n", package.name));
        text.push_str(&format!("version = \"{}\"\n", package.version));
        text.push_str("source = \"registry+https://github.com/rust-lang/crates.io-index\"\n");
        if let Some(checksum) = &package.checksum {
            text.push_str(&format!("checksum = \"{checksum}\"\n"));
        }
        text.push('\n');
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every package block becomes a record, in document order.
    #[test]
    fn property_current_blocks_round_trip_in_order(
        packages in proptest::collection::vec(package(), 1..16)
    ) {
        let outcome = extract_records(&current_lockfile(&packages));

        prop_assert_eq!(outcome.format, LockfileFormat::Current);
        prop_assert_eq!(outcome.skipped, 0);
        prop_assert_eq!(outcome.records.len(), packages.len());
        for (record, package) in outcome.records.iter().zip(&packages) {
            prop_assert_eq!(record.name(), package.name.as_str());
            prop_assert_eq!(record.version(), package.version.as_str());
            prop_assert_eq!(record.checksum(), package.checksum.as_deref());
        }

        let stanza = render_stanza(&outcome.records, &StanzaConfig::default());
        let with_checksum = packages.iter().filter(|p| p.checksum.is_some()).count();
        prop_assert_eq!(stanza.lines().count(), with_checksum + 1);
    }

    /// PROPERTY: a `[metadata]` header always routes to the legacy extractor.
    #[test]
    fn property_metadata_header_forces_legacy(
        packages in proptest::collection::vec(package(), 0..8)
    ) {
        let mut text = current_lockfile(&packages);
        text.push_str("[metadata]\n");
        prop_assert_eq!(extract_records(&text).format, LockfileFormat::Legacy);
    }

    /// PROPERTY: surrounding whitespace and quotes never leak into fields.
    #[test]
    fn property_field_trimming(
        name in "[a-z][a-z0-9 _-]{0,20}[a-z]",
        pad_left in " {0,4}",
        pad_right in " {0,4}",
    ) {
        let text = format!(
            "[[package]]\n{pad_left}name{pad_right}={pad_left}\"{name}\"{pad_right}\nversion = \"1.0.0\"\n"
        );
        let outcome = extract_records(&text);
        prop_assert_eq!(outcome.records.len(), 1);
        prop_assert_eq!(outcome.records[0].name(), name.as_str());
    }

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_extract_never_panics(s in "(?s).{0,512}") {
        let outcome = extract_records(&s);
        let _ = render_stanza(&outcome.records, &StanzaConfig::default());
    }
}
