//! Property tests for stanza layout.

use proptest::prelude::*;

use cargo2port::{render_line, render_stanza, Record, StanzaConfig};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._-]{1,30}").unwrap()
}

fn record() -> impl Strategy<Value = Record> {
    (token(), token(), proptest::option::of("[0-9a-f]{8,64}"))
        .prop_map(|(name, version, checksum)| Record::new(name, version, checksum))
}

fn config() -> impl Strategy<Value = StanzaConfig> {
    (0usize..12, 1usize..60, 1usize..4).prop_map(|(indent, field_width, spacer_width)| {
        StanzaConfig {
            indent,
            field_width,
            spacer_width,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one crate line per checksummed record, only the last without ` \`.
    #[test]
    fn property_continuation_marker_on_all_but_last(
        records in proptest::collection::vec(record(), 0..20),
        config in config(),
    ) {
        let stanza = render_stanza(&records, &config);
        let lines: Vec<&str> = stanza.split('\n').collect();
        let renderable: Vec<&Record> = records.iter().filter(|r| r.is_renderable()).collect();

        prop_assert_eq!(lines[0], "cargo.crates \\");
        prop_assert_eq!(lines.len(), renderable.len() + 1);

        for (i, (line, record)) in lines[1..].iter().zip(&renderable).enumerate() {
            let is_last = i + 1 == renderable.len();
            prop_assert_eq!(line.ends_with(" \\"), !is_last);
            prop_assert!(line.trim_start().starts_with(record.name()));
        }
    }

    /// PROPERTY: name + gap fills the field unless the field overflows.
    #[test]
    fn property_padding_invariant(
        name in token(),
        version in token(),
        checksum in "[0-9a-f]{8,64}",
        config in config(),
    ) {
        let record = Record::new(name.clone(), version.clone(), Some(checksum.clone()));
        let line = render_line(&record, &config).unwrap();

        let body = &line[config.indent..];
        prop_assert!(line[..config.indent].chars().all(|c| c == ' '));

        let after_name = &body[name.len()..];
        let gap = after_name.len() - after_name.trim_start().len();
        let after_version = &after_name[gap + version.len()..];
        let spacer = after_version.len() - after_version.trim_start().len();

        if name.len() + version.len() < config.field_width {
            prop_assert_eq!(name.len() + gap + version.len(), config.field_width);
            prop_assert_eq!(spacer, config.spacer_width);
        } else {
            prop_assert_eq!(gap, 1);
            prop_assert_eq!(spacer, config.spacer_width - 1);
        }
        prop_assert_eq!(after_version.trim_start(), checksum.as_str());
    }
}
