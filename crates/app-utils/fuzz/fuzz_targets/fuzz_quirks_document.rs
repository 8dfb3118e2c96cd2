//! Fuzz target for JsonQuirksParser and TomlQuirksParser
//!
//! Arbitrary documents must either fail with an error or produce a
//! collection whose domains are normalized and whose rules hold their
//! length invariants.

#![no_main]

use app_utils::{JsonQuirksParser, QuirksParser, TomlQuirksParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for parser in [&JsonQuirksParser as &dyn QuirksParser, &TomlQuirksParser] {
        let Ok(quirks) = parser.parse(data) else {
            continue;
        };

        for site in quirks.iter() {
            assert_eq!(site.domain, site.domain.to_ascii_lowercase());
            assert!(quirks.lookup(&site.domain).is_some());

            if let Some(max) = site.rule.max_length() {
                assert!(max >= 4);
                if let Some(min) = site.rule.min_length() {
                    assert!(i64::from(min) <= i64::from(max));
                }
            }
        }
    }
});
