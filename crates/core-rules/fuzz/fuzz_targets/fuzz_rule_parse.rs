//! Fuzz target for Rule::parse
//!
//! Bombards the tokenizer and interpreter with arbitrary strings, including
//! unbalanced brackets, dangling escapes and multi-byte characters, and
//! checks that the resulting rule always satisfies the policy invariants.

#![no_main]

use core_rules::{Rule, MIN_MAX_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Interpretation must never panic
    let (rule, _diagnostics) = Rule::parse_with_diagnostics(data);

    if let Some(max) = rule.max_length() {
        assert!(max >= MIN_MAX_LENGTH);
        if let Some(min) = rule.min_length() {
            assert!(i64::from(min) <= i64::from(max));
        }
    }
    if let Some(run) = rule.max_consecutive() {
        assert!(run >= 1);
    }

    // Canonical rendering must be interpretable again
    let _ = Rule::parse(&rule.to_string());
});
