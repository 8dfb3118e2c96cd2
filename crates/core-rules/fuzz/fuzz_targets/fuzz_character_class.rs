//! Fuzz target for CharacterClass::parse
//!
//! Checks that class parsing never panics and that every parsed class
//! renders to a specifier that parses back to the same class.

#![no_main]

use core_rules::CharacterClass;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(class) = CharacterClass::try_parse(data) {
        // Counting must agree with len() for bounded classes
        if class.len() < 1024 {
            assert_eq!(class.included().count(), class.len());
        }

        let rendered = class.to_string();
        assert_eq!(CharacterClass::try_parse(&rendered), Some(class));
    }
});
