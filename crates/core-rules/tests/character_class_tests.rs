//! Integration tests for character class parsing

use core_rules::{CharacterClass, NamedClass, RuleError};

#[test]
fn test_named_class_sizes() {
    for (spec, count) in [("lower", 26), ("upper", 26), ("digit", 10), ("[-]", 1)] {
        let class = CharacterClass::try_parse(spec).unwrap();
        assert_eq!(class.included().count(), count, "class {}", spec);
        assert_eq!(class.len(), count, "class {}", spec);
    }
}

#[test]
fn test_invalid_specs() {
    for spec in ["asdf", "foo; bar", "baz: boop"] {
        assert!(CharacterClass::try_parse(spec).is_none(), "accepted {:?}", spec);
        assert_eq!(
            CharacterClass::parse(spec),
            Err(RuleError::InvalidCharacterClass(spec.to_string()))
        );
    }
}

#[test]
fn test_named_classes_are_case_sensitive() {
    assert!(CharacterClass::try_parse("Upper").is_none());
    assert!(CharacterClass::try_parse("DIGIT").is_none());
    assert!(CharacterClass::try_parse(" lower").is_none());
}

#[test]
fn test_lower_and_upper_members() {
    let lower = CharacterClass::try_parse("lower").unwrap();
    assert_eq!(
        lower.included().collect::<String>(),
        "abcdefghijklmnopqrstuvwxyz"
    );

    let upper = CharacterClass::try_parse("upper").unwrap();
    assert_eq!(upper.included().next(), Some('A'));
    assert_eq!(upper.included().last(), Some('Z'));
}

#[test]
fn test_digit_members() {
    let digit = CharacterClass::try_parse("digit").unwrap();
    assert_eq!(digit.included().collect::<String>(), "0123456789");
}

#[test]
fn test_special_members() {
    let special = CharacterClass::try_parse("special").unwrap();
    let members: String = special.included().collect();

    assert_eq!(members.chars().count(), 31);
    assert_eq!(special.len(), 31);
    for ch in "-~!@#$%^&*_+=`|(){}[:;\"'<>,.?] ".chars() {
        assert!(special.contains(ch), "missing {:?}", ch);
    }
    assert!(!special.contains('/'));
    assert!(!special.contains('\\'));
    assert!(!special.contains('a'));
    assert!(!special.contains('5'));
}

#[test]
fn test_ascii_printable_members() {
    let printable = CharacterClass::try_parse("ascii-printable").unwrap();
    assert_eq!(printable.included().count(), 95);
    assert_eq!(printable.included().next(), Some(' '));
    assert_eq!(printable.included().last(), Some('~'));
    assert!(!printable.contains('\t'));
}

#[test]
fn test_unicode_membership() {
    let unicode = CharacterClass::try_parse("unicode").unwrap();
    assert_eq!(unicode.len(), 1_112_064);
    assert!(unicode.contains('é'));
    assert!(unicode.contains('\u{1F511}'));
    // Enumeration starts at the lowest scalar value
    assert_eq!(unicode.included().take(3).collect::<Vec<_>>(), ['\0', '\u{1}', '\u{2}']);
}

#[test]
fn test_named_len_matches_enumeration() {
    for class in NamedClass::ALL {
        if class == NamedClass::Unicode {
            continue;
        }
        let parsed = CharacterClass::from(class);
        assert_eq!(parsed.included().count(), class.len(), "class {}", class);
    }
}

#[test]
fn test_bracket_literal_members() {
    let class = CharacterClass::try_parse("[!@]").unwrap();
    assert_eq!(class.included().collect::<Vec<_>>(), ['!', '@']);
}

#[test]
fn test_bracket_hyphen_is_literal() {
    let class = CharacterClass::try_parse("[a-c]").unwrap();
    assert_eq!(class.included().collect::<Vec<_>>(), ['a', '-', 'c']);
    assert!(!class.contains('b'));
}

#[test]
fn test_bracket_escapes() {
    let class = CharacterClass::try_parse(r"[\]\\\-x]").unwrap();
    assert_eq!(class.included().collect::<Vec<_>>(), [']', '\\', '-', 'x']);
}

#[test]
fn test_bracket_trailing_backslash_is_literal() {
    let class = CharacterClass::try_parse(r"[a\]").unwrap();
    assert_eq!(class.included().collect::<Vec<_>>(), ['a', '\\']);
}

#[test]
fn test_bracket_duplicates_collapse() {
    let class = CharacterClass::try_parse("[abca!a]").unwrap();
    assert_eq!(class.included().collect::<String>(), "abc!");
}

#[test]
fn test_empty_bracket_is_a_class() {
    let class = CharacterClass::try_parse("[]").unwrap();
    assert!(class.is_empty());
    assert_eq!(class.included().count(), 0);
}

#[test]
fn test_unclosed_bracket_fails() {
    assert!(CharacterClass::try_parse("[abc").is_none());
    assert!(CharacterClass::try_parse("abc]").is_none());
    assert!(CharacterClass::try_parse("[").is_none());
}

#[test]
fn test_display_named() {
    assert_eq!(CharacterClass::from(NamedClass::AsciiPrintable).to_string(), "ascii-printable");
}

#[test]
fn test_display_escapes_bracket_members() {
    let class = CharacterClass::custom(['-', ']', '\\', 'a']);
    assert_eq!(class.to_string(), r"[\-\]\\a]");
    assert_eq!(CharacterClass::try_parse(&class.to_string()), Some(class));
}

#[test]
fn test_custom_deduplicates() {
    let class = CharacterClass::custom("aab".chars());
    assert_eq!(class, CharacterClass::Custom(vec!['a', 'b']));
}

#[test]
fn test_from_str() {
    let class: CharacterClass = "digit".parse().unwrap();
    assert_eq!(class, CharacterClass::Named(NamedClass::Digit));
    assert!("nope".parse::<CharacterClass>().is_err());
}

#[test]
fn test_parsing_is_deterministic() {
    let first = CharacterClass::try_parse("[zyx!]").unwrap();
    let second = CharacterClass::try_parse("[zyx!]").unwrap();
    assert_eq!(first, second);
    assert!(first.included().eq(second.included()));
}
