//! Integration tests for rule interpretation

use core_rules::{CharacterClass, Diagnostic, NamedClass, Period, PeriodUnit, Rule};

#[test]
fn test_empty_rule() {
    let rule = Rule::parse("");
    assert_eq!(rule, Rule::default());
    assert_eq!(rule.min_length(), None);
    assert_eq!(rule.max_length(), None);
    assert_eq!(rule.max_consecutive(), None);
    assert_eq!(rule.expires_after(), None);
    assert!(rule.required().is_none());
}

#[test]
fn test_minlength() {
    assert_eq!(Rule::parse("minlength: 8;").min_length(), Some(8));
    assert_eq!(Rule::parse("minlength: 0;").min_length(), Some(0));
}

#[test]
fn test_minlength_invalid_values() {
    assert_eq!(Rule::parse("minlength: eight;").min_length(), None);
    assert_eq!(Rule::parse("minlength: 8.5;").min_length(), None);
    assert_eq!(Rule::parse("minlength: 2147483648;").min_length(), None);
}

#[test]
fn test_minlength_keeps_negative_integers() {
    assert_eq!(Rule::parse("minlength: -3;").min_length(), Some(-3));

    let (rule, diagnostics) = Rule::parse_with_diagnostics("minlength: -5; maxlength: 8");
    assert_eq!(rule.min_length(), Some(-5));
    assert_eq!(rule.max_length(), Some(8));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_minlength_requires_single_value() {
    assert_eq!(Rule::parse("minlength: 8, 9;").min_length(), None);
    assert_eq!(Rule::parse("minlength: 8; minlength: 9;").min_length(), None);
}

#[test]
fn test_maxlength() {
    assert_eq!(Rule::parse("maxlength: 16;").max_length(), Some(16));
}

#[test]
fn test_maxlength_clamped_to_four() {
    assert_eq!(Rule::parse("maxlength: 2;").max_length(), Some(4));
    assert_eq!(Rule::parse("maxlength: 0;").max_length(), Some(4));
    assert_eq!(Rule::parse("maxlength: -10;").max_length(), Some(4));
    assert_eq!(Rule::parse("maxlength: 4;").max_length(), Some(4));
}

#[test]
fn test_maxlength_requires_single_value() {
    assert_eq!(Rule::parse("maxlength: 8, 9;").max_length(), None);
    assert_eq!(Rule::parse("maxlength: many;").max_length(), None);
}

#[test]
fn test_minlength_lowered_to_maxlength() {
    let rule = Rule::parse("minlength: 10; maxlength: 4;");
    assert_eq!(rule.max_length(), Some(4));
    assert_eq!(rule.min_length(), Some(4));
}

#[test]
fn test_minlength_lowered_regardless_of_order() {
    let rule = Rule::parse("maxlength: 6; minlength: 10;");
    assert_eq!(rule.max_length(), Some(6));
    assert_eq!(rule.min_length(), Some(6));
}

#[test]
fn test_minlength_lowered_to_clamped_maxlength() {
    let rule = Rule::parse("minlength: 6; maxlength: 1;");
    assert_eq!(rule.max_length(), Some(4));
    assert_eq!(rule.min_length(), Some(4));
}

#[test]
fn test_minlength_kept_when_within_max() {
    let rule = Rule::parse("minlength: 8; maxlength: 64;");
    assert_eq!(rule.min_length(), Some(8));
    assert_eq!(rule.max_length(), Some(64));
}

#[test]
fn test_max_consecutive_takes_minimum() {
    let rule = Rule::parse("max-consecutive: 3; max-consecutive: 5;");
    assert_eq!(rule.max_consecutive(), Some(3));

    let rule = Rule::parse("max-consecutive: 5, 2, 9;");
    assert_eq!(rule.max_consecutive(), Some(2));
}

#[test]
fn test_max_consecutive_ignores_invalid_entries() {
    let rule = Rule::parse("max-consecutive: lots; max-consecutive: 4; max-consecutive: 0;");
    assert_eq!(rule.max_consecutive(), Some(4));
}

#[test]
fn test_max_consecutive_unset_without_valid_entries() {
    assert_eq!(Rule::parse("max-consecutive: x; max-consecutive: -1;").max_consecutive(), None);
}

#[test]
fn test_required_single_bracket_class() {
    let rule = Rule::parse("required: [!@];");
    let required = rule.required().unwrap();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0].included().collect::<Vec<_>>(), ['!', '@']);
}

#[test]
fn test_required_named_classes_in_order() {
    let rule = Rule::parse("required: upper; required: lower; required: digit;");
    let required = rule.required().unwrap();

    assert_eq!(
        required,
        [
            CharacterClass::Named(NamedClass::Upper),
            CharacterClass::Named(NamedClass::Lower),
            CharacterClass::Named(NamedClass::Digit),
        ]
    );
    let sizes: Vec<usize> = required.iter().map(|c| c.included().count()).collect();
    assert_eq!(sizes, [26, 26, 10]);
}

#[test]
fn test_required_comma_list_keeps_order() {
    let rule = Rule::parse("required: digit, [xy], upper");
    let names: Vec<String> = rule.required().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(names, ["digit", "[xy]", "upper"]);
}

#[test]
fn test_required_drops_invalid_classes() {
    let rule = Rule::parse("required: upper, asdf; required: [ab]");
    let required = rule.required().unwrap();
    assert_eq!(required.len(), 2);
    assert_eq!(required[0], CharacterClass::Named(NamedClass::Upper));
}

#[test]
fn test_required_present_but_all_invalid() {
    let rule = Rule::parse("required: nothing, valid");
    assert_eq!(rule.required(), Some(&[][..]));
}

#[test]
fn test_required_with_separators_inside_brackets() {
    let rule = Rule::parse("required: [;,]; minlength: 9");
    assert_eq!(rule.required().unwrap()[0].included().collect::<String>(), ";,");
    assert_eq!(rule.min_length(), Some(9));
}

#[test]
fn test_expires_after() {
    let rule = Rule::parse("x-expires-after: 3-months;");
    assert_eq!(rule.expires_after(), Some(Period::new(3, PeriodUnit::Months)));
}

#[test]
fn test_expires_after_invalid() {
    assert_eq!(Rule::parse("x-expires-after: 3-fortnights;").expires_after(), None);
    assert_eq!(Rule::parse("x-expires-after: 3-Days;").expires_after(), None);
    assert_eq!(Rule::parse("x-expires-after: months;").expires_after(), None);
    assert_eq!(Rule::parse("x-expires-after: 3-days, 4-days;").expires_after(), None);
}

#[test]
fn test_property_names_case_insensitive() {
    let rule = Rule::parse("MINLENGTH: 8; Required: digit; X-Expires-After: 1-years");
    assert_eq!(rule.min_length(), Some(8));
    assert_eq!(rule.required().unwrap().len(), 1);
    assert_eq!(rule.expires_after(), Some(Period::years(1)));
}

#[test]
fn test_allowed_is_not_interpreted() {
    let (rule, diagnostics) = Rule::parse_with_diagnostics("allowed: upper; minlength: 5");
    assert_eq!(rule.min_length(), Some(5));
    assert!(rule.required().is_none());
    assert_eq!(
        diagnostics,
        [Diagnostic::Unsupported {
            name: "allowed".into()
        }]
    );
}

#[test]
fn test_unknown_properties_ignored() {
    let rule = Rule::parse("colour: red; minlength: 5; max-length: 6");
    assert_eq!(rule.min_length(), Some(5));
    assert_eq!(rule.max_length(), None);
}

#[test]
fn test_full_rule() {
    let rule = Rule::parse(
        "minlength: 20; maxlength: 64; required: lower; required: upper; required: digit; \
         required: [-().&@?'#,/\"+]; max-consecutive: 2; x-expires-after: 90-days",
    );

    assert_eq!(rule.min_length(), Some(20));
    assert_eq!(rule.max_length(), Some(64));
    assert_eq!(rule.max_consecutive(), Some(2));
    assert_eq!(rule.expires_after(), Some(Period::days(90)));
    let required = rule.required().unwrap();
    assert_eq!(required.len(), 4);
    assert_eq!(required[3].len(), 13);
}

#[test]
fn test_diagnostics_describe_adjustments() {
    let (_, diagnostics) = Rule::parse_with_diagnostics(
        "minlength: 10; maxlength: 2; required: bogus; max-consecutive: x; x-expires-after: soon",
    );

    assert_eq!(
        diagnostics,
        [
            Diagnostic::MaxLengthClamped { from: 2 },
            Diagnostic::InvalidCharacterClass {
                value: "bogus".into()
            },
            Diagnostic::InvalidValue {
                property: "max-consecutive".into(),
                value: "x".into()
            },
            Diagnostic::InvalidValue {
                property: "x-expires-after".into(),
                value: "soon".into()
            },
            Diagnostic::MinLengthLowered { from: 10, to: 4 },
        ]
    );
}

#[test]
fn test_diagnostics_wrong_value_count() {
    let (_, diagnostics) = Rule::parse_with_diagnostics("minlength: 1, 2");
    assert_eq!(
        diagnostics,
        [Diagnostic::WrongValueCount {
            property: "minlength".into(),
            count: 2
        }]
    );
}

#[test]
fn test_clean_rule_has_no_diagnostics() {
    let (_, diagnostics) =
        Rule::parse_with_diagnostics("minlength: 8; maxlength: 12; required: upper");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_long_input_read_to_the_end() {
    let raw = format!("required: [{}]; minlength: 8; maxlength: 2", "a".repeat(5000));

    let (rule, diagnostics) = Rule::parse_with_diagnostics(&raw);
    let required = rule.required().unwrap();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0], CharacterClass::custom(['a']));
    assert_eq!(rule.max_length(), Some(4));
    assert_eq!(rule.min_length(), Some(4));
    assert_eq!(
        diagnostics,
        [
            Diagnostic::MaxLengthClamped { from: 2 },
            Diagnostic::MinLengthLowered { from: 8, to: 4 },
        ]
    );
}

#[test]
fn test_many_properties_all_read() {
    let mut raw = "required: digit; ".repeat(500);
    raw.push_str("minlength: 8; x-expires-after: 30-days");

    let rule = Rule::parse(&raw);
    assert_eq!(rule.required().unwrap().len(), 500);
    assert_eq!(rule.min_length(), Some(8));
    assert_eq!(rule.expires_after(), Some(Period::days(30)));
}

#[test]
fn test_parse_is_idempotent() {
    let raw = "minlength: 8; required: upper, [!@]; max-consecutive: 3; x-expires-after: 2-weeks";
    assert_eq!(Rule::parse(raw), Rule::parse(raw));
}

#[test]
fn test_from_str() {
    let rule: Rule = "maxlength: 32".parse().unwrap();
    assert_eq!(rule.max_length(), Some(32));
}

#[test]
fn test_display_canonical_form() {
    let rule = Rule::parse(
        "x-expires-after: 6-months; REQUIRED: upper, [!-]; maxlength: 30; minlength: 10; max-consecutive: 4",
    );
    assert_eq!(
        rule.to_string(),
        r"minlength: 10; maxlength: 30; max-consecutive: 4; required: upper; required: [!\-]; x-expires-after: 6-months;"
    );
    assert_eq!(Rule::parse(&rule.to_string()), rule);
}

#[test]
fn test_display_empty_rule() {
    assert_eq!(Rule::default().to_string(), "");
}
