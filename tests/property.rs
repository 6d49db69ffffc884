//! Property tests against arbitrary-precision reference values.

use num_bigint::BigUint;
use numscan::chars::{quick_detect_infinity, quick_detect_nan};
use numscan::{
    detect_base, overflow_cutoff, parse_int, parse_int_exact, string_contains_what, Base,
    Converter, NumberKind, Payload, Target,
};
use proptest::prelude::*;

fn reference(text: &str, radix: u32) -> BigUint {
    BigUint::parse_bytes(text.as_bytes(), radix).unwrap()
}

// ============================================================
// IntegerConverter
// ============================================================

proptest! {
    #[test]
    fn decimal_i64_matches_reference(text in "[0-9]{1,18}") {
        let parsed = parse_int::<i64>(text.as_bytes(), Base::Decimal).unwrap();
        prop_assert!(!parsed.overflow);
        prop_assert_eq!(BigUint::from(parsed.value as u64), reference(&text, 10));
    }

    #[test]
    fn decimal_u32_matches_reference(text in "[0-9]{1,9}") {
        let parsed = parse_int::<u32>(text.as_bytes(), Base::Decimal).unwrap();
        prop_assert!(!parsed.overflow);
        prop_assert_eq!(BigUint::from(parsed.value), reference(&text, 10));
    }

    #[test]
    fn decimal_u128_matches_reference(text in "[0-9]{1,38}") {
        let parsed = parse_int::<u128>(text.as_bytes(), Base::Decimal).unwrap();
        prop_assert!(!parsed.overflow);
        prop_assert_eq!(BigUint::from(parsed.value), reference(&text, 10));
    }

    #[test]
    fn hex_u64_matches_reference(text in "[0-9a-fA-F]{1,16}") {
        let parsed = parse_int::<u64>(text.as_bytes(), Base::Hexadecimal).unwrap();
        prop_assert!(!parsed.overflow);
        prop_assert_eq!(BigUint::from(parsed.value), reference(&text, 16));
    }

    #[test]
    fn exact_overflow_matches_reference(text in "[1-9][0-9]{18,24}") {
        let parsed = parse_int_exact::<u64>(text.as_bytes(), Base::Decimal).unwrap();
        let expected = reference(&text, 10);
        if expected <= BigUint::from(u64::MAX) {
            prop_assert!(!parsed.overflow);
            prop_assert_eq!(BigUint::from(parsed.value), expected);
        } else {
            prop_assert!(parsed.overflow);
        }
    }

    #[test]
    fn past_cutoff_always_flags_overflow(text in "[0-9]{19}") {
        prop_assert_eq!(text.len(), overflow_cutoff::<i64>() + 1);
        prop_assert!(parse_int::<i64>(text.as_bytes(), Base::Decimal).unwrap().overflow);
    }
}

// ============================================================
// BaseDetector
// ============================================================

proptest! {
    #[test]
    fn zeros_are_decimal(len in 1usize..64) {
        let text = "0".repeat(len);
        prop_assert_eq!(detect_base(text.as_bytes()), Some(Base::Decimal));
    }

    #[test]
    fn leading_zero_then_digit_is_invalid(zeros in 1usize..8, rest in "[1-9][0-9]{0,8}") {
        let text = format!("{}{}", "0".repeat(zeros), rest);
        prop_assert_eq!(detect_base(text.as_bytes()), None);
    }
}

// ============================================================
// KindClassifier
// ============================================================

proptest! {
    #[test]
    fn digits_are_integers(text in "[0-9]{1,40}") {
        prop_assert_eq!(string_contains_what(text.as_bytes(), Base::Decimal), NumberKind::Integer);
    }

    #[test]
    fn zero_fraction_is_int_like(int in "[0-9]{1,10}", zeros in "0{0,6}") {
        let text = format!("{}.{}", int, zeros);
        prop_assert_eq!(
            string_contains_what(text.as_bytes(), Base::Decimal),
            NumberKind::IntLikeFloat
        );
    }

    #[test]
    fn nonzero_fraction_is_float(int in "[0-9]{1,10}", frac in "[0-9]{0,5}[1-9]") {
        let text = format!("{}.{}", int, frac);
        prop_assert_eq!(string_contains_what(text.as_bytes(), Base::Decimal), NumberKind::Float);
    }

    #[test]
    fn special_literals_ignore_case(mask in any::<u8>()) {
        for literal in ["inf", "nan", "infinity"] {
            let text: String = literal
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if mask & (1 << (i % 8)) != 0 {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            let bytes = text.as_bytes();
            prop_assert!(quick_detect_infinity(bytes) || quick_detect_nan(bytes));
            prop_assert_eq!(string_contains_what(bytes, Base::Decimal), NumberKind::Float);
        }
    }

    #[test]
    fn classifier_never_panics(text in "\\PC{0,24}") {
        let _ = string_contains_what(text.as_bytes(), Base::Decimal);
        let _ = string_contains_what(text.as_bytes(), Base::Auto);
    }
}

// ============================================================
// Dispatcher
// ============================================================

proptest! {
    #[test]
    fn display_round_trips_through_converter(value in any::<i64>()) {
        let text = value.to_string();
        let payload = Converter::new().convert_str(&text, Target::Int).unwrap();
        prop_assert_eq!(payload, Payload::Int(value));
    }

    #[test]
    fn grouped_digits_match_plain_digits(groups in prop::collection::vec("[0-9]{1,3}", 1..6)) {
        let grouped = groups.join("_");
        let plain = groups.concat();
        let mut converter = Converter::new();
        prop_assert_eq!(
            converter.convert_str(&grouped, Target::Real).unwrap(),
            converter.convert_str(&plain, Target::Real).unwrap()
        );
    }

    #[test]
    fn finite_floats_convert(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = format!("{:e}", value);
        let payload = Converter::new().convert_str(&text, Target::Float).unwrap();
        prop_assert_eq!(payload, Payload::Float(value));
    }
}
