use numscan::{
    detect_base, parse_float, parse_int, string_contains_what, ActionType, Base, Converter,
    NumberKind, Payload, Target,
};

fn kind(text: &str, base: Base) -> NumberKind {
    string_contains_what(text.as_bytes(), base)
}

fn normalized(text: &str) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    let len = numscan::remove_valid_underscores(&mut buf, false);
    buf.truncate(len);
    buf
}

#[test]
fn test_grouped_integer() {
    let text = normalized("123_456");
    assert_eq!(string_contains_what(&text, Base::Decimal), NumberKind::Integer);
    let parsed = parse_int::<i64>(&text, Base::Decimal).unwrap();
    assert_eq!(parsed.value, 123456);
    assert!(!parsed.overflow);
}

#[test]
fn test_prefixed_integer() {
    assert_eq!(kind("0x1F", Base::Auto), NumberKind::Integer);
    let parsed = parse_int::<i64>(b"0x1F", Base::Auto).unwrap();
    assert_eq!(parsed.value, 31);
    assert!(!parsed.overflow);
}

#[test]
fn test_float() {
    assert_eq!(kind("3.14", Base::Decimal), NumberKind::Float);
    assert_eq!(parse_float::<f64>(b"3.14").unwrap(), 3.14);
}

#[test]
fn test_int_like_float() {
    assert_eq!(kind("3.0", Base::Decimal), NumberKind::IntLikeFloat);
    let value = parse_float::<f64>(b"3.0").unwrap();
    assert_eq!(value as i64, 3);
}

#[test]
fn test_infinity() {
    assert_eq!(kind("inf", Base::Decimal), NumberKind::Float);
    assert_eq!(parse_float::<f64>(b"inf").unwrap(), f64::INFINITY);
}

#[test]
fn test_legacy_octal() {
    assert_eq!(kind("017", Base::Auto), NumberKind::Invalid);
    assert_eq!(detect_base(b"017"), None);
}

#[test]
fn test_overflowing_integer() {
    let text = b"99999999999999999999";
    assert_eq!(string_contains_what(text, Base::Decimal), NumberKind::Integer);
    assert!(parse_int::<i64>(text, Base::Decimal).unwrap().overflow);
}

#[test]
fn test_detect_base() {
    assert_eq!(detect_base(b"0x1A"), Some(Base::Hexadecimal));
    assert_eq!(detect_base(b"0o17"), Some(Base::Octal));
    assert_eq!(detect_base(b"0b101"), Some(Base::Binary));
    assert_eq!(detect_base(b"0"), Some(Base::Decimal));
    assert_eq!(detect_base(b"0017"), None);
    assert_eq!(detect_base(b"0000"), Some(Base::Decimal));
}

#[test]
fn test_underscore_rule() {
    assert_eq!(normalized("1_000"), b"1000");
    for text in ["1__000", "_100", "100_"] {
        let text = normalized(text);
        assert_eq!(string_contains_what(&text, Base::Decimal), NumberKind::Invalid);
    }
}

#[test]
fn test_converter_scenarios() {
    let mut converter = Converter::new();
    assert_eq!(
        converter.convert_str("123_456", Target::Real).unwrap(),
        Payload::Int(123456)
    );
    assert_eq!(converter.convert_str("3.14", Target::Real).unwrap(), Payload::Float(3.14));
    assert_eq!(
        converter.convert_str("3.0", Target::Real).unwrap(),
        Payload::FloatToInt(3.0)
    );
    assert_eq!(
        converter.convert_str("inf", Target::Real).unwrap(),
        Payload::Action(ActionType::Inf)
    );
    assert_eq!(
        converter.convert_str("99999999999999999999", Target::Int).unwrap(),
        Payload::Action(ActionType::TryIntSlow)
    );

    let mut converter = Converter::new().base(0);
    assert_eq!(converter.convert_str("0x1F", Target::Int).unwrap(), Payload::Int(31));
    assert_eq!(
        converter.convert_str("017", Target::Int).unwrap(),
        Payload::Action(ActionType::ErrorInvalidInt)
    );
}

#[test]
fn test_converter_reuses_scratch() {
    let mut converter = Converter::new();
    for _ in 0..3 {
        assert_eq!(
            converter.convert_str("1_000_000", Target::Int).unwrap(),
            Payload::Int(1000000)
        );
        assert_eq!(
            converter.convert_str("2_5", Target::Float).unwrap(),
            Payload::Float(25.0)
        );
    }
}

#[test]
fn test_byte_input() {
    let mut converter = Converter::new();
    let input: &[u8] = b" -12 ";
    assert_eq!(converter.convert(input, Target::Int).unwrap(), Payload::Int(-12));
    let input: &[u8] = b"\xff";
    assert_eq!(
        converter.convert(input, Target::Int).unwrap(),
        Payload::Action(ActionType::ErrorInvalidInt)
    );
}
