use numscan::{parse_int, Base, Converter, ErrorCode, Payload, Target};

#[test]
fn test() {
    // Auto detection rejects a leading zero followed by other digits...
    let err = parse_int::<i64>(b"017", Base::Auto).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidBase);
    assert!(err.is_base());

    // ...but an explicit decimal base reads it as 17.
    assert_eq!(parse_int::<i64>(b"017", Base::Decimal).unwrap().value, 17);

    // Redundant zeros are always legal.
    assert_eq!(
        Converter::new().base(0).convert_str("0_0_0", Target::Int).unwrap(),
        Payload::Int(0)
    );
}
