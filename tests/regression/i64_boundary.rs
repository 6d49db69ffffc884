use numscan::{
    overflow_cutoff, parse_int, parse_int_exact, ActionType, Base, Converter, Payload, Target,
};

#[test]
fn test() {
    // Nineteen digits is past the conservative cutoff even when in range.
    assert_eq!(overflow_cutoff::<i64>(), 18);
    assert!(parse_int::<i64>(b"1000000000000000000", Base::Decimal).unwrap().overflow);
    assert!(!parse_int_exact::<i64>(b"1000000000000000000", Base::Decimal).unwrap().overflow);

    let mut converter = Converter::new();
    assert_eq!(
        converter.convert_str("1000000000000000000", Target::Int).unwrap(),
        Payload::Int(1000000000000000000)
    );
    assert_eq!(
        converter.convert_str("-9223372036854775809", Target::Int).unwrap(),
        Payload::Action(ActionType::TryIntSlow)
    );
}
