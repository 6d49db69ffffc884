use numscan::{ActionType, Converter, Payload, Target};

#[test]
fn test() {
    let mut converter = Converter::new().base(0);
    assert_eq!(converter.convert_str("0x_1f", Target::Int).unwrap(), Payload::Int(31));
    assert_eq!(converter.convert_str("0b_1_0", Target::Int).unwrap(), Payload::Int(2));
    assert_eq!(
        converter.convert_str("0x__1f", Target::Int).unwrap(),
        Payload::Action(ActionType::ErrorInvalidInt)
    );

    // Without a prefix there is nothing for a leading separator to follow.
    let mut converter = Converter::new().base(16);
    assert_eq!(
        converter.convert_str("_1f", Target::Int).unwrap(),
        Payload::Action(ActionType::ErrorInvalidInt)
    );
}
