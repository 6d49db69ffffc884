use numscan::{parse_float, ActionType, Converter, ErrorCode, Payload, Target};

#[test]
fn test() {
    // The converter removes one sign, so the float parser must refuse the
    // second one.
    assert_eq!(
        parse_float::<f64>(b"-3.14").unwrap_err().code(),
        ErrorCode::UnexpectedSign
    );

    let mut converter = Converter::new();
    for text in ["+-3.14", "-+3.14", "--1", "++1", "- 1"] {
        assert_eq!(
            converter.convert_str(text, Target::Float).unwrap(),
            Payload::Action(ActionType::ErrorInvalidFloat),
            "{}",
            text
        );
    }
}
