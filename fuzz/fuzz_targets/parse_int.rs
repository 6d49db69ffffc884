#![no_main]
use libfuzzer_sys::fuzz_target;
use numscan::{parse_int, parse_int_exact, string_contains_what, Base, NumberKind};

fuzz_target!(|data: &[u8]| {
    for base in [Base::Auto, Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal] {
        // Anything classified as an integer must convert without error.
        if string_contains_what(data, base) == NumberKind::Integer {
            assert!(parse_int::<i64>(data, base).is_ok());
            assert!(parse_int_exact::<u8>(data, base).is_ok());
        }
    }
});
