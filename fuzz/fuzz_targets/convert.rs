#![no_main]
use libfuzzer_sys::fuzz_target;
use numscan::{Converter, Target};

fuzz_target!(|data: &[u8]| {
    let mut converter = Converter::new();
    for target in [Target::Real, Target::Float, Target::Int, Target::IntLike, Target::ForceInt] {
        let _ = converter.convert(data, target);
    }
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Converter::new().base(0).convert_str(s, Target::Int);
    }
});
