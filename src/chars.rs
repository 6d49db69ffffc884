//! Byte-level character classification.
//!
//! Every predicate here is a single lookup in a 256-entry table or a couple
//! of bit operations. Tables are built at compile time and shared read-only,
//! so these functions are safe to call from any thread and never allocate.

use crate::swar;

const __: bool = false;
const WS: bool = true;

// Lookup table of bytes that count as whitespace around a number: tab, line
// feed, vertical tab, form feed, carriage return and space.
static WHITESPACE: [bool; 256] = [
    //  1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    __, __, __, __, __, __, __, __, __, WS, WS, WS, WS, WS, __, __, // 0
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
    WS, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 3
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 4
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 6
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
];

/// Marks a byte that is not a digit in any radix up to 36.
const NOT_A_DIGIT: u8 = 0xFF;

const fn radix_digit_slow(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => NOT_A_DIGIT,
    }
}

const fn build_digit_table() -> [i8; 256] {
    let mut table = [-1; 256];
    let mut ch = b'0';
    while ch <= b'9' {
        table[ch as usize] = (ch - b'0') as i8;
        ch += 1;
    }
    table
}

const fn build_radix_table() -> [u8; 256] {
    let mut table = [NOT_A_DIGIT; 256];
    let mut ch = 0;
    while ch < 256 {
        table[ch] = radix_digit_slow(ch as u8);
        ch += 1;
    }
    table
}

static DIGIT: [i8; 256] = build_digit_table();
static RADIX_DIGIT: [u8; 256] = build_radix_table();

/// Determine if a byte is whitespace: one of `\t`, `\n`, `\x0B`, `\x0C`,
/// `\r` or space.
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    WHITESPACE[c as usize]
}

/// Convert an ASCII decimal digit to its value, or `-1` for anything else.
#[inline]
pub fn to_digit(c: u8) -> i8 {
    DIGIT[c as usize]
}

/// Determine if a byte is an ASCII decimal digit.
#[inline]
pub fn is_valid_digit(c: u8) -> bool {
    to_digit(c) >= 0
}

/// Convert a byte to its digit value in `radix`, accepting letters of either
/// case for digits above nine.
///
/// Returns `None` if the byte is not a digit of that radix.
#[inline]
pub fn to_radix_digit(c: u8, radix: u32) -> Option<u32> {
    let digit = RADIX_DIGIT[c as usize] as u32;
    if digit < radix {
        Some(digit)
    } else {
        None
    }
}

/// Force an ASCII letter to lowercase.
///
/// Upper- and lowercase ASCII letters differ only in bit 5, so setting that
/// bit lowercases a letter. The result is meaningless for non-letters.
#[inline]
pub const fn lowercase(c: u8) -> u8 {
    c | 0x20
}

/// Determine if a byte is `+` or `-`.
#[inline]
pub fn is_sign(c: u8) -> bool {
    c == b'-' || c == b'+'
}

/// Determine if a byte is a base prefix letter (`x`, `o` or `b`, any case).
#[inline]
pub fn is_base_prefix(c: u8) -> bool {
    match lowercase(c) {
        b'x' | b'o' | b'b' => true,
        _ => false,
    }
}

/// Determine if a byte is the prefix letter of a specific radix: `x` for 16,
/// `o` for 8 and `b` for 2, any case.
#[inline]
pub fn is_base_prefix_for(c: u8, radix: u32) -> bool {
    match (radix, lowercase(c)) {
        (16, b'x') | (8, b'o') | (2, b'b') => true,
        _ => false,
    }
}

/// Advance `index` past any whitespace in `bytes`.
#[inline]
pub fn consume_whitespace(bytes: &[u8], index: &mut usize) {
    while *index < bytes.len() && is_whitespace(bytes[*index]) {
        *index += 1;
    }
}

/// Advance `index` past any decimal digits in `bytes`, one byte at a time.
#[inline]
pub fn consume_digits(bytes: &[u8], index: &mut usize) {
    while *index < bytes.len() && is_valid_digit(bytes[*index]) {
        *index += 1;
    }
}

/// Advance `index` past any decimal digits in `bytes`, checking eight bytes
/// at a time while whole chunks of digits remain.
///
/// Long digit runs are the common case for numeric text, and the chunked
/// check amortizes the per-byte branch over the run.
#[inline]
pub fn consume_digits_fast(bytes: &[u8], index: &mut usize) {
    while let Some(chunk) = bytes.get(*index..).and_then(swar::first_chunk) {
        if !swar::is_made_of_eight_digits(chunk) {
            break;
        }
        *index += swar::CHUNK;
    }
    consume_digits(bytes, index);
}

/// Returns the sub-slice of `bytes` with leading and trailing whitespace
/// removed.
pub fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    consume_whitespace(bytes, &mut start);
    let mut end = bytes.len();
    while end > start && is_whitespace(bytes[end - 1]) {
        end -= 1;
    }
    &bytes[start..end]
}

/// XOR each byte against the lowercase literal and OR the results together.
///
/// Zero means an exact match. Exactly `0x20` means every difference was the
/// ASCII case bit, which for the letters of a literal means a match ignoring
/// case.
#[inline(always)]
fn case_insensitive_eq(bytes: &[u8], lower: &[u8]) -> bool {
    let mut accumulator = 0;
    let mut i = 0;
    while i < lower.len() {
        accumulator |= bytes[i] ^ lower[i];
        i += 1;
    }
    accumulator == 0 || accumulator == 0x20
}

/// Determine if `bytes` is exactly `inf` or `infinity`, ignoring case.
#[inline]
pub fn quick_detect_infinity(bytes: &[u8]) -> bool {
    match bytes.len() {
        3 => case_insensitive_eq(bytes, b"inf"),
        8 => case_insensitive_eq(bytes, b"infinity"),
        _ => false,
    }
}

/// Determine if `bytes` is exactly `nan`, ignoring case.
#[inline]
pub fn quick_detect_nan(bytes: &[u8]) -> bool {
    bytes.len() == 3 && case_insensitive_eq(bytes, b"nan")
}

/// A cheap guess at whether `bytes` holds an integer: it is not empty and
/// starts with a digit.
#[inline]
pub fn is_likely_int(bytes: &[u8]) -> bool {
    match bytes.first() {
        Some(&c) => is_valid_digit(c),
        None => false,
    }
}

/// Count the `0` bytes at the end of `bytes`.
#[inline]
pub fn number_trailing_zeros(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|&&c| c == b'0').count()
}

// TESTS
// -----
