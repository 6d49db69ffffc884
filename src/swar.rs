//! Eight-digits-at-a-time helpers.
//!
//! Both helpers read exactly eight bytes. On targets with fast 64-bit
//! arithmetic the bytes are loaded as one little-endian word and checked or
//! converted with a handful of multiplications (SWAR: SIMD within a
//! register). Elsewhere they fall back to a byte loop with the same result.

/// Length of the chunk consumed by the helpers in this module.
pub(crate) const CHUNK: usize = 8;

#[cfg(fast_arithmetic = "64")]
#[inline(always)]
fn load(chunk: &[u8; CHUNK]) -> u64 {
    u64::from_le_bytes(*chunk)
}

/// Returns true if all eight bytes are ASCII digits.
#[cfg(fast_arithmetic = "64")]
#[inline]
pub(crate) fn is_made_of_eight_digits(chunk: &[u8; CHUNK]) -> bool {
    const HIGH_NIBBLES: u64 = 0xF0F0_F0F0_F0F0_F0F0;
    const PAST_NINE: u64 = 0x0606_0606_0606_0606;
    const ALL_THREES: u64 = 0x3333_3333_3333_3333;

    // A digit is 0x30..=0x39: its high nibble is 3 and adding 6 must not
    // carry into the high nibble.
    let val = load(chunk);
    ((val & HIGH_NIBBLES) | ((val.wrapping_add(PAST_NINE) & HIGH_NIBBLES) >> 4)) == ALL_THREES
}

/// Converts eight ASCII digits to their value.
///
/// The caller must have checked the chunk with `is_made_of_eight_digits`.
#[cfg(fast_arithmetic = "64")]
#[inline]
pub(crate) fn parse_eight_digits(chunk: &[u8; CHUNK]) -> u32 {
    const ZEROS: u64 = 0x3030_3030_3030_3030;
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 100 + (1_000_000 << 32);
    const MUL2: u64 = 1 + (10_000 << 32);

    let mut val = load(chunk).wrapping_sub(ZEROS);
    // Combine adjacent digits into pairs, pairs into quads, quads into one.
    val = val.wrapping_mul(10).wrapping_add(val >> 8);
    val = ((val & MASK)
        .wrapping_mul(MUL1)
        .wrapping_add(((val >> 16) & MASK).wrapping_mul(MUL2)))
        >> 32;
    val as u32
}

/// Returns true if all eight bytes are ASCII digits.
#[cfg(fast_arithmetic = "32")]
#[inline]
pub(crate) fn is_made_of_eight_digits(chunk: &[u8; CHUNK]) -> bool {
    chunk.iter().all(u8::is_ascii_digit)
}

/// Converts eight ASCII digits to their value.
#[cfg(fast_arithmetic = "32")]
#[inline]
pub(crate) fn parse_eight_digits(chunk: &[u8; CHUNK]) -> u32 {
    chunk
        .iter()
        .fold(0, |value, &c| value * 10 + u32::from(c - b'0'))
}

/// Splits the first eight bytes off `bytes`, if there are that many.
#[inline(always)]
pub(crate) fn first_chunk(bytes: &[u8]) -> Option<&[u8; CHUNK]> {
    match bytes.get(..CHUNK) {
        Some(head) => head.try_into().ok(),
        None => None,
    }
}

// TESTS
// -----
