//! Removal of digit-group separators.
//!
//! Numeric literals may group digits with `_`, as in `1_000_000` or
//! `0xFF_FF`. A separator is legal only *between* two digits of the same run;
//! for integers with a base prefix it may also directly follow the prefix
//! (`0x_FF`). Legal separators are removed. Illegal ones are left where they
//! are, so the classifier afterwards reports the text as not numeric instead
//! of silently accepting a partial parse.

use crate::chars::{is_base_prefix, is_valid_digit, to_radix_digit};

/// Returns true if `bytes` contains a `_`.
///
/// Most numeric text carries no separators, and this lets callers skip the
/// copy into a scratch buffer entirely.
#[inline]
pub fn contains_underscore(bytes: &[u8]) -> bool {
    memchr::memchr(b'_', bytes).is_some()
}

#[inline]
fn is_group_digit(c: u8, based: bool) -> bool {
    if based {
        to_radix_digit(c, 16).is_some()
    } else {
        is_valid_digit(c)
    }
}

/// Remove every legal `_` from `buf` by shifting the remaining bytes left.
///
/// Returns the new length: the normalized text is `&buf[..len]`, and the
/// bytes after it are unspecified. `based` must be true when the text is a
/// non-decimal integer. In that case letters `a-f` count as digits and a
/// separator may follow the two-character base prefix.
///
/// The buffer must be a copy owned by the caller; the original text is never
/// modified.
///
/// ```
/// use numscan::remove_valid_underscores;
///
/// let mut buf = *b"1_000";
/// let len = remove_valid_underscores(&mut buf, false);
/// assert_eq!(&buf[..len], b"1000");
///
/// let mut buf = *b"1__000";
/// let len = remove_valid_underscores(&mut buf, false);
/// assert_eq!(&buf[..len], b"1__000");
/// ```
pub fn remove_valid_underscores(buf: &mut [u8], based: bool) -> usize {
    let len = buf.len();
    let has_prefix = based && len > 2 && buf[0] == b'0' && is_base_prefix(buf[1]);

    let mut write = 0;
    // The original byte preceding `read`. Bytes before `read` may already
    // have been overwritten by the compaction.
    let mut prev = None;
    for read in 0..len {
        let c = buf[read];
        if c == b'_' && read + 1 < len {
            let next = buf[read + 1];
            let after_digit = match prev {
                Some(p) => is_group_digit(p, based) || (has_prefix && read == 2),
                None => false,
            };
            if after_digit && is_group_digit(next, based) {
                prev = Some(c);
                continue;
            }
        }
        buf[write] = c;
        write += 1;
        prev = Some(c);
    }
    write
}

// TESTS
// -----
