//! Constant-time byte comparison.

use subtle::ConstantTimeEq;

/// Compare two byte strings without leaking where they first differ.
///
/// Returns `true` only when both inputs are byte-identical. Lengths are
/// treated as public: inputs of different length compare unequal without
/// examining content. Equal-length inputs are compared over their full
/// length with `subtle`, which never short-circuits.
pub fn constant_time_equals(expected: &[u8], actual: &[u8]) -> bool {
    expected.ct_eq(actual).into()
}
