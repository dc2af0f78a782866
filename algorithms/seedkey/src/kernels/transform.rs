//! Mixing Primitive
//!
//! Folds a signed 16-bit operand through a secret table:
//!
//! ```text
//! data   = signed16((high << 8) | low)
//! result = (data % m) * k - (data / m) * s        (truncating division)
//! result += m * k + s                             (only if result < 0)
//! return   narrow16(result)
//! ```
//!
//! with `(m, s, k)` the table's `(modulus, subtrahend, multiplier)`.

use super::word::{compose, narrow, to_signed};
use crate::types::SecretTable;

// =============================================================================
// TRANSFORM
// =============================================================================

/// Apply the mixing primitive to `(high, low)` with `table`.
///
/// Total over all inputs: the table's modulus is non-zero by construction and
/// the intermediate fits in `i32` (`|remainder * k| <= 254 * 255`,
/// `|quotient * s| <= 32768 * 255`).
#[inline]
pub fn transform(high: u8, low: u8, table: &SecretTable) -> i16 {
    let data = i32::from(to_signed(compose(high, low)));
    let modulus = i32::from(table.modulus());
    let subtrahend = i32::from(table.subtrahend());
    let multiplier = i32::from(table.multiplier());

    // Rust's `/` and `%` on i32 truncate toward zero; the remainder keeps the sign of `data`.
    let mut result = (data % modulus) * multiplier - (data / modulus) * subtrahend;

    if result < 0 {
        result += modulus * multiplier + subtrahend;
    }

    narrow(result)
}
