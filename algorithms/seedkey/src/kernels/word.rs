//! 16-bit Word Conversions
//!
//! Every change of width or signedness in the algorithm goes through one of
//! these helpers. All of them follow two's-complement rules: narrowing drops
//! the high bits and reinterpretation keeps the bit pattern.

// =============================================================================
// COMPOSITION
// =============================================================================

/// `(high << 8) | low` as a raw 16-bit word.
#[inline]
pub const fn compose(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Split a raw word into `(high, low)` bytes.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn split(word: u16) -> (u8, u8) {
    ((word >> 8) as u8, word as u8)
}

// =============================================================================
// REINTERPRETATION
// =============================================================================

/// Read 16 raw bits as a signed value (`0x8000..=0xFFFF` become negative).
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn to_signed(word: u16) -> i16 {
    word as i16
}

/// Read a signed 16-bit value back as its raw bits.
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn to_unsigned(value: i16) -> u16 {
    value as u16
}

// =============================================================================
// NARROWING
// =============================================================================

/// Keep the low 16 bits of a 32-bit intermediate and read them as signed.
///
/// Values outside `i16` wrap; they are not saturated.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn narrow(value: i32) -> i16 {
    value as i16
}
