//! Kernels
//!
//! The arithmetic core: explicit 16-bit word conversions and the mixing primitive.

pub mod constants;
pub mod transform;
pub mod word;
