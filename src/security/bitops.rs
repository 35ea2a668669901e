//! 32-bit word primitives used by the MD5 rounds.
//!
//! All word additions are modulo 2^32. Overflow is part of the algorithm, never an error.
//! The compression rounds use [`add`] for every addition. They rotate with `u32::rotate_left`
//! directly because their amounts come from a constant table that is always in range;
//! [`rotate_left`] is the checked form for caller-supplied amounts.

use crate::error::{Error, Result};

/// Rotates `x` left by `amount` bits.
///
/// Only amounts in `0..=31` are accepted. Anything larger fails with
/// [`Error::InvalidArgument`] instead of being masked, so a bad rotation table surfaces
/// immediately rather than producing a silently wrong digest.
pub fn rotate_left(x: u32, amount: u32) -> Result<u32> {
    if amount > 31 {
        return Err(Error::InvalidArgument(format!(
            "rotation amount {} is outside 0..=31",
            amount
        )));
    }
    Ok(x.rotate_left(amount))
}

/// Adds two words modulo 2^32.
#[inline]
pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}
