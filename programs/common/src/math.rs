//! Numeric guard - checked arithmetic, no wrapping, no saturation
//!
//! Every stored balance is updated through these helpers. Addition and
//! multiplication fail with `Overflow`, subtraction with `Underflow`.

use crate::error::StakeError;
use crate::types::Amount;

/// Add u128, failing on overflow
#[inline]
pub fn add_u128(a: u128, b: u128) -> Result<u128, StakeError> {
    a.checked_add(b).ok_or(StakeError::Overflow)
}

/// Subtract u128, failing if the result would be negative
#[inline]
pub fn sub_u128(a: u128, b: u128) -> Result<u128, StakeError> {
    a.checked_sub(b).ok_or(StakeError::Underflow)
}

/// Multiply u128, failing on overflow
#[inline]
pub fn mul_u128(a: u128, b: u128) -> Result<u128, StakeError> {
    a.checked_mul(b).ok_or(StakeError::Overflow)
}

/// Multiply three factors left to right, failing on any intermediate overflow
#[inline]
pub fn mul3_u128(a: u128, b: u128, c: u128) -> Result<u128, StakeError> {
    mul_u128(mul_u128(a, b)?, c)
}

/// Quotient and remainder; a zero divisor is a caller error
#[inline]
pub fn div_rem_u128(a: u128, b: u128) -> Result<(u128, u128), StakeError> {
    if b == 0 {
        return Err(StakeError::InvalidParameter);
    }
    Ok((a / b, a % b))
}

/// Add u64, failing on overflow
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, StakeError> {
    a.checked_add(b).ok_or(StakeError::Overflow)
}

/// Subtract u64, failing if the result would be negative
#[inline]
pub fn sub_u64(a: u64, b: u64) -> Result<u64, StakeError> {
    a.checked_sub(b).ok_or(StakeError::Underflow)
}

/// Decode a signed caller value into the unsigned working width
///
/// Negative values are rejected here, at the decoding layer, with the same
/// kind the business validation uses.
#[inline]
pub fn decode_unsigned(raw: i128) -> Result<Amount, StakeError> {
    u128::try_from(raw).map_err(|_| StakeError::InvalidParameter)
}

/// Decode a reward rate: must be strictly positive
#[inline]
pub fn decode_reward_rate(raw: i128) -> Result<Amount, StakeError> {
    match decode_unsigned(raw)? {
        0 => Err(StakeError::InvalidParameter),
        rate => Ok(rate),
    }
}
