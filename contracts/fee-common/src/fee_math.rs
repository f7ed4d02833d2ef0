//! Pure fee arithmetic (no storage access).
//!
//! ```text
//! raw = floor(principal × percent_bps ÷ 10 000)
//! fee = max(raw, minimum)            if a minimum is set and raw < minimum
//!     = min(raw, maximum)            else if a maximum is set and raw > maximum
//!     = raw                          otherwise
//! ```

use crate::errors::FeeError;
use crate::registry::FeeConfig;

/// 10 000 bps = 100 %.
pub const BASIS_POINTS: u32 = 10_000;

/// Unsigned 256-bit transfer principal, as big-endian 64-bit limbs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Principal([u64; 4]);

impl Principal {
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(buf);
        }
        Self(limbs)
    }

    /// `None` when the value needs more than 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        match self.0 {
            [0, 0, high, low] => Some(((high as u128) << 64) | low as u128),
            _ => None,
        }
    }

    /// Short division by a non-zero `divisor`: `(quotient, remainder)`.
    fn div_rem(&self, divisor: u64) -> (Self, u64) {
        let divisor = divisor as u128;
        let mut quotient = [0u64; 4];
        let mut rem = 0u128;
        for (q, limb) in quotient.iter_mut().zip(self.0.iter()) {
            // rem < divisor, so cur < divisor << 64 and the digit fits a u64.
            let cur = (rem << 64) | *limb as u128;
            *q = (cur / divisor) as u64;
            rem = cur % divisor;
        }
        (Self(quotient), rem as u64)
    }
}

impl From<u128> for Principal {
    fn from(value: u128) -> Self {
        Self([0, 0, (value >> 64) as u64, value as u64])
    }
}

/// `floor(principal × percent_bps ÷ 10 000)`, exact over the whole 256-bit
/// principal range. Fails only when the fee itself does not fit a token
/// amount.
pub fn percent_of(principal: Principal, percent_bps: u32) -> Result<i128, FeeError> {
    if percent_bps == 0 {
        return Ok(0);
    }
    // principal = whole × 10 000 + rem
    let (whole, rem) = principal.div_rem(BASIS_POINTS as u64);
    let bps = percent_bps as u128;
    let fee = whole
        .to_u128()
        .and_then(|w| w.checked_mul(bps))
        .and_then(|w| w.checked_add(rem as u128 * bps / BASIS_POINTS as u128))
        .ok_or(FeeError::FeeArithmeticOverflow)?;
    i128::try_from(fee).map_err(|_| FeeError::FeeArithmeticOverflow)
}

/// Apply the configured floor and ceiling to a raw fee.
pub fn clamp_fee(fee: i128, minimum: Option<i128>, maximum: Option<i128>) -> i128 {
    match (minimum, maximum) {
        (Some(min), _) if fee < min => min,
        (_, Some(max)) if fee > max => max,
        _ => fee,
    }
}

pub fn compute_fee(principal: Principal, config: &FeeConfig) -> Result<i128, FeeError> {
    let raw = percent_of(principal, config.percent_bps)?;
    Ok(clamp_fee(raw, config.minimum_fee, config.maximum_fee))
}
