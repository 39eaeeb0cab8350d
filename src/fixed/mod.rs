//! Q44.20 fixed-point number over an `i64` store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[cfg(test)]
mod tests;

/// Signed fixed-point number: the raw `i64` holds the real value scaled by
/// 2^20, so every arithmetic operation is an integer operation and two
/// machines running the same sequence of operations produce the same bits.
///
/// Equality, ordering and hashing all work on the raw integer. There is no
/// NaN and no ordering anomaly; the order is total.
///
/// Overflow policy: addition and subtraction wrap per native 64-bit
/// arithmetic. Multiplication runs through an `i128` intermediate so the
/// pre-shift product never loses precision silently, then truncates back to
/// 64 bits. Division by a zero raw value is not intercepted and panics like
/// any integer division; callers check the divisor at the boundary.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fixed {
    raw: i64,
}

impl Fixed {
    /// Number of fractional bits in the format.
    pub const FRAC_BITS: u32 = 20;

    pub const ZERO: Fixed = Fixed::from_raw(0);
    pub const ONE: Fixed = Fixed::from_raw(1 << Self::FRAC_BITS);
    /// Smallest positive increment (raw value 1).
    pub const EPSILON: Fixed = Fixed::from_raw(1);

    /// Bounded below the full 64-bit range so `raw << FRAC_BITS`, which both
    /// division and the deterministic square root perform, still fits.
    pub const MAX: Fixed = Fixed::from_raw(0x7FF_FFFF_FFFF);
    pub const MIN: Fixed = Fixed::from_raw(-0x7FF_FFFF_FFFF);

    /// π to ~6 significant decimal digits. This constant, not mathematical π,
    /// bounds the precision of every deterministic trig result downstream.
    pub const PI: Fixed = Fixed::from_raw((3_141_592 << Self::FRAC_BITS) / 1_000_000);
    pub const HALF_PI: Fixed = Fixed::from_raw(Self::PI.raw / 2);
    pub const TWO_PI: Fixed = Fixed::from_raw(Self::PI.raw * 2);

    const APPROX_RELATIVE: Fixed = Fixed::from_raw((1 << Self::FRAC_BITS) / 100_000);
    const APPROX_FLOOR: Fixed = Fixed::from_raw(16);

    pub const fn from_raw(raw: i64) -> Fixed {
        Fixed { raw }
    }

    pub const fn from_int(value: i64) -> Fixed {
        Fixed {
            raw: value << Self::FRAC_BITS,
        }
    }

    /// Exact quotient of two integers, e.g. `from_fraction(1, 3)`.
    pub fn from_fraction(numerator: i64, denominator: i64) -> Fixed {
        Fixed::from_int(numerator) / Fixed::from_int(denominator)
    }

    /// Host-float bridge. Boundary use only (loading assets, UI input); the
    /// deterministic path never touches floating point.
    pub fn from_f32(value: f32) -> Fixed {
        Self::from_f64(value as f64)
    }

    pub fn from_f64(value: f64) -> Fixed {
        Fixed {
            raw: (value * (1i64 << Self::FRAC_BITS) as f64) as i64,
        }
    }

    pub const fn to_raw(self) -> i64 {
        self.raw
    }

    /// Integer part, floored toward negative infinity (arithmetic shift).
    pub const fn to_int(self) -> i64 {
        self.raw >> Self::FRAC_BITS
    }

    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    pub fn to_f64(self) -> f64 {
        self.raw as f64 / (1i64 << Self::FRAC_BITS) as f64
    }

    pub const fn abs(self) -> Fixed {
        if self.raw < 0 {
            Fixed { raw: -self.raw }
        } else {
            self
        }
    }

    /// Tolerant comparison: |a − b| < max(rel · max(|a|, |b|), floor) with
    /// rel = 1/100000 and floor = 16 raw units. The absolute floor keeps the
    /// comparison meaningful near zero, where the relative term vanishes.
    pub fn approx_eq(self, other: Fixed) -> bool {
        let scale = self.abs().max(other.abs());
        let tolerance = (Self::APPROX_RELATIVE * scale).max(Self::APPROX_FLOOR);
        (self - other).abs() < tolerance
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Fixed {
        Fixed::from_int(value as i64)
    }
}

impl From<i64> for Fixed {
    fn from(value: i64) -> Fixed {
        Fixed::from_int(value)
    }
}

impl std::ops::Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl std::ops::Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl std::ops::Mul for Fixed {
    type Output = Fixed;
    fn mul(self, rhs: Fixed) -> Fixed {
        // The pre-shift product needs up to 86 bits; widen before shifting.
        let product = (self.raw as i128 * rhs.raw as i128) >> Self::FRAC_BITS;
        Fixed::from_raw(product as i64)
    }
}

impl std::ops::Div for Fixed {
    type Output = Fixed;
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw((self.raw << Self::FRAC_BITS) / rhs.raw)
    }
}

impl std::ops::Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed::from_raw(-self.raw)
    }
}

impl fmt::Display for Fixed {
    /// Renders through the host-float bridge at reduced precision; lossy,
    /// presentation only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl FromStr for Fixed {
    type Err = Error;

    /// Accepts an optional leading `-`, digits, then optionally `.` and more
    /// digits. Anything else is `Error::Format`.
    fn from_str(s: &str) -> Result<Fixed, Error> {
        let err = || Error::Format(s.to_owned());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (body, None),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let mut raw = int_part
            .parse::<i64>()
            .ok()
            .and_then(|value| value.checked_mul(1 << Self::FRAC_BITS))
            .ok_or_else(err)?;

        if let Some(frac) = frac_part {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            let digits = frac.parse::<i64>().map_err(|_| err())?;
            let scale = 10i64.checked_pow(frac.len() as u32).ok_or_else(err)?;
            let frac_raw = (((digits as i128) << Self::FRAC_BITS) / scale as i128) as i64;
            raw = raw.checked_add(frac_raw).ok_or_else(err)?;
        }

        Ok(Fixed::from_raw(if negative { -raw } else { raw }))
    }
}
