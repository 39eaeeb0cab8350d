//! Exact rational numbers over bounded 32-bit components.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;


/// Exact numerator/denominator pair.
///
/// A zero denominator is a sentinel family rather than an error: numerator 0
/// is NaN, positive is +∞, negative is −∞. Ordinary values are not stored
/// reduced; [`Fraction::reduce`] normalizes on demand. Arithmetic
/// cross-reduces operands through the GCD before combining, which bounds the
/// intermediate magnitude but does not eliminate overflow: a component
/// overflow panics, it never wraps.
///
/// Neither component ever holds `i32::MIN` (the constructors bump it by one),
/// because negating that value would overflow.
///
/// Equality and ordering compare by value, so `1/2 == 2/4`. Indeterminates
/// sort in a fixed total order: −∞ < NaN < finite < +∞.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl Fraction {
    pub const NAN: Fraction = Fraction::new(0, 0);
    pub const POSITIVE_INFINITY: Fraction = Fraction::new(1, 0);
    pub const NEGATIVE_INFINITY: Fraction = Fraction::new(-1, 0);

    pub const ZERO: Fraction = Fraction::new(0, 1);
    pub const ONE: Fraction = Fraction::new(1, 1);
    pub const EPSILON: Fraction = Fraction::new(1, i32::MAX);
    pub const MIN: Fraction = Fraction::new(i32::MIN + 1, 1);
    pub const MAX: Fraction = Fraction::new(i32::MAX, 1);

    pub const fn new(numerator: i32, denominator: i32) -> Fraction {
        // i32::MIN cannot be negated without overflow; keep it out entirely.
        let numerator = if numerator == i32::MIN {
            numerator + 1
        } else {
            numerator
        };
        let denominator = if denominator == i32::MIN {
            denominator + 1
        } else {
            denominator
        };
        Fraction {
            numerator,
            denominator,
        }
    }

    pub const fn from_int(integer: i32) -> Fraction {
        Fraction::new(integer, 1)
    }

    pub const fn is_nan(self) -> bool {
        self.denominator == 0 && self.numerator == 0
    }

    pub const fn is_infinity(self) -> bool {
        self.denominator == 0 && self.numerator != 0
    }

    pub const fn is_positive_infinity(self) -> bool {
        self.denominator == 0 && self.numerator > 0
    }

    pub const fn is_negative_infinity(self) -> bool {
        self.denominator == 0 && self.numerator < 0
    }

    /// Normalized form: components divided by their GCD, denominator forced
    /// positive, every zero collapsed to 0/1. Idempotent; indeterminates come
    /// back unchanged.
    pub fn reduce(self) -> Fraction {
        if self.denominator == 0 {
            return self;
        }
        if self.numerator == 0 {
            return Fraction::new(0, 1);
        }

        let divisor = gcd(self.numerator, self.denominator);
        let mut numerator = self.numerator / divisor;
        let mut denominator = self.denominator / divisor;

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Fraction::new(numerator, denominator)
    }

    /// Reciprocal: components swapped. Zero inverts to +∞ and NaN stays NaN.
    pub const fn invert(self) -> Fraction {
        Fraction::new(self.denominator, self.numerator)
    }

    /// Truncated integer value. Indeterminates have none.
    pub fn to_int(self) -> Result<i32, Error> {
        if self.denominator == 0 {
            return Err(Error::Arithmetic);
        }
        Ok(self.numerator / self.denominator)
    }

    /// Presentation-boundary conversion; indeterminates map onto the IEEE
    /// specials.
    pub fn to_f32(self) -> f32 {
        if self.denominator == 0 {
            return match self.numerator.cmp(&0) {
                Ordering::Equal => f32::NAN,
                Ordering::Greater => f32::INFINITY,
                Ordering::Less => f32::NEG_INFINITY,
            };
        }
        self.numerator as f32 / self.denominator as f32
    }

    // Rank for the fixed total order across the sentinel family.
    const fn order_class(self) -> u8 {
        if self.denominator != 0 {
            2
        } else if self.numerator < 0 {
            0 // -inf
        } else if self.numerator == 0 {
            1 // NaN
        } else {
            3 // +inf
        }
    }
}

/// Euclidean GCD on absolute values. Any operand of 0 or ±1 short-circuits to
/// 1 so degenerate reductions divide by 1 instead of zero.
fn gcd(left: i32, right: i32) -> i32 {
    // Components never hold i32::MIN, so abs cannot overflow.
    let mut left = left.abs();
    let mut right = right.abs();

    if left < 2 || right < 2 {
        return 1;
    }

    loop {
        if left < right {
            std::mem::swap(&mut left, &mut right);
        }
        left %= right;
        if left == 0 {
            return right;
        }
    }
}

/// Reduce each operand's numerator against the other's denominator. Bounds
/// the products formed by multiplication and comparison. Indeterminates pass
/// through untouched.
fn cross_reduce(mut left: Fraction, mut right: Fraction) -> (Fraction, Fraction) {
    if left.denominator == 0 || right.denominator == 0 {
        return (left, right);
    }

    let top = gcd(left.numerator, right.denominator);
    left.numerator /= top;
    right.denominator /= top;

    let bottom = gcd(left.denominator, right.numerator);
    right.numerator /= bottom;
    left.denominator /= bottom;

    (left, right)
}

impl std::ops::Add for Fraction {
    type Output = Fraction;

    /// Result is left unreduced.
    fn add(self, rhs: Fraction) -> Fraction {
        if self.is_nan() || rhs.is_nan() {
            return Fraction::NAN;
        }

        // Combine over the GCD of the denominators instead of their full
        // product, to keep the intermediates small.
        let divisor = gcd(self.denominator, rhs.denominator); // >= 1
        let left_denominator = self.denominator / divisor;
        let right_denominator = rhs.denominator / divisor;

        let numerator = self
            .numerator
            .checked_mul(right_denominator)
            .zip(rhs.numerator.checked_mul(left_denominator))
            .and_then(|(a, b)| a.checked_add(b))
            .expect("fraction addition overflowed");
        let denominator = left_denominator
            .checked_mul(right_denominator)
            .and_then(|d| d.checked_mul(divisor))
            .expect("fraction addition overflowed");

        Fraction::new(numerator, denominator)
    }
}

impl std::ops::Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl std::ops::Mul for Fraction {
    type Output = Fraction;

    /// Result is left unreduced.
    fn mul(self, rhs: Fraction) -> Fraction {
        if self.is_nan() || rhs.is_nan() {
            return Fraction::NAN;
        }

        let (left, right) = cross_reduce(self, rhs);

        let numerator = left
            .numerator
            .checked_mul(right.numerator)
            .expect("fraction multiplication overflowed");
        let denominator = left
            .denominator
            .checked_mul(right.denominator)
            .expect("fraction multiplication overflowed");

        Fraction::new(numerator, denominator)
    }
}

impl std::ops::Div for Fraction {
    type Output = Fraction;
    fn div(self, rhs: Fraction) -> Fraction {
        self * rhs.invert()
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction::new(-self.numerator, self.denominator)
    }
}

impl Ord for Fraction {
    /// Fixed total order: −∞ < NaN < finite < +∞; finite values compare by
    /// integer cross-multiplication, never through floats. The 64-bit
    /// products cannot overflow, and normalizing the denominator signs first
    /// keeps the order correct for unreduced negative-denominator forms.
    fn cmp(&self, other: &Fraction) -> Ordering {
        let (left_class, right_class) = (self.order_class(), other.order_class());
        if left_class != 2 || right_class != 2 {
            return left_class.cmp(&right_class);
        }

        let (mut left_num, mut left_den) = (self.numerator as i64, self.denominator as i64);
        if left_den < 0 {
            left_num = -left_num;
            left_den = -left_den;
        }
        let (mut right_num, mut right_den) = (other.numerator as i64, other.denominator as i64);
        if right_den < 0 {
            right_num = -right_num;
            right_den = -right_den;
        }

        (left_num * right_den).cmp(&(right_num * left_den))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    /// `N/D`, without forcing reduction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = Error;

    /// Accepts `N/D`, a decimal `I.F` (converted to an exact fraction with a
    /// power-of-ten denominator sized to the fractional digit count), or a
    /// bare integer. Anything else is `Error::Format`.
    fn from_str(s: &str) -> Result<Fraction, Error> {
        let err = || Error::Format(s.to_owned());

        if let Some((numerator, denominator)) = s.split_once('/') {
            let numerator = numerator.parse::<i32>().map_err(|_| err())?;
            let denominator = denominator.parse::<i32>().map_err(|_| err())?;
            return Ok(Fraction::new(numerator, denominator));
        }

        if let Some(dot) = s.find('.') {
            if dot == 0 || dot == s.len() - 1 {
                return Err(err());
            }
            let digits = format!("{}{}", &s[..dot], &s[dot + 1..]);
            let numerator = digits.parse::<i32>().map_err(|_| err())?;
            let fractional_digits = (s.len() - dot - 1) as u32;
            let denominator = 10i32.checked_pow(fractional_digits).ok_or_else(err)?;
            return Ok(Fraction::new(numerator, denominator));
        }

        Ok(Fraction::from_int(s.parse::<i32>().map_err(|_| err())?))
    }
}
