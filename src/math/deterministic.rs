//! Integer-only backend. Every operation here sticks to `i64` arithmetic on
//! raw values so all platforms agree bit for bit.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fixed::Fixed;

use super::FixedMath;

const FRAC_BITS: u32 = Fixed::FRAC_BITS;

/// Cross-platform-exact backend.
///
/// The series term counts are fixed (sine through the 13th-order term,
/// arctangent through 15 alternating term pairs); they define the error
/// bounds downstream consumers and the test suite rely on, so shortening or
/// extending them is a breaking change even when it "improves" accuracy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicMath;

impl FixedMath for DeterministicMath {
    fn sqrt(&self, value: Fixed) -> Fixed {
        debug_assert!(
            value >= Fixed::ZERO,
            "sqrt of a negative fixed-point value is implementation-defined"
        );

        // Binary digit-by-digit square root on the raw value pre-shifted by
        // the format, so the result lands back in Q44.20. The mask walk is a
        // fixed number of iterations bounded by the bit width.
        let mut remainder = value.to_raw() << FRAC_BITS;
        let mut result = 0i64;
        let mut bit = 1i64 << 62;

        while bit > remainder {
            bit >>= 2;
        }
        while bit != 0 {
            if remainder >= result + bit {
                remainder -= result + bit;
                result = (result >> 1) + bit;
            } else {
                result >>= 1;
            }
            bit >>= 2;
        }

        Fixed::from_raw(result)
    }

    fn sin(&self, angle: Fixed) -> Fixed {
        let pi = Fixed::PI.to_raw();
        let pi2 = pi << 1;

        // Wrap into [-π, +π]. The baked π constant, not mathematical π, is
        // what the wrap preserves.
        let mut rad = angle.to_raw() % pi2;
        if rad > pi {
            rad -= pi2;
        } else if rad < -pi {
            rad += pi2;
        }

        let square = (rad * rad) >> FRAC_BITS;

        let mut r = rad; // x
        rad = (rad * square) >> FRAC_BITS;
        r -= rad / 6; // - x^3 / 3!
        rad = (rad * square) >> FRAC_BITS;
        r += rad / 120; // + x^5 / 5!
        rad = (rad * square) >> FRAC_BITS;
        r -= rad / 5_040; // - x^7 / 7!
        rad = (rad * square) >> FRAC_BITS;
        r += rad / 362_880; // + x^9 / 9!
        rad = (rad * square) >> FRAC_BITS;
        r -= rad / 39_916_800; // - x^11 / 11!
        rad = (rad * square) >> FRAC_BITS;
        r += rad / 6_227_020_800; // + x^13 / 13!

        Fixed::from_raw(r)
    }

    fn cos(&self, angle: Fixed) -> Fixed {
        self.sin(Fixed::HALF_PI - angle)
    }

    fn tan(&self, angle: Fixed) -> Fixed {
        self.sin(angle) / self.cos(angle)
    }

    fn atan(&self, d: Fixed) -> Fixed {
        // The series only converges on [-1, 1]; outside, evaluate at 1/x and
        // fold back through atan(x) = ±π/2 - atan(1/x).
        let (d, inverted) = if d.abs() > Fixed::ONE {
            (Fixed::ONE / d, true)
        } else {
            (d, false)
        };

        let mut v = d.to_raw();
        let square = (v * v) >> FRAC_BITS;

        let mut r = v;
        let mut n = 3i64;
        for _ in 0..15 {
            v = (v * square) >> FRAC_BITS;
            r -= v / n;
            n += 2;

            v = (v * square) >> FRAC_BITS;
            r += v / n;
            n += 2;
        }

        if inverted {
            r = if r > 0 {
                Fixed::HALF_PI.to_raw() - r
            } else {
                -Fixed::HALF_PI.to_raw() - r
            };
        }

        Fixed::from_raw(r)
    }

    fn atan2(&self, y: Fixed, x: Fixed) -> Result<Fixed, Error> {
        if x > Fixed::ZERO {
            Ok(self.atan(y / x))
        } else if x < Fixed::ZERO {
            let r = self.atan(y / x);
            Ok(if y >= Fixed::ZERO {
                r + Fixed::PI
            } else {
                r - Fixed::PI
            })
        } else if y > Fixed::ZERO {
            Ok(Fixed::HALF_PI)
        } else if y < Fixed::ZERO {
            Ok(-Fixed::HALF_PI)
        } else {
            Err(Error::Domain("atan2"))
        }
    }

    fn asin(&self, d: Fixed) -> Result<Fixed, Error> {
        if d.abs() > Fixed::ONE {
            return Err(Error::Domain("asin"));
        }
        // At the domain edges 1 - d^2 collapses to zero; answer directly.
        if d == Fixed::ONE {
            return Ok(Fixed::HALF_PI);
        }
        if d == -Fixed::ONE {
            return Ok(-Fixed::HALF_PI);
        }
        Ok(self.atan(d / self.sqrt(Fixed::ONE - d * d)))
    }

    fn acos(&self, d: Fixed) -> Result<Fixed, Error> {
        Ok(Fixed::HALF_PI - self.asin(d)?)
    }
}
