//! Host-float backend: raw values bridged through native `f64`
//! transcendentals. Not cross-platform bit-exact.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fixed::Fixed;

use super::FixedMath;

/// Fast backend for paths that do not feed the lockstep state: rendering,
/// editor tooling, sanity checks against the deterministic results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMath;

impl FixedMath for HostMath {
    fn sqrt(&self, value: Fixed) -> Fixed {
        Fixed::from_f64(value.to_f64().sqrt())
    }

    fn sin(&self, angle: Fixed) -> Fixed {
        Fixed::from_f64(angle.to_f64().sin())
    }

    fn cos(&self, angle: Fixed) -> Fixed {
        Fixed::from_f64(angle.to_f64().cos())
    }

    fn tan(&self, angle: Fixed) -> Fixed {
        Fixed::from_f64(angle.to_f64().tan())
    }

    fn atan(&self, d: Fixed) -> Fixed {
        Fixed::from_f64(d.to_f64().atan())
    }

    fn atan2(&self, y: Fixed, x: Fixed) -> Result<Fixed, Error> {
        if y == Fixed::ZERO && x == Fixed::ZERO {
            return Err(Error::Domain("atan2"));
        }
        Ok(Fixed::from_f64(y.to_f64().atan2(x.to_f64())))
    }

    fn asin(&self, d: Fixed) -> Result<Fixed, Error> {
        if d.abs() > Fixed::ONE {
            return Err(Error::Domain("asin"));
        }
        Ok(Fixed::from_f64(d.to_f64().asin()))
    }

    fn acos(&self, d: Fixed) -> Result<Fixed, Error> {
        if d.abs() > Fixed::ONE {
            return Err(Error::Domain("acos"));
        }
        Ok(Fixed::from_f64(d.to_f64().acos()))
    }
}
