use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;
use crate::math::FixedMath;

/// 2D vector over [`Fixed`]. A thin consumer of the core: everything here
/// goes through the public fixed-point operations, and the length-dependent
/// methods take the math backend the caller selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedVec2 {
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: Fixed) -> Self {
        Self { x: value, y: value }
    }

    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: Fixed::from_f32(x),
            y: Fixed::from_f32(y),
        }
    }

    pub fn length_squared(self) -> Fixed {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self, math: &impl FixedMath) -> Fixed {
        let len_sq = self.length_squared();
        if len_sq == Fixed::ZERO {
            return Fixed::ZERO;
        }
        math.sqrt(len_sq)
    }

    /// Unit vector in the same direction; the zero vector normalizes to
    /// itself.
    pub fn normalize(self, math: &impl FixedMath) -> Self {
        let len = self.length(math);
        if len == Fixed::ZERO {
            Self::ZERO
        } else {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        }
    }

    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(self, other: Self) -> Fixed {
        self.x * other.y - self.y * other.x
    }
}

impl std::ops::Add for FixedVec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for FixedVec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<Fixed> for FixedVec2 {
    type Output = Self;
    fn mul(self, rhs: Fixed) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::ops::Div<Fixed> for FixedVec2 {
    type Output = Self;
    fn div(self, rhs: Fixed) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl std::ops::Neg for FixedVec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
