//! Transcendental functions over [`Fixed`], offered through two selectable
//! backend strategies.
//!
//! The backend is an explicit choice made by the caller, never inferred, and
//! both live side by side in one build:
//!
//! - [`DeterministicMath`] computes everything with integer operations only
//!   (digit-by-digit square root, truncated series for the trig family), so
//!   every platform produces identical bits. This is the backend a lockstep
//!   simulation must use.
//! - [`HostMath`] bridges through the native `f64` functions. Faster and more
//!   accurate, but not bit-exact across platforms; fit for rendering, tools
//!   and tests.
//!
//! # Example
//!
//! ```rust
//! use fixmath::{DeterministicMath, Fixed, FixedMath};
//!
//! let math = DeterministicMath;
//! let three = math.sqrt(Fixed::from_int(9));
//! assert!(three.approx_eq(Fixed::from_int(3)));
//! ```

use crate::error::Error;
use crate::fixed::Fixed;

mod deterministic;
mod host;

pub use deterministic::DeterministicMath;
pub use host::HostMath;

/// Backend strategy for the transcendental function family.
///
/// `asin`, `acos` and `atan2` are fallible on every backend so the two
/// strategies substitute for each other without changing caller code:
/// `asin`/`acos` reject arguments outside [−1, 1] and `atan2` rejects the
/// (0, 0) origin.
pub trait FixedMath {
    /// Square root. Negative input is unguarded: the deterministic backend
    /// yields an implementation-defined value (0) and the host backend goes
    /// through `f64` NaN. Callers check the sign at the boundary.
    fn sqrt(&self, value: Fixed) -> Fixed;

    /// Sine of an angle in radians; any magnitude, wrapped into [−π, π].
    fn sin(&self, angle: Fixed) -> Fixed;

    /// Cosine of an angle in radians.
    fn cos(&self, angle: Fixed) -> Fixed;

    /// Tangent of an angle in radians. No divide-by-zero guard where the
    /// cosine vanishes.
    fn tan(&self, angle: Fixed) -> Fixed;

    /// Arctangent, result in (−π/2, π/2).
    fn atan(&self, d: Fixed) -> Fixed;

    /// Four-quadrant arctangent of `y/x`, result in (−π, π].
    fn atan2(&self, y: Fixed, x: Fixed) -> Result<Fixed, Error>;

    /// Arcsine, domain [−1, 1].
    fn asin(&self, d: Fixed) -> Result<Fixed, Error>;

    /// Arccosine, domain [−1, 1].
    fn acos(&self, d: Fixed) -> Result<Fixed, Error>;
}
