//! Deterministic fixed-point mathematics library.
//!
//! This crate provides deterministic math types and operations using integer
//! arithmetic only, to ensure identical behavior across different platforms,
//! architectures and compilers. This is critical for multiplayer lockstep
//! networking, where all clients must simulate identically: native floating
//! point rounds differently across hardware and compiler flags, and a single
//! diverging bit desynchronizes the whole session.
//!
//! Two independent numeric kernels:
//!
//! - [`Fixed`], a Q44.20 fixed-point number over an `i64` store, with a
//!   from-scratch transcendental library behind the [`FixedMath`] trait. The
//!   caller picks the backend explicitly: [`DeterministicMath`] (integer
//!   series and identities, cross-platform-exact) or [`HostMath`] (native
//!   `f64` bridge, fast but not bit-exact).
//! - [`Fraction`], an exact numerator/denominator pair over `i32`, with
//!   on-demand reduction, NaN/±∞ sentinels and cross-reduction to hold
//!   overflow at bay.
//!
//! Around the core, [`FixedVec2`] wraps a pair of fixed-point values and
//! [`FRandom`] supplies a deterministic PRNG; both consume the core through
//! its public operations only.
//!
//! Everything is a pure value: operators never mutate an operand, nothing
//! allocates, and there is no shared state, so concurrent read-only use is
//! safe everywhere.
//!
//! # Example
//!
//! ```rust
//! use fixmath::{DeterministicMath, Fixed, FixedMath};
//!
//! let math = DeterministicMath;
//! let a: Fixed = "10.3".parse()?;
//! let b: Fixed = "3.2".parse()?;
//! assert!((a + b).approx_eq("13.5".parse()?));
//! assert!(math.sqrt(Fixed::from_int(9)).approx_eq(Fixed::from_int(3)));
//! # Ok::<(), fixmath::Error>(())
//! ```

pub mod error;
pub mod fixed;
pub mod fraction;
pub mod math;
pub mod random;
pub mod vec2;

pub use error::Error;
pub use fixed::Fixed;
pub use fraction::Fraction;
pub use math::{DeterministicMath, FixedMath, HostMath};
pub use random::FRandom;
pub use vec2::FixedVec2;
