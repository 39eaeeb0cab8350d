use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixed::Fixed;

/// Deterministic pseudo-random generator (JKISS).
///
/// Self-contained 32-bit generator: given the same seed, every platform
/// produces the same sequence, which makes it safe to drive lockstep
/// simulation state. The full generator state serializes, so a snapshot
/// resumes mid-sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FRandom {
    seed: i32,
    x: u32,
    y: u32,
    z: u32,
    c: u32,
}

impl FRandom {
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            x: seed as u32,
            y: 987_654_321,
            z: 43_219_876,
            c: 6_543_217,
        }
    }

    /// Clock-seeded generator for non-replayed uses. The chosen seed is
    /// logged so a surprising run can still be reproduced afterwards.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() as i32 ^ elapsed.as_secs() as i32)
            .unwrap_or(0);
        debug!(seed, "seeding FRandom from the system clock");
        Self::new(seed)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    fn next_u32(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(314_527_869).wrapping_add(1_234_567);
        self.y ^= self.y << 5;
        self.y ^= self.y >> 7;
        self.y ^= self.y << 22;
        let t = 4_294_584_393u64
            .wrapping_mul(self.z as u64)
            .wrapping_add(self.c as u64);
        self.c = (t >> 32) as u32;
        self.z = t as u32;
        self.x.wrapping_add(self.y).wrapping_add(self.z)
    }

    /// Uniform integer in `[0, max)`. Panics unless `max` is positive.
    pub fn next_below(&mut self, max: i32) -> i32 {
        assert!(max > 0, "upper bound must be positive");
        (self.next_u32() % max as u32) as i32
    }

    /// Uniform integer in `[min, max)`. Panics when `min > max`; a span of
    /// one or less always returns `min`.
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "lower bound above upper bound");

        let span = max.wrapping_sub(min) as u32;
        if span <= 1 {
            return min;
        }
        min.wrapping_add((self.next_u32() % span) as i32)
    }

    /// Uniform fixed-point value in `[0, 1]` (every raw step is reachable).
    pub fn next_fixed(&mut self) -> Fixed {
        Fixed::from_raw(self.next_below(Fixed::ONE.to_raw() as i32 + 1) as i64)
    }

    /// Uniform fixed-point value in `[min, max]`. Panics when `min > max`.
    pub fn next_fixed_range(&mut self, min: Fixed, max: Fixed) -> Fixed {
        assert!(min <= max, "lower bound above upper bound");
        min + self.next_fixed() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference outputs pinned so the sequence can never drift between
    // releases without a test failing: replays depend on it.
    #[test]
    fn test_next_reference_sequence() {
        let mut r = FRandom::new(1);
        assert_eq!(78_325, r.next_below(107_562));
        assert_eq!(-28_803, r.next_range(-102_324, 12_034));
    }

    #[test]
    fn test_next_fixed_reference_sequence() {
        let mut r = FRandom::new(1);
        assert_eq!(Fixed::from_raw(995_757), r.next_fixed());

        let min = Fixed::from_fraction(-102_324, 1_000);
        let max = Fixed::from_fraction(12_034, 100);
        assert_eq!(Fixed::from_raw(-16_118_036), r.next_fixed_range(min, max));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = FRandom::new(42);
        let mut b = FRandom::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_degenerate_span_returns_min() {
        let mut r = FRandom::new(9);
        assert_eq!(-1, r.next_range(-1, -1));
        assert_eq!(-1, r.next_range(-1, 0));
    }

    #[test]
    fn test_next_fixed_stays_in_unit_interval() {
        let mut r = FRandom::new(1234);
        for _ in 0..10_000 {
            let v = r.next_fixed();
            assert!(v >= Fixed::ZERO && v <= Fixed::ONE);
        }
    }

    #[test]
    #[should_panic(expected = "upper bound must be positive")]
    fn test_next_below_rejects_non_positive_bound() {
        FRandom::new(1).next_below(0);
    }

    #[test]
    fn test_serde_round_trip_resumes_sequence() {
        let mut r = FRandom::new(7);
        r.next_below(1000);

        let snapshot = serde_json::to_string(&r).unwrap();
        let mut restored: FRandom = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(r.next_u32(), restored.next_u32());
    }
}
