//! Tests for the fixed-point core type.

#[cfg(test)]
mod tests {
    use super::super::*;

    fn assert_approx(expected: Fixed, actual: Fixed) {
        assert!(
            expected.approx_eq(actual),
            "expected ~{expected} (raw {}), got {actual} (raw {})",
            expected.to_raw(),
            actual.to_raw()
        );
    }

    #[test]
    fn test_factory() {
        assert_eq!(Fixed::from_int(10), Fixed::from_int(10));
        assert_eq!(Fixed::from_f32(3.2), Fixed::from_f32(3.2));

        let parsed: Fixed = "6.3".parse().unwrap();
        assert_approx(Fixed::from_fraction(63, 10), parsed);

        let pi = Fixed::from_fraction(3_141_592, 1_000_000);
        assert_approx(Fixed::from_f32(3.141592), pi);
        assert_eq!(Fixed::PI, pi);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(Fixed::ZERO, "0".parse().unwrap());
        assert_eq!(Fixed::ONE, "1".parse().unwrap());
        assert_eq!(Fixed::from_int(-1), "-1".parse().unwrap());
        assert_eq!(Fixed::from_int(16_777_216), "16777216".parse().unwrap());
        assert_eq!(Fixed::from_int(-16_777_216), "-16777216".parse().unwrap());
    }

    #[test]
    fn test_parse_decimal() {
        assert_approx(Fixed::ZERO, "000.0000".parse().unwrap());
        assert_approx(Fixed::from_f32(1.4567), "1.4567".parse().unwrap());
        assert_approx(Fixed::from_f32(-1.4831), "-1.4831".parse().unwrap());
        assert_approx(Fixed::from_int(16_777_216), "16777216.1345654".parse().unwrap());
        assert_approx(Fixed::from_int(-16_777_216), "-16777216.1345654".parse().unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "-", ".", "1.", ".5", "-.5", "1.2.3", "1..2", "--1", "1a", "a.1", "1.a", "+1"] {
            let parsed = input.parse::<Fixed>();
            assert!(
                matches!(parsed, Err(Error::Format(_))),
                "expected format error for {input:?}, got {parsed:?}"
            );
        }
    }

    #[test]
    fn test_add() {
        let a: Fixed = "10.3".parse().unwrap();
        let b: Fixed = "3.2".parse().unwrap();

        assert_approx("13.5".parse().unwrap(), a + b);
        assert_approx("13.3".parse().unwrap(), a + Fixed::from(3));
        assert_approx("-1.8".parse().unwrap(), Fixed::from(-5) + b);
    }

    #[test]
    fn test_subtract() {
        let a: Fixed = "10.3".parse().unwrap();
        let b: Fixed = "3.2".parse().unwrap();

        assert_approx("7.1".parse().unwrap(), a - b);
    }

    #[test]
    fn test_multiply() {
        let a: Fixed = "10.3".parse().unwrap();
        let b: Fixed = "3.2".parse().unwrap();

        assert_approx("32.96".parse().unwrap(), a * b);
    }

    #[test]
    fn test_divide() {
        let a: Fixed = "10.3".parse().unwrap();
        let b: Fixed = "3.2".parse().unwrap();

        assert_approx("3.21875".parse().unwrap(), a / b);
    }

    #[test]
    fn test_int_round_trip() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let i = rng.i64(-(1 << 42)..(1 << 42));
            assert_eq!(i, Fixed::from_int(i).to_int());
        }
    }

    #[test]
    fn test_to_int_floors() {
        assert_eq!(1, Fixed::from_fraction(3, 2).to_int());
        assert_eq!(-2, Fixed::from_fraction(-3, 2).to_int());
    }

    #[test]
    fn test_commutativity() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..1000 {
            let a = Fixed::from_raw(rng.i64(-(1 << 40)..(1 << 40)));
            let b = Fixed::from_raw(rng.i64(-(1 << 40)..(1 << 40)));
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }

    #[test]
    fn test_ordering_is_raw_ordering() {
        let small = Fixed::from_fraction(-1, 2);
        let large = Fixed::from_fraction(1, 2);
        assert!(small < large);
        assert!(Fixed::MIN < Fixed::ZERO);
        assert!(Fixed::ZERO < Fixed::EPSILON);
        assert!(Fixed::MAX > Fixed::ONE);
        assert_eq!(small.max(large), large);
        assert_eq!(small.min(large), small);
    }

    #[test]
    fn test_approx_eq_floor_near_zero() {
        // The relative term vanishes near zero; the 16-raw-unit floor rules.
        assert!(Fixed::ZERO.approx_eq(Fixed::from_raw(15)));
        assert!(!Fixed::ZERO.approx_eq(Fixed::from_raw(16)));
    }

    #[test]
    fn test_abs_and_neg() {
        let a: Fixed = "-2.5".parse().unwrap();
        assert_eq!(-a, a.abs());
        assert_eq!(a, -a.abs());
        assert_eq!(Fixed::ZERO, Fixed::ZERO.abs());
    }

    #[test]
    fn test_display_integer_values() {
        assert_eq!("10", Fixed::from_int(10).to_string());
        assert_eq!("-3", Fixed::from_int(-3).to_string());
        assert_eq!("0", Fixed::ZERO.to_string());
    }

    #[test]
    fn test_serde_round_trip_preserves_raw_value() {
        let a: Fixed = "10.3".parse().unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Fixed = serde_json::from_str(&json).unwrap();
        assert_eq!(a.to_raw(), back.to_raw());
    }
}
