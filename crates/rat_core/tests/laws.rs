//! Property tests: canonical form, text round-trip, and the field laws.
//!
//! Operands are drawn from a range small enough that sums and products of
//! three values never overflow `i64`, so every law is checked on successful
//! results only.

use proptest::prelude::*;
use rat_core::{gcd, RatError, Rational};

fn small_rational() -> impl Strategy<Value = Rational> {
    (-10_000i64..=10_000, (1i64..=10_000).prop_flat_map(|d| prop_oneof![Just(d), Just(-d)]))
        .prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn any_rational() -> impl Strategy<Value = Rational> {
    (any::<i64>(), any::<i64>().prop_filter("non-zero", |d| *d != 0))
        .prop_filter_map("representable", |(n, d)| Rational::new(n, d).ok())
}

fn assert_canonical(r: Rational) {
    assert!(r.denominator() > 0, "{r:?}");
    assert_eq!(gcd(r.numerator(), r.denominator()), 1, "{r:?}");
}

proptest! {
    #[test]
    fn construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
        match Rational::new(n, d) {
            Ok(r) => assert_canonical(r),
            Err(RatError::InvalidArgument(_)) => prop_assert_eq!(d, 0),
            Err(e) => prop_assert_eq!(e, RatError::ArithmeticOverflow),
        }
    }

    #[test]
    fn construction_preserves_value(n in -1_000_000i64..1_000_000, d in 1i64..1_000_000) {
        let r = Rational::new(n, d).unwrap();
        prop_assert_eq!(
            i128::from(r.numerator()) * i128::from(d),
            i128::from(n) * i128::from(r.denominator())
        );
    }

    #[test]
    fn arithmetic_results_are_canonical(a in any_rational(), b in any_rational()) {
        for r in [a.try_add(b), a.try_sub(b), a.try_mul(b), a.try_div(b)] {
            match r {
                Ok(v) => assert_canonical(v),
                Err(e) => prop_assert!(matches!(e, RatError::ArithmeticOverflow | RatError::DivisionByZero)),
            }
        }
    }

    #[test]
    fn text_round_trip(r in any_rational()) {
        let s = r.to_string();
        prop_assert_eq!(s.parse::<Rational>(), Ok(r));
    }

    #[test]
    fn add_and_mul_commute(a in small_rational(), b in small_rational()) {
        prop_assert_eq!(a.try_add(b), b.try_add(a));
        prop_assert_eq!(a.try_mul(b), b.try_mul(a));
    }

    #[test]
    fn add_and_mul_associate(a in small_rational(), b in small_rational(), c in small_rational()) {
        let left = a.try_add(b).and_then(|ab| ab.try_add(c)).unwrap();
        let right = b.try_add(c).and_then(|bc| a.try_add(bc)).unwrap();
        prop_assert_eq!(left, right);

        let left = a.try_mul(b).and_then(|ab| ab.try_mul(c)).unwrap();
        let right = b.try_mul(c).and_then(|bc| a.try_mul(bc)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn additive_inverse(r in any_rational()) {
        if let Ok(neg) = r.try_neg() {
            prop_assert_eq!(r.try_add(neg), Ok(Rational::ZERO));
        }
    }

    #[test]
    fn multiplicative_inverse(r in any_rational()) {
        prop_assume!(!r.is_zero());
        if let Ok(flipped) = Rational::new(r.denominator(), r.numerator()) {
            prop_assert_eq!(r.try_mul(flipped), Ok(Rational::ONE));
        }
    }

    #[test]
    fn division_undoes_multiplication(a in small_rational(), b in small_rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.try_mul(b).and_then(|p| p.try_div(b)), Ok(a));
    }

    #[test]
    fn ordering_matches_subtraction_sign(a in small_rational(), b in small_rational()) {
        let diff = a.try_sub(b).unwrap();
        prop_assert_eq!(a.cmp(&b), diff.signum().cmp(&0));
        prop_assert_eq!(a == b, diff.is_zero());
    }

    #[test]
    fn ordering_agrees_with_floats_when_far_apart(a in small_rational(), b in small_rational()) {
        prop_assume!((a.to_f64() - b.to_f64()).abs() > 1e-6);
        prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
    }
}

#[test]
fn documented_scenarios() {
    let q = |n, d| Rational::new(n, d).unwrap();

    assert_eq!(q(1420, 452), q(355, 113));
    assert_eq!(q(1, 2).try_add(q(1, 3)), Ok(q(5, 6)));
    assert_eq!(q(1, 2).try_div(q(3, 4)), Ok(q(2, 3)));

    let seven: Rational = "7".parse().unwrap();
    assert_eq!(seven, q(7, 1));
    assert_eq!(seven.to_string(), "7/1");

    assert_eq!("3/4".parse::<Rational>(), Ok(q(3, 4)));
    assert!(q(3, 4) < q(4, 5));

    let r = q(-5, 7).try_neg().unwrap();
    assert_eq!((r.numerator(), r.denominator()), (5, 7));

    assert_eq!(q(1, 2).try_div(q(0, 5)), Err(RatError::DivisionByZero));
    assert!(matches!(Rational::new(3, 0), Err(RatError::InvalidArgument(_))));
}
