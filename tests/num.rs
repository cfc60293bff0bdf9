use ditfft::num::{Complex32, Complex64};

/// Acceptable tolerance for floating-point comparisons in tests.
const EPSILON: f64 = 1e-9;

#[test]
fn operator_sugar_matches_the_named_methods() {
    let a = Complex64::new(1.5, -2.0);
    let b = Complex64::new(-0.5, 4.0);
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.sub(b));
    assert_eq!(a * b, a.mul(b));
    assert_eq!(-a, Complex64::new(-1.5, 2.0));
}

#[test]
fn zero_is_the_additive_identity() {
    let a = Complex64::new(3.25, -7.5);
    assert_eq!(a + Complex64::zero(), a);
    assert_eq!(Complex64::zero() + a, a);
}

#[test]
fn magnitude_in_single_precision() {
    let c = Complex32::new(-3.0, 4.0);
    assert!((c.abs() - 5.0).abs() < 1e-6);
}

#[test]
fn expi_of_pi_is_minus_one() {
    let c = Complex64::expi(std::f64::consts::PI);
    assert!((c.re + 1.0).abs() < EPSILON);
    assert!(c.im.abs() < EPSILON);
}

#[test]
fn conjugating_twice_is_the_identity() {
    let a = Complex64::new(0.75, -1.25);
    assert_eq!(a.conj().conj(), a);
}
