use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// =====================================================================
// gamma / lgamma
// =====================================================================

#[test]
fn gamma_positive_integers() {
    // Γ(n) = (n-1)!
    approx_eq(gamma(1.0_f64), 1.0, 1e-13);
    approx_eq(gamma(3.0), 2.0, 1e-13);
    approx_eq(gamma(5.0), 24.0, 1e-11);
    approx_eq(gamma(10.0), 362880.0, 1e-6);
}

#[test]
fn gamma_half_integers() {
    let sqrt_pi = core::f64::consts::PI.sqrt();
    approx_eq(gamma(0.5), sqrt_pi, 1e-13);
    approx_eq(gamma(1.5), sqrt_pi / 2.0, 1e-13);
    approx_eq(gamma(-0.5), -2.0 * sqrt_pi, 1e-12);
    approx_eq(gamma(-1.5), 4.0 * sqrt_pi / 3.0, 1e-12);
    // Γ(−2.5) = −8√π/15
    approx_eq(gamma(-2.5), -8.0 * sqrt_pi / 15.0, 1e-12);
}

#[test]
fn gamma_poles_and_nan() {
    assert!(gamma(0.0_f64).is_infinite());
    assert!(gamma(-3.0_f64).is_infinite());
    assert!(lgamma(-1.0_f64).is_infinite());
    assert!(gamma(f64::NAN).is_nan());
    assert!(lgamma(f64::NAN).is_nan());
}

#[test]
fn gamma_sign_alternates_between_poles() {
    assert_eq!(gamma_sign(2.5_f64), 1.0);
    assert_eq!(gamma_sign(-0.5_f64), -1.0);
    assert_eq!(gamma_sign(-1.5_f64), 1.0);
    assert_eq!(gamma_sign(-2.5_f64), -1.0);
    assert_eq!(gamma_sign(-3.7_f64), 1.0);
}

#[test]
fn lgamma_large_no_overflow() {
    let val = lgamma(100.0_f64);
    assert!(val.is_finite());
    approx_eq(val, 359.1342053695754, 1e-8);
}

#[test]
fn gamma_recurrence_identity() {
    // x·Γ(x) = Γ(x+1), including negative non-integers
    for &x in &[0.3, 1.7, 3.14, -0.7, -2.2] {
        let lhs = x * gamma(x);
        let rhs = gamma(x + 1.0);
        approx_eq(lhs, rhs, 1e-11 * rhs.abs().max(1.0));
    }
}

#[test]
fn gamma_f32() {
    assert!((gamma(5.0_f32) - 24.0).abs() < 1e-3);
    assert!((gamma(0.5_f32) - core::f32::consts::PI.sqrt()).abs() < 1e-5);
}

// =====================================================================
// hyp2f1
// =====================================================================

#[test]
fn hyp2f1_at_zero_is_one() {
    approx_eq(hyp2f1(0.5_f64, 1.5, 2.0, 0.0).unwrap(), 1.0, f64::EPSILON);
    approx_eq(hyp2f1(0.0_f64, 1.5, 2.0, 0.7).unwrap(), 1.0, f64::EPSILON);
}

#[test]
fn hyp2f1_log_identity() {
    // ln(1 + z) = z · ₂F₁(1, 1; 2; −z)
    for &z in &[0.1_f64, 0.45, 0.9] {
        let f = hyp2f1(1.0, 1.0, 2.0, -z).unwrap();
        approx_eq(z * f, (1.0 + z).ln(), 1e-13);
    }
}

#[test]
fn hyp2f1_binomial_identity() {
    // ₂F₁(a, b; b; z) = (1 − z)^{−a}
    for &z in &[-0.8_f64, -0.3, 0.2, 0.6, 0.95] {
        let f = hyp2f1(1.5, 3.0, 3.0, z).unwrap();
        let expected = (1.0 - z).powf(-1.5);
        approx_eq(f, expected, 1e-11 * expected);
    }
}

#[test]
fn hyp2f1_arcsin_identity() {
    // arcsin(x)/x = ₂F₁(1/2, 1/2; 3/2; x²)
    for &x in &[0.1_f64, 0.5, 0.8, 0.99] {
        let f = hyp2f1(0.5, 0.5, 1.5, x * x).unwrap();
        approx_eq(f, x.asin() / x, 1e-12);
    }
}

#[test]
fn hyp2f1_pfaff_branch_matches_series() {
    // arctan(x)/x = ₂F₁(1/2, 1; 3/2; −x²); x = 2 forces the Pfaff transformation
    // even though the direct series would diverge.
    for &x in &[0.5_f64, 0.9, 2.0, 5.0] {
        let f = hyp2f1(0.5, 1.0, 1.5, -x * x).unwrap();
        approx_eq(f, x.atan() / x, 1e-12);
    }
}

#[test]
fn hyp2f1_terminating_polynomial() {
    // ₂F₁(−2, b; c; z) = 1 − 2bz/c + b(b+1)z²/(c(c+1))
    let (b, c, z) = (1.5_f64, 2.5_f64, 3.0_f64);
    let expected = 1.0 - 2.0 * b * z / c + b * (b + 1.0) * z * z / (c * (c + 1.0));
    approx_eq(hyp2f1(-2.0, b, c, z).unwrap(), expected, 1e-12);
    // Symmetric in a and b
    approx_eq(hyp2f1(b, -2.0, c, z).unwrap(), expected, 1e-12);
    // Terminates before the denominator pole: c = −3, a = −2
    let f = hyp2f1(-2.0_f64, 1.0, -3.0, 0.5).unwrap();
    approx_eq(f, 1.0 + 2.0 * 0.5 / 3.0 + 2.0 * 0.25 / 6.0, 1e-14);
}

#[test]
fn hyp2f1_gauss_summation() {
    // ₂F₁(a, b; c; 1) = Γ(c)Γ(c−a−b)/(Γ(c−a)Γ(c−b))
    let (a, b, c) = (0.25_f64, 0.5, 2.0);
    let expected = gamma(c) * gamma(c - a - b) / (gamma(c - a) * gamma(c - b));
    approx_eq(hyp2f1(a, b, c, 1.0).unwrap(), expected, 1e-12);

    // Laplace kernel with s = 1/4, j = 0 at α = 1: c − a − b = 1/2
    let f = hyp2f1(0.25_f64, 0.25, 1.0, 1.0).unwrap();
    let expected = gamma(0.5) / (gamma(0.75) * gamma(0.75));
    approx_eq(f, expected, 1e-12);
}

#[test]
fn hyp2f1_domain_errors() {
    // Divergent at z = 1 when c − a − b ≤ 0
    assert_eq!(hyp2f1(0.5_f64, 0.5, 1.0, 1.0), Err(SpecialError::DomainError));
    // Outside the unit disk on the positive axis
    assert_eq!(hyp2f1(0.5_f64, 0.5, 1.0, 1.5), Err(SpecialError::DomainError));
    // Pole in c
    assert_eq!(hyp2f1(0.5_f64, 0.5, -2.0, 0.3), Err(SpecialError::DomainError));
    // NaN
    assert_eq!(hyp2f1(f64::NAN, 0.5, 1.0, 0.3), Err(SpecialError::DomainError));
}

#[test]
fn hyp2f1_f32() {
    let f = hyp2f1(0.5_f32, 0.5, 1.5, 0.25).unwrap();
    assert!((f - 0.5_f32.asin() / 0.5).abs() < 1e-6);
}

#[test]
fn special_error_display() {
    assert_eq!(
        format!("{}", SpecialError::ConvergenceFailure),
        "series did not converge"
    );
    assert_eq!(
        format!("{}", SpecialError::DomainError),
        "input outside function domain"
    );
}
