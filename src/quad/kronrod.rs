use crate::FloatScalar;

// Gauss–Kronrod 7/15 abscissae and weights on [-1, 1] (QUADPACK qk15).
// Kronrod abscissae in decreasing order; odd indices are the Gauss nodes,
// the last entry is the shared center node.

const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// Number of integrand evaluations per rule application.
pub(crate) const EVALS_PER_RULE: usize = 15;

/// Rounding floor of a segment, in units of ε times the integral of |f|.
pub(crate) const ROUNDOFF_FACTOR: f64 = 50.0;

/// One subinterval of the adaptive partition with its local estimates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<T> {
    pub a: T,
    pub b: T,
    pub value: T,
    pub error: T,
    /// Integral of |f| over the segment.
    pub res_abs: T,
    /// Error estimate is already at the rounding floor; bisecting will not help.
    pub at_roundoff: bool,
}

/// Apply the 15-point Kronrod rule on `[a, b]`.
///
/// The error estimate follows QUADPACK: the raw |K15 − G7| difference is
/// scaled against the mean absolute deviation of the integrand, and floored
/// at 50 ε times the integral of |f|.
pub(crate) fn kronrod15<T: FloatScalar>(f: &mut impl FnMut(T) -> T, a: T, b: T) -> Segment<T> {
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let eps = T::epsilon();
    let fifty_eps = T::from(ROUNDOFF_FACTOR).unwrap() * eps;

    let center = half * (a + b);
    let half_len = half * (b - a);
    let abs_half_len = half_len.abs();

    let fc = f(center);
    let mut res_gauss = fc * T::from(WG[3]).unwrap();
    let mut res_kronrod = fc * T::from(WGK[7]).unwrap();
    let mut res_abs = res_kronrod.abs();

    let mut fv1 = [T::zero(); 7];
    let mut fv2 = [T::zero(); 7];

    for (i, (&x, &w)) in XGK[..7].iter().zip(WGK[..7].iter()).enumerate() {
        let abscissa = half_len * T::from(x).unwrap();
        let f1 = f(center - abscissa);
        let f2 = f(center + abscissa);
        fv1[i] = f1;
        fv2[i] = f2;

        let wk = T::from(w).unwrap();
        res_kronrod = res_kronrod + wk * (f1 + f2);
        res_abs = res_abs + wk * (f1.abs() + f2.abs());
        if i % 2 == 1 {
            res_gauss = res_gauss + T::from(WG[i / 2]).unwrap() * (f1 + f2);
        }
    }

    let mean = res_kronrod * half;
    let mut res_asc = T::from(WGK[7]).unwrap() * (fc - mean).abs();
    for i in 0..7 {
        res_asc = res_asc
            + T::from(WGK[i]).unwrap() * ((fv1[i] - mean).abs() + (fv2[i] - mean).abs());
    }

    let value = res_kronrod * half_len;
    let res_abs = res_abs * abs_half_len;
    let res_asc = res_asc * abs_half_len;
    let mut error = ((res_kronrod - res_gauss) * half_len).abs();

    if res_asc != T::zero() && error != T::zero() {
        let scaled = (T::from(200.0).unwrap() * error / res_asc).powf(T::from(1.5).unwrap());
        error = res_asc * if scaled < one { scaled } else { one };
    }

    let floor = fifty_eps * res_abs;
    let mut at_roundoff = false;
    if res_abs > T::min_positive_value() / fifty_eps && error <= floor {
        error = floor;
        at_roundoff = true;
    }

    Segment { a, b, value, error, res_abs, at_roundoff }
}
