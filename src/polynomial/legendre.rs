//! Legendre polynomials P_n on [-1, 1].
//!
//! Orthogonal with unit weight, ∫ P_m P_n dx = 2/(2n+1) δ_{mn}, and generated
//! by Bonnet's recurrence
//!
//! ```text
//! (k+1) P_{k+1}(x) = (2k+1) x P_k(x) - k P_{k-1}(x),    P_0 = 1, P_1 = x
//! ```

/// P_n(x).
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_pair(n, x).1
}

/// sqrt((2n+1)/2), the factor that makes P_n unit-norm in L2([-1, 1]).
#[inline]
pub fn legendre_norm(n: usize) -> f64 {
    ((2 * n + 1) as f64 / 2.0).sqrt()
}

/// (P_n(x), P'_n(x)) from a single pass of the recurrence.
///
/// The derivative comes from (x² - 1) P'_n = n (x P_n - P_{n-1}); at x = ±1,
/// where that identity degenerates, P'_n(±1) = (±1)^{n+1} n(n+1)/2.
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let (p_prev, p_n) = legendre_pair(n, x);
    if n == 0 {
        return (p_n, 0.0);
    }

    let nf = n as f64;
    let one_minus_x2 = 1.0 - x * x;
    let dp_n = if one_minus_x2.abs() < 2e-14 {
        let endpoint = nf * (nf + 1.0) / 2.0;
        if x > 0.0 || n % 2 == 1 {
            endpoint
        } else {
            -endpoint
        }
    } else {
        nf * (p_prev - x * p_n) / one_minus_x2
    };

    (p_n, dp_n)
}

/// (P_{n-1}(x), P_n(x)), with P_{-1} = 0.
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    (0..n).fold((0.0, 1.0), |(p_prev, p_curr), k| {
        let k = k as f64;
        let p_next = ((2.0 * k + 1.0) * x * p_curr - k * p_prev) / (k + 1.0);
        (p_curr, p_next)
    })
}
