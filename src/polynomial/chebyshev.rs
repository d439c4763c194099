//! Chebyshev polynomials of the first kind.
//!
//! T_n(x) are orthogonal on [-1, 1] with weight 1/sqrt(1 - x^2) and satisfy
//! T_n(cos θ) = cos(nθ), so |T_n(x)| <= 1 on the interval.

/// Evaluate Chebyshev polynomial T_n(x) using three-term recurrence.
///
/// T_0(x) = 1
/// T_1(x) = x
/// T_{n+1}(x) = 2x T_n(x) - T_{n-1}(x)
pub fn chebyshev(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }

    let mut t_prev = 1.0;
    let mut t_curr = x;

    for _ in 1..n {
        let t_next = 2.0 * x * t_curr - t_prev;
        t_prev = t_curr;
        t_curr = t_next;
    }

    t_curr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_values() {
        let x = 0.4;
        assert!((chebyshev(0, x) - 1.0).abs() < 1e-14);
        assert!((chebyshev(1, x) - x).abs() < 1e-14);
        // T_2 = 2x^2 - 1
        assert!((chebyshev(2, x) - (2.0 * x * x - 1.0)).abs() < 1e-14);
        // T_3 = 4x^3 - 3x
        assert!((chebyshev(3, x) - (4.0 * x * x * x - 3.0 * x)).abs() < 1e-14);
    }

    #[test]
    fn test_chebyshev_cosine_identity() {
        for n in 0..=8 {
            for &theta in &[0.0, 0.3, 1.1, 2.5, std::f64::consts::PI] {
                let expected = (n as f64 * theta).cos();
                assert!(
                    (chebyshev(n, theta.cos()) - expected).abs() < 1e-12,
                    "T_{}(cos {}) should equal cos({}*{})",
                    n,
                    theta,
                    n,
                    theta
                );
            }
        }
    }

    #[test]
    fn test_chebyshev_at_boundaries() {
        for n in 0..=6 {
            assert!((chebyshev(n, 1.0) - 1.0).abs() < 1e-14);
            let expected = if n % 2 == 0 { 1.0 } else { -1.0 };
            assert!((chebyshev(n, -1.0) - expected).abs() < 1e-14);
        }
    }
}
