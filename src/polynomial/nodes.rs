//! Interpolation nodes and Gauss-Lobatto-Legendre weights.
//!
//! The N+1 Gauss-Lobatto-Legendre (GLL) nodes are the roots of (1-x²)P'_N(x),
//! which includes the endpoints x = ±1. Together with the Chebyshev-Lobatto
//! nodes they keep the Lebesgue constant of Lagrange interpolation small;
//! equispaced nodes are provided for comparison and for data on uniform grids.

use super::legendre::{legendre, legendre_and_derivative};
use std::f64::consts::PI;

/// Compute Gauss-Lobatto-Legendre nodes for polynomial order N.
///
/// Returns N+1 ascending nodes in [-1, 1], including the endpoints.
/// Interior nodes are found by Newton iteration from the Chebyshev-Lobatto nodes.
pub fn gauss_lobatto_nodes(order: usize) -> Vec<f64> {
    let mut nodes = chebyshev_lobatto_nodes(order);
    if order < 2 {
        return nodes;
    }

    let n = order as f64;
    for x in nodes[1..order].iter_mut() {
        for _ in 0..100 {
            let (p_n, dp_n) = legendre_and_derivative(order, *x);

            // Newton on (1-x²)P'_N(x), whose derivative reduces to -N(N+1) P_N(x)
            let update = (1.0 - *x * *x) * dp_n / (n * (n + 1.0) * p_n);
            if update.abs() < 1e-15 {
                break;
            }
            *x += update;
        }
    }

    nodes
}

/// Compute Gauss-Lobatto-Legendre weights.
///
/// The weights are: w_j = 2 / (N(N+1) [P_N(x_j)]²)
pub fn gauss_lobatto_weights(order: usize, nodes: &[f64]) -> Vec<f64> {
    if order == 0 {
        return vec![2.0];
    }

    let denom = (order * (order + 1)) as f64;
    nodes
        .iter()
        .map(|&x| {
            let p_n = legendre(order, x);
            2.0 / (denom * p_n * p_n)
        })
        .collect()
}

/// Chebyshev-Gauss-Lobatto nodes x_j = -cos(π j / N), j = 0..=N, ascending.
///
/// These are the extrema of T_N on [-1, 1].
pub fn chebyshev_lobatto_nodes(order: usize) -> Vec<f64> {
    if order == 0 {
        return vec![0.0];
    }

    let n = order as f64;
    let mut nodes: Vec<f64> = (0..=order).map(|j| -(PI * j as f64 / n).cos()).collect();

    // Pin the endpoints and the midpoint against cos round-off
    nodes[0] = -1.0;
    nodes[order] = 1.0;
    if order % 2 == 0 {
        nodes[order / 2] = 0.0;
    }

    nodes
}

/// Equispaced nodes on [a, b]: a + (b - a) j / N, j = 0..=N.
///
/// For order 0 the midpoint of the interval is returned.
pub fn equispaced_nodes(order: usize, a: f64, b: f64) -> Vec<f64> {
    if order == 0 {
        return vec![0.5 * (a + b)];
    }

    let h = (b - a) / order as f64;
    let mut nodes: Vec<f64> = (0..=order).map(|j| a + h * j as f64).collect();
    nodes[order] = b;
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ascending, pinned endpoints, mirror-symmetric about 0.
    fn assert_lobatto_layout(nodes: &[f64]) {
        let n = nodes.len();
        assert_eq!(nodes[0], -1.0);
        assert_eq!(nodes[n - 1], 1.0);
        for (i, w) in nodes.windows(2).enumerate() {
            assert!(w[0] < w[1], "Nodes {} and {} out of order", i, i + 1);
        }
        for i in 0..n / 2 {
            assert!((nodes[i] + nodes[n - 1 - i]).abs() < 1e-14);
        }
    }

    #[test]
    fn test_gll_layout() {
        assert_eq!(gauss_lobatto_nodes(0), vec![0.0]);
        for order in 1..=8 {
            let nodes = gauss_lobatto_nodes(order);
            assert_eq!(nodes.len(), order + 1);
            assert_lobatto_layout(&nodes);
        }
    }

    #[test]
    fn test_gll_interior_nodes_are_roots_of_derivative() {
        for order in 2..=8 {
            let nodes = gauss_lobatto_nodes(order);
            for (j, &x) in nodes[1..order].iter().enumerate() {
                let (_, dp) = legendre_and_derivative(order, x);
                assert!(dp.abs() < 1e-12, "P'_{}(x_{}) = {}", order, j + 1, dp);
            }
        }
    }

    #[test]
    fn test_gll_quadrature() {
        for order in 1..=6 {
            let nodes = gauss_lobatto_nodes(order);
            let weights = gauss_lobatto_weights(order, &nodes);

            let total: f64 = weights.iter().sum();
            assert!((total - 2.0).abs() < 1e-14);

            // Exact for x^k, k <= 2N - 1
            for k in 0..2 * order {
                let exact = if k % 2 == 0 { 2.0 / (k + 1) as f64 } else { 0.0 };
                let quad: f64 = nodes
                    .iter()
                    .zip(&weights)
                    .map(|(x, w)| w * x.powi(k as i32))
                    .sum();
                assert!(
                    (quad - exact).abs() < 1e-12,
                    "order {}, x^{}: {} vs {}",
                    order,
                    k,
                    quad,
                    exact
                );
            }
        }
    }

    #[test]
    fn test_gll_order_two() {
        let nodes = gauss_lobatto_nodes(2);
        assert!(nodes[1].abs() < 1e-14);

        let weights = gauss_lobatto_weights(2, &nodes);
        for (w, expected) in weights.iter().zip([1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0]) {
            assert!((w - expected).abs() < 1e-14);
        }
    }

    #[test]
    fn test_chebyshev_lobatto_nodes() {
        assert_eq!(chebyshev_lobatto_nodes(0), vec![0.0]);
        for order in 1..=8 {
            assert_lobatto_layout(&chebyshev_lobatto_nodes(order));
        }

        let nodes = chebyshev_lobatto_nodes(4);
        assert_eq!(nodes[2], 0.0);
        assert!((nodes[1] + 0.5_f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn test_equispaced_nodes() {
        let nodes = equispaced_nodes(4, 0.0, 2.0);
        for (a, b) in nodes.iter().zip([0.0, 0.5, 1.0, 1.5, 2.0]) {
            assert!((a - b).abs() < 1e-15);
        }
        assert_eq!(equispaced_nodes(0, -1.0, 3.0), vec![1.0]);
    }
}
