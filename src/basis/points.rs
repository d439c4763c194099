//! Conversion of caller-supplied numbers into `f64` point arrays.
//!
//! The [`Points`] trait lets evaluation and fitting accept integer or float
//! data held in slices, vectors or `ndarray` arrays; everything is converted to
//! `f64` once, at the boundary.

use ndarray::{Array1, ArrayBase, ArrayD, Data, Dimension};
use num_traits::AsPrimitive;

/// Types that can be read as an array of `f64` sample points.
pub trait Points {
    /// Copy the values into an `f64` array, keeping the input's shape.
    fn to_points(&self) -> ArrayD<f64>;

    /// Copy the values into a flat vector in logical (row-major) order.
    fn to_flat_vec(&self) -> Vec<f64> {
        self.to_points().iter().copied().collect()
    }
}

impl<T> Points for [T]
where
    T: AsPrimitive<f64>,
{
    fn to_points(&self) -> ArrayD<f64> {
        Array1::from_vec(self.to_flat_vec()).into_dyn()
    }

    fn to_flat_vec(&self) -> Vec<f64> {
        self.iter().map(|v| v.as_()).collect()
    }
}

impl<T> Points for Vec<T>
where
    T: AsPrimitive<f64>,
{
    fn to_points(&self) -> ArrayD<f64> {
        self.as_slice().to_points()
    }

    fn to_flat_vec(&self) -> Vec<f64> {
        self.as_slice().to_flat_vec()
    }
}

impl<T, const N: usize> Points for [T; N]
where
    T: AsPrimitive<f64>,
{
    fn to_points(&self) -> ArrayD<f64> {
        self.as_slice().to_points()
    }
}

impl<T, S, D> Points for ArrayBase<S, D>
where
    T: AsPrimitive<f64>,
    S: Data<Elem = T>,
    D: Dimension,
{
    fn to_points(&self) -> ArrayD<f64> {
        self.mapv(|v| v.as_()).into_dyn()
    }
}
