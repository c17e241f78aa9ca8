//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A 1D vector of numeric values.
///
/// # Examples
///
/// ```
/// use tarifa::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert!((v.mean() - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from owned data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Vector<f32> {
    /// Returns the arithmetic mean, or 0.0 for an empty vector.
    #[must_use]
    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f32>() / self.data.len() as f32
    }

    /// Returns the sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let v = Vector::from_vec(vec![1.0_f32, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert!((v[0] - 1.0).abs() < 1e-6);
        assert!((v[2] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_slice() {
        let v = Vector::from_slice(&[4.0_f32, 5.0]);
        assert_eq!(v.as_slice(), &[4.0, 5.0]);
    }

    #[test]
    fn test_is_empty() {
        let v: Vector<f32> = Vector::from_vec(vec![]);
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn test_mean() {
        let v = Vector::from_slice(&[2.0_f32, 4.0, 6.0]);
        assert!((v.mean() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        let v: Vector<f32> = Vector::from_vec(vec![]);
        assert!((v.mean() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_sum() {
        let v = Vector::from_slice(&[1.5_f32, 2.5]);
        assert!((v.sum() - 4.0).abs() < 1e-6);
    }
}
