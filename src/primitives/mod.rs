//! Core compute primitives (Vector, Matrix).
//!
//! These types carry feature tables and target columns through the crate.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
