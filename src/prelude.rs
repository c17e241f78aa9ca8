//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use tarifa::prelude::*;
//! ```

pub use crate::data::DataFrame;
pub use crate::metrics::{mae, mse, r_squared};
pub use crate::primitives::{Matrix, Vector};
pub use crate::tree::{DecisionTreeRegressor, RandomForestRegressor};
