//! Tarifa: delivery price prediction in pure Rust.
//!
//! Tarifa fits a random forest regressor mapping four shipment features
//! (`type`, `length`, `weight`, `distance`) to a price, persists the fitted
//! model to a single binary artifact, and predicts prices for individual
//! shipments. The `tarifa` binary exposes the two operations as `train` and
//! `predict` subcommands.
//!
//! # Quick Start
//!
//! ```
//! use tarifa::prelude::*;
//! use tarifa::data::{sample_orders, FEATURE_COLUMNS, TARGET_COLUMN};
//!
//! let orders = sample_orders();
//! let x = orders.select(&FEATURE_COLUMNS).unwrap().to_matrix();
//! let y = orders.column(TARGET_COLUMN).unwrap().clone();
//!
//! let mut model = RandomForestRegressor::new(50).with_random_state(42);
//! model.fit(&x, &y).unwrap();
//!
//! let predictions = model.predict(&x);
//! assert_eq!(predictions.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: DataFrame for named columns, CSV loading, sample dataset
//! - [`tree`]: Regression tree and random forest regressor
//! - [`metrics`]: Regression metrics (R², MSE, MAE)
//! - [`error`]: Error type and Result alias
//!
//! Training is unseeded unless a random state is set, so retraining
//! produces a different forest each run; predictions from one persisted
//! artifact are deterministic.

pub mod data;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod tree;
