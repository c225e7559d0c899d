//! State of Charge estimation for a single battery cell.
//!
//! An extended Kalman filter tracks `[SoC, V1]` of a first order equivalent
//! circuit from the cell current and its terminal voltage. The filter core
//! (`observers`, `models`, `matrix`) is generic over fixed state and
//! measurement dimensions; `battery` instantiates it for the characterized
//! cell.
//!
//! ```
//! use soc_ekf::battery::SocEstimator;
//! use soc_ekf::config::EstimatorConfig;
//!
//! let mut estimator = SocEstimator::seeded(EstimatorConfig::default(), 3.9);
//! // current [A], minimum cell voltage [V], terminal voltage [V]
//! if estimator.step(1.0, 3.88, 3.875).is_ok() {
//!     let soc = estimator.output().soc_estimate;
//!     assert!(soc > 0.0 && soc < 1.0);
//! }
//! ```

extern crate nalgebra as na;

pub mod battery;
pub mod config;
pub mod error;
pub mod matrix;
pub mod models;
pub mod observers;
pub mod sim;

pub use battery::{EstimatorOutput, FilterState, SocEstimator};
pub use error::{EkfError, SimulationError};
pub use observers::ExtendedKalmanFilter;
