//! Tuning constants of the estimator.
//!
//! Everything here is plain data with defaults for the characterized cell.
//! With the `serde` feature the records can be loaded from a host-side file;
//! missing fields fall back to the defaults.

extern crate nalgebra as na;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::battery::calibration::NOMINAL_CAPACITY_AH;

/// Initial estimate and noise covariances of the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FilterConfig {
    pub initial_soc: f64,
    pub initial_v1: f64,
    pub initial_soc_variance: f64,
    pub initial_v1_variance: f64,
    pub process_noise_soc: f64,
    pub process_noise_v1: f64,
    /// Variance of the terminal voltage reading [V^2].
    pub measurement_noise: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            initial_soc: 1.0,
            initial_v1: 0.0,
            initial_soc_variance: 1e-2,
            initial_v1_variance: 1e-4,
            process_noise_soc: 1e-8,
            process_noise_v1: 1e-6,
            measurement_noise: 1e-4,
        }
    }
}

impl FilterConfig {
    pub fn initial_state(&self) -> na::SVector<f64, 2> {
        na::SVector::<f64, 2>::new(self.initial_soc, self.initial_v1)
    }

    pub fn initial_covariance(&self) -> na::SMatrix<f64, 2, 2> {
        na::SMatrix::<f64, 2, 2>::from_diagonal(&na::SVector::<f64, 2>::new(
            self.initial_soc_variance,
            self.initial_v1_variance,
        ))
    }

    pub fn process_noise(&self) -> na::SMatrix<f64, 2, 2> {
        na::SMatrix::<f64, 2, 2>::from_diagonal(&na::SVector::<f64, 2>::new(
            self.process_noise_soc,
            self.process_noise_v1,
        ))
    }

    pub fn measurement_noise(&self) -> na::SMatrix<f64, 1, 1> {
        na::SMatrix::<f64, 1, 1>::new(self.measurement_noise)
    }
}

/// Nominal circuit values and how they derate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CircuitConfig {
    pub capacity_ah: f64,
    /// Series resistance of a full, healthy cell [Ohm].
    pub r0_nominal: f64,
    pub r1_nominal: f64,
    /// Polarization capacitance [F]. Not derated, so R1*C1 never drops below
    /// `r1_nominal * c1_nominal`.
    pub c1_nominal: f64,
    /// Relative resistance increase at SoC 0, quadratic in depth of discharge.
    pub low_soc_gain: f64,
    /// Minimum cell voltage below which resistance starts to climb [V].
    pub knee_voltage: f64,
    /// Relative resistance increase per volt below `knee_voltage`.
    pub knee_gain: f64,
    /// Fixed period between two estimator cycles [s].
    pub sample_interval: f64,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            capacity_ah: NOMINAL_CAPACITY_AH,
            r0_nominal: 0.015,
            r1_nominal: 0.010,
            c1_nominal: 2000.0,
            low_soc_gain: 1.0,
            knee_voltage: 3.3,
            knee_gain: 2.0,
            sample_interval: 1.0,
        }
    }
}

/// Everything needed to build a `SocEstimator`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EstimatorConfig {
    pub filter: FilterConfig,
    pub circuit: CircuitConfig,
    /// Consecutive failed cycles before the estimator reports a fault.
    pub fault_threshold: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            circuit: CircuitConfig::default(),
            fault_threshold: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    #[test]
    fn default_matrices_are_well_formed() {
        let config = FilterConfig::default();
        assert!(matrix::is_positive_semidefinite(&config.initial_covariance(), 0.0));
        assert!(matrix::is_positive_semidefinite(&config.process_noise(), 0.0));
        assert!(config.measurement_noise()[(0, 0)] > 0.0);
        assert_eq!(config.initial_state(), na::SVector::<f64, 2>::new(1.0, 0.0));
    }

    #[test]
    fn default_time_constant_is_positive() {
        let circuit = CircuitConfig::default();
        assert!(circuit.r1_nominal * circuit.c1_nominal > circuit.sample_interval);
    }
}
