//! Synthetic cell for exercising the estimator off target.
//!
//! Runs the true state through the same equivalent circuit the filter uses,
//! with parameters refreshed at the true SoC, and reads the terminal voltage
//! with Gaussian noise.

extern crate nalgebra as na;

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;

use crate::battery::circuit::{EquivalentCircuit, INPUT_DIM, SOC, STATE_DIM, V1};
use crate::error::SimulationError;
use crate::models::ObserverModel;

/// One reading of the simulated cell and the state it was taken at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub terminal_voltage: f64,
    pub soc: f64,
    pub v1: f64,
}

#[derive(Debug)]
pub struct CellSimulator {
    circuit: EquivalentCircuit,
    x: na::SVector<f64, STATE_DIM>,
    noise: Option<Normal>,
    rng: StdRng,
}

impl CellSimulator {
    /// `voltage_noise_std` of zero gives exact readings.
    pub fn new(
        circuit: EquivalentCircuit,
        soc: f64,
        v1: f64,
        voltage_noise_std: f64,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        let noise = if voltage_noise_std == 0.0 {
            None
        } else {
            Some(Normal::new(0.0, voltage_noise_std)?)
        };
        Ok(Self {
            circuit,
            x: na::SVector::<f64, STATE_DIM>::new(soc, v1),
            noise,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn state(&self) -> na::SVector<f64, STATE_DIM> {
        self.x
    }

    /// Advance one sample interval under `current` and read the terminal voltage.
    pub fn step(&mut self, current: f64, min_cell_voltage: f64) -> CellSample {
        let u = na::SVector::<f64, INPUT_DIM>::new(current);

        let params = self.circuit.parameters(self.x[SOC], min_cell_voltage);
        let model = self.circuit.cell_model(params);
        self.x = model.state_model(&self.x, &u);

        let noise = match &self.noise {
            Some(normal) => normal.sample(&mut self.rng),
            None => 0.0,
        };
        CellSample {
            terminal_voltage: model.meas_model(&self.x, &u)[0] + noise,
            soc: self.x[SOC],
            v1: self.x[V1],
        }
    }
}

#[cfg(test)]
mod tests {
    use statrs::statistics::Statistics;

    use super::*;
    use crate::battery::calibration::NOMINAL_CAPACITY_AH;

    #[test]
    fn noise_free_discharge_follows_coulomb_counting() {
        let circuit = EquivalentCircuit::default();
        let mut cell = CellSimulator::new(circuit, 1.0, 0.0, 0.0, 0).unwrap();

        let mut sample = cell.step(1.0, 4.0);
        for _ in 1..3600 {
            sample = cell.step(1.0, 4.0);
        }

        approx::assert_relative_eq!(sample.soc, 1.0 - 1.0 / NOMINAL_CAPACITY_AH, epsilon = 1e-9);

        // Settled polarization: V1 -> R1 * I
        let params = circuit.parameters(sample.soc, 4.0);
        approx::assert_relative_eq!(sample.v1, params.r1, epsilon = 1e-5);
        approx::assert_relative_eq!(
            sample.terminal_voltage,
            circuit.ocv().voltage(sample.soc) - sample.v1 - params.r0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn noise_has_requested_spread() {
        let circuit = EquivalentCircuit::default();
        let mut noisy = CellSimulator::new(circuit, 0.5, 0.0, 2e-3, 11).unwrap();
        let mut exact = CellSimulator::new(circuit, 0.5, 0.0, 0.0, 11).unwrap();

        let n = 5000;
        let errors: Vec<f64> = (0..n)
            .map(|_| noisy.step(0.0, 3.7).terminal_voltage - exact.step(0.0, 3.7).terminal_voltage)
            .collect();
        let mean = errors.iter().mean();
        let std = errors.iter().population_std_dev();

        assert!(mean.abs() < 2e-4);
        assert!((std - 2e-3).abs() < 2e-4);
    }

    #[test]
    fn rejects_negative_noise() {
        let result = CellSimulator::new(EquivalentCircuit::default(), 0.5, 0.0, -1.0, 0);
        assert!(matches!(result, Err(SimulationError::InvalidNoise(_))));
    }
}
