//! First order Thevenin model of the cell: an open-circuit voltage source,
//! a series resistance `R0` and one `R1 || C1` polarization branch.
//!
//! State is `[SoC, V1]`, the input is the cell current (positive while
//! discharging) and the measurement is the terminal voltage.

extern crate nalgebra as na;

use crate::config::CircuitConfig;
use crate::models::{Differentiable, ObserverModel};

pub const STATE_DIM: usize = 2;
pub const MEAS_DIM: usize = 1;
pub const INPUT_DIM: usize = 1;

pub const SOC: usize = 0;
pub const V1: usize = 1;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// `(SoC, OCV [V])` breakpoints of the characterized cell. Isotonic fit of
/// the rest-voltage table against its normalized capacity.
pub static CELL_OCV: [(f64, f64); 17] = [
    (0.00, 3.0480),
    (0.02, 3.3252),
    (0.05, 3.5075),
    (0.10, 3.6130),
    (0.15, 3.6314),
    (0.20, 3.6525),
    (0.30, 3.6809),
    (0.40, 3.6981),
    (0.50, 3.7232),
    (0.60, 3.7622),
    (0.70, 3.8119),
    (0.80, 3.8679),
    (0.85, 3.9138),
    (0.90, 3.9753),
    (0.95, 4.0070),
    (0.98, 4.0402),
    (1.00, 4.1830),
];

/// Piecewise linear open-circuit voltage over SoC.
///
/// Breakpoints must be strictly increasing in SoC and at least two. Outside
/// the covered range the first and last segments are extended, which keeps
/// the slope non-zero when the estimate overshoots `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct OcvCurve {
    points: &'static [(f64, f64)],
}

impl OcvCurve {
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    fn segment(&self, soc: f64) -> (usize, f64) {
        let last = self.points.len() - 2;
        let idx = self
            .points
            .partition_point(|&(z, _)| z <= soc)
            .saturating_sub(1)
            .min(last);
        let (z_lo, v_lo) = self.points[idx];
        let (z_hi, v_hi) = self.points[idx + 1];
        (idx, (v_hi - v_lo) / (z_hi - z_lo))
    }

    pub fn voltage(&self, soc: f64) -> f64 {
        let (idx, slope) = self.segment(soc);
        let (z_lo, v_lo) = self.points[idx];
        v_lo + slope * (soc - z_lo)
    }

    /// dOCV/dSoC [V per unit SoC].
    pub fn slope(&self, soc: f64) -> f64 {
        self.segment(soc).1
    }
}

impl Default for OcvCurve {
    fn default() -> Self {
        Self::new(&CELL_OCV)
    }
}

/// Circuit values frozen for one filter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircuitParameters {
    /// Open-circuit voltage at the SoC the parameters were refreshed at [V].
    pub em: f64,
    pub r0: f64,
    pub r1: f64,
    pub c1: f64,
    pub capacity_ah: f64,
    pub ts: f64,
}

impl CircuitParameters {
    pub fn time_constant(&self) -> f64 {
        self.r1 * self.c1
    }

    /// Discrete decay of the polarization voltage over one sample.
    pub fn decay(&self) -> f64 {
        (-self.ts / self.time_constant()).exp()
    }

    /// SoC drawn per ampere over one sample.
    pub fn coulomb_gain(&self) -> f64 {
        self.ts / (self.capacity_ah * SECONDS_PER_HOUR)
    }
}

/// Maps the current SoC estimate and the pack's minimum cell voltage to the
/// circuit values used for the next cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalentCircuit {
    ocv: OcvCurve,
    config: CircuitConfig,
}

impl EquivalentCircuit {
    pub fn new(ocv: OcvCurve, config: CircuitConfig) -> Self {
        Self { ocv, config }
    }

    pub fn ocv(&self) -> &OcvCurve {
        &self.ocv
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    fn derating(&self, soc: f64, min_cell_voltage: f64) -> f64 {
        let depth = 1.0 - soc.clamp(0.0, 1.0);
        // f64::max drops a NaN voltage here
        let below_knee = (self.config.knee_voltage - min_cell_voltage).max(0.0);
        1.0 + self.config.low_soc_gain * depth * depth + self.config.knee_gain * below_knee
    }

    pub fn parameters(&self, soc: f64, min_cell_voltage: f64) -> CircuitParameters {
        let k = self.derating(soc, min_cell_voltage);
        CircuitParameters {
            em: self.ocv.voltage(soc),
            r0: self.config.r0_nominal * k,
            r1: self.config.r1_nominal * k,
            c1: self.config.c1_nominal,
            capacity_ah: self.config.capacity_ah,
            ts: self.config.sample_interval,
        }
    }

    /// Model linearized with `params` held constant.
    pub fn cell_model(&self, params: CircuitParameters) -> CellModel<'_> {
        CellModel {
            params,
            ocv: &self.ocv,
        }
    }
}

/// The cell as seen by the filter during one cycle.
#[derive(Debug, Clone, Copy)]
pub struct CellModel<'a> {
    params: CircuitParameters,
    ocv: &'a OcvCurve,
}

impl CellModel<'_> {
    pub fn params(&self) -> &CircuitParameters {
        &self.params
    }
}

impl ObserverModel<STATE_DIM, INPUT_DIM, MEAS_DIM> for CellModel<'_> {
    fn state_model(
        &self,
        x: &na::SVector<f64, STATE_DIM>,
        u: &na::SVector<f64, INPUT_DIM>,
    ) -> na::SVector<f64, STATE_DIM> {
        let current = u[0];
        let decay = self.params.decay();
        na::SVector::<f64, STATE_DIM>::new(
            x[SOC] - self.params.coulomb_gain() * current,
            x[V1] * decay + self.params.r1 * (1.0 - decay) * current,
        )
    }

    fn meas_model(
        &self,
        x: &na::SVector<f64, STATE_DIM>,
        u: &na::SVector<f64, INPUT_DIM>,
    ) -> na::SVector<f64, MEAS_DIM> {
        na::SVector::<f64, MEAS_DIM>::new(
            self.ocv.voltage(x[SOC]) - x[V1] - self.params.r0 * u[0],
        )
    }
}

impl Differentiable<STATE_DIM, INPUT_DIM, MEAS_DIM> for CellModel<'_> {
    fn state_model_dx(
        &self,
        x: &na::SVector<f64, STATE_DIM>,
        u: &na::SVector<f64, INPUT_DIM>,
    ) -> na::SMatrix<f64, STATE_DIM, STATE_DIM> {
        _ = (x, u);
        na::SMatrix::<f64, STATE_DIM, STATE_DIM>::new(1.0, 0.0, 0.0, self.params.decay())
    }

    fn meas_model_dx(
        &self,
        x: &na::SVector<f64, STATE_DIM>,
        u: &na::SVector<f64, INPUT_DIM>,
    ) -> na::SMatrix<f64, MEAS_DIM, STATE_DIM> {
        _ = u;
        na::SMatrix::<f64, MEAS_DIM, STATE_DIM>::new(self.ocv.slope(x[SOC]), -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::calibration::{CELL_CALIBRATION, NOMINAL_CAPACITY_AH};

    #[test]
    fn ocv_is_monotonic_and_continuous() {
        let ocv = OcvCurve::default();
        assert!(CELL_OCV.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
        for &(soc, voltage) in CELL_OCV.iter() {
            approx::assert_relative_eq!(ocv.voltage(soc), voltage, epsilon = 1e-12);
        }
        for i in 0..=200 {
            let soc = i as f64 / 200.0;
            assert!(ocv.slope(soc) > 0.0);
            assert!(ocv.voltage(soc + 1e-3) > ocv.voltage(soc));
        }
        approx::assert_relative_eq!(ocv.voltage(0.0), 3.048);
        approx::assert_relative_eq!(ocv.voltage(1.0), 4.183, epsilon = 1e-12);
    }

    #[test]
    fn ocv_extrapolates_end_segments() {
        let ocv = OcvCurve::default();
        approx::assert_relative_eq!(ocv.slope(1.05), ocv.slope(0.99));
        approx::assert_relative_eq!(ocv.slope(-0.05), ocv.slope(0.01));
        assert!(ocv.voltage(1.01) > 4.183);
        assert!(ocv.voltage(-0.01) < 3.048);
    }

    #[test]
    fn ocv_roughly_agrees_with_rest_voltage_table() {
        let ocv = OcvCurve::default();
        for soc in [0.2, 0.5, 0.8, 0.9] {
            let voltage = ocv.voltage(soc);
            let soc_back = CELL_CALIBRATION.soc_at(voltage, NOMINAL_CAPACITY_AH);
            assert!((soc_back - soc).abs() < 0.1, "soc {soc} came back as {soc_back}");
        }
    }

    #[test]
    fn time_constant_is_bounded_away_from_zero() {
        let circuit = EquivalentCircuit::default();
        let floor = circuit.config().r1_nominal * circuit.config().c1_nominal;
        for i in 0..=20 {
            let soc = -0.1 + 1.2 * i as f64 / 20.0;
            for min_volt in [2.5, 3.0, 3.3, 3.7, 4.2, f64::NAN] {
                let params = circuit.parameters(soc, min_volt);
                assert!(params.time_constant() >= floor);
                assert!(params.decay() > 0.0 && params.decay() < 1.0);
                assert!(params.r0 >= circuit.config().r0_nominal);
            }
        }
    }

    #[test]
    fn resistance_rises_when_empty_or_below_knee() {
        let circuit = EquivalentCircuit::default();
        let full = circuit.parameters(1.0, 4.1);
        let empty = circuit.parameters(0.0, 4.1);
        let sagging = circuit.parameters(1.0, 3.0);

        approx::assert_relative_eq!(full.r0, 0.015);
        approx::assert_relative_eq!(empty.r0, 0.030);
        approx::assert_relative_eq!(sagging.r0, 0.015 * 1.6, epsilon = 1e-12);
        approx::assert_relative_eq!(full.em, 4.183, epsilon = 1e-12);
        assert_eq!(full.c1, empty.c1);
    }

    #[test]
    fn jacobians_match_finite_differences() {
        let circuit = EquivalentCircuit::default();
        let params = circuit.parameters(0.62, 3.7);
        let model = circuit.cell_model(params);

        let x = na::SVector::<f64, 2>::new(0.62, 0.004);
        let u = na::SVector::<f64, 1>::new(1.5);
        let h = 1e-7;

        let a_mat = model.state_model_dx(&x, &u);
        let c_mat = model.meas_model_dx(&x, &u);
        for j in 0..STATE_DIM {
            let mut x_pert = x;
            x_pert[j] += h;
            let dfdx = (model.state_model(&x_pert, &u) - model.state_model(&x, &u)) / h;
            let dhdx = (model.meas_model(&x_pert, &u) - model.meas_model(&x, &u)) / h;
            approx::assert_relative_eq!(dfdx, a_mat.column(j).into_owned(), epsilon = 1e-6);
            approx::assert_relative_eq!(dhdx[0], c_mat[(0, j)], epsilon = 1e-6);
        }
    }

    #[test]
    fn process_model_counts_coulombs() {
        let circuit = EquivalentCircuit::default();
        let params = circuit.parameters(0.8, 3.9);
        let model = circuit.cell_model(params);

        let x = na::SVector::<f64, 2>::new(0.8, 0.0);
        let u = na::SVector::<f64, 1>::new(1.0);
        let x_next = model.state_model(&x, &u);

        approx::assert_relative_eq!(
            x_next[SOC],
            0.8 - 1.0 / (3600.0 * NOMINAL_CAPACITY_AH),
            epsilon = 1e-15
        );
        let decay = params.decay();
        approx::assert_relative_eq!(x_next[V1], params.r1 * (1.0 - decay), epsilon = 1e-15);

        let y = model.meas_model(&x, &u);
        approx::assert_relative_eq!(y[0], params.em - params.r0, epsilon = 1e-12);
    }
}
