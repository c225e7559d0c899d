//! Per-cycle entry point of the SoC estimator.
//!
//! Each cycle refreshes the circuit parameters from the current SoC
//! estimate, runs one EKF predict/update on the cell model and publishes the
//! result. Must be called at the fixed interval the circuit is configured
//! with; the discrete model is only valid at that cadence.

extern crate nalgebra as na;

use debug_print::{debug_eprintln, debug_println};

use super::calibration::{CalibrationTable, CELL_CALIBRATION};
use super::circuit::{
    CellModel, CircuitParameters, EquivalentCircuit, OcvCurve, INPUT_DIM, MEAS_DIM, SOC,
    STATE_DIM, V1,
};
use super::health::{EstimatorHealth, FaultMonitor};
use crate::config::{EstimatorConfig, FilterConfig};
use crate::error::EkfError;
use crate::models::ObserverModel;
use crate::observers::ExtendedKalmanFilter;

/// Persistent filter of one cell: `[SoC, V1]`, P, Q and R.
pub type FilterState = ExtendedKalmanFilter<STATE_DIM, MEAS_DIM>;

/// Values published after each successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EstimatorOutput {
    /// Circuit values of the cycle that produced this estimate.
    pub params: CircuitParameters,
    pub cell_voltage_estimate: f64,
    pub v1_estimate: f64,
    pub soc_estimate: f64,
}

impl EstimatorOutput {
    fn publish(
        model: &CellModel<'_>,
        x: &na::SVector<f64, STATE_DIM>,
        u: &na::SVector<f64, INPUT_DIM>,
    ) -> Self {
        Self {
            params: *model.params(),
            cell_voltage_estimate: model.meas_model(x, u)[0],
            v1_estimate: x[V1],
            soc_estimate: x[SOC],
        }
    }

    /// Output of a cell at rest in state `x`.
    pub fn at_rest(circuit: &EquivalentCircuit, x: &na::SVector<f64, STATE_DIM>) -> Self {
        let soc = x[SOC];
        let params = circuit.parameters(soc, circuit.ocv().voltage(soc));
        Self::publish(
            &circuit.cell_model(params),
            x,
            &na::SVector::<f64, INPUT_DIM>::zeros(),
        )
    }

    /// The SoC estimate limited to `[0, 1]`. The filter itself never clamps.
    pub fn soc_clamped(&self) -> f64 {
        self.soc_estimate.clamp(0.0, 1.0)
    }
}

/// Filter at its configured defaults.
pub fn init_filter(config: &FilterConfig) -> FilterState {
    FilterState::new(
        config.initial_state(),
        config.initial_covariance(),
        config.process_noise(),
        config.measurement_noise(),
    )
}

/// Filter at its configured defaults with SoC read from a rest voltage.
pub fn init_filter_at_rest_voltage(
    config: &FilterConfig,
    calibration: &CalibrationTable,
    nominal_capacity_ah: f64,
    rest_voltage: f64,
) -> FilterState {
    let soc = calibration.soc_at(rest_voltage, nominal_capacity_ah);
    debug_println!("soc estimator: seeded SoC {soc:.4} from rest voltage {rest_voltage:.3} V");
    init_filter(&FilterConfig {
        initial_soc: soc,
        ..*config
    })
}

/// Run one estimator cycle.
///
/// `current` is positive while discharging, `z` holds the measured terminal
/// voltage. On error neither `filter` nor `output` is modified and the
/// caller keeps the previous estimate.
pub fn soc_update_step(
    filter: &mut FilterState,
    output: &mut EstimatorOutput,
    circuit: &EquivalentCircuit,
    current: f64,
    min_cell_voltage: f64,
    z: &na::SVector<f64, MEAS_DIM>,
) -> Result<(), EkfError> {
    let soc = filter.get_estimate()[SOC];
    let params = circuit.parameters(soc, min_cell_voltage);
    let model = circuit.cell_model(params);
    let u = na::SVector::<f64, INPUT_DIM>::new(current);

    if let Err(err) = filter.update(&model, &u, z) {
        debug_eprintln!("soc estimator: cycle skipped, {err}");
        return Err(err);
    }

    *output = EstimatorOutput::publish(&model, &filter.get_estimate(), &u);
    Ok(())
}

/// One cell's estimator: filter, published output and fault bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct SocEstimator {
    config: EstimatorConfig,
    circuit: EquivalentCircuit,
    calibration: &'static CalibrationTable,
    filter: FilterState,
    output: EstimatorOutput,
    monitor: FaultMonitor,
}

impl SocEstimator {
    /// Estimator for the characterized cell, starting from the configured state.
    pub fn new(config: EstimatorConfig) -> Self {
        let circuit = EquivalentCircuit::new(OcvCurve::default(), config.circuit);
        Self::with_circuit(config, circuit, &CELL_CALIBRATION)
    }

    pub fn with_circuit(
        config: EstimatorConfig,
        circuit: EquivalentCircuit,
        calibration: &'static CalibrationTable,
    ) -> Self {
        let filter = init_filter(&config.filter);
        let output = EstimatorOutput::at_rest(&circuit, &filter.get_estimate());
        Self {
            config,
            circuit,
            calibration,
            filter,
            output,
            monitor: FaultMonitor::new(config.fault_threshold),
        }
    }

    /// Estimator for the characterized cell, SoC seeded from a rest voltage.
    pub fn seeded(config: EstimatorConfig, rest_voltage: f64) -> Self {
        let mut estimator = Self::new(config);
        estimator.resync(rest_voltage);
        estimator
    }

    /// Re-seed SoC from a rest voltage and restart V1 and P from their defaults.
    pub fn resync(&mut self, rest_voltage: f64) {
        self.filter = init_filter_at_rest_voltage(
            &self.config.filter,
            self.calibration,
            self.calibration.nominal_capacity(),
            rest_voltage,
        );
        self.output = EstimatorOutput::at_rest(&self.circuit, &self.filter.get_estimate());
        self.monitor.reset();
    }

    /// Run one cycle with the measured current, minimum cell voltage and
    /// terminal voltage of the estimated cell.
    pub fn step(
        &mut self,
        current: f64,
        min_cell_voltage: f64,
        terminal_voltage: f64,
    ) -> Result<(), EkfError> {
        let z = na::SVector::<f64, MEAS_DIM>::new(terminal_voltage);
        let result = soc_update_step(
            &mut self.filter,
            &mut self.output,
            &self.circuit,
            current,
            min_cell_voltage,
            &z,
        );
        let health = self.monitor.record(&result);
        if matches!(health, EstimatorHealth::Faulted { .. }) {
            debug_eprintln!("soc estimator: {health:?}");
        }
        result
    }

    pub fn output(&self) -> &EstimatorOutput {
        &self.output
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn circuit(&self) -> &EquivalentCircuit {
        &self.circuit
    }

    pub fn health(&self) -> EstimatorHealth {
        self.monitor.health()
    }

    pub fn total_failures(&self) -> u64 {
        self.monitor.total_failures()
    }
}
