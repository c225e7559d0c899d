//! The cell-specific half of the estimator: rest-voltage calibration, the
//! equivalent circuit and the per-cycle orchestration around the filter.

pub mod calibration;
mod calibration_data;
pub mod circuit;
pub mod estimator;
pub mod health;

pub use calibration::{CalibrationTable, CELL_CALIBRATION, NOMINAL_CAPACITY_AH};
pub use circuit::{CellModel, CircuitParameters, EquivalentCircuit, OcvCurve};
pub use estimator::{
    init_filter, init_filter_at_rest_voltage, soc_update_step, EstimatorOutput, FilterState,
    SocEstimator,
};
pub use health::{EstimatorHealth, FaultMonitor};
