use thiserror::Error;

/// Failure of a filter cycle.
///
/// The only way a cycle can fail is a singular innovation covariance. The
/// filter state is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EkfError {
    #[error("innovation covariance is not positive definite (pivot {pivot:e} at row {row})")]
    SingularInnovation { row: usize, pivot: f64 },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid measurement noise: {0}")]
    InvalidNoise(#[from] statrs::StatsError),
}
