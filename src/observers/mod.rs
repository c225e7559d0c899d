pub mod extended_kalman_filter;

pub use extended_kalman_filter::{ExtendedKalmanFilter, GaussianEstimate};
