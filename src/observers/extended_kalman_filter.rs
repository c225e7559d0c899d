extern crate nalgebra as na;

use crate::error::EkfError;
use crate::matrix;
use crate::models::{Differentiable, ObserverModel};

/// Mean and covariance of the state at one point of a cycle.
#[allow(non_snake_case)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianEstimate<const NX: usize> {
    pub x_est: na::SVector<f64, NX>,
    pub P: na::SMatrix<f64, NX, NX>,
}

/// Extended Kalman filter with fixed state and measurement dimensions.
///
/// Holds the persistent part of the filter: the estimate, its covariance and
/// the two noise covariances. Jacobians, gain and intermediate products only
/// live for the duration of one `update` call.
///
/// One cycle is `predict` followed by `correct`. `update` runs both and
/// commits the result only when the correction succeeds, so a singular
/// innovation covariance leaves the filter exactly as it was.
#[allow(non_snake_case)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExtendedKalmanFilter<const NX: usize, const NY: usize> {
    x_est: na::SVector<f64, NX>,
    P: na::SMatrix<f64, NX, NX>,
    Q: na::SMatrix<f64, NX, NX>,
    R: na::SMatrix<f64, NY, NY>,
}

#[allow(non_snake_case)]
impl<const NX: usize, const NY: usize> ExtendedKalmanFilter<NX, NY> {
    pub fn new(
        x_est_init: na::SVector<f64, NX>,
        P_init: na::SMatrix<f64, NX, NX>,
        Q: na::SMatrix<f64, NX, NX>,
        R: na::SMatrix<f64, NY, NY>,
    ) -> Self {
        Self {
            x_est: x_est_init,
            P: P_init,
            Q,
            R,
        }
    }

    pub fn get_estimate(&self) -> na::SVector<f64, NX> {
        self.x_est
    }

    pub fn get_covariance(&self) -> &na::SMatrix<f64, NX, NX> {
        &self.P
    }

    pub fn process_noise(&self) -> &na::SMatrix<f64, NX, NX> {
        &self.Q
    }

    pub fn measurement_noise(&self) -> &na::SMatrix<f64, NY, NY> {
        &self.R
    }

    /// Overwrite estimate and covariance, e.g. after reseeding from a rest voltage.
    pub fn reset(&mut self, x_est: na::SVector<f64, NX>, P: na::SMatrix<f64, NX, NX>) {
        self.x_est = x_est;
        self.P = P;
    }

    /// Priori step: propagate the estimate through the process model.
    pub fn predict<T, const NU: usize>(
        &self,
        model: &T,
        u: &na::SVector<f64, NU>,
    ) -> GaussianEstimate<NX>
    where
        T: ObserverModel<NX, NU, NY> + Differentiable<NX, NU, NY>,
    {
        let a_mat = model.state_model_dx(&self.x_est, u);

        let x_est_p = model.state_model(&self.x_est, u);
        let P_p = a_mat * self.P * a_mat.transpose() + self.Q;

        GaussianEstimate {
            x_est: x_est_p,
            P: P_p,
        }
    }

    /// Measurement step on top of `prior`. Does not touch `self`.
    pub fn correct<T, const NU: usize>(
        &self,
        model: &T,
        prior: &GaussianEstimate<NX>,
        u: &na::SVector<f64, NU>,
        y: &na::SVector<f64, NY>,
    ) -> Result<GaussianEstimate<NX>, EkfError>
    where
        T: ObserverModel<NX, NU, NY> + Differentiable<NX, NU, NY>,
    {
        let c_mat = model.meas_model_dx(&prior.x_est, u);

        let S = c_mat * prior.P * c_mat.transpose() + self.R;
        let S_inv = matrix::inverse_positive_definite(&S)?;
        let K = prior.P * c_mat.transpose() * S_inv;

        let y_pred = model.meas_model(&prior.x_est, u);
        let x_est_m = prior.x_est + K * (y - y_pred);

        // Joseph form, equal to (I - K*C)*P_p for the optimal gain
        let i_kc = na::SMatrix::<f64, NX, NX>::identity() - K * c_mat;
        let P_m = i_kc * prior.P * i_kc.transpose() + K * self.R * K.transpose();

        Ok(GaussianEstimate {
            x_est: x_est_m,
            P: matrix::symmetrize(&P_m),
        })
    }

    /// Run one predict/update cycle.
    pub fn update<T, const NU: usize>(
        &mut self,
        model: &T,
        u: &na::SVector<f64, NU>,
        y: &na::SVector<f64, NY>,
    ) -> Result<(), EkfError>
    where
        T: ObserverModel<NX, NU, NY> + Differentiable<NX, NU, NY>,
    {
        let prior = self.predict(model, u);
        let posterior = self.correct(model, &prior, u, y)?;

        self.x_est = posterior.x_est;
        self.P = posterior.P;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::models::LinearSystem;

    fn constant_velocity(dt: f64) -> LinearSystem<2, 1, 1> {
        LinearSystem::new(
            na::SMatrix::<f64, 2, 2>::new(1.0, dt, 0.0, 1.0),
            na::SMatrix::<f64, 2, 1>::new(0.5 * dt * dt, dt),
            na::SMatrix::<f64, 1, 2>::new(1.0, 0.0),
            na::SMatrix::<f64, 1, 1>::zeros(),
        )
    }

    #[test]
    fn noise_free_linear_model_converges() {
        let model = constant_velocity(0.1);
        let mut ekf = ExtendedKalmanFilter::new(
            na::SVector::<f64, 2>::zeros(),
            na::SMatrix::<f64, 2, 2>::identity(),
            na::SMatrix::<f64, 2, 2>::zeros(),
            na::SMatrix::<f64, 1, 1>::zeros(),
        );

        let u = na::SVector::<f64, 1>::new(0.3);
        let mut x = na::SVector::<f64, 2>::new(1.0, -2.0);
        for _ in 0..2 {
            x = model.state_model(&x, &u);
            let y = model.meas_model(&x, &u);
            ekf.update(&model, &u, &y).unwrap();
        }
        approx::assert_relative_eq!(ekf.get_estimate(), x, epsilon = 1e-9);

        // Nothing uncertain is left, so the next gain has nothing to invert
        let before = ekf;
        x = model.state_model(&x, &u);
        let y = model.meas_model(&x, &u);
        assert!(ekf.update(&model, &u, &y).is_err());
        assert_eq!(ekf, before, "Failed cycle must not modify the filter");
    }

    #[test]
    fn scalar_filter_matches_closed_form() {
        let model = LinearSystem::new(
            na::SMatrix::<f64, 1, 1>::new(0.9),
            na::SMatrix::<f64, 1, 1>::new(1.0),
            na::SMatrix::<f64, 1, 1>::new(1.0),
            na::SMatrix::<f64, 1, 1>::new(0.0),
        );
        let (q, r) = (0.1, 0.1);
        let mut ekf = ExtendedKalmanFilter::new(
            na::SVector::<f64, 1>::new(0.0),
            na::SMatrix::<f64, 1, 1>::new(1.0),
            na::SMatrix::<f64, 1, 1>::new(q),
            na::SMatrix::<f64, 1, 1>::new(r),
        );

        let (mut x_hat, mut p) = (0.0, 1.0);
        let u = na::SVector::<f64, 1>::new(1.0);
        for k in 0..50 {
            let y = (k as f64 * 0.37).sin();
            let x_p = 0.9 * x_hat + 1.0;
            let p_p = 0.81 * p + q;
            let gain = p_p / (p_p + r);
            x_hat = x_p + gain * (y - x_p);
            p = (1.0 - gain) * p_p;

            ekf.update(&model, &u, &na::SVector::<f64, 1>::new(y)).unwrap();
        }

        approx::assert_relative_eq!(ekf.get_estimate()[0], x_hat, epsilon = 1e-12);
        approx::assert_relative_eq!(ekf.get_covariance()[(0, 0)], p, epsilon = 1e-12);
    }

    #[test]
    fn covariance_stays_symmetric_psd() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let dt = rng.gen_range(0.01..1.0);
            let model = LinearSystem::new(
                na::SMatrix::<f64, 2, 2>::new(1.0, dt, 0.0, rng.gen_range(0.5..1.0)),
                na::SMatrix::<f64, 2, 1>::new(0.0, dt),
                na::SMatrix::<f64, 1, 2>::new(rng.gen_range(-2.0..2.0), -1.0),
                na::SMatrix::<f64, 1, 1>::zeros(),
            );

            let l = na::SMatrix::<f64, 2, 2>::new(
                rng.gen_range(0.0..1.0),
                0.0,
                rng.gen_range(-1.0..1.0),
                rng.gen_range(0.0..1.0),
            );
            let p_init = l * l.transpose();
            let q = na::SMatrix::<f64, 2, 2>::from_diagonal(&na::SVector::<f64, 2>::new(
                rng.gen_range(0.0..1e-2),
                rng.gen_range(0.0..1e-2),
            ));
            let r = na::SMatrix::<f64, 1, 1>::new(rng.gen_range(1e-4..1.0));

            let mut ekf =
                ExtendedKalmanFilter::new(na::SVector::<f64, 2>::zeros(), p_init, q, r);
            for _ in 0..50 {
                let u = na::SVector::<f64, 1>::new(rng.gen_range(-1.0..1.0));
                let y = na::SVector::<f64, 1>::new(rng.gen_range(-1.0..1.0));
                ekf.update(&model, &u, &y).unwrap();

                let p = ekf.get_covariance();
                assert!(matrix::is_symmetric(p, 1e-12), "P lost symmetry: {p}");
                assert!(
                    matrix::is_positive_semidefinite(p, 1e-9),
                    "P is not positive semidefinite: {p}"
                );
            }
        }
    }
}
