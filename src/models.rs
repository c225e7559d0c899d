extern crate nalgebra as na;

/// A discrete-time model the filter can run on.
///
/// `NX` states, `NU` inputs, `NY` measurements. The input is shared by the
/// process and the measurement model since a battery's terminal voltage
/// depends on the same current that drives its state.
pub trait ObserverModel<const NX: usize, const NU: usize, const NY: usize> {
    fn state_model(&self, x: &na::SVector<f64, NX>, u: &na::SVector<f64, NU>)
        -> na::SVector<f64, NX>;

    fn meas_model(&self, x: &na::SVector<f64, NX>, u: &na::SVector<f64, NU>)
        -> na::SVector<f64, NY>;

    /// Noise free rollout. `y_series[k]` is measured at `x_series[k]`.
    fn simulate(
        &self,
        x0: &na::SVector<f64, NX>,
        u_series: &[na::SVector<f64, NU>],
    ) -> (Vec<na::SVector<f64, NX>>, Vec<na::SVector<f64, NY>>) {
        let num_steps = u_series.len();
        let mut x_series = Vec::with_capacity(num_steps);
        let mut y_series = Vec::with_capacity(num_steps);

        let mut x_k = *x0;
        for u_k in u_series {
            y_series.push(self.meas_model(&x_k, u_k));
            x_series.push(x_k);
            x_k = self.state_model(&x_k, u_k);
        }

        (x_series, y_series)
    }
}

/// Jacobians of an `ObserverModel` with respect to the state.
pub trait Differentiable<const NX: usize, const NU: usize, const NY: usize> {
    fn state_model_dx(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SMatrix<f64, NX, NX>;

    fn meas_model_dx(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SMatrix<f64, NY, NX>;
}

pub trait Linear<const NX: usize, const NU: usize, const NY: usize> {
    fn linear_state_model_dx(&self) -> na::SMatrix<f64, NX, NX>;

    fn linear_state_model_du(&self) -> na::SMatrix<f64, NX, NU>;

    fn linear_meas_model_dx(&self) -> na::SMatrix<f64, NY, NX>;

    fn linear_meas_model_du(&self) -> na::SMatrix<f64, NY, NU>;
}

impl<T, const NX: usize, const NU: usize, const NY: usize> Differentiable<NX, NU, NY> for T
where
    T: Linear<NX, NU, NY>,
{
    fn state_model_dx(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SMatrix<f64, NX, NX> {
        _ = (x, u);
        self.linear_state_model_dx()
    }

    fn meas_model_dx(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SMatrix<f64, NY, NX> {
        _ = (x, u);
        self.linear_meas_model_dx()
    }
}

/// Linear Time-Invariant System
/// x(k+1) = A*x(k) + B*u(k)
/// y(k) = C*x(k) + D*u(k)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearSystem<const NX: usize, const NY: usize, const NU: usize> {
    pub a_matrix: na::SMatrix<f64, NX, NX>,
    pub b_matrix: na::SMatrix<f64, NX, NU>,
    pub c_matrix: na::SMatrix<f64, NY, NX>,
    pub d_matrix: na::SMatrix<f64, NY, NU>,
}

impl<const NX: usize, const NY: usize, const NU: usize> LinearSystem<NX, NY, NU> {
    pub fn new(
        a_matrix: na::SMatrix<f64, NX, NX>,
        b_matrix: na::SMatrix<f64, NX, NU>,
        c_matrix: na::SMatrix<f64, NY, NX>,
        d_matrix: na::SMatrix<f64, NY, NU>,
    ) -> Self {
        Self {
            a_matrix,
            b_matrix,
            c_matrix,
            d_matrix,
        }
    }
}

impl<const NX: usize, const NY: usize, const NU: usize> ObserverModel<NX, NU, NY>
    for LinearSystem<NX, NY, NU>
{
    fn state_model(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SVector<f64, NX> {
        self.a_matrix * x + self.b_matrix * u
    }

    fn meas_model(
        &self,
        x: &na::SVector<f64, NX>,
        u: &na::SVector<f64, NU>,
    ) -> na::SVector<f64, NY> {
        self.c_matrix * x + self.d_matrix * u
    }
}

impl<const NX: usize, const NY: usize, const NU: usize> Linear<NX, NU, NY>
    for LinearSystem<NX, NY, NU>
{
    fn linear_state_model_dx(&self) -> na::SMatrix<f64, NX, NX> {
        self.a_matrix
    }

    fn linear_state_model_du(&self) -> na::SMatrix<f64, NX, NU> {
        self.b_matrix
    }

    fn linear_meas_model_dx(&self) -> na::SMatrix<f64, NY, NX> {
        self.c_matrix
    }

    fn linear_meas_model_du(&self) -> na::SMatrix<f64, NY, NU> {
        self.d_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_linear() {
        const NX: usize = 2;
        const NY: usize = 1;
        const NU: usize = 1;

        let a_matrix = na::SMatrix::<f64, NX, NX>::new(1.0, 0.1, 0.0, 0.95);
        let b_matrix = na::SMatrix::<f64, NX, NU>::new(0.0, 0.1);
        let c_matrix = na::SMatrix::<f64, NY, NX>::new(1.0, 0.0);
        let d_matrix = na::SMatrix::<f64, NY, NU>::new(0.5);

        let system = LinearSystem::new(a_matrix, b_matrix, c_matrix, d_matrix);

        let x_init = na::SVector::<f64, NX>::new(1.0, -0.5);
        let u = vec![na::SVector::<f64, NU>::new(2.0); 100];

        let (x_series, y_series) = system.simulate(&x_init, &u);

        assert_eq!(x_series.len(), u.len());
        assert_eq!(y_series.len(), u.len());
        assert_eq!(
            x_series[0], x_init,
            "Initial state is the first element of x_series"
        );

        let x_next = system.state_model(&x_init, &u[0]);
        let y = system.meas_model(&x_init, &u[0]);
        assert_eq!(x_series[1], x_next, "x(1) is located at x_series[1]");
        assert_eq!(y_series[0], y, "y(0) is located at y_series[0]");
    }

    #[test]
    fn linear_jacobians_are_system_matrices() {
        let a_matrix = na::SMatrix::<f64, 2, 2>::new(0.9, 0.3, 0.0, 1.2);
        let b_matrix = na::SMatrix::<f64, 2, 1>::new(0.0, 1.0);
        let c_matrix = na::SMatrix::<f64, 1, 2>::new(1.0, 2.0);
        let d_matrix = na::SMatrix::<f64, 1, 1>::zeros();
        let system = LinearSystem::new(a_matrix, b_matrix, c_matrix, d_matrix);

        let x = na::SVector::<f64, 2>::new(3.0, 4.0);
        let u = na::SVector::<f64, 1>::new(1.0);
        assert_eq!(system.state_model_dx(&x, &u), a_matrix);
        assert_eq!(system.meas_model_dx(&x, &u), c_matrix);
        assert_eq!(system.linear_state_model_du(), b_matrix);
        assert_eq!(system.linear_meas_model_du(), d_matrix);
    }
}
