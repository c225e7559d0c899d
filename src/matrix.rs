//! Fixed-size matrix helpers for the filter.
//!
//! Products, sums, transposes, identities and the Cholesky factorization
//! come straight from nalgebra's stack-allocated `SMatrix`. What nalgebra
//! does not give us is a factorization that refuses near-singular input with
//! a tolerance and says where it broke down, so that lives here.

extern crate nalgebra as na;

use crate::error::EkfError;

/// Relative pivot tolerance below which a matrix is treated as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Cholesky factorization `a = L * L^T`.
///
/// Only the lower triangle of `a` is read. Fails on the first pivot that is
/// not strictly above `PIVOT_TOLERANCE` scaled by the largest diagonal entry
/// (or one, whichever is larger), which also catches NaN.
pub fn cholesky<const M: usize>(
    a: &na::SMatrix<f64, M, M>,
) -> Result<na::Cholesky<f64, na::Const<M>>, EkfError> {
    let scale = a.diagonal().iter().fold(1.0_f64, |acc, d| acc.max(d.abs()));
    let tolerance = PIVOT_TOLERANCE * scale;

    // Rows above the first bad pivot are exact, so its pivot can be rebuilt
    // from them even when the factor below is garbage.
    let chol = na::Cholesky::new_unchecked(*a);
    let l = chol.l_dirty();
    for row in 0..M {
        let pivot = a[(row, row)] - (0..row).map(|k| l[(row, k)] * l[(row, k)]).sum::<f64>();
        if !(pivot > tolerance) {
            return Err(EkfError::SingularInnovation { row, pivot });
        }
    }
    Ok(chol)
}

/// Inverse of a symmetric positive definite matrix through its Cholesky factor.
pub fn inverse_positive_definite<const M: usize>(
    a: &na::SMatrix<f64, M, M>,
) -> Result<na::SMatrix<f64, M, M>, EkfError> {
    Ok(symmetrize(&cholesky(a)?.inverse()))
}

pub fn symmetrize<const N: usize>(p: &na::SMatrix<f64, N, N>) -> na::SMatrix<f64, N, N> {
    (p + p.transpose()) * 0.5
}

pub fn is_symmetric<const N: usize>(p: &na::SMatrix<f64, N, N>, epsilon: f64) -> bool {
    (p - p.transpose()).abs().max() <= epsilon
}

/// PSD check with slack: `p + epsilon * I` must admit a Cholesky factor.
pub fn is_positive_semidefinite<const N: usize>(
    p: &na::SMatrix<f64, N, N>,
    epsilon: f64,
) -> bool {
    let shifted = symmetrize(p) + na::SMatrix::<f64, N, N>::identity() * epsilon;
    cholesky(&shifted).is_ok()
}
