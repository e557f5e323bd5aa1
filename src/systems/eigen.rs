use nalgebra::{Complex, ComplexField, DMatrix, Matrix4, Schur, Vector4, SVD};
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::components::{EigenPair, EigenResult, Eigenvalue};
use crate::resources::EigenSolverConfig;
use crate::utils::NumericalError;

fn as_dynamic(matrix: &Matrix4<f64>) -> DMatrix<f64> {
    DMatrix::from_column_slice(4, 4, matrix.as_slice())
}

/// Tolerance scaled to the size of the root it is compared against.
fn scaled_tolerance(tolerance: f64, value: Complex<f64>) -> f64 {
    tolerance * (1.0 + value.modulus())
}

/// Snaps near-real roots onto the real axis and makes conjugate partners exact.
///
/// Returns the roots ordered as complex pairs first, largest |ω| first and the
/// positive-frequency root ahead of its conjugate, followed by real roots in
/// decreasing |σ|.
fn pair_eigenvalues(
    raw: &[Complex<f64>],
    tolerance: f64,
) -> Result<Vec<Eigenvalue>, NumericalError> {
    let mut real = Vec::new();
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for &lambda in raw {
        if lambda.im.abs() <= scaled_tolerance(tolerance, lambda) {
            real.push(Eigenvalue::real(lambda.re));
        } else if lambda.im > 0.0 {
            positive.push(lambda);
        } else {
            negative.push(lambda);
        }
    }

    let mut pairs = Vec::with_capacity(positive.len());
    for upper in positive {
        let partner = negative.iter().position(|lower| {
            (upper - lower.conj()).modulus() <= scaled_tolerance(tolerance, upper)
        });
        match partner {
            Some(index) => {
                let lower = negative.swap_remove(index);
                // Average so both halves are exact conjugates.
                pairs.push(Eigenvalue::new(
                    0.5 * (upper.re + lower.re),
                    0.5 * (upper.im - lower.im),
                ));
            }
            None => {
                return Err(NumericalError::UnpairedComplexEigenvalue {
                    re: upper.re,
                    im: upper.im,
                })
            }
        }
    }
    if let Some(lower) = negative.first() {
        return Err(NumericalError::UnpairedComplexEigenvalue {
            re: lower.re,
            im: lower.im,
        });
    }

    pairs.sort_by(|a, b| b.im.partial_cmp(&a.im).unwrap_or(Ordering::Equal));
    real.sort_by(|a, b| b.re.abs().partial_cmp(&a.re.abs()).unwrap_or(Ordering::Equal));

    let mut ordered = Vec::with_capacity(raw.len());
    for pair in pairs {
        ordered.push(pair);
        ordered.push(pair.conj());
    }
    ordered.extend(real);
    Ok(ordered)
}

/// Right null vector of (A - λI), scaled so its largest component is 1.
///
/// The real part is returned; for a real λ the vector is already real.
fn eigenvector(
    a: &Matrix4<f64>,
    lambda: Eigenvalue,
    config: &EigenSolverConfig,
) -> Result<Vector4<f64>, NumericalError> {
    let failed = || NumericalError::EigenvectorFailed {
        re: lambda.re,
        im: lambda.im,
    };

    let shifted = a.map(|x| Complex::new(x, 0.0))
        - Matrix4::from_diagonal_element(lambda.as_complex());
    let svd = SVD::try_new(
        shifted,
        false,
        true,
        config.convergence_tolerance,
        config.max_iterations,
    )
    .ok_or_else(failed)?;
    let v_t = svd.v_t.ok_or_else(failed)?;

    let null_index = svd.singular_values.imin();
    let v = v_t.row(null_index).adjoint();

    let pivot = (0..4)
        .max_by(|&i, &j| {
            v[i].modulus()
                .partial_cmp(&v[j].modulus())
                .unwrap_or(Ordering::Equal)
        })
        .unwrap_or(0);
    let scale = v[pivot];
    let magnitude = scale.modulus();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return Err(failed());
    }

    Ok((v / scale).map(|c| c.re))
}

/// Computes all four eigenvalues of a real state matrix and an eigenvector for each.
///
/// Uses a real Schur decomposition bounded by `config.max_iterations`, so the
/// call always terminates. A zero bound is reported as non-convergence
/// rather than handed to nalgebra, which reads it as "no limit". Conjugate pairs are returned adjacent, positive
/// frequency first; see [`pair_eigenvalues`] for the full ordering.
pub fn solve_eigen(
    a: &Matrix4<f64>,
    config: &EigenSolverConfig,
) -> Result<EigenResult, NumericalError> {
    if !a.iter().all(|v| v.is_finite()) {
        return Err(NumericalError::NonFiniteMatrix {
            matrix: as_dynamic(a),
        });
    }

    if config.max_iterations == 0 {
        return Err(NumericalError::NoConvergence {
            iterations: 0,
            matrix: as_dynamic(a),
        });
    }

    let schur = Schur::try_new(*a, config.convergence_tolerance, config.max_iterations)
        .ok_or_else(|| NumericalError::NoConvergence {
            iterations: config.max_iterations,
            matrix: as_dynamic(a),
        })?;

    let raw = schur.complex_eigenvalues();
    trace!("Raw Schur eigenvalues: {:?}", raw.as_slice());

    let values = pair_eigenvalues(raw.as_slice(), config.pairing_tolerance)?;
    if values.len() != 4 {
        return Err(NumericalError::NoConvergence {
            iterations: config.max_iterations,
            matrix: as_dynamic(a),
        });
    }

    let pair = |i: usize| -> Result<EigenPair, NumericalError> {
        Ok(EigenPair {
            value: values[i],
            vector: eigenvector(a, values[i], config)?,
        })
    };
    let result = EigenResult::new([pair(0)?, pair(1)?, pair(2)?, pair(3)?]);

    debug!(
        "Eigenvalues: {}",
        result
            .eigenvalues()
            .iter()
            .map(|l| format!("{:.6}{:+.6}j", l.re, l.im))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(result)
}
