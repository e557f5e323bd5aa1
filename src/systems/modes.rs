use std::cmp::Ordering;
use std::f64::consts::{LN_2, PI};
use tracing::warn;

use crate::components::{
    AperiodicMode, EigenResult, Eigenvalue, LateralModes, LongitudinalModes, Mode,
    ModeParameters,
};
use crate::utils::{Axis, DomainError};

/// Damping ratio, natural frequency, period and half-amplitude figures of σ ± jω.
///
/// Only the magnitude of ω is used, so either root of the pair gives the same
/// parameters. A neutrally damped mode (σ = 0) has infinite t½ and N½. For a
/// divergent mode t½ and N½ are the time and cycles to double amplitude.
///
/// # Errors
/// `DomainError::RealEigenvalue` when ω == 0 (a real root has no period) or
/// either part is not finite.
pub fn characterize(eigenvalue: Eigenvalue) -> Result<ModeParameters, DomainError> {
    let sigma = eigenvalue.re;
    let omega = eigenvalue.im.abs();

    if omega == 0.0 || !omega.is_finite() || !sigma.is_finite() {
        return Err(DomainError::RealEigenvalue { real: sigma });
    }

    let natural_frequency = eigenvalue.modulus();
    let damping_ratio = -sigma / natural_frequency;
    let period = 2.0 * PI / omega;
    let (time_to_half, cycles_to_half) = if sigma == 0.0 {
        (f64::INFINITY, f64::INFINITY)
    } else {
        let t_half = LN_2 / sigma.abs();
        (t_half, t_half / period)
    };

    Ok(ModeParameters {
        eigenvalue: Eigenvalue::new(sigma, omega),
        damping_ratio,
        natural_frequency,
        period,
        time_to_half,
        cycles_to_half,
    })
}

fn structure_error(axis: Axis, eigen: &EigenResult, expected: &str) -> DomainError {
    let values = eigen
        .eigenvalues()
        .iter()
        .map(|l| format!("{}{:+}j", l.re, l.im))
        .collect::<Vec<_>>()
        .join(", ");
    DomainError::UnexpectedModeStructure {
        axis,
        detail: format!("expected {}, got [{}]", expected, values),
    }
}

/// Indices of the upper halves of the complex pairs and of the real roots.
fn split_roots(eigen: &EigenResult) -> (Vec<usize>, Vec<usize>) {
    let values = eigen.eigenvalues();
    let complex = (0..4).filter(|&i| values[i].im > 0.0).collect();
    let real = (0..4).filter(|&i| values[i].is_real()).collect();
    (complex, real)
}

/// Index of the lower half (conjugate) of the pair whose upper half is at `upper`.
fn conjugate_index(eigen: &EigenResult, upper: usize) -> Option<usize> {
    let values = eigen.eigenvalues();
    let target = values[upper].conj();
    (0..4).find(|&i| i != upper && values[i] == target)
}

fn warn_if_unstable(mode: Mode, stable: bool, eigenvalue: Eigenvalue) {
    if !stable {
        warn!(
            "Unstable {} mode: lambda = {:.6}{:+.6}j",
            mode, eigenvalue.re, eigenvalue.im
        );
    }
}

/// Identifies short period and phugoid from a longitudinal eigenstructure.
///
/// The pair with the larger |ω| is the short period. Returns the eigenstructure
/// reordered as [SP+, SP-, PH+, PH-] along with the mode parameters.
pub fn classify_longitudinal(
    eigen: &EigenResult,
) -> Result<(EigenResult, LongitudinalModes), DomainError> {
    let expected = "two complex-conjugate pairs";
    let (mut complex, real) = split_roots(eigen);
    if complex.len() != 2 || !real.is_empty() {
        return Err(structure_error(Axis::Longitudinal, eigen, expected));
    }

    let values = eigen.eigenvalues();
    complex.sort_by(|&a, &b| {
        values[b]
            .im
            .partial_cmp(&values[a].im)
            .unwrap_or(Ordering::Equal)
    });
    let (sp, ph) = (complex[0], complex[1]);
    let (sp_conj, ph_conj) = match (conjugate_index(eigen, sp), conjugate_index(eigen, ph)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(structure_error(Axis::Longitudinal, eigen, expected)),
    };

    let modes = LongitudinalModes {
        short_period: characterize(values[sp])?,
        phugoid: characterize(values[ph])?,
    };
    warn_if_unstable(Mode::ShortPeriod, modes.short_period.is_stable(), values[sp]);
    warn_if_unstable(Mode::Phugoid, modes.phugoid.is_stable(), values[ph]);

    Ok((eigen.reordered([sp, sp_conj, ph, ph_conj]), modes))
}

/// Identifies dutch roll, roll and spiral from a lateral-directional eigenstructure.
///
/// Expects one complex pair (dutch roll) and two real roots; the real root with
/// the larger magnitude is the roll subsidence. Returns the eigenstructure
/// reordered as [DR+, DR-, roll, spiral] along with the mode parameters.
pub fn classify_lateral(eigen: &EigenResult) -> Result<(EigenResult, LateralModes), DomainError> {
    let expected = "one complex-conjugate pair and two real roots";
    let (complex, mut real) = split_roots(eigen);
    if complex.len() != 1 || real.len() != 2 {
        return Err(structure_error(Axis::LateralDirectional, eigen, expected));
    }

    let values = eigen.eigenvalues();
    let dr = complex[0];
    let dr_conj = conjugate_index(eigen, dr)
        .ok_or_else(|| structure_error(Axis::LateralDirectional, eigen, expected))?;

    real.sort_by(|&a, &b| {
        values[b]
            .re
            .abs()
            .partial_cmp(&values[a].re.abs())
            .unwrap_or(Ordering::Equal)
    });
    let (roll, spiral) = (real[0], real[1]);

    let modes = LateralModes {
        dutch_roll: characterize(values[dr])?,
        roll: AperiodicMode::from_eigenvalue(values[roll].re),
        spiral: AperiodicMode::from_eigenvalue(values[spiral].re),
    };
    warn_if_unstable(Mode::DutchRoll, modes.dutch_roll.is_stable(), values[dr]);
    warn_if_unstable(Mode::Roll, modes.roll.is_stable(), values[roll]);
    warn_if_unstable(Mode::Spiral, modes.spiral.is_stable(), values[spiral]);

    Ok((eigen.reordered([dr, dr_conj, roll, spiral]), modes))
}
