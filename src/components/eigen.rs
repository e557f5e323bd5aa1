use nalgebra::{Complex, Vector4};
use serde::{Deserialize, Serialize};

/// One root of the characteristic equation, λ = σ + jω.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eigenvalue {
    pub re: f64,
    pub im: f64,
}

impl Eigenvalue {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Exactly real. The solver snaps near-real roots to `im == 0.0`.
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Negative real part.
    pub fn is_stable(&self) -> bool {
        self.re < 0.0
    }

    pub fn as_complex(&self) -> Complex<f64> {
        Complex::new(self.re, self.im)
    }
}

/// An eigenvalue with its (real) eigenvector.
///
/// For complex eigenvalues the vector is the real part of the complex
/// eigenvector after scaling it so that its largest-modulus component is 1.
/// That component therefore reads exactly 1 and the others keep their in-phase
/// share of the mode shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenPair {
    pub value: Eigenvalue,
    pub vector: Vector4<f64>,
}

/// Eigenstructure of a 4x4 state matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenResult {
    pub pairs: [EigenPair; 4],
}

impl EigenResult {
    pub fn new(pairs: [EigenPair; 4]) -> Self {
        Self { pairs }
    }

    pub fn eigenvalues(&self) -> [Eigenvalue; 4] {
        [
            self.pairs[0].value,
            self.pairs[1].value,
            self.pairs[2].value,
            self.pairs[3].value,
        ]
    }

    /// Equals the trace of the source matrix.
    pub fn sum_of_real_parts(&self) -> f64 {
        self.pairs.iter().map(|p| p.value.re).sum()
    }

    pub fn complex_count(&self) -> usize {
        self.pairs.iter().filter(|p| !p.value.is_real()).count()
    }

    /// Returns a copy with entries rearranged so that entry `i` is `self.pairs[order[i]]`.
    pub fn reordered(&self, order: [usize; 4]) -> Self {
        Self {
            pairs: order.map(|i| self.pairs[i].clone()),
        }
    }
}
