// src/model/lattice.rs

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Crystallographic unit-cell shape: three edge lengths (Å) and three
/// inter-axial angles (degrees).
///
/// Constructed once per sample through the validating [`new`](Self::new);
/// immutable afterwards. The six numbers fully determine the
/// fractional→Cartesian transformation matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LatticeParameters {
    /// Validating constructor. Lengths must be positive and finite, angles
    /// strictly inside (0°, 180°).
    pub fn new(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, AnalysisError> {
        for (axis, value) in [('a', a), ('b', b), ('c', c)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(AnalysisError::InvalidLength { axis, value });
            }
        }
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            // NaN fails both comparisons and lands here too
            if !(value > 0.0 && value < 180.0) {
                return Err(AnalysisError::InvalidAngle { name, value });
            }
        }

        Ok(Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        })
    }

    /// Hexagonal setting: a = b, α = β = 90°, γ = 120°.
    pub fn hexagonal(a: f64, c: f64) -> Result<Self, AnalysisError> {
        Self::new(a, a, c, 90.0, 90.0, 120.0)
    }

    /// Relative cell volume factor
    ///
    /// ```text
    /// v = sqrt(1 - cos²α - cos²β - cos²γ + 2·cosα·cosβ·cosγ)
    /// ```
    ///
    /// Proportional to the true cell volume (V = a·b·c·v). A negative
    /// radicand means the three angles cannot close a real cell, which is
    /// rejected here rather than letting sqrt produce NaN downstream.
    pub fn volume_factor(&self) -> Result<f64, AnalysisError> {
        let cos_alpha = self.alpha.to_radians().cos();
        let cos_beta = self.beta.to_radians().cos();
        let cos_gamma = self.gamma.to_radians().cos();

        let radicand = 1.0 - cos_alpha.powi(2) - cos_beta.powi(2) - cos_gamma.powi(2)
            + 2.0 * cos_alpha * cos_beta * cos_gamma;

        if radicand < 0.0 {
            return Err(AnalysisError::DegenerateCell {
                alpha: self.alpha,
                beta: self.beta,
                gamma: self.gamma,
            });
        }

        Ok(radicand.sqrt())
    }

    /// Fractional→Cartesian transformation matrix
    ///
    /// Upper triangular, columns are the lattice vectors in the lab frame:
    ///
    /// ```text
    /// | a   b·cosγ   c·cosβ                  |
    /// | 0   b·sinγ   c·(cosα - cosβ·cosγ)/sinγ |
    /// | 0   0        c·v/sinγ                |
    /// ```
    ///
    /// γ ∈ (0°, 180°) guarantees sinγ > 0, so the divisions are safe once
    /// construction has validated the angles.
    pub fn transformation_matrix(&self) -> Result<Matrix3<f64>, AnalysisError> {
        let cos_alpha = self.alpha.to_radians().cos();
        let cos_beta = self.beta.to_radians().cos();
        let cos_gamma = self.gamma.to_radians().cos();
        let sin_gamma = self.gamma.to_radians().sin();

        let v = self.volume_factor()?;

        Ok(Matrix3::new(
            self.a,
            self.b * cos_gamma,
            self.c * cos_beta,
            0.0,
            self.b * sin_gamma,
            self.c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma,
            0.0,
            0.0,
            self.c * v / sin_gamma,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_matrix_is_diagonal() {
        let lat = LatticeParameters::new(3.0, 4.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        let m = lat.transformation_matrix().unwrap();

        assert!((m[(0, 0)] - 3.0).abs() < 1e-12);
        assert!((m[(1, 1)] - 4.0).abs() < 1e-12);
        assert!((m[(2, 2)] - 5.0).abs() < 1e-12);

        assert!(m[(0, 1)].abs() < 1e-12);
        assert!(m[(0, 2)].abs() < 1e-12);
        assert!(m[(1, 2)].abs() < 1e-12);
    }

    #[test]
    fn test_hexagonal_matrix_entries() {
        let lat = LatticeParameters::hexagonal(6.904, 12.57).unwrap();
        let m = lat.transformation_matrix().unwrap();

        // cos(120°) = -1/2, sin(120°) = √3/2
        assert!((m[(0, 1)] - (-3.452)).abs() < 1e-9);
        assert!((m[(1, 1)] - 5.979039387727765).abs() < 1e-9);
        // α = β = 90° makes v = sinγ, so the (2,2) entry collapses to c
        assert!((m[(2, 2)] - 12.57).abs() < 1e-9);
        assert!(m[(1, 0)].abs() < 1e-12);
        assert!(m[(0, 2)].abs() < 1e-12);
        assert!(m[(1, 2)].abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_volume_factor_is_one() {
        let lat = LatticeParameters::new(1.0, 1.0, 1.0, 90.0, 90.0, 90.0).unwrap();
        assert!((lat.volume_factor().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_nonpositive_length() {
        assert!(matches!(
            LatticeParameters::new(0.0, 4.0, 5.0, 90.0, 90.0, 90.0),
            Err(AnalysisError::InvalidLength { axis: 'a', .. })
        ));
        assert!(matches!(
            LatticeParameters::new(3.0, -1.0, 5.0, 90.0, 90.0, 90.0),
            Err(AnalysisError::InvalidLength { axis: 'b', .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_gamma() {
        // γ = 0° and γ = 180° would divide by sinγ = 0 downstream
        assert!(matches!(
            LatticeParameters::new(3.0, 4.0, 5.0, 90.0, 90.0, 180.0),
            Err(AnalysisError::InvalidAngle { name: "gamma", .. })
        ));
        assert!(matches!(
            LatticeParameters::new(3.0, 4.0, 5.0, 90.0, 90.0, 0.0),
            Err(AnalysisError::InvalidAngle { name: "gamma", .. })
        ));
    }

    #[test]
    fn test_rejects_inconsistent_angles() {
        // Each angle is individually in range, but no real cell has these
        let lat = LatticeParameters::new(3.0, 4.0, 5.0, 30.0, 30.0, 170.0).unwrap();
        assert!(matches!(
            lat.volume_factor(),
            Err(AnalysisError::DegenerateCell { .. })
        ));
        // Deterministic across repeated calls
        assert!(matches!(
            lat.volume_factor(),
            Err(AnalysisError::DegenerateCell { .. })
        ));
        assert!(lat.transformation_matrix().is_err());
    }
}
