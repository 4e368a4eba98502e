// src/physics/conversion.rs

use nalgebra::Vector3;

use crate::error::AnalysisError;
use crate::model::LatticeParameters;

/// Convert fractional coordinates to Cartesian for an arbitrary cell
///
/// # Arguments
/// * `frac` - Fractional coordinates [u, v, w]; values outside [0, 1) are
///   valid lattice-translated positions
/// * `lattice` - Unit-cell parameters
///
/// # Returns
/// Cartesian coordinates in Ångström, or `InvalidLattice` if the cell
/// parameters do not define a real cell
///
/// # Formula
/// ```text
/// Cartesian = M × Fractional
/// ```
/// where M is the upper-triangular matrix from
/// [`LatticeParameters::transformation_matrix`]. Pure: the result depends
/// only on the inputs, and identical inputs give bit-identical output.
pub fn frac_to_cart(
    frac: [f64; 3],
    lattice: &LatticeParameters,
) -> Result<[f64; 3], AnalysisError> {
    let m = lattice.transformation_matrix()?;
    let cart = m * Vector3::from(frac);

    Ok([cart.x, cart.y, cart.z])
}
