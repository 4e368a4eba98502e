// src/physics/distortion.rs

use crate::error::AnalysisError;
use crate::model::{LatticeParameters, Sample};
use crate::physics::conversion::frac_to_cart;
use crate::utils::geometry::calculate_distance;

/// Axial distortion of one coordination octahedron
///
/// All three values are fractional z-coordinates (dimensionless).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionResult {
    /// D = Δz_real - Δz_ideal
    pub distortion: f64,
    /// The ligand's actual fractional z
    pub delta_z_real: f64,
    /// Fractional z the ligand would have in a regular octahedron of the
    /// same bond length
    pub delta_z_ideal: f64,
}

/// Octahedral distortion of an apical ligand around a central atom
///
/// **Formula**: D = Δz_real - Δz_ideal
///
/// Δz_real is the ligand's fractional z taken directly. This treats the
/// fractional w-coordinate as a proxy for axial displacement, which holds
/// for apical sites sharing the center's a-b projection (the layered
/// hexagonal phases this targets). It is not a general axial-coordinate
/// extraction.
///
/// Δz_ideal places the ligand where a regular octahedron of the observed
/// bond length d would put it: axial height d/√3 above the center,
/// converted back to fractional z by dividing by c. The conversion is exact
/// only while the a and b lattice vectors carry no z-component, as in the
/// hexagonal setting. Known approximation, kept deliberately.
pub fn octahedral_distortion(
    center: [f64; 3],
    ligand: [f64; 3],
    lattice: &LatticeParameters,
) -> Result<DistortionResult, AnalysisError> {
    let center_cart = frac_to_cart(center, lattice)?;
    let ligand_cart = frac_to_cart(ligand, lattice)?;

    let d = calculate_distance(center_cart, ligand_cart);

    let delta_z_real = ligand[2];

    // Regular octahedron: the apical triangle sits d/√3 above the center
    let ideal_z_cart = d / 3.0_f64.sqrt();
    let delta_z_ideal = center[2] + ideal_z_cart / lattice.c;

    Ok(DistortionResult {
        distortion: delta_z_real - delta_z_ideal,
        delta_z_real,
        delta_z_ideal,
    })
}

/// Everything the report needs for one material case
#[derive(Clone, Debug)]
pub struct SampleResult {
    pub sample: Sample,
    /// Observed center-ligand bond length (Å)
    pub bond_length: f64,
    pub distortion: DistortionResult,
}

/// Evaluate a single sample: distortion plus the reported bond length
pub fn evaluate(sample: &Sample) -> Result<SampleResult, AnalysisError> {
    let distortion = octahedral_distortion(sample.center, sample.ligand, &sample.lattice)?;

    let center_cart = frac_to_cart(sample.center, &sample.lattice)?;
    let ligand_cart = frac_to_cart(sample.ligand, &sample.lattice)?;
    let bond_length = calculate_distance(center_cart, ligand_cart);

    Ok(SampleResult {
        sample: sample.clone(),
        bond_length,
        distortion,
    })
}

/// Evaluate samples in order; the first failure aborts the whole run
pub fn evaluate_all(samples: &[Sample]) -> Result<Vec<SampleResult>, AnalysisError> {
    samples.iter().map(evaluate).collect()
}

/// Parallel evaluation for large sample sets
#[cfg(feature = "parallel")]
pub fn evaluate_all_parallel(samples: &[Sample]) -> Result<Vec<SampleResult>, AnalysisError> {
    use rayon::prelude::*;

    samples.par_iter().map(evaluate).collect()
}
