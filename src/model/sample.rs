// src/model/sample.rs

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::lattice::LatticeParameters;

/// One material case: a central atom and its apical ligand site in a fixed
/// unit cell.
///
/// Positions are fractional coordinates relative to the lattice basis.
/// Values outside [0, 1) are valid (lattice-translated images).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    /// Species label of the central atom (e.g. "Cr")
    pub center_species: String,
    /// Species label of the apical ligand site (e.g. "Se2")
    pub ligand_species: String,
    pub lattice: LatticeParameters,
    pub center: [f64; 3],
    pub ligand: [f64; 3],
}

impl Sample {
    pub fn new(
        name: impl Into<String>,
        center_species: impl Into<String>,
        ligand_species: impl Into<String>,
        lattice: LatticeParameters,
        center: [f64; 3],
        ligand: [f64; 3],
    ) -> Self {
        Self {
            name: name.into(),
            center_species: center_species.into(),
            ligand_species: ligand_species.into(),
            lattice,
            center,
            ligand,
        }
    }
}

/// The built-in cases: CrNb4Se8 before and after structural optimization,
/// and CrTa4S8. Both compounds are layered hexagonal phases with Cr at the
/// origin and the chalcogen X2 site apical above it.
pub fn builtin_samples() -> Result<Vec<Sample>, AnalysisError> {
    let crnb4se8 = LatticeParameters::hexagonal(6.90400, 12.57)?;
    let crta4s8 = LatticeParameters::hexagonal(6.59590, 12.03910)?;

    Ok(vec![
        Sample::new(
            "CrNb4Se8 (initial)",
            "Cr",
            "Se2",
            crnb4se8,
            [0.0, 0.0, 0.0],
            [0.16667, 0.33333, 0.125],
        ),
        Sample::new(
            "CrNb4Se8 (optimized)",
            "Cr",
            "Se2",
            crnb4se8,
            [0.0, 0.0, 0.0],
            [0.168359, 0.336717, 0.118357],
        ),
        Sample::new(
            "CrTa4S8",
            "Cr",
            "S2",
            crta4s8,
            [0.0, 0.0, 0.0],
            [0.1667, 0.3334, 0.1188],
        ),
    ])
}
