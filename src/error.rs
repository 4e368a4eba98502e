// src/error.rs

use thiserror::Error;

/// Everything that can go wrong while analyzing a sample.
///
/// Lattice validation fails fast with a variant naming the violated
/// precondition; the computation itself never clamps or substitutes
/// defaults. I/O covers the report-writing layer only.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid lattice: cell length {axis} = {value} (must be a positive finite number)")]
    InvalidLength { axis: char, value: f64 },

    #[error("invalid lattice: angle {name} = {value}° (must lie strictly between 0° and 180°)")]
    InvalidAngle { name: &'static str, value: f64 },

    #[error(
        "invalid lattice: angles α = {alpha}°, β = {beta}°, γ = {gamma}° do not enclose a real cell volume"
    )]
    DegenerateCell { alpha: f64, beta: f64, gamma: f64 },

    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
