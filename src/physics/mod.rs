// src/physics/mod.rs

pub mod conversion;
pub mod distortion;

// Re-export commonly used items
pub use conversion::frac_to_cart;
pub use distortion::{
    evaluate, evaluate_all, octahedral_distortion, DistortionResult, SampleResult,
};

#[cfg(feature = "parallel")]
pub use distortion::evaluate_all_parallel;
