// src/utils/report.rs

use crate::physics::SampleResult;

/// Generates the text block for one evaluated sample
pub fn sample_block(index: usize, result: &SampleResult) -> String {
    let s = &result.sample;
    let d = &result.distortion;

    let mut out = String::new();
    out.push_str(&format!("{}. {}\n", index, s.name));
    out.push_str(&format!(
        "Lattice constants: a = {} Å, b = {} Å, c = {} Å\n",
        s.lattice.a, s.lattice.b, s.lattice.c
    ));
    out.push_str(&format!(
        "{} site (fractional): ({}, {}, {})\n",
        s.center_species, s.center[0], s.center[1], s.center[2]
    ));
    out.push_str(&format!(
        "{} site (fractional): ({}, {}, {})\n",
        s.ligand_species, s.ligand[0], s.ligand[1], s.ligand[2]
    ));
    out.push_str(&format!(
        "{}-{} distance: {:.5} Å\n",
        s.center_species, s.ligand_species, result.bond_length
    ));
    out.push_str(&format!("Actual Δz: {:.6}\n", d.delta_z_real));
    out.push_str(&format!("Ideal Δz:  {:.6}\n", d.delta_z_ideal));
    out.push_str(&format!(
        "Octahedral distortion (D = Δz_real - Δz_ideal): {:.6}\n",
        d.distortion
    ));

    out
}

/// Generates the closing summary table across all samples
pub fn summary_table(results: &[SampleResult]) -> String {
    let mut out = String::new();
    out.push_str("=================== Summary ===================\n");
    out.push_str(&format!(
        "{:<22} {:<12} {:<12} {:<12} {:<12} {:<12}\n",
        "Sample", "c (Å)", "d(M-X2) (Å)", "Δz_real", "Δz_ideal", "D"
    ));
    out.push_str(&"-".repeat(86));
    out.push('\n');

    for r in results {
        out.push_str(&format!(
            "{:<22} {:<12.5} {:<12.5} {:<12.6} {:<12.6} {:<12.6}\n",
            r.sample.name,
            r.sample.lattice.c,
            r.bond_length,
            r.distortion.delta_z_real,
            r.distortion.delta_z_ideal,
            r.distortion.distortion
        ));
    }

    // Footnote naming what X2 stands for, derived from the samples
    let mut species: Vec<&str> = results
        .iter()
        .map(|r| r.sample.ligand_species.as_str())
        .collect();
    species.dedup();
    out.push_str(&format!(
        "\nNote: X2 denotes the apical ligand site ({}).\n",
        species.join(", ")
    ));

    out
}

/// Full report: header, one block per sample, then the summary table
pub fn full_report(results: &[SampleResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Octahedral distortion analysis: {} samples ===\n\n",
        results.len()
    ));

    for (i, r) in results.iter().enumerate() {
        out.push_str(&sample_block(i + 1, r));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&summary_table(results));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::builtin_samples;
    use crate::physics::evaluate_all;

    fn builtin_results() -> Vec<SampleResult> {
        evaluate_all(&builtin_samples().unwrap()).unwrap()
    }

    #[test]
    fn test_sample_block_formatting() {
        let results = builtin_results();
        let block = sample_block(1, &results[0]);

        assert!(block.starts_with("1. CrNb4Se8 (initial)\n"));
        assert!(block.contains("a = 6.904 Å, b = 6.904 Å, c = 12.57 Å"));
        assert!(block.contains("Cr site (fractional): (0, 0, 0)"));
        assert!(block.contains("Se2 site (fractional): (0.16667, 0.33333, 0.125)"));
        assert!(block.contains("Cr-Se2 distance: 2.53788 Å"));
        assert!(block.contains("Actual Δz: 0.125000"));
        assert!(block.contains("Ideal Δz:  0.116567"));
        assert!(block.contains("D = Δz_real - Δz_ideal): 0.008433"));
    }

    #[test]
    fn test_summary_lists_every_sample() {
        let results = builtin_results();
        let table = summary_table(&results);

        assert!(table.contains("CrNb4Se8 (initial)"));
        assert!(table.contains("CrNb4Se8 (optimized)"));
        assert!(table.contains("CrTa4S8"));
        assert!(table.contains("2.50331"));
        assert!(table.contains("0.004582"));
        assert!(table.contains("Note: X2 denotes the apical ligand site (Se2, S2)."));
    }

    #[test]
    fn test_full_report_structure() {
        let results = builtin_results();
        let report = full_report(&results);

        assert!(report.starts_with("=== Octahedral distortion analysis: 3 samples ==="));
        assert!(report.contains("3. CrTa4S8"));
        assert!(report.contains("=================== Summary ==================="));
    }
}
