//! Impactor-mass sweeps over a fixed design.

use crate::feasibility::{Assessment, FeasibilityInputs, assess};

#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub impactor_mass_kg: u32,
    pub assessment: Assessment,
}

/// Evaluate the design at `0, step, 2·step, …` up to the material limit, which is always
/// included as the final row. A zero step is treated as 1 kg.
pub fn sweep_impactor_mass(inputs: &FeasibilityInputs<'_>, step_kg: u32) -> Vec<SweepRow> {
    let step = step_kg.max(1);
    let max = inputs.material.max_mass_kg;
    let mut masses: Vec<u32> = (0..=max).step_by(step as usize).collect();
    if masses.last() != Some(&max) {
        masses.push(max);
    }
    masses
        .into_iter()
        .map(|impactor_mass_kg| SweepRow {
            impactor_mass_kg,
            assessment: assess(&FeasibilityInputs {
                impactor_mass_kg,
                ..*inputs
            }),
        })
        .collect()
}
