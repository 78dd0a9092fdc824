//! Named experiment sizes.

/// Batch size presets offered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentPreset {
    /// 2 scenarios, 1 round
    Quick,
    /// 5 scenarios, 2 rounds
    Small,
    /// 15 scenarios, 2 rounds
    Full,
    Custom { scenarios: usize, rounds: u32 },
}

impl ExperimentPreset {
    pub fn scenarios(&self) -> usize {
        match self {
            ExperimentPreset::Quick => 2,
            ExperimentPreset::Small => 5,
            ExperimentPreset::Full => 15,
            ExperimentPreset::Custom { scenarios, .. } => *scenarios,
        }
    }

    pub fn rounds(&self) -> u32 {
        match self {
            ExperimentPreset::Quick => 1,
            ExperimentPreset::Small | ExperimentPreset::Full => 2,
            ExperimentPreset::Custom { rounds, .. } => *rounds,
        }
    }

    /// Stem of the final results file (`{stem}_results.json`)
    pub fn result_stem(&self) -> &'static str {
        match self {
            ExperimentPreset::Quick => "quick_test",
            ExperimentPreset::Small => "small_experiment",
            ExperimentPreset::Full => "full_experiment",
            ExperimentPreset::Custom { .. } => "custom_experiment",
        }
    }

    /// Whether the run is followed by an evaluation pass unless disabled
    pub fn evaluates_by_default(&self) -> bool {
        !matches!(self, ExperimentPreset::Quick)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperimentPreset::Quick => "QUICK TEST",
            ExperimentPreset::Small => "SMALL EXPERIMENT",
            ExperimentPreset::Full => "FULL EXPERIMENT",
            ExperimentPreset::Custom { .. } => "CUSTOM EXPERIMENT",
        }
    }
}
