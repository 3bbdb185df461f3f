//! Final-state to primary-dataset classification.
//!
//! The primary dataset is the trigger stream an event was recorded in, so it
//! follows from how many muon and electron legs the final state carries. Tau
//! legs never select a stream.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::classify::{
    DOUBLE_ELECTRON, DOUBLE_MU, ELECTRON_LEG, MU_EG, MUON_LEG, UNCLASSIFIED,
};

/// Primary-dataset category derived from a final-state tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryDataset {
    /// Two or more muon legs.
    DoubleMu,
    /// At least one electron and exactly one muon leg.
    #[serde(rename = "MuEG")]
    MuEg,
    /// Two or more electron legs and no more than one muon.
    DoubleElectron,
    /// No trigger stream covers the final state.
    #[serde(rename = "ERROR")]
    Unclassified,
}

impl PrimaryDataset {
    /// Canonical primary dataset name (`ERROR` for unclassified tags).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DoubleMu => DOUBLE_MU,
            Self::MuEg => MU_EG,
            Self::DoubleElectron => DOUBLE_ELECTRON,
            Self::Unclassified => UNCLASSIFIED,
        }
    }

    /// Categories that name a real trigger stream.
    pub const fn recorded() -> [PrimaryDataset; 3] {
        [Self::DoubleMu, Self::MuEg, Self::DoubleElectron]
    }
}

impl fmt::Display for PrimaryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the primary dataset for a final state.
///
/// Precedence: more than one `m` is DoubleMu; otherwise any `e` together with
/// an `m` is MuEG; otherwise more than one `e` is DoubleElectron. Anything else
/// is [`PrimaryDataset::Unclassified`], which is returned as a value and left
/// for the resolver to reject.
pub fn classify(final_state: &str) -> PrimaryDataset {
    let muons = final_state.chars().filter(|ch| *ch == MUON_LEG).count();
    let electrons = final_state.chars().filter(|ch| *ch == ELECTRON_LEG).count();

    if muons > 1 {
        PrimaryDataset::DoubleMu
    } else if electrons > 0 && muons > 0 {
        PrimaryDataset::MuEg
    } else if electrons > 1 {
        PrimaryDataset::DoubleElectron
    } else {
        PrimaryDataset::Unclassified
    }
}
