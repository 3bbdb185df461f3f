/// Final-state tag built from the lepton legs of a candidate.
/// Examples: `mmet`, `eett`, `emmt`
pub type FinalStateTag = String;
/// Resolved dataset identifier for a run and primary dataset.
/// Example: `data_DoubleMu_Run2011A_May10ReReco_v1`
pub type DatasetName = String;
/// Run number of a recorded collision.
/// Example: `171178`
pub type RunNumber = u64;
/// Luminosity-section number inside a run.
/// Example: `12`
pub type LumiSection = u64;
/// Event number inside a run.
/// Example: `11119024`
pub type EventNumber = u64;
