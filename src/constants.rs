/// Constants used by event-list file naming and layout.
pub mod output {
    /// Default directory that receives per-channel event lists.
    pub const DEFAULT_OUTPUT_DIR: &str = "event_lists";
    /// Filename prefix shared by every channel file.
    pub const FILE_PREFIX: &str = "2l2tau_";
    /// Filename suffix shared by every channel file.
    pub const FILE_SUFFIX: &str = "_zh_events.json";
    /// Extension used for the temporary file replaced into place on write.
    pub const TEMP_EXTENSION: &str = "json.tmp";
}

/// Constants used by final-state classification.
pub mod classify {
    /// Final-state character for a muon leg.
    pub const MUON_LEG: char = 'm';
    /// Final-state character for an electron leg.
    pub const ELECTRON_LEG: char = 'e';
    /// Primary dataset name for dimuon-triggered data.
    pub const DOUBLE_MU: &str = "DoubleMu";
    /// Primary dataset name for muon-electron-triggered data.
    pub const MU_EG: &str = "MuEG";
    /// Primary dataset name for dielectron-triggered data.
    pub const DOUBLE_ELECTRON: &str = "DoubleElectron";
    /// Sentinel category for final states no trigger path covers.
    pub const UNCLASSIFIED: &str = "ERROR";
}

/// Constants used by the built-in run-range dataset catalog.
pub mod catalog {
    /// 2011 data-taking eras as `(era, first_run, last_run)`, inclusive.
    pub const ERAS_2011: &[(&str, u64, u64)] = &[
        ("Run2011A_May10ReReco_v1", 160_329, 163_869),
        ("Run2011A_PromptReco_v4", 165_071, 167_913),
        ("Run2011A_05Aug2011_v1", 170_249, 172_619),
        ("Run2011A_PromptReco_v6", 172_620, 175_770),
        ("Run2011B_PromptReco_v1", 175_832, 180_252),
    ];
    /// Prefix prepended to every catalog dataset name.
    pub const DATASET_PREFIX: &str = "data";
}
