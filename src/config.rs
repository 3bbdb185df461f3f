use std::path::PathBuf;

use crate::constants::output::DEFAULT_OUTPUT_DIR;
use crate::types::FinalStateTag;

/// Top-level configuration for one pick run.
#[derive(Clone, Debug)]
pub struct PickConfig {
    /// Directory that receives the per-channel JSON files.
    pub output_dir: PathBuf,
    /// Optional JSON run-range catalog; `None` uses the built-in 2011 catalog.
    pub catalog_path: Option<PathBuf>,
    /// Final states to write; empty writes every channel.
    pub channels: Vec<FinalStateTag>,
    /// Group and report without writing files.
    pub dry_run: bool,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            catalog_path: None,
            channels: Vec::new(),
            dry_run: false,
        }
    }
}
