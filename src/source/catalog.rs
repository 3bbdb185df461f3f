use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classify::PrimaryDataset;
use crate::constants::catalog::{DATASET_PREFIX, ERAS_2011};
use crate::errors::PickError;
use crate::source::DatasetResolver;
use crate::types::{DatasetName, RunNumber};

/// One catalog entry: the dataset holding an inclusive run range of a stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRange {
    /// Trigger stream this dataset belongs to.
    pub primary_dataset: PrimaryDataset,
    /// First run covered (inclusive).
    pub first_run: RunNumber,
    /// Last run covered (inclusive).
    pub last_run: RunNumber,
    /// Dataset name returned for runs in range.
    pub dataset: DatasetName,
}

impl RunRange {
    /// True when `run` falls inside this range.
    pub fn contains(&self, run: RunNumber) -> bool {
        (self.first_run..=self.last_run).contains(&run)
    }
}

/// Dataset resolver driven by per-stream run ranges.
#[derive(Clone, Debug)]
pub struct RunRangeCatalog {
    ranges: Vec<RunRange>,
}

impl RunRangeCatalog {
    /// Build a catalog, rejecting inverted ranges, unclassified streams, and
    /// overlapping ranges within one stream.
    pub fn new(ranges: Vec<RunRange>) -> Result<Self, PickError> {
        let mut per_stream: HashMap<PrimaryDataset, Vec<&RunRange>> = HashMap::new();
        for range in &ranges {
            if range.primary_dataset == PrimaryDataset::Unclassified {
                return Err(PickError::Catalog(format!(
                    "dataset '{}' is filed under the unclassified stream",
                    range.dataset
                )));
            }
            if range.first_run > range.last_run {
                return Err(PickError::Catalog(format!(
                    "dataset '{}' has first_run {} after last_run {}",
                    range.dataset, range.first_run, range.last_run
                )));
            }
            per_stream
                .entry(range.primary_dataset)
                .or_default()
                .push(range);
        }

        for (stream, mut entries) in per_stream {
            entries.sort_by_key(|range| (range.first_run, range.last_run));
            for pair in entries.windows(2) {
                if pair[1].first_run <= pair[0].last_run {
                    return Err(PickError::Catalog(format!(
                        "{stream} datasets '{}' and '{}' overlap at run {}",
                        pair[0].dataset, pair[1].dataset, pair[1].first_run
                    )));
                }
            }
        }

        Ok(Self { ranges })
    }

    /// Catalog for the 2011 eras, crossed with every recorded stream.
    ///
    /// Dataset names follow `data_<stream>_<era>`.
    pub fn builtin_2011() -> Self {
        let mut ranges = Vec::with_capacity(ERAS_2011.len() * PrimaryDataset::recorded().len());
        for stream in PrimaryDataset::recorded() {
            for (era, first_run, last_run) in ERAS_2011 {
                ranges.push(RunRange {
                    primary_dataset: stream,
                    first_run: *first_run,
                    last_run: *last_run,
                    dataset: format!("{DATASET_PREFIX}_{stream}_{era}"),
                });
            }
        }
        Self { ranges }
    }

    /// Parse a JSON array of [`RunRange`] entries.
    pub fn from_json_str(raw: &str) -> Result<Self, PickError> {
        let ranges: Vec<RunRange> = serde_json::from_str(raw)
            .map_err(|err| PickError::Catalog(format!("failed parsing catalog: {err}")))?;
        Self::new(ranges)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, PickError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            PickError::Catalog(format!("failed reading catalog {}: {err}", path.display()))
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "[event_lists:catalog] loaded {} run ranges from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }
}

impl DatasetResolver for RunRangeCatalog {
    fn resolve(&self, run: RunNumber, primary: PrimaryDataset) -> Result<DatasetName, PickError> {
        let found = self
            .ranges
            .iter()
            .find(|range| range.primary_dataset == primary && range.contains(run));
        match found {
            Some(range) => {
                debug!(
                    "[event_lists:catalog] run {} in {} -> {}",
                    run, primary, range.dataset
                );
                Ok(range.dataset.clone())
            }
            None => Err(PickError::DatasetNotFound {
                run,
                primary_dataset: primary.to_string(),
            }),
        }
    }
}
