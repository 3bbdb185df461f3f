//! Dataset resolution interfaces.
//!
//! Ownership model:
//! - `DatasetResolver` is the grouping-facing lookup from a run and primary
//!   dataset to a dataset name.
//! - `InMemoryResolver` holds explicit `(run, primary dataset)` pairs.
//! - `RunRangeCatalog` resolves through inclusive run ranges per primary
//!   dataset, which is how recorded data is actually partitioned.

use std::collections::HashMap;

use crate::classify::PrimaryDataset;
use crate::errors::PickError;
use crate::types::{DatasetName, RunNumber};

/// Run-range dataset catalog.
pub mod catalog;

pub use catalog::{RunRange, RunRangeCatalog};

/// Lookup from `(run, primary dataset)` to a dataset name.
///
/// Implementations must fail with [`PickError::DatasetNotFound`] (or another
/// error) rather than invent a placeholder when no mapping exists.
pub trait DatasetResolver {
    /// Resolve the dataset that recorded `run` in the `primary` stream.
    fn resolve(&self, run: RunNumber, primary: PrimaryDataset) -> Result<DatasetName, PickError>;
}

impl<F> DatasetResolver for F
where
    F: Fn(RunNumber, PrimaryDataset) -> Result<DatasetName, PickError>,
{
    fn resolve(&self, run: RunNumber, primary: PrimaryDataset) -> Result<DatasetName, PickError> {
        self(run, primary)
    }
}

/// Resolver backed by an explicit `(run, primary dataset)` table.
#[derive(Clone, Debug, Default)]
pub struct InMemoryResolver {
    entries: HashMap<(RunNumber, PrimaryDataset), DatasetName>,
}

impl InMemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dataset` for `(run, primary)`, replacing any previous entry.
    pub fn with_entry(
        mut self,
        run: RunNumber,
        primary: PrimaryDataset,
        dataset: impl Into<DatasetName>,
    ) -> Self {
        self.insert(run, primary, dataset);
        self
    }

    /// Register `dataset` for `(run, primary)` in place.
    pub fn insert(&mut self, run: RunNumber, primary: PrimaryDataset, dataset: impl Into<DatasetName>) {
        self.entries.insert((run, primary), dataset.into());
    }
}

impl DatasetResolver for InMemoryResolver {
    fn resolve(&self, run: RunNumber, primary: PrimaryDataset) -> Result<DatasetName, PickError> {
        self.entries
            .get(&(run, primary))
            .cloned()
            .ok_or_else(|| PickError::DatasetNotFound {
                run,
                primary_dataset: primary.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_resolvers() {
        let stub = |run: RunNumber, primary: PrimaryDataset| -> Result<DatasetName, PickError> {
            Ok(format!("{primary}_{run}"))
        };
        assert_eq!(
            stub.resolve(171178, PrimaryDataset::DoubleMu).unwrap(),
            "DoubleMu_171178"
        );
    }

    #[test]
    fn in_memory_resolver_matches_run_and_primary_dataset() {
        let resolver = InMemoryResolver::new()
            .with_entry(171178, PrimaryDataset::DoubleMu, "SampleX")
            .with_entry(171178, PrimaryDataset::MuEg, "SampleY");
        assert_eq!(
            resolver.resolve(171178, PrimaryDataset::DoubleMu).unwrap(),
            "SampleX"
        );
        assert_eq!(
            resolver.resolve(171178, PrimaryDataset::MuEg).unwrap(),
            "SampleY"
        );
    }

    #[test]
    fn in_memory_resolver_reports_missing_pairs() {
        let resolver = InMemoryResolver::new().with_entry(1, PrimaryDataset::DoubleMu, "A");
        let err = resolver
            .resolve(1, PrimaryDataset::Unclassified)
            .unwrap_err();
        match err {
            PickError::DatasetNotFound {
                run,
                primary_dataset,
            } => {
                assert_eq!(run, 1);
                assert_eq!(primary_dataset, "ERROR");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
