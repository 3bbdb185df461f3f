#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner shared by the `pick_zh_events` binary.
pub mod apps;
/// Final-state to primary-dataset classification.
pub mod classify;
/// Pick-run configuration.
pub mod config;
/// Centralized constants for naming, classification, and the catalog.
pub mod constants;
/// Event records and grouped mapping types.
pub mod data;
/// Compiled-in candidate event table.
pub mod events;
/// Grouping of events by final state and dataset.
pub mod grouping;
/// Per-channel count summaries.
pub mod metrics;
/// End-to-end group-and-write entry point.
pub mod pick;
/// Dataset resolvers and the run-range catalog.
pub mod source;
/// Output transports (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use classify::{PrimaryDataset, classify};
pub use config::PickConfig;
pub use data::{ChannelEvents, DatasetEvents, EventId, EventRecord};
pub use errors::PickError;
pub use events::ZH_CANDIDATES;
pub use grouping::{group_events, select_channels};
pub use pick::{PickReport, pick_events};
pub use source::{DatasetResolver, InMemoryResolver, RunRange, RunRangeCatalog};
pub use transport::fs::EventListWriter;
pub use types::{DatasetName, EventNumber, FinalStateTag, LumiSection, RunNumber};
