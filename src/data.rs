use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::types::{DatasetName, EventNumber, FinalStateTag, LumiSection, RunNumber};

/// One row of the candidate table: a final state plus the event coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventRecord {
    /// Final-state tag over `e`, `m`, `t` (for example `mmet`).
    pub final_state: &'static str,
    /// Run number.
    pub run: RunNumber,
    /// Luminosity-section number.
    pub lumi: LumiSection,
    /// Event number.
    pub event: EventNumber,
}

impl EventRecord {
    /// Build a record in `const` context.
    pub const fn new(
        final_state: &'static str,
        run: RunNumber,
        lumi: LumiSection,
        event: EventNumber,
    ) -> Self {
        Self {
            final_state,
            run,
            lumi,
            event,
        }
    }

    /// Coordinates of this record without the final state.
    pub const fn id(&self) -> EventId {
        EventId(self.run, self.lumi, self.event)
    }
}

/// `(run, lumi, event)` triple. Serializes as a three-element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub RunNumber, pub LumiSection, pub EventNumber);

/// Dataset name to event ids, in first-seen order.
pub type DatasetEvents = IndexMap<DatasetName, Vec<EventId>>;

/// Final state to its dataset buckets, in first-seen order.
pub type ChannelEvents = IndexMap<FinalStateTag, DatasetEvents>;
