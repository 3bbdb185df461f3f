//! End-to-end pick: group the table, then write one file per channel.

use std::path::PathBuf;

use tracing::info;

use crate::config::PickConfig;
use crate::data::{ChannelEvents, EventRecord};
use crate::errors::PickError;
use crate::grouping::{group_events, select_channels};
use crate::source::DatasetResolver;
use crate::transport::fs::EventListWriter;

/// Outcome of [`pick_events`].
#[derive(Clone, Debug)]
pub struct PickReport {
    /// Grouped (and filtered) channels.
    pub channels: ChannelEvents,
    /// Files written, in channel order. Empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Group `events` through `resolver` and write the selected channels.
///
/// Grouping finishes before any file is written, so a resolver failure
/// leaves the output directory untouched.
pub fn pick_events<R>(
    config: &PickConfig,
    events: &[EventRecord],
    resolver: &R,
) -> Result<PickReport, PickError>
where
    R: DatasetResolver + ?Sized,
{
    let channels = group_events(events, resolver)?;
    let channels = select_channels(channels, &config.channels)?;

    if config.dry_run {
        info!(
            "[event_lists:pick] dry run, skipping {} channel files",
            channels.len()
        );
        return Ok(PickReport {
            channels,
            written: Vec::new(),
        });
    }

    let writer = EventListWriter::new(&config.output_dir);
    let written = writer.write_all(&channels)?;
    Ok(PickReport { channels, written })
}
