use crate::data::ChannelEvents;
use crate::types::FinalStateTag;

/// Aggregate balance of event counts across channels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSummary {
    /// Events across all channels.
    pub total: usize,
    /// Number of channels.
    pub channels: usize,
    /// Smallest per-channel event count.
    pub min: usize,
    /// Largest per-channel event count.
    pub max: usize,
    /// Mean events per channel.
    pub mean: f64,
    /// Per-channel breakdown, largest first.
    pub per_channel: Vec<ChannelShare>,
}

/// One channel's event count and share of the total.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelShare {
    /// Final state of the channel.
    pub final_state: FinalStateTag,
    /// Distinct datasets in the channel.
    pub datasets: usize,
    /// Events in the channel.
    pub events: usize,
    /// Fraction of all events, 0 when there are none.
    pub share: f64,
}

/// Summarize a grouped mapping. `None` when there are no channels.
///
/// `per_channel` is sorted by descending event count, ties by final state.
pub fn channel_shares(channels: &ChannelEvents) -> Option<ChannelSummary> {
    let mut per_channel: Vec<ChannelShare> = channels
        .iter()
        .map(|(final_state, datasets)| ChannelShare {
            final_state: final_state.clone(),
            datasets: datasets.len(),
            events: datasets.values().map(Vec::len).sum(),
            share: 0.0,
        })
        .collect();

    let min = per_channel.iter().map(|entry| entry.events).min()?;
    let max = per_channel.iter().map(|entry| entry.events).max()?;
    let total: usize = per_channel.iter().map(|entry| entry.events).sum();
    let count = per_channel.len();

    for entry in &mut per_channel {
        entry.share = if total == 0 {
            0.0
        } else {
            entry.events as f64 / total as f64
        };
    }
    per_channel.sort_by(|a, b| {
        b.events
            .cmp(&a.events)
            .then_with(|| a.final_state.cmp(&b.final_state))
    });

    Some(ChannelSummary {
        total,
        channels: count,
        min,
        max,
        mean: total as f64 / count as f64,
        per_channel,
    })
}
