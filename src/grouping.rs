//! Single-pass grouping of candidate events by final state and dataset.

use tracing::{debug, info};

use crate::classify::classify;
use crate::data::{ChannelEvents, EventRecord};
use crate::errors::PickError;
use crate::source::DatasetResolver;

/// Group `events` into final state -> dataset -> event ids.
///
/// Rows are processed in order; each bucket keeps the order its events
/// appeared in. The first resolver failure is returned as-is and no partial
/// mapping escapes.
pub fn group_events<R>(events: &[EventRecord], resolver: &R) -> Result<ChannelEvents, PickError>
where
    R: DatasetResolver + ?Sized,
{
    let mut channels = ChannelEvents::new();
    for record in events {
        let primary = classify(record.final_state);
        let dataset = resolver.resolve(record.run, primary)?;
        debug!(
            "[event_lists:group] {} run={} lumi={} event={} -> {} ({})",
            record.final_state, record.run, record.lumi, record.event, dataset, primary
        );
        channels
            .entry(record.final_state.to_string())
            .or_default()
            .entry(dataset)
            .or_default()
            .push(record.id());
    }

    info!(
        "[event_lists:group] grouped {} events into {} channels",
        events.len(),
        channels.len()
    );
    Ok(channels)
}

/// Keep only the listed final states, preserving channel order.
///
/// Every name in `keep` must be present in `channels`.
pub fn select_channels(channels: ChannelEvents, keep: &[String]) -> Result<ChannelEvents, PickError> {
    if keep.is_empty() {
        return Ok(channels);
    }
    if let Some(missing) = keep.iter().find(|tag| !channels.contains_key(*tag)) {
        return Err(PickError::Configuration(format!(
            "final state '{missing}' has no events"
        )));
    }
    Ok(channels
        .into_iter()
        .filter(|(tag, _)| keep.contains(tag))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PrimaryDataset;
    use crate::data::EventId;
    use crate::source::InMemoryResolver;
    use crate::types::{DatasetName, RunNumber};

    fn constant(_: RunNumber, _: PrimaryDataset) -> Result<DatasetName, PickError> {
        Ok("Sample".to_string())
    }

    #[test]
    fn buckets_keep_input_order() {
        let events = [
            EventRecord::new("mmmt", 3, 30, 300),
            EventRecord::new("eeet", 1, 10, 100),
            EventRecord::new("mmmt", 2, 20, 200),
            EventRecord::new("mmmt", 1, 10, 101),
        ];
        let channels = group_events(&events, &constant).unwrap();

        let keys: Vec<&str> = channels.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mmmt", "eeet"]);
        assert_eq!(
            channels["mmmt"]["Sample"],
            vec![EventId(3, 30, 300), EventId(2, 20, 200), EventId(1, 10, 101)]
        );
        assert_eq!(channels["eeet"]["Sample"], vec![EventId(1, 10, 100)]);
    }

    #[test]
    fn datasets_split_within_a_channel() {
        let events = [
            EventRecord::new("mmet", 10, 1, 1),
            EventRecord::new("mmet", 20, 2, 2),
            EventRecord::new("mmet", 11, 3, 3),
        ];
        let by_run = |run: RunNumber, primary: PrimaryDataset| -> Result<DatasetName, PickError> {
            Ok(if run < 15 {
                format!("{primary}_early")
            } else {
                format!("{primary}_late")
            })
        };
        let channels = group_events(&events, &by_run).unwrap();
        let datasets = &channels["mmet"];
        let names: Vec<&str> = datasets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["DoubleMu_early", "DoubleMu_late"]);
        assert_eq!(
            datasets["DoubleMu_early"],
            vec![EventId(10, 1, 1), EventId(11, 3, 3)]
        );
    }

    #[test]
    fn every_event_lands_in_exactly_one_bucket() {
        let channels = group_events(crate::events::ZH_CANDIDATES, &constant).unwrap();
        let total: usize = channels
            .values()
            .flat_map(|datasets| datasets.values())
            .map(Vec::len)
            .sum();
        assert_eq!(total, crate::events::ZH_CANDIDATES.len());
    }

    #[test]
    fn resolver_failure_aborts_grouping() {
        let resolver = InMemoryResolver::new().with_entry(1, PrimaryDataset::DoubleMu, "A");
        let events = [
            EventRecord::new("mmmt", 1, 1, 1),
            EventRecord::new("mt", 1, 1, 2),
            EventRecord::new("mmmt", 1, 1, 3),
        ];
        let err = group_events(&events, &resolver).unwrap_err();
        assert!(matches!(err, PickError::DatasetNotFound { run: 1, .. }));
    }

    #[test]
    fn empty_input_groups_to_empty_mapping() {
        let channels = group_events(&[], &constant).unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn select_channels_filters_and_validates() {
        let events = [
            EventRecord::new("mmmt", 1, 1, 1),
            EventRecord::new("eeet", 1, 1, 2),
            EventRecord::new("eett", 1, 1, 3),
        ];
        let channels = group_events(&events, &constant).unwrap();

        let kept = select_channels(channels.clone(), &["eett".to_string(), "mmmt".to_string()])
            .unwrap();
        let keys: Vec<&str> = kept.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mmmt", "eett"]);

        let all = select_channels(channels.clone(), &[]).unwrap();
        assert_eq!(all.len(), 3);

        let err = select_channels(channels, &["mmet".to_string()]).unwrap_err();
        assert!(matches!(err, PickError::Configuration(_)));
    }
}
