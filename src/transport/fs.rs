use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::output::{DEFAULT_OUTPUT_DIR, FILE_PREFIX, FILE_SUFFIX, TEMP_EXTENSION};
use crate::data::{ChannelEvents, DatasetEvents};
use crate::errors::PickError;

/// Writes one JSON event list per final state under a root directory.
#[derive(Clone, Debug)]
pub struct EventListWriter {
    root: PathBuf,
}

impl Default for EventListWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl EventListWriter {
    /// Create a writer rooted at `root`. Nothing touches disk until a write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the event list for `final_state`.
    pub fn channel_path(&self, final_state: &str) -> PathBuf {
        self.root.join(format!("{FILE_PREFIX}{final_state}{FILE_SUFFIX}"))
    }

    /// Serialize `datasets` as 2-space indented JSON into the channel file.
    ///
    /// The payload goes to a temporary sibling first and is renamed over the
    /// final path, so an existing file is replaced whole or left untouched.
    pub fn write_channel(
        &self,
        final_state: &str,
        datasets: &DatasetEvents,
    ) -> Result<PathBuf, PickError> {
        fs::create_dir_all(&self.root)?;

        let path = self.channel_path(final_state);
        let tmp_path = path.with_extension(TEMP_EXTENSION);
        if let Err(err) = write_json(&tmp_path, &path, datasets) {
            if tmp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&tmp_path) {
                    warn!(
                        "[event_lists:write] could not remove {}: {}",
                        tmp_path.display(),
                        cleanup
                    );
                }
            }
            return Err(err);
        }
        fs::rename(&tmp_path, &path)?;

        let events: usize = datasets.values().map(Vec::len).sum();
        info!(
            "[event_lists:write] {} -> {} ({} datasets, {} events)",
            final_state,
            path.display(),
            datasets.len(),
            events
        );
        Ok(path)
    }

    /// Create the root, then write every channel. Returns the written paths
    /// in channel order.
    pub fn write_all(&self, channels: &ChannelEvents) -> Result<Vec<PathBuf>, PickError> {
        fs::create_dir_all(&self.root)?;
        let mut written = Vec::with_capacity(channels.len());
        for (final_state, datasets) in channels {
            written.push(self.write_channel(final_state, datasets)?);
        }
        Ok(written)
    }

    /// Parse a previously written channel file.
    pub fn read_channel(&self, final_state: &str) -> Result<DatasetEvents, PickError> {
        let path = self.channel_path(final_state);
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|source| PickError::Json { path, source })
    }
}

fn write_json(tmp_path: &Path, path: &Path, datasets: &DatasetEvents) -> Result<(), PickError> {
    let mut writer = BufWriter::new(File::create(tmp_path)?);
    serde_json::to_writer_pretty(&mut writer, datasets).map_err(|source| PickError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventId;
    use tempfile::tempdir;

    fn sample_datasets() -> DatasetEvents {
        let mut datasets = DatasetEvents::new();
        datasets.insert(
            "SampleX".to_string(),
            vec![EventId(171178, 12, 11119024), EventId(161217, 396, 346679510)],
        );
        datasets
    }

    #[test]
    fn channel_path_follows_naming_convention() {
        let writer = EventListWriter::new("out");
        assert_eq!(
            writer.channel_path("mmet"),
            PathBuf::from("out").join("2l2tau_mmet_zh_events.json")
        );
        assert_eq!(EventListWriter::default().root(), Path::new("event_lists"));
    }

    #[test]
    fn write_channel_uses_two_space_indentation() {
        let temp = tempdir().unwrap();
        let writer = EventListWriter::new(temp.path());
        let mut datasets = DatasetEvents::new();
        datasets.insert("SampleX".to_string(), vec![EventId(171178, 12, 11119024)]);

        let path = writer.write_channel("mmet", &datasets).unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert_eq!(
            body,
            "{\n  \"SampleX\": [\n    [\n      171178,\n      12,\n      11119024\n    ]\n  ]\n}"
        );
    }

    #[test]
    fn write_channel_creates_missing_parents() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested").join("event_lists");
        let writer = EventListWriter::new(&root);
        writer.write_channel("eeet", &sample_datasets()).unwrap();
        assert!(root.join("2l2tau_eeet_zh_events.json").is_file());
        assert!(!root.join("2l2tau_eeet_zh_events.json.tmp").exists());
    }

    #[test]
    fn write_all_creates_root_without_channels() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("event_lists");
        let written = EventListWriter::new(&root)
            .write_all(&ChannelEvents::new())
            .unwrap();
        assert!(written.is_empty());
        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn rewrite_overwrites_with_identical_bytes() {
        let temp = tempdir().unwrap();
        let writer = EventListWriter::new(temp.path());
        let path = writer.write_channel("mmmt", &sample_datasets()).unwrap();
        let first = fs::read(&path).unwrap();

        fs::write(&path, b"stale").unwrap();
        writer.write_channel("mmmt", &sample_datasets()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn read_channel_returns_written_mapping() {
        let temp = tempdir().unwrap();
        let writer = EventListWriter::new(temp.path());
        let datasets = sample_datasets();
        writer.write_channel("mmet", &datasets).unwrap();
        assert_eq!(writer.read_channel("mmet").unwrap(), datasets);
    }

    #[test]
    fn read_channel_reports_malformed_files() {
        let temp = tempdir().unwrap();
        let writer = EventListWriter::new(temp.path());
        fs::write(writer.channel_path("mmet"), "{\"SampleX\": [[1, 2]]}").unwrap();
        assert!(matches!(
            writer.read_channel("mmet"),
            Err(PickError::Json { .. })
        ));
        assert!(matches!(writer.read_channel("eeet"), Err(PickError::Io(_))));
    }

    #[test]
    fn write_fails_when_root_is_a_file() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("event_lists");
        fs::write(&blocker, b"not a directory").unwrap();
        let writer = EventListWriter::new(&blocker);
        assert!(matches!(
            writer.write_channel("mmet", &sample_datasets()),
            Err(PickError::Io(_))
        ));
    }
}
