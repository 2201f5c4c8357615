//! Container file sink implementation.

use crate::AvroFileSinkError;
use apache_avro::Writer;
use fakegen_records::{AccessEvent, Profile, ACCESS_EVENT_SCHEMA, PROFILE_SCHEMA};
use fakegen_sink::RecordSink;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the profile container, created in the output directory.
pub const PROFILE_FILE_NAME: &str = "profiles.avro";
/// File name of the access-event container.
pub const EVENT_FILE_NAME: &str = "access_events.avro";

/// Sink writing each record type to its own Avro object container file.
///
/// The schema is written once into each file header at creation. Records are
/// buffered by the underlying writer and flushed on `close`, so `close` must
/// run before the files are read back.
pub struct AvroFileSink {
    // None after close; writes past close are rejected rather than
    // silently reopening the files
    profile_writer: Option<Writer<'static, File>>,
    event_writer: Option<Writer<'static, File>>,
}

impl AvroFileSink {
    /// Create both container files in `dir`, truncating any previous run's
    /// output.
    pub fn open(dir: &Path) -> Result<Self, AvroFileSinkError> {
        let profile_writer = Writer::new(&PROFILE_SCHEMA, create_file(dir, PROFILE_FILE_NAME)?);
        let event_writer = Writer::new(&ACCESS_EVENT_SCHEMA, create_file(dir, EVENT_FILE_NAME)?);

        info!(
            "writing avro container files {} and {} in {}",
            PROFILE_FILE_NAME,
            EVENT_FILE_NAME,
            dir.display()
        );

        Ok(Self {
            profile_writer: Some(profile_writer),
            event_writer: Some(event_writer),
        })
    }

    pub fn append_profile(&mut self, profile: &Profile) -> Result<(), AvroFileSinkError> {
        let writer = self.profile_writer.as_mut().ok_or(AvroFileSinkError::Closed)?;
        writer.append_ser(profile)?;
        Ok(())
    }

    pub fn append_event(&mut self, event: &AccessEvent) -> Result<(), AvroFileSinkError> {
        let writer = self.event_writer.as_mut().ok_or(AvroFileSinkError::Closed)?;
        writer.append_ser(event)?;
        Ok(())
    }

    /// Flush both writers and close the files. Further writes fail with
    /// [`AvroFileSinkError::Closed`].
    pub fn close_files(&mut self) -> Result<(), AvroFileSinkError> {
        close_writers(self.profile_writer.take(), self.event_writer.take())
    }
}

// Both writers are flushed even when the first flush fails, so a bad
// profile file cannot drop the event file's buffered tail. The first
// error is the one reported.
fn close_writers<W: std::io::Write>(
    profile_writer: Option<Writer<'static, W>>,
    event_writer: Option<Writer<'static, W>>,
) -> Result<(), AvroFileSinkError> {
    let profile_result = flush_writer(profile_writer);
    let event_result = flush_writer(event_writer);
    profile_result.and(event_result)
}

fn flush_writer<W: std::io::Write>(
    writer: Option<Writer<'static, W>>,
) -> Result<(), AvroFileSinkError> {
    if let Some(mut writer) = writer {
        writer.flush()?;
    }
    Ok(())
}

fn create_file(dir: &Path, name: &str) -> Result<File, AvroFileSinkError> {
    let path: PathBuf = dir.join(name);
    File::create(&path).map_err(|source| AvroFileSinkError::Unavailable { path, source })
}

#[async_trait::async_trait]
impl RecordSink for AvroFileSink {
    async fn write_profile(&mut self, profile: &Profile) -> anyhow::Result<()> {
        self.append_profile(profile)?;
        Ok(())
    }

    async fn write_event(&mut self, event: &AccessEvent) -> anyhow::Result<()> {
        self.append_event(event)?;
        Ok(())
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.close_files()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apache_avro::{from_value, Reader};
    use fakegen_records::HttpMethod;

    fn sample_profile() -> Profile {
        Profile {
            entity_id: "ivan.petrov.9120345".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            address: "311 Lakeview Dr, Newport, NY 13416".to_string(),
            phone: "(212) 555-0188".to_string(),
            secret: "vK19mQx2RtZa".to_string(),
            plan_tier: "trial".to_string(),
            payment_token: "5500-1234-5678-9010".to_string(),
        }
    }

    fn sample_event(entity_id: &str) -> AccessEvent {
        AccessEvent {
            entity_id: entity_id.to_string(),
            source_addr: "198.51.100.7".to_string(),
            timestamp: "15/Jun/2024:12:30:45 +0000".to_string(),
            method: HttpMethod::Get,
            target: "https://www.stonegate.org/pricing".to_string(),
            status_code: "200".to_string(),
            user_agent: "Wget/1.21.4".to_string(),
        }
    }

    #[test]
    fn test_write_close_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let profile = sample_profile();
        let event = sample_event(&profile.entity_id);

        let mut sink = AvroFileSink::open(dir.path()).unwrap();
        sink.append_profile(&profile).unwrap();
        sink.append_event(&event).unwrap();
        sink.close_files().unwrap();

        let reader =
            Reader::new(File::open(dir.path().join(PROFILE_FILE_NAME)).unwrap()).unwrap();
        let profiles: Vec<Profile> = reader
            .map(|value| from_value(&value.unwrap()).unwrap())
            .collect();
        assert_eq!(profiles, vec![profile]);

        let reader = Reader::new(File::open(dir.path().join(EVENT_FILE_NAME)).unwrap()).unwrap();
        let events: Vec<AccessEvent> = reader
            .map(|value| from_value(&value.unwrap()).unwrap())
            .collect();
        assert_eq!(events, vec![event]);
    }

    #[test]
    fn test_write_after_close_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = AvroFileSink::open(dir.path()).unwrap();
        sink.close_files().unwrap();

        // Closing twice is harmless, writing past close is not
        sink.close_files().unwrap();
        assert!(matches!(
            sink.append_profile(&sample_profile()),
            Err(AvroFileSinkError::Closed)
        ));
    }

    #[test]
    fn test_close_flushes_remaining_writer_after_flush_failure() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct ToggleWrite {
            bytes: Arc<Mutex<Vec<u8>>>,
            fail: Arc<AtomicBool>,
        }

        impl std::io::Write for ToggleWrite {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if self.fail.load(Ordering::SeqCst) {
                    return Err(std::io::Error::other("no space left"));
                }
                self.bytes.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let profile_fail = Arc::new(AtomicBool::new(false));
        let profile_target = ToggleWrite {
            bytes: Arc::new(Mutex::new(Vec::new())),
            fail: profile_fail.clone(),
        };
        let event_target = ToggleWrite {
            bytes: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(AtomicBool::new(false)),
        };
        let event_bytes = event_target.bytes.clone();

        let mut profile_writer = Writer::new(&PROFILE_SCHEMA, profile_target);
        let mut event_writer = Writer::new(&ACCESS_EVENT_SCHEMA, event_target);
        profile_writer.append_ser(&sample_profile()).unwrap();
        event_writer
            .append_ser(&sample_event("ivan.petrov.9120345"))
            .unwrap();

        let before_close = event_bytes.lock().unwrap().len();
        profile_fail.store(true, Ordering::SeqCst);

        let result = close_writers(Some(profile_writer), Some(event_writer));
        assert!(matches!(result, Err(AvroFileSinkError::Encoding(_))));
        // the event block still landed despite the profile failure
        assert!(event_bytes.lock().unwrap().len() > before_close);
    }

    #[test]
    fn test_open_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            AvroFileSink::open(&missing),
            Err(AvroFileSinkError::Unavailable { .. })
        ));
    }
}
