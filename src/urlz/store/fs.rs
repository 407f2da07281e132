use super::DataStore;
use crate::error::{Result, UrlzError};
use crate::model::RecordSet;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<RecordSet> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file, starting empty");
                return Ok(RecordSet::new());
            }
            Err(e) => return Err(UrlzError::Io(e)),
        };

        // Invalid UTF-8 is replaced with U+FFFD rather than discarding the records.
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!(path = %self.path.display(), "backing file is not valid UTF-8, replacing bad bytes");
        }

        // An empty file or a literal `null` both mean "nothing stored yet".
        if content.trim().is_empty() {
            return Ok(RecordSet::new());
        }
        let records: Option<RecordSet> =
            serde_json::from_str(&content).map_err(UrlzError::Serialization)?;
        let records = records.unwrap_or_default();

        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &RecordSet) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(UrlzError::Serialization)?;
        fs::write(&self.path, content).map_err(UrlzError::Io)?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load;
    use crate::model::Mapping;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("urls.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_and_null_files_load_empty() {
        let (_dir, store) = setup();

        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "null").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_keeps_records() {
        let (_dir, store) = setup();
        let mut bytes = br#"[{"short":"keep01","long":"http://caf"#.to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(br#".example"}]"#);
        fs::write(store.path(), bytes).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records.find_short("keep01").unwrap().long,
            "http://caf\u{FFFD}.example"
        );
    }

    #[test]
    fn unreadable_path_is_io_error_and_loads_silently_empty() {
        let (_dir, store) = setup();
        fs::create_dir(store.path()).unwrap();

        assert!(matches!(store.load(), Err(UrlzError::Io(_))));

        let (records, messages) = load::run(&store);
        assert!(records.is_empty());
        assert!(messages.is_empty());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(UrlzError::Serialization(_))));

        // Valid JSON of the wrong shape is malformed too.
        fs::write(store.path(), r#"{"short": "abc123"}"#).unwrap();
        assert!(matches!(store.load(), Err(UrlzError::Serialization(_))));
    }

    #[test]
    fn save_then_load_preserves_order() {
        let (_dir, mut store) = setup();
        let records = RecordSet::from(vec![
            Mapping::new("zzzzzz", "http://first.example"),
            Mapping::new("aaaaaa", "http://second.example"),
        ]);

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn saves_pretty_printed_with_two_space_indent() {
        let (_dir, mut store) = setup();
        let records = RecordSet::from(vec![Mapping::new("abc123", "http://example.com")]);
        store.save(&records).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            on_disk,
            "[\n  {\n    \"short\": \"abc123\",\n    \"long\": \"http://example.com\"\n  }\n]"
        );
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, mut store) = setup();
        store
            .save(&RecordSet::from(vec![Mapping::new("aaaaaa", "http://a.example")]))
            .unwrap();
        store.save(&RecordSet::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nope").join("urls.json"));
        let result = store.save(&RecordSet::new());
        assert!(matches!(result, Err(UrlzError::Io(_))));
    }
}
