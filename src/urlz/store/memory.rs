use super::DataStore;
use crate::error::{Result, UrlzError};
use crate::model::RecordSet;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: RecordSet,
    saves: usize,
    simulate_unreadable: bool,
    simulate_malformed: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make `load` fail as if the backing storage could not be read.
    pub fn set_simulate_unreadable(&mut self, simulate: bool) {
        self.simulate_unreadable = simulate;
    }

    /// Make `load` fail as if the stored data could not be parsed.
    pub fn set_simulate_malformed(&mut self, simulate: bool) {
        self.simulate_malformed = simulate;
    }

    /// Make `save` fail, leaving the previously stored records untouched.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// What a fresh process would load.
    pub fn stored(&self) -> &RecordSet {
        &self.records
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<RecordSet> {
        if self.simulate_unreadable {
            return Err(UrlzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read error",
            )));
        }
        if self.simulate_malformed {
            return Err(UrlzError::Store("simulated malformed data".to_string()));
        }
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &RecordSet) -> Result<()> {
        if self.simulate_write_error {
            return Err(UrlzError::Io(io::Error::other("simulated write error")));
        }
        self.records = records.clone();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Mapping;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_mapping(mut self, short: &str, long: &str) -> Self {
            self.store.records.push(Mapping::new(short, long));
            self
        }

        pub fn with_mappings(mut self, count: usize) -> Self {
            for i in 0..count {
                let short = format!("code{:02}", i + 1);
                let long = format!("https://example.com/page/{}", i + 1);
                self.store.records.push(Mapping::new(short, long));
            }
            self
        }
    }
}
