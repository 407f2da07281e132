//! # Storage Layer
//!
//! The [`DataStore`] trait is how the command layer reaches the backing
//! storage. A store only moves a whole [`RecordSet`] in or out; searching
//! and mutation happen in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single pretty-printed JSON file
//!   (`urls.json` unless configured otherwise). Every save rewrites the file.
//! - [`memory::InMemoryStore`]: No persistence. Can simulate unreadable,
//!   malformed, and unwritable storage for testing.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "short": "aZ09xY",
//!     "long": "https://example.com/some/long/path"
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::RecordSet;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read every mapping. A store that has never been written loads as empty.
    fn load(&self) -> Result<RecordSet>;

    /// Replace the stored mappings with `records`.
    fn save(&mut self, records: &RecordSet) -> Result<()>;

    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;
}
