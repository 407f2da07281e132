use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecordSet;
use crate::store::DataStore;
use tracing::warn;

/// Writes the whole record set back to the store.
///
/// A failed write is reported on `result` and otherwise ignored; the
/// in-memory set is left as it is. Returns whether the write succeeded.
pub fn run<S: DataStore>(store: &mut S, records: &RecordSet, result: &mut CmdResult) -> bool {
    match store.save(records) {
        Ok(()) => true,
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "could not write store");
            result.add_message(CmdMessage::error(format!(
                "Error writing {}: {}",
                store.describe(),
                e
            )));
            false
        }
    }
}
