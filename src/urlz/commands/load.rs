use crate::commands::CmdMessage;
use crate::error::UrlzError;
use crate::model::RecordSet;
use crate::store::DataStore;
use tracing::warn;

/// Reads the record set once at startup. Never fails: anything the store
/// cannot deliver becomes an empty set.
///
/// An unreadable store is silent (it is logged only). Malformed data is
/// reported back as an error message.
pub fn run<S: DataStore>(store: &S) -> (RecordSet, Vec<CmdMessage>) {
    match store.load() {
        Ok(records) => (records, Vec::new()),
        Err(UrlzError::Io(e)) => {
            warn!(store = %store.describe(), error = %e, "could not read store, starting empty");
            (RecordSet::new(), Vec::new())
        }
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "could not decode store, starting empty");
            let message = CmdMessage::error(format!(
                "Error decoding {}: {}",
                store.describe(),
                e
            ));
            (RecordSet::new(), vec![message])
        }
    }
}
