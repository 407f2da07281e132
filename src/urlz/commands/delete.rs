use crate::commands::{persist, CmdMessage, CmdResult};
use crate::model::RecordSet;
use crate::store::DataStore;
use tracing::debug;

/// Removes the first mapping for `short`. A miss writes nothing.
pub fn run<S: DataStore>(store: &mut S, records: &mut RecordSet, short: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(removed) = records.remove_short(short) else {
        result.add_message(CmdMessage::warning(format!(
            "Short code not found: {}",
            short
        )));
        return result;
    };

    debug!(short = %removed.short, long = %removed.long, "deleting mapping");
    persist::run(store, records, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Deleted short code: {}",
        removed.short
    )));
    result.with_affected(vec![removed])
}
