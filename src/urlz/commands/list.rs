use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Mapping, RecordSet};

/// All mappings in insertion order, optionally narrowed by `search`.
///
/// The search is a case-insensitive substring match on either the code or
/// the URL. An empty store and a search with no hits get different messages.
pub fn run(records: &RecordSet, search: Option<&str>) -> CmdResult {
    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No URLs stored."));
        return result;
    }

    let listed: Vec<Mapping> = match search {
        Some(term) => {
            let needle = term.to_lowercase();
            records
                .iter()
                .filter(|m| {
                    m.short.to_lowercase().contains(&needle)
                        || m.long.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        }
        None => records.iter().cloned().collect(),
    };

    let mut result = CmdResult::default();
    if let Some(term) = search.filter(|_| listed.is_empty()) {
        result.add_message(CmdMessage::info(format!("No URLs match '{}'.", term)));
    }
    result.with_listed(listed)
}
