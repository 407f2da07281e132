use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecordSet;

pub fn run(records: &RecordSet, short: &str) -> CmdResult {
    match records.find_short(short) {
        Some(mapping) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Original URL: {}",
                mapping.long
            )));
            result.with_expanded(mapping.clone())
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("URL not found: {}", short)));
            result
        }
    }
}
