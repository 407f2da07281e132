use crate::code::ShortCodeGenerator;
use crate::commands::{persist, CmdMessage, CmdResult};
use crate::model::{Mapping, RecordSet};
use crate::store::DataStore;
use rand::Rng;
use tracing::debug;

pub fn run<S: DataStore, R: Rng>(
    store: &mut S,
    records: &mut RecordSet,
    codes: &mut ShortCodeGenerator<R>,
    long: String,
) -> CmdResult {
    let mut result = CmdResult::default();

    // Shortening the same URL twice is allowed; each call gets its own code.
    if records.contains_long(&long) {
        result.add_message(CmdMessage::info(
            "URL already exists! Generating a new short code anyway...",
        ));
    }

    let short = codes.allocate(records);
    debug!(short = %short, long = %long, "creating mapping");
    let mapping = Mapping::new(short, long);
    records.push(mapping.clone());
    persist::run(store, records, &mut result);

    result.add_message(CmdMessage::success(format!(
        "Short URL code: {}",
        mapping.short
    )));
    result.with_affected(vec![mapping])
}
