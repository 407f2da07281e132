//! # API Facade
//!
//! [`UrlzApi`] is the single entry point for every urlz operation. It owns
//! the store, the in-memory [`RecordSet`] and the short code generator, and
//! dispatches to `commands/*.rs`.
//!
//! The record set is loaded exactly once, in [`UrlzApi::open`]. Anything the
//! load had to report is kept until the caller asks for it with
//! [`UrlzApi::take_startup_messages`], so the CLI can print it before the
//! command's own output.
//!
//! Like the commands, the API never prints and never fails: storage trouble
//! comes back as messages on the [`CmdResult`].

use crate::code::ShortCodeGenerator;
use crate::commands;
use crate::model::RecordSet;
use crate::store::DataStore;
use rand::rngs::StdRng;
use rand::Rng;

pub struct UrlzApi<S: DataStore, R: Rng = StdRng> {
    store: S,
    records: RecordSet,
    codes: ShortCodeGenerator<R>,
    startup_messages: Vec<CmdMessage>,
}

impl<S: DataStore, R: Rng> UrlzApi<S, R> {
    pub fn open(store: S, codes: ShortCodeGenerator<R>) -> Self {
        let (records, startup_messages) = commands::load::run(&store);
        Self {
            store,
            records,
            codes,
            startup_messages,
        }
    }

    pub fn take_startup_messages(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.startup_messages)
    }

    pub fn shorten(&mut self, long: impl Into<String>) -> CmdResult {
        commands::create::run(
            &mut self.store,
            &mut self.records,
            &mut self.codes,
            long.into(),
        )
    }

    pub fn expand(&self, short: &str) -> CmdResult {
        commands::expand::run(&self.records, short)
    }

    pub fn list(&self, search: Option<&str>) -> CmdResult {
        commands::list::run(&self.records, search)
    }

    pub fn delete(&mut self, short: &str) -> CmdResult {
        commands::delete::run(&mut self.store, &mut self.records, short)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api(store: InMemoryStore) -> UrlzApi<InMemoryStore> {
        UrlzApi::open(store, ShortCodeGenerator::seeded(11))
    }

    #[test]
    fn open_loads_existing_records() {
        let mut api = api(StoreFixture::new().with_mappings(3).store);
        assert_eq!(api.records().len(), 3);
        assert!(api.take_startup_messages().is_empty());
    }

    #[test]
    fn startup_messages_are_handed_out_once() {
        let mut store = InMemoryStore::new();
        store.set_simulate_malformed(true);
        let mut api = api(store);

        assert_eq!(api.take_startup_messages().len(), 1);
        assert!(api.take_startup_messages().is_empty());
        assert!(api.records().is_empty());
    }

    #[test]
    fn shorten_then_expand_round_trips() {
        let mut api = api(InMemoryStore::new());
        let created = api.shorten("http://example.com/path?q=1");
        let short = &created.affected[0].short;

        let expanded = api.expand(short);
        assert_eq!(expanded.expanded.unwrap().long, "http://example.com/path?q=1");
    }

    #[test]
    fn delete_dispatches_and_persists() {
        let mut api = api(StoreFixture::new().with_mapping("aaaaaa", "http://a.example").store);
        let result = api.delete("aaaaaa");

        assert_eq!(result.affected.len(), 1);
        assert!(api.store().stored().is_empty());
        assert!(api.expand("aaaaaa").expanded.is_none());
    }

    #[test]
    fn list_dispatches_search() {
        let api = api(
            StoreFixture::new()
                .with_mapping("aaaaaa", "http://rust.example")
                .with_mapping("bbbbbb", "http://go.example")
                .store,
        );
        assert_eq!(api.list(None).listed.len(), 2);
        assert_eq!(api.list(Some("rust")).listed.len(), 1);
    }
}
