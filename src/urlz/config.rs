use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "urls.json";

/// Environment variable consulted when `--file` is not given.
pub const STORE_FILE_ENV: &str = "URLZ_FILE";

/// Runtime settings, resolved once from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlzConfig {
    /// Absolute path of the JSON file backing the store.
    pub store_path: PathBuf,
    pub verbose: bool,
}

impl UrlzConfig {
    /// `file` is whatever the user supplied (flag or env). Relative paths,
    /// including the default, are taken from `cwd`.
    pub fn resolve(file: Option<PathBuf>, cwd: &Path, verbose: bool) -> Self {
        let file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        let store_path = if file.is_absolute() {
            file
        } else {
            cwd.join(file)
        };
        Self {
            store_path,
            verbose,
        }
    }

    /// `RUST_LOG`-style directive for the log subscriber, if verbosity forces one.
    pub fn log_directive(&self) -> Option<&'static str> {
        self.verbose.then_some("urlz=debug")
    }
}
