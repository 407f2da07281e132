//! # Urlz Architecture
//!
//! Urlz is a personal, offline URL shortener. Every short code to long URL
//! mapping lives in one JSON file (`urls.json` in the current directory
//! unless configured otherwise), loaded once per invocation and rewritten in
//! full after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, sets up logging, prints messages       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the loaded RecordSet and the generator   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, persist, create, expand, list, delete              │
//! │  - Storage failures become messages, never errors           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Nothing a command does is fatal. A missing or unreadable file is an empty
//! store, a malformed one is an empty store plus an error message, and a
//! failed write is reported while the in-memory change stands. Looking up or
//! deleting an unknown code is a normal outcome, reported as a warning.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Mapping` and `RecordSet`
//! - [`code`]: Short code generation and collision-free allocation
//! - [`config`]: Backing file resolution and verbosity
//! - [`error`]: Error types

pub mod api;
pub mod code;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
