//! # Clientele Architecture
//!
//! Clientele is a **UI-agnostic customer-record library**. The interactive
//! menu is just one client of it; everything from `api.rs` inward takes plain
//! Rust arguments and returns plain Rust types.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, retry-on-invalid-input, rendering    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade over the store, owns the persistence trigger      │
//! │  - Returns structured CmdResult values, never prints        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs)                                     │
//! │  - Ordered record collection + id counter, pure logic       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (persist/, codec.rs)                     │
//! │  - Abstract Backend trait                                   │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! │  - Line codec: one record per `;`-delimited line            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. Input validation is
//! exposed as pure predicates in [`validate`] so the prompting loop in the
//! binary is the only place that retries.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`store`]: Record collection, id assignment, search, statistics
//! - [`persist`]: Storage abstraction and implementations
//! - [`codec`]: Line format (`id;name;email;phone;company;category`)
//! - [`model`]: Core data types (`Customer`, `Category`)
//! - [`validate`]: Field validation predicates
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompts and rendering for the binary (not part of
//!   the lib API)

pub mod api;
pub mod codec;
pub mod error;
pub mod model;
pub mod persist;
pub mod store;
pub mod validate;
