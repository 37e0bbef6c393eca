//! # Stockpad Architecture
//!
//! Stockpad keeps a small product inventory (id, name, brand, price, quantity)
//! in a single JSON file. The library holds all of the behavior; the `stockpad`
//! binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive shell, table rendering          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - StockApi owns the session catalog                        │
//! │  - Explicit load / save lifecycle, dirty tracking           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete / search / list over Vec<Product>  │
//! │  - Returns CmdResult, no I/O                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr (diagnostics go
//! through `tracing`), nothing exits the process, and nothing prompts.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`store`]: persistence abstraction and implementations
//! - [`model`]: `Product` and the validated input types
//! - [`ids`]: `LT01`-style id generation
//! - [`config`]: configuration file handling
//! - [`init`]: resolves config and data file locations into a ready `StockApi`
//! - [`logging`]: tracing subscriber setup for the binary
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
