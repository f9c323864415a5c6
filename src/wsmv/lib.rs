//! # wsmv Architecture
//!
//! wsmv relocates an editor's per-workspace storage bundles after the
//! project folders they belong to have been moved on disk. The editor
//! keys each bundle by a hash of the folder's path and creation time, so
//! a moved folder silently orphans its state — recently opened files, UI
//! layout, extension data — unless the bundle is re-keyed and every
//! stored path is rewritten to match.
//!
//! The crate is a library with a CLI client on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints diagnostics, owns exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: enumeration feeds the orchestrator          │
//! │  - Returns structured Result types, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - scan: enumerate bundles, select migration candidates     │
//! │  - migrate: the per-record migration state machine          │
//! │  - repair: normalize malformed workspace.json path fields   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Mechanism Layer                                            │
//! │  - ident: the editor's identifier hash (external contract)  │
//! │  - uri: native path ⇄ file: URI codec                       │
//! │  - metadata / statedb: the two stores that embed paths      │
//! │  - trash: injected reversible-delete capability             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure isolation
//!
//! Migration processes records strictly in sequence and each record is
//! its own failure domain: a precondition violation, identity mismatch,
//! or I/O error is reported for that record and the run continues. The
//! only internally atomic step is the state-store rewrite (one SQLite
//! transaction); a record that fails between bundle copy and rewrite is
//! left for manual reconciliation and surfaces on re-run as an
//! already-exists refusal rather than being overwritten.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade all clients go through
//! - [`commands`]: scan / migrate / repair business logic
//! - [`ident`]: workspace identifier derivation
//! - [`uri`]: path ⇄ URI codec
//! - [`metadata`]: the `workspace.json` record
//! - [`statedb`]: the embedded key-value store rewrite
//! - [`trash`]: the retirement capability
//! - [`config`]: migration configuration and default storage roots
//! - [`model`]: core data types
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod metadata;
pub mod model;
pub mod statedb;
pub mod trash;
pub mod uri;
