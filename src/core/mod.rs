//! # Core Application Logic
//!
//! This module contains Sideline's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (records)    │
//!                    │  • Filter / Tabs        │
//!                    │  • Route / Navigator    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    Data    │
//!          │  Adapter   │                │   Source   │
//!          │ (ratatui)  │                │  (fixture) │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Records, identifiers and the immutable `Catalog` snapshot
//! - [`filter`]: Case-insensitive multi-field search
//! - [`tabs`]: Sub-tab sets and the active-tab state
//! - [`route`]: Paths, active-route matching, screen resolution
//! - [`navigation`]: The `Router` collaborator and the `Navigator`
//! - [`screen`]: State that lives only while a screen is mounted
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod navigation;
pub mod route;
pub mod screen;
pub mod state;
pub mod tabs;

pub use action::{Action, Effect, update};
pub use state::App;
