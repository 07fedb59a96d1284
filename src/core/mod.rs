//! # Core Client Logic
//!
//! This module contains Aurora's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • display (view flags) │
//!                    │  • highlight (emphasis) │
//!                    │  • state (app data)     │
//!                    │  • config (settings)    │
//!                    │                         │
//!                    │  Pure where it matters. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │   Mobile   │      │    API     │
//!     │  (main.rs) │      │  (future)  │      │  (api/)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`display`]: session status + turn → which overlay regions are visible
//! - [`highlight`]: hint strings → emphasized spans of lesson text
//! - [`state`]: the `App` struct — all client state in one place
//! - [`config`]: layered settings (file, env, CLI)

pub mod config;
pub mod display;
pub mod highlight;
pub mod state;
