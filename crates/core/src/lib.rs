// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod bulk_add;
pub mod columns;
mod command;
mod error;
mod lock;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use bulk_add::BulkAddDialog;
pub use columns::{Cell, RosterColumn, RowAction, RuleColumn};
pub use command::{Command, NavTarget, Tab};
pub use error::CoreError;
pub use lock::{EditLock, GuardOutcome, LockOutcome};
pub use state::{RosterFilter, ScreenMode, Session, SessionConfig, Signal, TransitionResult};
pub use store::{DriverRules, RuleField, RuleStore, StatusChange};
