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

mod error;
mod roster;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use roster::{Driver, Gender, RentalStatus, Roster};
pub use types::{
    DriverKey, DriverRef, RenewalDuration, RenewalRule, Rent, RuleId, RuleStatus, Shift, WorkDay,
    WorkDays, default_rule_name,
};
pub use validation::{format_effective_date, parse_effective_date, validate_roster};
