// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_desk_domain::{DriverKey, RuleId};

/// Errors that can occur during state transitions.
///
/// None of these leave a partial change behind: the session that was
/// passed in is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The driver has no entry in the rule store.
    DriverNotFound(DriverKey),
    /// The driver has no rule with this id.
    RuleNotFound {
        /// The driver whose rules were searched.
        driver: DriverKey,
        /// The missing rule.
        rule_id: RuleId,
    },
    /// A row-level edit was attempted while no driver holds the edit lock.
    NotEditing(DriverKey),
    /// The session is read-only.
    ReadOnly,
    /// Bulk-add was confirmed with nothing selected.
    EmptySelection,
    /// The driver is not on the roster.
    UnknownDriver(DriverKey),
    /// The driver cannot be selected in the bulk-add dialog.
    NotSelectable(DriverKey),
    /// A bulk-add action was issued while the dialog is closed.
    DialogNotOpen,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DriverNotFound(driver) => {
                write!(f, "Driver '{driver}' has no renewal rules")
            }
            Self::RuleNotFound { driver, rule_id } => {
                write!(f, "Rule {rule_id} not found for driver '{driver}'")
            }
            Self::NotEditing(driver) => {
                write!(f, "Rules of driver '{driver}' are not being edited")
            }
            Self::ReadOnly => write!(f, "Session is read-only"),
            Self::EmptySelection => write!(f, "No drivers selected"),
            Self::UnknownDriver(driver) => write!(f, "Driver '{driver}' is not on the roster"),
            Self::NotSelectable(driver) => {
                write!(f, "Driver '{driver}' cannot be added to the renewal rules")
            }
            Self::DialogNotOpen => write!(f, "The bulk-add dialog is not open"),
        }
    }
}

impl std::error::Error for CoreError {}

