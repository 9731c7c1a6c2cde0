// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::RosterFilter;
use crate::store::RuleField;
use fleet_desk_domain::{DriverKey, RuleId, WorkDay};
use serde::Serialize;

/// The table shown by the driver-management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// 全部: the driver roster.
    #[default]
    AllDrivers,
    /// 自動續約規則: the renewal rule editor.
    RenewalRules,
}

impl Tab {
    /// Converts this tab to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllDrivers => "all_drivers",
            Self::RenewalRules => "renewal_rules",
        }
    }
}

/// Everything that passes through the unsaved-changes guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// The 全部 tab.
    AllDrivers,
    /// The 自動續約規則 tab.
    RenewalRules,
    /// The 租用中 tab, which shows the roster table.
    Renting,
    /// The 已停租 tab, which shows the roster table.
    OffHire,
    /// The 查詢 button of the filter panel.
    Query,
    /// The 重置 button of the filter panel.
    Reset,
    /// The 新增司機至規則 button.
    OpenBulkAdd,
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put a driver's rule rows into edit mode.
    RequestEdit {
        /// The driver to edit.
        driver: DriverKey,
    },
    /// Leave edit mode, keeping every change made.
    ConfirmEdit,
    /// Switch tab, query, reset or open the bulk-add dialog.
    Navigate(NavTarget),
    /// Close the unsaved-changes warning.
    DismissWarning,
    /// Append a defaulted rule for a driver. Not gated by the edit lock.
    AddRule {
        /// The driver to add a rule for.
        driver: DriverKey,
    },
    /// Replace one field of a rule.
    UpdateField {
        /// The rule's driver.
        driver: DriverKey,
        /// The rule.
        rule_id: RuleId,
        /// The new value.
        field: RuleField,
    },
    /// Flip one work day of a rule.
    ToggleWorkDay {
        /// The rule's driver.
        driver: DriverKey,
        /// The rule.
        rule_id: RuleId,
        /// The day to flip.
        day: WorkDay,
    },
    /// Reactivate a rule.
    StartRule {
        /// The rule's driver.
        driver: DriverKey,
        /// The rule.
        rule_id: RuleId,
    },
    /// Stop a rule from renewing without removing it.
    TerminateRule {
        /// The rule's driver.
        driver: DriverKey,
        /// The rule.
        rule_id: RuleId,
    },
    /// Remove a rule.
    DeleteRule {
        /// The rule's driver.
        driver: DriverKey,
        /// The rule.
        rule_id: RuleId,
    },
    /// Replace the staged roster filter. Applied on the next query.
    SetFilter(RosterFilter),
    /// Replace the bulk-add search text.
    BulkAddSearch {
        /// The search text.
        text: String,
    },
    /// Select or unselect a driver in the bulk-add dialog.
    BulkAddToggle {
        /// The driver.
        driver: DriverKey,
    },
    /// Add the selected drivers and close the dialog.
    BulkAddConfirm,
    /// Close the dialog without adding anything.
    BulkAddCancel,
}

impl Command {
    /// Returns the command name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestEdit { .. } => "RequestEdit",
            Self::ConfirmEdit => "ConfirmEdit",
            Self::Navigate(_) => "Navigate",
            Self::DismissWarning => "DismissWarning",
            Self::AddRule { .. } => "AddRule",
            Self::UpdateField { .. } => "UpdateField",
            Self::ToggleWorkDay { .. } => "ToggleWorkDay",
            Self::StartRule { .. } => "StartRule",
            Self::TerminateRule { .. } => "TerminateRule",
            Self::DeleteRule { .. } => "DeleteRule",
            Self::SetFilter(_) => "SetFilter",
            Self::BulkAddSearch { .. } => "BulkAddSearch",
            Self::BulkAddToggle { .. } => "BulkAddToggle",
            Self::BulkAddConfirm => "BulkAddConfirm",
            Self::BulkAddCancel => "BulkAddCancel",
        }
    }

    /// Returns whether a read-only session must refuse this command.
    #[must_use]
    pub const fn mutates_rules(&self) -> bool {
        match self {
            Self::Navigate(target) => matches!(target, NavTarget::OpenBulkAdd),
            Self::ConfirmEdit | Self::DismissWarning | Self::SetFilter(_) => false,
            Self::RequestEdit { .. }
            | Self::AddRule { .. }
            | Self::UpdateField { .. }
            | Self::ToggleWorkDay { .. }
            | Self::StartRule { .. }
            | Self::TerminateRule { .. }
            | Self::DeleteRule { .. }
            | Self::BulkAddSearch { .. }
            | Self::BulkAddToggle { .. }
            | Self::BulkAddConfirm
            | Self::BulkAddCancel => true,
        }
    }
}
