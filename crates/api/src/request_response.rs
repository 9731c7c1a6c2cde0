// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use fleet_desk::{Cell, RosterColumn, RuleColumn, ScreenMode, Signal, Tab};
use fleet_desk_domain::Driver;
use serde::{Deserialize, Serialize};

/// API request to open a screen session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// `all_drivers` or `renewal_rules`. Defaults to `all_drivers`.
    #[serde(default)]
    pub initial_view: Option<String>,
    /// Hide the rule controls. Defaults to the server setting.
    #[serde(default)]
    pub read_only: Option<bool>,
}

/// API response for a newly opened session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSessionResponse {
    /// The session identifier.
    pub session_id: u64,
    /// The initial screen.
    pub view: ScreenView,
}

/// A value for a rule field edit.
///
/// Rent accepts a number or the text typed into the input. Work days take a
/// list of day tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A number.
    Number(i64),
    /// Free text.
    Text(String),
    /// A list of tokens.
    List(Vec<String>),
}

/// The roster filter panel as submitted by the client.
///
/// Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    /// 司機證號碼
    pub driver_id: Option<String>,
    /// 司機姓名
    pub name: Option<String>,
    /// 司機暱稱
    pub nickname: Option<String>,
    /// 電話號碼
    pub phone: Option<String>,
    /// 性別, `Male` or `Female`.
    pub gender: Option<String>,
    /// 更數
    pub shift: Option<String>,
    /// Lower bound of 司機風險評分.
    pub min_risk: Option<u32>,
    /// Upper bound of 司機風險評分.
    pub max_risk: Option<u32>,
}

/// A user action on the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandRequest {
    /// Press a driver's edit button.
    RequestEdit {
        /// The driver.
        driver_id: String,
    },
    /// Press the confirm button of the row being edited.
    ConfirmEdit,
    /// Switch tab, query, reset or open the bulk-add dialog.
    Navigate {
        /// `all_drivers`, `renewal_rules`, `renting`, `off_hire`, `query`,
        /// `reset` or `open_bulk_add`.
        target: String,
    },
    /// Close the unsaved-changes warning.
    DismissWarning,
    /// Append a rule for a driver.
    AddRule {
        /// The driver.
        driver_id: String,
    },
    /// Edit one rule field.
    UpdateField {
        /// The driver.
        driver_id: String,
        /// The rule.
        rule_id: u64,
        /// `name`, `shift`, `vehicle`, `rent`, `duration`,
        /// `effective_date` or `work_days`.
        field: String,
        /// The new value.
        value: FieldValue,
    },
    /// Press a work-day button.
    ToggleWorkDay {
        /// The driver.
        driver_id: String,
        /// The rule.
        rule_id: u64,
        /// The day.
        day: String,
    },
    /// Reactivate a rule.
    StartRule {
        /// The driver.
        driver_id: String,
        /// The rule.
        rule_id: u64,
    },
    /// Terminate a rule.
    TerminateRule {
        /// The driver.
        driver_id: String,
        /// The rule.
        rule_id: u64,
    },
    /// Delete a rule.
    DeleteRule {
        /// The driver.
        driver_id: String,
        /// The rule.
        rule_id: u64,
    },
    /// Type into the filter panel.
    SetFilter {
        /// The whole panel.
        filter: FilterRequest,
    },
    /// Type into the bulk-add search box.
    BulkAddSearch {
        /// The search text.
        text: String,
    },
    /// Click a driver in the bulk-add dialog.
    BulkAddToggle {
        /// The driver.
        driver_id: String,
    },
    /// Press 確認添加.
    BulkAddConfirm,
    /// Press 取消.
    BulkAddCancel,
}

/// API response to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    /// The screen after the command.
    pub view: ScreenView,
    /// What the client should react to, in emission order.
    pub signals: Vec<Signal>,
}

/// The unsaved-changes dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningView {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
    /// Dismiss button caption.
    pub dismiss_label: &'static str,
}

/// One driver row of the renewal rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRowView {
    /// The driver.
    pub driver_id: String,
    /// The name shown in the row.
    pub display_name: String,
    /// Whether the row is in edit mode.
    pub editable: bool,
    /// One entry per column. Per-rule columns hold one cell per rule.
    pub cells: Vec<Vec<Cell>>,
}

/// The renewal rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTableView {
    /// Column identifiers, left to right.
    pub columns: Vec<RuleColumn>,
    /// Column headers, left to right.
    pub headers: Vec<&'static str>,
    /// One row per driver in the rule store.
    pub rows: Vec<RuleRowView>,
}

/// One row of the roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRowView {
    /// The driver.
    pub driver_id: String,
    /// One cell per visible column.
    pub cells: Vec<Cell>,
}

/// The roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterTableView {
    /// Visible column identifiers, left to right.
    pub columns: Vec<RosterColumn>,
    /// Visible column headers, left to right.
    pub headers: Vec<&'static str>,
    /// Drivers passing the applied filter.
    pub rows: Vec<RosterRowView>,
}

/// A driver offered by the bulk-add dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    /// The driver.
    pub driver_id: String,
    /// Chinese name.
    pub name: String,
    /// `id · phone`.
    pub detail: String,
    /// Whether the driver is selected.
    pub selected: bool,
}

/// The bulk-add dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkAddView {
    /// Whether the dialog is shown.
    pub open: bool,
    /// Dialog title.
    pub title: &'static str,
    /// Search box content.
    pub search: String,
    /// Search box placeholder.
    pub search_placeholder: &'static str,
    /// Drivers matching the search.
    pub candidates: Vec<CandidateView>,
    /// Shown instead of the list when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_label: Option<&'static str>,
    /// Number of selected drivers, including ones hidden by the search.
    pub selected_count: usize,
    /// Whether the confirm button is enabled.
    pub can_confirm: bool,
    /// Confirm button caption.
    pub confirm_label: String,
}

/// Everything the client needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    /// The tab shown.
    pub active_tab: Tab,
    /// Editable or read-only.
    pub mode: ScreenMode,
    /// The driver whose rows are in edit mode.
    pub editing: Option<String>,
    /// The unsaved-changes dialog, when shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<WarningView>,
    /// Whether the 新增司機至規則 button is shown.
    pub show_bulk_add_button: bool,
    /// The renewal rule table.
    pub rule_table: RuleTableView,
    /// The roster table.
    pub roster_table: RosterTableView,
    /// The bulk-add dialog.
    pub bulk_add: BulkAddView,
}

/// API response listing the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterResponse {
    /// Every driver, in roster order.
    pub drivers: Vec<Driver>,
}
