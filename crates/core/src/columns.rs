// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Column descriptors for the two tables of the driver-management screen.
//!
//! Each column knows its header and how to turn a row into [`Cell`]s. The
//! presenter only lays cells out; it never looks at rule fields itself.

use crate::store::DriverRules;
use fleet_desk_domain::{
    Driver, RenewalDuration, RenewalRule, RuleId, RuleStatus, Shift, WorkDay,
    format_effective_date,
};
use serde::Serialize;

/// Shown in place of an unset value.
pub const PLACEHOLDER: &str = "-";

/// Appended to the label of a terminated rule.
pub const TERMINATED_MARKER: &str = "(已終止)";

/// Plates offered by the vehicle input.
pub const VEHICLE_SUGGESTIONS: [&str; 3] = ["AAA123", "ABC123", "ABC111"];

/// Something a button asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    /// Reactivate the rule.
    Start,
    /// Terminate the rule.
    Terminate,
    /// Delete the rule.
    Delete,
    /// Put the driver's rows into edit mode.
    Edit,
    /// Leave edit mode.
    Confirm,
    /// Append a rule for the driver.
    AddRule,
}

/// One button of a [`Cell::Buttons`] cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonCell {
    /// What the button does.
    pub action: RowAction,
    /// Button caption.
    pub label: &'static str,
    /// Whether the button can be pressed.
    pub enabled: bool,
    /// The rule the button acts on, for rule-level actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<RuleId>,
}

/// One option of a [`Cell::Select`] cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// The value sent back when chosen.
    pub value: &'static str,
    /// The caption shown.
    pub label: &'static str,
}

/// One button of a [`Cell::DayToggles`] cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayToggle {
    /// The day.
    pub day: WorkDay,
    /// Caption, the single-character day name.
    pub label: &'static str,
    /// Whether the day is set.
    pub selected: bool,
}

/// A rule listed in the roster's 規則管理 column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleBadge {
    /// The rule.
    pub rule_id: RuleId,
    /// Rule name, followed by the terminated marker when terminated.
    pub label: String,
    /// Whether the rule is active.
    pub active: bool,
    /// 生效開始 / 規則終止 / 刪除規則.
    pub buttons: Vec<ButtonCell>,
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Read-only text.
    Text {
        /// The text.
        text: String,
    },
    /// Free-text input.
    TextInput {
        /// Current value.
        value: String,
        /// Values offered for completion.
        suggestions: Vec<&'static str>,
    },
    /// Drop-down.
    Select {
        /// Current value, empty when unset.
        value: String,
        /// Available options.
        options: Vec<SelectOption>,
    },
    /// Number input. An empty input shows instead of zero.
    NumberInput {
        /// Current value, `None` when zero.
        value: Option<u32>,
        /// Unit shown beside the input.
        unit: &'static str,
    },
    /// Date picker.
    DateInput {
        /// Current value as `YYYY-MM-DD`, empty when unset.
        value: String,
    },
    /// One toggle per weekday, Monday first.
    DayToggles {
        /// The toggles.
        days: Vec<DayToggle>,
        /// Whether the toggles can be pressed.
        enabled: bool,
    },
    /// A row of buttons.
    Buttons {
        /// The buttons.
        buttons: Vec<ButtonCell>,
    },
    /// The roster's rule overview for one driver.
    RuleSummary {
        /// The driver's rules, empty when none.
        rules: Vec<RuleBadge>,
        /// Caption shown when there are no rules.
        empty_label: &'static str,
        /// The add-rule button.
        add: ButtonCell,
    },
}

impl Cell {
    fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    fn text_or_placeholder(text: &str) -> Self {
        if text.is_empty() {
            Self::text(PLACEHOLDER)
        } else {
            Self::text(text)
        }
    }
}

/// Columns of the 自動續約規則 table, left to right.
///
/// [`RuleColumn::DriverName`] and [`RuleColumn::DriverActions`] render one
/// cell per driver; every other column renders one cell per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleColumn {
    /// 司機姓名
    DriverName,
    /// 規則名稱
    RuleName,
    /// 更數
    Shift,
    /// 綁定車輛
    Vehicle,
    /// 租金
    Rent,
    /// 自動編更日
    EffectiveDate,
    /// 開工日期
    WorkDays,
    /// 續約持續
    Duration,
    /// 規則操作
    RuleActions,
    /// 操作
    DriverActions,
}

impl RuleColumn {
    /// Every column in display order.
    pub const ALL: [Self; 10] = [
        Self::DriverName,
        Self::RuleName,
        Self::Shift,
        Self::Vehicle,
        Self::Rent,
        Self::EffectiveDate,
        Self::WorkDays,
        Self::Duration,
        Self::RuleActions,
        Self::DriverActions,
    ];

    /// Returns the column header.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::DriverName => "司機姓名",
            Self::RuleName => "規則名稱",
            Self::Shift => "更數",
            Self::Vehicle => "綁定車輛",
            Self::Rent => "租金",
            Self::EffectiveDate => "自動編更日",
            Self::WorkDays => "開工日期",
            Self::Duration => "續約持續",
            Self::RuleActions => "規則操作",
            Self::DriverActions => "操作",
        }
    }

    /// Returns whether the column renders one cell per rule.
    #[must_use]
    pub const fn is_per_rule(&self) -> bool {
        !matches!(self, Self::DriverName | Self::DriverActions)
    }

    /// Renders a driver row.
    ///
    /// # Arguments
    ///
    /// * `row` - The driver's store entry
    /// * `editable` - Whether the driver holds the edit lock
    #[must_use]
    pub fn render(&self, row: &DriverRules, editable: bool) -> Vec<Cell> {
        match self {
            Self::DriverName => vec![Cell::text(row.display_name.as_str())],
            Self::DriverActions => vec![driver_actions(editable)],
            _ => row
                .rules
                .iter()
                .map(|rule| self.render_rule(rule, editable))
                .collect(),
        }
    }

    fn render_rule(&self, rule: &RenewalRule, editable: bool) -> Cell {
        match (self, editable) {
            (Self::RuleName, true) => Cell::TextInput {
                value: rule.name.clone(),
                suggestions: Vec::new(),
            },
            (Self::RuleName, false) => Cell::text(rule.name.as_str()),
            (Self::Shift, true) => Cell::Select {
                value: rule.shift.as_str().to_string(),
                options: Shift::ALL
                    .iter()
                    .map(|s| SelectOption {
                        value: s.as_str(),
                        label: s.label(),
                    })
                    .collect(),
            },
            (Self::Shift, false) => Cell::text(rule.shift.label()),
            (Self::Vehicle, true) => Cell::TextInput {
                value: rule.vehicle.clone(),
                suggestions: VEHICLE_SUGGESTIONS.to_vec(),
            },
            (Self::Vehicle, false) => Cell::text_or_placeholder(&rule.vehicle),
            (Self::Rent, true) => Cell::NumberInput {
                value: Some(rule.rent.amount()).filter(|amount| *amount > 0),
                unit: "HKD",
            },
            (Self::Rent, false) => Cell::text(rule.rent.to_string()),
            (Self::EffectiveDate, true) => Cell::DateInput {
                value: rule
                    .effective_date
                    .map(format_effective_date)
                    .unwrap_or_default(),
            },
            (Self::EffectiveDate, false) => rule
                .effective_date
                .map_or_else(|| Cell::text(PLACEHOLDER), |d| Cell::text(format_effective_date(d))),
            (Self::WorkDays, _) => Cell::DayToggles {
                days: WorkDay::ALL
                    .iter()
                    .map(|day| DayToggle {
                        day: *day,
                        label: day.short_label(),
                        selected: rule.work_days.contains(*day),
                    })
                    .collect(),
                enabled: editable,
            },
            (Self::Duration, true) => Cell::Select {
                value: rule
                    .duration
                    .map(|d| d.as_str().to_string())
                    .unwrap_or_default(),
                options: duration_options(),
            },
            (Self::Duration, false) => {
                Cell::text(rule.duration.map_or(PLACEHOLDER, |d| d.label()))
            }
            (Self::RuleActions, _) => Cell::Buttons {
                buttons: rule_actions(rule, editable),
            },
            (Self::DriverName | Self::DriverActions, _) => Cell::text(PLACEHOLDER),
        }
    }
}

fn duration_options() -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = vec![SelectOption {
        value: "",
        label: "請選擇",
    }];
    options.extend(RenewalDuration::ALL.iter().map(|d| SelectOption {
        value: d.as_str(),
        label: d.label(),
    }));
    options
}

fn rule_actions(rule: &RenewalRule, editable: bool) -> Vec<ButtonCell> {
    let status_button: ButtonCell = match rule.status {
        RuleStatus::Active => ButtonCell {
            action: RowAction::Terminate,
            label: "終止",
            enabled: editable,
            rule_id: Some(rule.id),
        },
        RuleStatus::Terminated => ButtonCell {
            action: RowAction::Start,
            label: "開始",
            enabled: editable,
            rule_id: Some(rule.id),
        },
    };
    vec![
        status_button,
        ButtonCell {
            action: RowAction::Delete,
            label: "刪除",
            enabled: editable,
            rule_id: Some(rule.id),
        },
    ]
}

fn driver_actions(editable: bool) -> Cell {
    let lock_button: ButtonCell = if editable {
        ButtonCell {
            action: RowAction::Confirm,
            label: "確認修改",
            enabled: true,
            rule_id: None,
        }
    } else {
        ButtonCell {
            action: RowAction::Edit,
            label: "編輯規則",
            enabled: true,
            rule_id: None,
        }
    };
    Cell::Buttons {
        buttons: vec![
            lock_button,
            ButtonCell {
                action: RowAction::AddRule,
                label: "為該司機新增規則",
                enabled: editable,
                rule_id: None,
            },
        ],
    }
}

/// Columns of the 全部 roster table, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterColumn {
    /// 狀態
    Status,
    /// 司機姓名(中文)
    NameCn,
    /// 司機姓名(英文)
    NameEn,
    /// 司機暱稱
    Nickname,
    /// 性別
    Gender,
    /// 司機證號碼
    DriverId,
    /// 更數
    Shift,
    /// 租用車輛
    RentedVehicle,
    /// 電話號碼
    Phone,
    /// 風險評分
    RiskScore,
    /// 備註
    Remark,
    /// 規則管理, not shown in read-only mode.
    RuleManagement,
}

impl RosterColumn {
    /// Every column in display order.
    pub const ALL: [Self; 12] = [
        Self::Status,
        Self::NameCn,
        Self::NameEn,
        Self::Nickname,
        Self::Gender,
        Self::DriverId,
        Self::Shift,
        Self::RentedVehicle,
        Self::Phone,
        Self::RiskScore,
        Self::Remark,
        Self::RuleManagement,
    ];

    /// Returns the columns shown for the given mode.
    #[must_use]
    pub fn visible(read_only: bool) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|c| !(read_only && *c == Self::RuleManagement))
            .collect()
    }

    /// Returns the column header.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Status => "狀態",
            Self::NameCn => "司機姓名(中文)",
            Self::NameEn => "司機姓名(英文)",
            Self::Nickname => "司機暱稱",
            Self::Gender => "性別",
            Self::DriverId => "司機證號碼",
            Self::Shift => "更數",
            Self::RentedVehicle => "租用車輛",
            Self::Phone => "電話號碼",
            Self::RiskScore => "風險評分",
            Self::Remark => "備註",
            Self::RuleManagement => "規則管理",
        }
    }

    /// Renders one roster row.
    ///
    /// # Arguments
    ///
    /// * `driver` - The roster entry
    /// * `rules` - The driver's store entry, if any
    /// * `editable` - Whether the driver holds the edit lock
    #[must_use]
    pub fn render(&self, driver: &Driver, rules: Option<&DriverRules>, editable: bool) -> Cell {
        match self {
            Self::Status => Cell::text(driver.rental_status.label()),
            Self::NameCn => Cell::text(driver.name_cn.as_str()),
            Self::NameEn => Cell::text(driver.name_en.as_str()),
            Self::Nickname => Cell::text(driver.nickname.as_str()),
            Self::Gender => Cell::text(driver.gender.label()),
            Self::DriverId => Cell::text(driver.id.as_str()),
            Self::Shift => Cell::text(driver.shift.as_str()),
            Self::RentedVehicle => Cell::text(driver.rented_vehicle.as_str()),
            Self::Phone => Cell::text(driver.phone.as_str()),
            Self::RiskScore => Cell::text(driver.risk_score.to_string()),
            Self::Remark => Cell::text(driver.remark.as_str()),
            Self::RuleManagement => rule_summary(rules, editable),
        }
    }
}

fn rule_summary(rules: Option<&DriverRules>, editable: bool) -> Cell {
    let badges: Vec<RuleBadge> = rules
        .map(|entry| entry.rules.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|rule| {
            let active: bool = rule.is_active();
            let label: String = if active {
                rule.name.clone()
            } else {
                format!("{} {TERMINATED_MARKER}", rule.name)
            };
            RuleBadge {
                rule_id: rule.id,
                label,
                active,
                buttons: vec![
                    ButtonCell {
                        action: RowAction::Start,
                        label: "生效開始",
                        enabled: editable && !active,
                        rule_id: Some(rule.id),
                    },
                    ButtonCell {
                        action: RowAction::Terminate,
                        label: "規則終止",
                        enabled: editable && active,
                        rule_id: Some(rule.id),
                    },
                    ButtonCell {
                        action: RowAction::Delete,
                        label: "刪除規則",
                        enabled: editable,
                        rule_id: Some(rule.id),
                    },
                ],
            }
        })
        .collect();
    Cell::RuleSummary {
        rules: badges,
        empty_label: "暫無規則",
        add: ButtonCell {
            action: RowAction::AddRule,
            label: "+ 添加新規則",
            enabled: true,
            rule_id: None,
        },
    }
}
