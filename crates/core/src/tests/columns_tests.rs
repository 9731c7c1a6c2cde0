// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::columns::{ButtonCell, PLACEHOLDER, VEHICLE_SUGGESTIONS};
use crate::{Cell, DriverRules, RosterColumn, RowAction, RuleColumn, RuleField, RuleStore};
use fleet_desk_domain::{Driver, Rent, RuleId, RuleStatus, WorkDay};

use super::helpers::{alice, create_test_driver, driver_ref};

fn store_with_two_rules() -> (RuleStore, RuleId, RuleId) {
    let mut store: RuleStore = RuleStore::new();
    let first: RuleId = store.add_rule(&driver_ref(&alice(), "Alice")).id;
    let second: RuleId = store.add_rule(&driver_ref(&alice(), "Alice")).id;
    store
        .update_field(&alice(), first, RuleField::Rent(Rent::new(380)))
        .unwrap();
    store
        .update_field(&alice(), first, RuleField::Vehicle(String::from("ABC111")))
        .unwrap();
    store.toggle_work_day(&alice(), first, WorkDay::Tuesday).unwrap();
    store
        .set_status(&alice(), second, RuleStatus::Terminated)
        .unwrap();
    (store, first, second)
}

fn entry(store: &RuleStore) -> &DriverRules {
    store.entry(&alice()).unwrap()
}

fn text(value: &str) -> Cell {
    Cell::Text {
        text: String::from(value),
    }
}

#[test]
fn test_rule_headers_in_order() {
    let headers: Vec<&str> = RuleColumn::ALL.iter().map(RuleColumn::header).collect();
    assert_eq!(
        headers,
        vec![
            "司機姓名",
            "規則名稱",
            "更數",
            "綁定車輛",
            "租金",
            "自動編更日",
            "開工日期",
            "續約持續",
            "規則操作",
            "操作",
        ]
    );
}

#[test]
fn test_per_driver_columns_render_one_cell() {
    let (store, _, _) = store_with_two_rules();

    assert_eq!(
        RuleColumn::DriverName.render(entry(&store), false),
        vec![text("Alice")]
    );
    assert_eq!(
        RuleColumn::DriverActions.render(entry(&store), false).len(),
        1
    );
    assert_eq!(RuleColumn::RuleName.render(entry(&store), false).len(), 2);
}

#[test]
fn test_read_mode_uses_placeholders() {
    let (store, _, _) = store_with_two_rules();
    let row: &DriverRules = entry(&store);

    assert_eq!(
        RuleColumn::Vehicle.render(row, false),
        vec![text("ABC111"), text(PLACEHOLDER)]
    );
    assert_eq!(
        RuleColumn::Rent.render(row, false),
        vec![text("$380"), text("$0")]
    );
    assert_eq!(
        RuleColumn::EffectiveDate.render(row, false),
        vec![text(PLACEHOLDER), text(PLACEHOLDER)]
    );
    assert_eq!(
        RuleColumn::Duration.render(row, false),
        vec![text(PLACEHOLDER), text(PLACEHOLDER)]
    );
    assert_eq!(
        RuleColumn::Shift.render(row, false),
        vec![text("早更"), text("早更")]
    );
}

#[test]
fn test_edit_mode_renders_inputs() {
    let (store, _, _) = store_with_two_rules();
    let row: &DriverRules = entry(&store);

    let vehicles: Vec<Cell> = RuleColumn::Vehicle.render(row, true);
    assert_eq!(
        vehicles[0],
        Cell::TextInput {
            value: String::from("ABC111"),
            suggestions: VEHICLE_SUGGESTIONS.to_vec(),
        }
    );

    let rents: Vec<Cell> = RuleColumn::Rent.render(row, true);
    assert_eq!(
        rents,
        vec![
            Cell::NumberInput {
                value: Some(380),
                unit: "HKD",
            },
            Cell::NumberInput {
                value: None,
                unit: "HKD",
            },
        ]
    );

    match &RuleColumn::Duration.render(row, true)[0] {
        Cell::Select { value, options } => {
            assert_eq!(value, "");
            assert_eq!(options.len(), 5);
            assert_eq!(options[1].label, "一週");
        }
        other => panic!("expected select, got {other:?}"),
    }
}

#[test]
fn test_work_days_render_monday_first() {
    let (store, _, _) = store_with_two_rules();

    match &RuleColumn::WorkDays.render(entry(&store), false)[0] {
        Cell::DayToggles { days, enabled } => {
            assert!(!enabled);
            let labels: Vec<&str> = days.iter().map(|d| d.label).collect();
            assert_eq!(labels, vec!["一", "二", "三", "四", "五", "六", "日"]);
            let selected: Vec<WorkDay> =
                days.iter().filter(|d| d.selected).map(|d| d.day).collect();
            assert_eq!(selected, vec![WorkDay::Tuesday]);
        }
        other => panic!("expected day toggles, got {other:?}"),
    }
}

#[test]
fn test_rule_actions_follow_status() {
    let (store, first, second) = store_with_two_rules();
    let cells: Vec<Cell> = RuleColumn::RuleActions.render(entry(&store), true);

    let Cell::Buttons { buttons } = &cells[0] else {
        panic!("expected buttons");
    };
    assert_eq!(buttons[0].action, RowAction::Terminate);
    assert_eq!(buttons[0].rule_id, Some(first));
    assert_eq!(buttons[1].action, RowAction::Delete);

    let Cell::Buttons { buttons } = &cells[1] else {
        panic!("expected buttons");
    };
    assert_eq!(buttons[0].action, RowAction::Start);
    assert_eq!(buttons[0].label, "開始");
    assert_eq!(buttons[0].rule_id, Some(second));
}

#[test]
fn test_driver_actions_switch_with_lock() {
    let (store, _, _) = store_with_two_rules();

    let idle: Vec<Cell> = RuleColumn::DriverActions.render(entry(&store), false);
    let Cell::Buttons { buttons } = &idle[0] else {
        panic!("expected buttons");
    };
    let actions: Vec<(RowAction, bool)> = buttons.iter().map(|b| (b.action, b.enabled)).collect();
    assert_eq!(
        actions,
        vec![(RowAction::Edit, true), (RowAction::AddRule, false)]
    );

    let editing: Vec<Cell> = RuleColumn::DriverActions.render(entry(&store), true);
    let Cell::Buttons { buttons } = &editing[0] else {
        panic!("expected buttons");
    };
    assert_eq!(buttons[0].action, RowAction::Confirm);
    assert!(buttons[1].enabled);
}

#[test]
fn test_roster_columns_hide_rule_management_when_read_only() {
    assert_eq!(RosterColumn::visible(false).len(), 12);
    let read_only: Vec<RosterColumn> = RosterColumn::visible(true);
    assert_eq!(read_only.len(), 11);
    assert!(!read_only.contains(&RosterColumn::RuleManagement));
    assert_eq!(RosterColumn::Status.header(), "狀態");
}

#[test]
fn test_roster_row_renders_driver_fields() {
    let driver: Driver = create_test_driver("A1", "Alice");

    assert_eq!(
        RosterColumn::Status.render(&driver, None, false),
        text("租用中")
    );
    assert_eq!(
        RosterColumn::Gender.render(&driver, None, false),
        text("♂ 男")
    );
    assert_eq!(
        RosterColumn::RiskScore.render(&driver, None, false),
        text("0")
    );
}

#[test]
fn test_rule_summary_marks_terminated_rules() {
    let (store, _, _) = store_with_two_rules();
    let driver: Driver = create_test_driver("A1", "Alice");

    let cell: Cell = RosterColumn::RuleManagement.render(&driver, store.entry(&alice()), false);

    let Cell::RuleSummary { rules, add, .. } = cell else {
        panic!("expected rule summary");
    };
    assert_eq!(rules[0].label, "Alice的規則 1");
    assert_eq!(rules[1].label, "Alice的規則 2 (已終止)");
    assert!(!rules[1].active);
    assert!(rules.iter().all(|b| b.buttons.iter().all(|btn| !btn.enabled)));
    assert_eq!(
        add,
        ButtonCell {
            action: RowAction::AddRule,
            label: "+ 添加新規則",
            enabled: true,
            rule_id: None,
        }
    );
}

#[test]
fn test_rule_summary_without_rules() {
    let driver: Driver = create_test_driver("B1", "Bob");

    let Cell::RuleSummary {
        rules, empty_label, ..
    } = RosterColumn::RuleManagement.render(&driver, None, true)
    else {
        panic!("expected rule summary");
    };
    assert!(rules.is_empty());
    assert_eq!(empty_label, "暫無規則");
}

#[test]
fn test_cells_serialize_with_kind_tag() {
    let json: serde_json::Value = serde_json::to_value(text("-")).unwrap();
    assert_eq!(json["kind"], "text");
    assert_eq!(json["text"], "-");

    let button: serde_json::Value = serde_json::to_value(Cell::Buttons {
        buttons: vec![ButtonCell {
            action: RowAction::AddRule,
            label: "x",
            enabled: true,
            rule_id: None,
        }],
    })
    .unwrap();
    assert_eq!(button["buttons"][0]["action"], "add_rule");
    assert!(button["buttons"][0].get("rule_id").is_none());
}
