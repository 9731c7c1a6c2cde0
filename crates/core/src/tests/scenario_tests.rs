// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end walks through the screen, one command at a time.

use crate::{Command, EditLock, NavTarget, Session, Signal, Tab, TransitionResult};
use fleet_desk_domain::{RenewalRule, RuleId, RuleStatus};
use std::collections::HashSet;

use super::helpers::{alice, apply_ok, bob, carol, create_test_session, run, step};

/// Opens the dialog, selects Alice and Bob and confirms.
fn bulk_add_alice_and_bob() -> TransitionResult {
    let session: Session = run(
        &create_test_session(),
        vec![
            Command::Navigate(NavTarget::OpenBulkAdd),
            Command::BulkAddToggle { driver: alice() },
            Command::BulkAddToggle { driver: bob() },
        ],
    );
    apply_ok(&session, Command::BulkAddConfirm)
}

#[test]
fn test_scenario_bulk_add_two_drivers() {
    let result: TransitionResult = bulk_add_alice_and_bob();
    let session: &Session = &result.new_session;

    assert_eq!(session.store.len(), 2);
    for (key, name) in [(alice(), "Alice的規則 1"), (bob(), "Bob的規則 1")] {
        let rules: &[RenewalRule] = session.store.rules(&key).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].status, RuleStatus::Active);
        assert_eq!(rules[0].name, name);
    }
    assert_eq!(session.active_tab, Tab::RenewalRules);
    assert!(!session.dialog.is_open());
    assert_eq!(
        result.signals,
        vec![
            Signal::RulesChanged { driver: alice() },
            Signal::RulesChanged { driver: bob() },
            Signal::DialogClosed,
            Signal::SwitchTab {
                tab: Tab::RenewalRules
            },
        ]
    );
}

#[test]
fn test_scenario_second_edit_is_refused() {
    let after_add: Session = bulk_add_alice_and_bob().new_session;
    let editing: Session = step(&after_add, Command::RequestEdit { driver: alice() });
    assert_eq!(editing.lock, EditLock::LockedOn(alice()));

    let result: TransitionResult = apply_ok(&editing, Command::RequestEdit { driver: bob() });

    assert_eq!(result.new_session.lock, EditLock::LockedOn(alice()));
    assert_eq!(
        result.signals,
        vec![Signal::UnsavedChanges { holder: alice() }]
    );
    assert_eq!(result.new_session.store, editing.store);
}

#[test]
fn test_scenario_confirm_then_edit_other() {
    let refused: Session = run(
        &bulk_add_alice_and_bob().new_session,
        vec![
            Command::RequestEdit { driver: alice() },
            Command::RequestEdit { driver: bob() },
        ],
    );

    let confirmed: Session = step(&refused, Command::ConfirmEdit);
    assert_eq!(confirmed.lock, EditLock::Unlocked);

    let result: TransitionResult = apply_ok(&confirmed, Command::RequestEdit { driver: bob() });
    assert_eq!(result.new_session.lock, EditLock::LockedOn(bob()));
    assert_eq!(result.signals, vec![Signal::LockAcquired { driver: bob() }]);
}

#[test]
fn test_scenario_delete_does_not_renumber() {
    let session: Session = run(
        &create_test_session(),
        vec![
            Command::AddRule { driver: carol() },
            Command::AddRule { driver: carol() },
        ],
    );
    let names: Vec<&str> = session
        .store
        .rules(&carol())
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Carol的規則 1", "Carol的規則 2"]);

    let first: RuleId = session.store.rules(&carol()).unwrap()[0].id;
    let after: Session = run(
        &session,
        vec![
            Command::RequestEdit { driver: carol() },
            Command::DeleteRule {
                driver: carol(),
                rule_id: first,
            },
            Command::ConfirmEdit,
        ],
    );

    let remaining: &[RenewalRule] = after.store.rules(&carol()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Carol的規則 2");
}

#[test]
fn test_bulk_add_never_duplicates_present_driver() {
    let session: Session = run(
        &create_test_session(),
        vec![
            Command::AddRule { driver: alice() },
            Command::AddRule { driver: alice() },
            Command::Navigate(NavTarget::OpenBulkAdd),
        ],
    );
    let offered: Vec<&str> = session
        .bulk_add_candidates()
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(offered, vec!["B1", "C1"]);

    let after: Session = run(
        &session,
        vec![
            Command::BulkAddToggle { driver: bob() },
            Command::BulkAddToggle { driver: carol() },
            Command::BulkAddConfirm,
        ],
    );

    assert_eq!(after.store.len(), 3);
    assert_eq!(after.store.rules(&alice()).unwrap().len(), 2);
    assert_eq!(after.store.rules(&bob()).unwrap().len(), 1);
    assert_eq!(after.store.rules(&carol()).unwrap().len(), 1);
}

#[test]
fn test_rule_ids_stay_distinct_per_driver() {
    let mut session: Session = bulk_add_alice_and_bob().new_session;
    for _ in 0..4 {
        session = run(
            &session,
            vec![
                Command::AddRule { driver: alice() },
                Command::AddRule { driver: bob() },
            ],
        );
    }

    for entry in session.store.iter() {
        let ids: HashSet<RuleId> = entry.rules.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), entry.rules.len());
    }
}

#[test]
fn test_lock_survives_any_request_sequence() {
    let mut session: Session = run(
        &create_test_session(),
        vec![
            Command::AddRule { driver: alice() },
            Command::AddRule { driver: bob() },
            Command::AddRule { driver: carol() },
        ],
    );
    let requests = [bob(), alice(), carol(), bob(), alice()];

    for key in requests {
        session = step(&session, Command::RequestEdit { driver: key });
        assert_eq!(session.lock, EditLock::LockedOn(bob()));
    }
}

#[test]
fn test_tab_switch_blocked_until_confirm() {
    let editing: Session = run(
        &create_test_session(),
        vec![
            Command::AddRule { driver: alice() },
            Command::Navigate(NavTarget::RenewalRules),
            Command::RequestEdit { driver: alice() },
        ],
    );

    let blocked: Session = step(&editing, Command::Navigate(NavTarget::AllDrivers));
    assert_eq!(blocked.active_tab, Tab::RenewalRules);
    assert!(blocked.warning_visible);

    let moved: Session = run(
        &blocked,
        vec![
            Command::DismissWarning,
            Command::ConfirmEdit,
            Command::Navigate(NavTarget::AllDrivers),
        ],
    );
    assert_eq!(moved.active_tab, Tab::AllDrivers);
    assert!(!moved.warning_visible);
}
