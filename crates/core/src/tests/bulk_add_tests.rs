// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BulkAddDialog, CoreError, RuleStore};
use fleet_desk_domain::{Driver, DriverKey, Roster};
use std::sync::Arc;

use super::helpers::{alice, bob, carol, create_test_roster, driver_ref};

fn candidate_ids(dialog: &BulkAddDialog, roster: &Roster, store: &RuleStore) -> Vec<String> {
    dialog
        .candidates(roster, store)
        .iter()
        .map(|d: &&Driver| d.id.clone())
        .collect()
}

#[test]
fn test_open_clears_previous_state() {
    let roster: Arc<Roster> = create_test_roster();
    let store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();
    dialog.set_search("Bo");
    dialog.toggle(&bob(), &roster, &store).unwrap();

    dialog.open();

    assert!(dialog.is_open());
    assert_eq!(dialog.search(), "");
    assert!(dialog.selected().is_empty());
}

#[test]
fn test_candidates_exclude_drivers_in_store() {
    let roster: Arc<Roster> = create_test_roster();
    let mut store: RuleStore = RuleStore::new();
    store.add_rule(&driver_ref(&alice(), "Alice"));
    let dialog: BulkAddDialog = BulkAddDialog::new();

    assert_eq!(candidate_ids(&dialog, &roster, &store), vec!["B1", "C1"]);
}

#[test]
fn test_candidates_filter_by_name_or_id() {
    let roster: Arc<Roster> = create_test_roster();
    let store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();

    dialog.set_search("car");
    assert_eq!(candidate_ids(&dialog, &roster, &store), vec!["C1"]);

    dialog.set_search("b1");
    assert_eq!(candidate_ids(&dialog, &roster, &store), vec!["B1"]);

    dialog.set_search("zzz");
    assert!(candidate_ids(&dialog, &roster, &store).is_empty());
}

#[test]
fn test_toggle_selects_and_unselects() {
    let roster: Arc<Roster> = create_test_roster();
    let store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();

    assert_eq!(dialog.toggle(&alice(), &roster, &store), Ok(true));
    assert_eq!(dialog.toggle(&bob(), &roster, &store), Ok(true));
    assert_eq!(dialog.toggle(&alice(), &roster, &store), Ok(false));

    assert_eq!(dialog.selected(), &[bob()]);
    assert!(dialog.is_selected(&bob()));
    assert!(!dialog.is_selected(&alice()));
}

#[test]
fn test_selection_survives_search_change() {
    let roster: Arc<Roster> = create_test_roster();
    let store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();
    dialog.toggle(&alice(), &roster, &store).unwrap();

    dialog.set_search("Carol");
    dialog.toggle(&carol(), &roster, &store).unwrap();

    assert_eq!(dialog.selected(), &[alice(), carol()]);
}

#[test]
fn test_toggle_rejects_unknown_and_present_drivers() {
    let roster: Arc<Roster> = create_test_roster();
    let mut store: RuleStore = RuleStore::new();
    store.add_rule(&driver_ref(&alice(), "Alice"));
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();

    assert_eq!(
        dialog.toggle(&DriverKey::new("Z9"), &roster, &store),
        Err(CoreError::UnknownDriver(DriverKey::new("Z9")))
    );
    assert_eq!(
        dialog.toggle(&alice(), &roster, &store),
        Err(CoreError::NotSelectable(alice()))
    );
    assert!(dialog.selected().is_empty());
}

#[test]
fn test_confirm_requires_selection() {
    let roster: Arc<Roster> = create_test_roster();
    let mut store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();

    assert!(!dialog.can_confirm());
    assert_eq!(
        dialog.confirm(&roster, &mut store),
        Err(CoreError::EmptySelection)
    );
    assert!(dialog.is_open());
    assert!(store.is_empty());
}

#[test]
fn test_confirm_adds_selected_and_closes() {
    let roster: Arc<Roster> = create_test_roster();
    let mut store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();
    dialog.toggle(&bob(), &roster, &store).unwrap();
    dialog.toggle(&alice(), &roster, &store).unwrap();

    let added: Vec<DriverKey> = dialog.confirm(&roster, &mut store).unwrap();

    assert_eq!(added, vec![bob(), alice()]);
    assert_eq!(store.rules(&bob()).unwrap()[0].name, "Bob的規則 1");
    assert_eq!(store.rules(&alice()).unwrap()[0].name, "Alice的規則 1");
    assert!(!dialog.is_open());
    assert!(dialog.selected().is_empty());
}

#[test]
fn test_confirm_returns_only_drivers_that_got_a_rule() {
    let roster: Arc<Roster> = create_test_roster();
    let mut store: RuleStore = RuleStore::new();
    let mut dialog: BulkAddDialog = BulkAddDialog::new();
    dialog.open();
    dialog.toggle(&alice(), &roster, &store).unwrap();
    store.add_rule(&driver_ref(&alice(), "Alice"));

    let added: Vec<DriverKey> = dialog.confirm(&roster, &mut store).unwrap();

    assert!(added.is_empty());
    assert_eq!(store.rules(&alice()).unwrap().len(), 1);
    assert!(!dialog.is_open());
}
