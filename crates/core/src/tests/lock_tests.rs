// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EditLock, GuardOutcome, LockOutcome};

use super::helpers::{alice, bob, carol};

#[test]
fn test_request_edit_acquires_free_lock() {
    let mut lock: EditLock = EditLock::Unlocked;

    assert_eq!(lock.request_edit(&alice()), LockOutcome::Acquired);
    assert_eq!(lock, EditLock::LockedOn(alice()));
    assert!(lock.is_locked());
    assert_eq!(lock.holder(), Some(&alice()));
}

#[test]
fn test_request_edit_by_holder_is_noop() {
    let mut lock: EditLock = EditLock::LockedOn(alice());

    assert_eq!(lock.request_edit(&alice()), LockOutcome::AlreadyHeld);
    assert_eq!(lock, EditLock::LockedOn(alice()));
}

#[test]
fn test_request_edit_by_other_is_refused() {
    let mut lock: EditLock = EditLock::LockedOn(alice());

    assert_eq!(
        lock.request_edit(&bob()),
        LockOutcome::Refused { holder: alice() }
    );
    assert_eq!(lock, EditLock::LockedOn(alice()));
}

#[test]
fn test_at_most_one_holder_over_any_request_sequence() {
    let mut lock: EditLock = EditLock::default();
    let sequence = [alice(), bob(), alice(), carol(), bob(), bob()];

    for key in &sequence {
        lock.request_edit(key);
        assert_eq!(lock, EditLock::LockedOn(alice()));
    }

    assert_eq!(lock.confirm(), Some(alice()));
    for key in sequence.iter().rev() {
        lock.request_edit(key);
        assert_eq!(lock, EditLock::LockedOn(bob()));
    }
}

#[test]
fn test_confirm_releases_and_reports_holder() {
    let mut lock: EditLock = EditLock::LockedOn(bob());

    assert_eq!(lock.confirm(), Some(bob()));
    assert_eq!(lock, EditLock::Unlocked);
    assert!(lock.holder().is_none());
}

#[test]
fn test_confirm_while_unlocked_is_harmless() {
    let mut lock: EditLock = EditLock::Unlocked;

    assert_eq!(lock.confirm(), None);
    assert_eq!(lock, EditLock::Unlocked);
}

#[test]
fn test_guard_blocks_only_while_locked() {
    let mut lock: EditLock = EditLock::Unlocked;
    assert_eq!(lock.guard(), GuardOutcome::Proceed);

    lock.request_edit(&carol());
    assert_eq!(lock.guard(), GuardOutcome::Refused { holder: carol() });
}

#[test]
fn test_permits_only_holder() {
    let lock: EditLock = EditLock::LockedOn(alice());

    assert!(lock.permits(&alice()));
    assert!(!lock.permits(&bob()));
    assert!(!EditLock::Unlocked.permits(&alice()));
}
