// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, NavTarget, Tab};
use crate::error::CoreError;
use crate::lock::{GuardOutcome, LockOutcome};
use crate::state::{RosterFilter, Session, Signal, TransitionResult};
use crate::store::StatusChange;
use fleet_desk_domain::{Driver, DriverKey, DriverRef, RenewalRule, RuleId, RuleStatus};
use tracing::{debug, info, warn};

/// Whether a row-level mutation may go ahead.
enum RowAccess {
    Granted,
    Refused(DriverKey),
}

/// Applies a command to a session, producing the next session and the
/// signals for the presenter.
///
/// Refusals by the edit lock are not errors: they succeed with an
/// unchanged store, the warning raised and a
/// [`Signal::UnsavedChanges`] signal.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and signals
/// * `Err(CoreError)` if the command cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - The session is read-only and the command changes rules
/// - A row-level edit targets a driver while nothing is being edited
/// - The driver or rule does not exist
/// - A bulk-add action is issued with the dialog closed or nothing selected
pub fn apply(session: &Session, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    let result: Result<TransitionResult, CoreError> = apply_inner(session, command);
    match &result {
        Ok(transition) if transition.was_refused() => {
            info!(command = command_name, "Refused: unsaved changes pending");
        }
        Ok(transition) => {
            debug!(
                command = command_name,
                signals = transition.signals.len(),
                "Command applied"
            );
        }
        Err(err) => {
            warn!(command = command_name, error = %err, "Command rejected");
        }
    }
    result
}

#[allow(clippy::too_many_lines)]
fn apply_inner(session: &Session, command: Command) -> Result<TransitionResult, CoreError> {
    if session.is_read_only() && command.mutates_rules() {
        return Err(CoreError::ReadOnly);
    }

    let mut next: Session = session.clone();
    let mut signals: Vec<Signal> = Vec::new();

    match command {
        Command::RequestEdit { driver } => {
            if !next.store.contains(&driver) {
                return Err(CoreError::DriverNotFound(driver));
            }
            match next.lock.request_edit(&driver) {
                LockOutcome::Acquired => signals.push(Signal::LockAcquired { driver }),
                LockOutcome::AlreadyHeld => {}
                LockOutcome::Refused { holder } => refuse(&mut next, &mut signals, holder),
            }
        }
        Command::ConfirmEdit => {
            if let Some(driver) = next.lock.confirm() {
                signals.push(Signal::LockReleased { driver });
            }
        }
        Command::Navigate(target) => match next.lock.guard() {
            GuardOutcome::Refused { holder } => refuse(&mut next, &mut signals, holder),
            GuardOutcome::Proceed => navigate(&mut next, &mut signals, target),
        },
        Command::DismissWarning => {
            next.warning_visible = false;
        }
        Command::AddRule { driver } => {
            let driver_ref: DriverRef = resolve_driver(&next, &driver)?;
            let rule: RenewalRule = next.store.add_rule(&driver_ref);
            debug!(driver = %driver, rule_id = %rule.id, "Rule added");
            signals.push(Signal::RulesChanged { driver });
        }
        Command::UpdateField {
            driver,
            rule_id,
            field,
        } => {
            if let RowAccess::Refused(holder) = row_access(&next, &driver)? {
                refuse(&mut next, &mut signals, holder);
            } else {
                let field_name: &'static str = field.name();
                next.store.update_field(&driver, rule_id, field)?;
                debug!(driver = %driver, rule_id = %rule_id, field = field_name, "Rule field updated");
                signals.push(Signal::RulesChanged { driver });
            }
        }
        Command::ToggleWorkDay {
            driver,
            rule_id,
            day,
        } => {
            if let RowAccess::Refused(holder) = row_access(&next, &driver)? {
                refuse(&mut next, &mut signals, holder);
            } else {
                next.store.toggle_work_day(&driver, rule_id, day)?;
                signals.push(Signal::RulesChanged { driver });
            }
        }
        Command::StartRule { driver, rule_id } => {
            set_status(&mut next, &mut signals, driver, rule_id, RuleStatus::Active)?;
        }
        Command::TerminateRule { driver, rule_id } => {
            set_status(&mut next, &mut signals, driver, rule_id, RuleStatus::Terminated)?;
        }
        Command::DeleteRule { driver, rule_id } => {
            if let RowAccess::Refused(holder) = row_access(&next, &driver)? {
                refuse(&mut next, &mut signals, holder);
            } else {
                let removed: RenewalRule = next.store.remove_rule(&driver, rule_id)?;
                info!(driver = %driver, rule = %removed.name, "Rule deleted");
                signals.push(Signal::RulesChanged { driver });
            }
        }
        Command::SetFilter(filter) => {
            next.staged_filter = filter;
        }
        Command::BulkAddSearch { text } => {
            require_dialog(&next)?;
            next.dialog.set_search(&text);
        }
        Command::BulkAddToggle { driver } => {
            require_dialog(&next)?;
            next.dialog.toggle(&driver, &next.roster, &next.store)?;
        }
        Command::BulkAddConfirm => {
            require_dialog(&next)?;
            let added: Vec<DriverKey> = next.dialog.confirm(&next.roster, &mut next.store)?;
            info!(count = added.len(), "Drivers added to renewal rules");
            signals.extend(
                added
                    .into_iter()
                    .map(|driver| Signal::RulesChanged { driver }),
            );
            signals.push(Signal::DialogClosed);
            next.active_tab = Tab::RenewalRules;
            signals.push(Signal::SwitchTab {
                tab: Tab::RenewalRules,
            });
        }
        Command::BulkAddCancel => {
            require_dialog(&next)?;
            next.dialog.close();
            signals.push(Signal::DialogClosed);
        }
    }

    Ok(TransitionResult {
        new_session: next,
        signals,
    })
}

fn refuse(session: &mut Session, signals: &mut Vec<Signal>, holder: DriverKey) {
    session.warning_visible = true;
    signals.push(Signal::UnsavedChanges { holder });
}

fn navigate(session: &mut Session, signals: &mut Vec<Signal>, target: NavTarget) {
    match target {
        NavTarget::AllDrivers | NavTarget::Renting | NavTarget::OffHire => {
            switch_tab(session, signals, Tab::AllDrivers);
        }
        NavTarget::RenewalRules => switch_tab(session, signals, Tab::RenewalRules),
        NavTarget::Query => {
            session.applied_filter = session.staged_filter.clone();
            signals.push(Signal::FilterApplied);
        }
        NavTarget::Reset => {
            session.staged_filter = RosterFilter::default();
            session.applied_filter = RosterFilter::default();
            signals.push(Signal::FilterApplied);
        }
        NavTarget::OpenBulkAdd => {
            session.dialog.open();
            signals.push(Signal::DialogOpened);
        }
    }
}

fn switch_tab(session: &mut Session, signals: &mut Vec<Signal>, tab: Tab) {
    session.active_tab = tab;
    signals.push(Signal::SwitchTab { tab });
}

/// Decides whether `driver`'s rows may be changed.
///
/// Locked on the driver: granted. Locked on someone else: refused with the
/// holder. Unlocked: the rows are not in edit mode, which is an error.
fn row_access(session: &Session, driver: &DriverKey) -> Result<RowAccess, CoreError> {
    if session.lock.permits(driver) {
        return Ok(RowAccess::Granted);
    }
    match session.lock.holder() {
        Some(holder) => Ok(RowAccess::Refused(holder.clone())),
        None => Err(CoreError::NotEditing(driver.clone())),
    }
}

fn set_status(
    session: &mut Session,
    signals: &mut Vec<Signal>,
    driver: DriverKey,
    rule_id: RuleId,
    status: RuleStatus,
) -> Result<(), CoreError> {
    if let RowAccess::Refused(holder) = row_access(session, &driver)? {
        refuse(session, signals, holder);
        return Ok(());
    }
    if session.store.set_status(&driver, rule_id, status)? == StatusChange::Changed {
        info!(driver = %driver, rule_id = %rule_id, status = %status, "Rule status changed");
        signals.push(Signal::RulesChanged { driver });
    }
    Ok(())
}

/// Finds the name to label a new rule with: the store entry's name if the
/// driver already has one, otherwise the roster's.
fn resolve_driver(session: &Session, driver: &DriverKey) -> Result<DriverRef, CoreError> {
    if let Some(entry) = session.store.entry(driver) {
        return Ok(DriverRef {
            key: entry.key.clone(),
            display_name: entry.display_name.clone(),
        });
    }
    session
        .roster
        .find(driver)
        .map(Driver::to_ref)
        .ok_or_else(|| CoreError::UnknownDriver(driver.clone()))
}

fn require_dialog(session: &Session) -> Result<(), CoreError> {
    if session.dialog.is_open() {
        Ok(())
    } else {
        Err(CoreError::DialogNotOpen)
    }
}
