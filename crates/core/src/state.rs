// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bulk_add::BulkAddDialog;
use crate::command::Tab;
use crate::lock::EditLock;
use crate::store::RuleStore;
use fleet_desk_domain::{Driver, DriverKey, Gender, Roster};
use serde::Serialize;
use std::sync::Arc;

/// Whether the screen allows rule changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenMode {
    /// Rule controls are shown and usable.
    #[default]
    Editable,
    /// Rule controls are hidden; every rule change is refused.
    ReadOnly,
}

/// How a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// The tab shown first.
    pub initial_view: Tab,
    /// Whether rule changes are allowed.
    pub mode: ScreenMode,
}

/// The roster filter panel.
///
/// Text criteria are substring matches. An unset criterion matches every
/// driver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterFilter {
    /// 司機證號碼
    pub driver_id: Option<String>,
    /// 司機姓名, matched against the Chinese and the English name.
    pub name: Option<String>,
    /// 司機暱稱
    pub nickname: Option<String>,
    /// 電話號碼
    pub phone: Option<String>,
    /// 性別
    pub gender: Option<Gender>,
    /// 更數
    pub shift: Option<String>,
    /// Lower bound of 司機風險評分, inclusive.
    pub min_risk: Option<u32>,
    /// Upper bound of 司機風險評分, inclusive.
    pub max_risk: Option<u32>,
}

impl RosterFilter {
    /// Returns whether the driver passes every set criterion.
    #[must_use]
    pub fn matches(&self, driver: &Driver) -> bool {
        contains(self.driver_id.as_deref(), &driver.id)
            && (contains(self.name.as_deref(), &driver.name_cn)
                || contains(self.name.as_deref(), &driver.name_en))
            && contains(self.nickname.as_deref(), &driver.nickname)
            && contains(self.phone.as_deref(), &driver.phone)
            && contains(self.shift.as_deref(), &driver.shift)
            && self.gender.is_none_or(|g| g == driver.gender)
            && self.min_risk.is_none_or(|min| driver.risk_score >= min)
            && self.max_risk.is_none_or(|max| driver.risk_score <= max)
    }
}

fn contains(needle: Option<&str>, haystack: &str) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Something the presenter should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// An action was refused because another edit is pending.
    UnsavedChanges {
        /// The driver whose edit is pending.
        holder: DriverKey,
    },
    /// The active tab changed.
    SwitchTab {
        /// The new tab.
        tab: Tab,
    },
    /// A driver's rule rows became editable.
    LockAcquired {
        /// The driver.
        driver: DriverKey,
    },
    /// The edit was confirmed.
    LockReleased {
        /// The driver.
        driver: DriverKey,
    },
    /// A driver's rules changed.
    RulesChanged {
        /// The driver.
        driver: DriverKey,
    },
    /// The applied roster filter changed.
    FilterApplied,
    /// The bulk-add dialog opened.
    DialogOpened,
    /// The bulk-add dialog closed.
    DialogClosed,
}

/// One mounted instance of the driver-management screen.
///
/// Owns the rule store and the edit lock for as long as the screen is
/// shown. Nothing is shared between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The roster snapshot this session was opened with.
    pub roster: Arc<Roster>,
    /// The renewal rules.
    pub store: RuleStore,
    /// The edit lock.
    pub lock: EditLock,
    /// The bulk-add dialog.
    pub dialog: BulkAddDialog,
    /// The tab currently shown.
    pub active_tab: Tab,
    /// Whether rule changes are allowed.
    pub mode: ScreenMode,
    /// Whether the unsaved-changes warning is shown.
    pub warning_visible: bool,
    /// The filter as currently typed into the panel.
    pub staged_filter: RosterFilter,
    /// The filter the roster table is showing.
    pub applied_filter: RosterFilter,
}

impl Session {
    /// Creates a session with an empty rule store.
    #[must_use]
    pub fn new(roster: Arc<Roster>, config: SessionConfig) -> Self {
        Self {
            roster,
            store: RuleStore::new(),
            lock: EditLock::Unlocked,
            dialog: BulkAddDialog::new(),
            active_tab: config.initial_view,
            mode: config.mode,
            warning_visible: false,
            staged_filter: RosterFilter::default(),
            applied_filter: RosterFilter::default(),
        }
    }

    /// Returns whether rule changes are refused.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.mode == ScreenMode::ReadOnly
    }

    /// Returns the roster rows passing the applied filter.
    #[must_use]
    pub fn filtered_roster(&self) -> Vec<&Driver> {
        self.roster
            .drivers()
            .iter()
            .filter(|d| self.applied_filter.matches(d))
            .collect()
    }

    /// Returns the drivers offered by the bulk-add dialog.
    #[must_use]
    pub fn bulk_add_candidates(&self) -> Vec<&Driver> {
        self.dialog.candidates(&self.roster, &self.store)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_session: Session,
    /// What the presenter should react to, in emission order.
    pub signals: Vec<Signal>,
}

impl TransitionResult {
    /// Returns whether the transition was refused by the edit lock.
    #[must_use]
    pub fn was_refused(&self) -> bool {
        self.signals
            .iter()
            .any(|s| matches!(s, Signal::UnsavedChanges { .. }))
    }
}
