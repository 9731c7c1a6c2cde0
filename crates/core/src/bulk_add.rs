// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::RuleStore;
use fleet_desk_domain::{Driver, DriverKey, DriverRef, RenewalRule, Roster};

/// The "add drivers to renewal rules" dialog.
///
/// Offers every roster driver that has no rule-store entry yet. Drivers who
/// already have an entry must use the per-row add control instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkAddDialog {
    open: bool,
    search: String,
    selected: Vec<DriverKey>,
}

impl BulkAddDialog {
    /// Creates a closed dialog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            search: String::new(),
            selected: Vec::new(),
        }
    }

    /// Opens the dialog with an empty search and selection.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::new()
        };
    }

    /// Closes the dialog and forgets the search and selection.
    pub fn close(&mut self) {
        *self = Self::new();
    }

    /// Returns whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the selected drivers in selection order.
    #[must_use]
    pub fn selected(&self) -> &[DriverKey] {
        &self.selected
    }

    /// Returns whether the driver is selected.
    #[must_use]
    pub fn is_selected(&self, key: &DriverKey) -> bool {
        self.selected.contains(key)
    }

    /// Replaces the search text. The selection is kept.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Returns the drivers listed in the dialog: not yet in the store and
    /// matching the search on Chinese name or driver id.
    #[must_use]
    pub fn candidates<'a>(&self, roster: &'a Roster, store: &RuleStore) -> Vec<&'a Driver> {
        roster
            .drivers()
            .iter()
            .filter(|d| !store.contains(&d.key()))
            .filter(|d| d.matches_search(&self.search))
            .collect()
    }

    /// Selects or unselects a driver and returns whether it is selected
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not on the roster or already has
    /// an entry in the store.
    pub fn toggle(
        &mut self,
        key: &DriverKey,
        roster: &Roster,
        store: &RuleStore,
    ) -> Result<bool, CoreError> {
        if roster.find(key).is_none() {
            return Err(CoreError::UnknownDriver(key.clone()));
        }
        if store.contains(key) {
            return Err(CoreError::NotSelectable(key.clone()));
        }
        if let Some(index) = self.selected.iter().position(|k| k == key) {
            self.selected.remove(index);
            Ok(false)
        } else {
            self.selected.push(key.clone());
            Ok(true)
        }
    }

    /// Returns whether the confirm button is enabled.
    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Adds one default rule per selected driver, then closes the dialog.
    ///
    /// Returns the drivers that received a rule. A selected driver that got
    /// an entry some other way since being selected is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected. The dialog stays open.
    pub fn confirm(
        &mut self,
        roster: &Roster,
        store: &mut RuleStore,
    ) -> Result<Vec<DriverKey>, CoreError> {
        if !self.can_confirm() {
            return Err(CoreError::EmptySelection);
        }
        let drivers: Vec<DriverRef> = self
            .selected
            .iter()
            .filter(|key| !store.contains(key))
            .filter_map(|key| roster.find(key))
            .map(Driver::to_ref)
            .collect();
        let created: Vec<RenewalRule> = store.bulk_add(&drivers);
        self.close();
        Ok(drivers
            .into_iter()
            .take(created.len())
            .map(|d| d.key)
            .collect())
    }
}
