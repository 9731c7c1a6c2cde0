// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use fleet_desk_domain::{
    DriverKey, DriverRef, RenewalDuration, RenewalRule, Rent, RuleId, RuleStatus, Shift, WorkDay,
    WorkDays,
};
use time::Date;

/// One driver's entry in the rule store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRules {
    /// The driver key.
    pub key: DriverKey,
    /// The name shown in the rule table and used for default rule names.
    pub display_name: String,
    /// The driver's rules in creation order.
    pub rules: Vec<RenewalRule>,
}

/// A single-field replacement on a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleField {
    /// Replace the display label.
    Name(String),
    /// Replace the shift.
    Shift(Shift),
    /// Replace the bound vehicle plate.
    Vehicle(String),
    /// Replace the rent.
    Rent(Rent),
    /// Replace or clear the renewal duration.
    Duration(Option<RenewalDuration>),
    /// Replace or clear the effective date.
    EffectiveDate(Option<Date>),
    /// Replace the whole work-day set.
    WorkDays(WorkDays),
}

impl RuleField {
    /// Returns the field name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Shift(_) => "shift",
            Self::Vehicle(_) => "vehicle",
            Self::Rent(_) => "rent",
            Self::Duration(_) => "duration",
            Self::EffectiveDate(_) => "effective_date",
            Self::WorkDays(_) => "work_days",
        }
    }

    fn write_to(self, rule: &mut RenewalRule) {
        match self {
            Self::Name(name) => rule.name = name,
            Self::Shift(shift) => rule.shift = shift,
            Self::Vehicle(vehicle) => rule.vehicle = vehicle,
            Self::Rent(rent) => rule.rent = rent,
            Self::Duration(duration) => rule.duration = duration,
            Self::EffectiveDate(date) => rule.effective_date = date,
            Self::WorkDays(days) => rule.work_days = days,
        }
    }
}

/// Whether a status update changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The rule moved to the requested status.
    Changed,
    /// The rule already had the requested status.
    Unchanged,
}

/// Per-driver renewal rules.
///
/// The store performs no validation and no access control; callers decide
/// whether a mutation is allowed. Entries keep their insertion order and are
/// never pruned, so a driver whose last rule was removed is still present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStore {
    entries: Vec<DriverRules>,
    next_rule_id: u64,
}

impl RuleStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_rule_id: 1,
        }
    }

    /// Returns whether the driver has an entry, even an empty one.
    #[must_use]
    pub fn contains(&self, key: &DriverKey) -> bool {
        self.entry(key).is_some()
    }

    /// Returns the driver's entry.
    #[must_use]
    pub fn entry(&self, key: &DriverKey) -> Option<&DriverRules> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Returns the driver's rules.
    #[must_use]
    pub fn rules(&self, key: &DriverKey) -> Option<&[RenewalRule]> {
        self.entry(key).map(|e| e.rules.as_slice())
    }

    /// Returns one rule.
    #[must_use]
    pub fn rule(&self, key: &DriverKey, rule_id: RuleId) -> Option<&RenewalRule> {
        self.rules(key)?.iter().find(|r| r.id == rule_id)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DriverRules> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &DriverKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Returns the number of driver entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a defaulted rule to the driver's list, creating the list if
    /// needed, and returns a copy of it.
    pub fn add_rule(&mut self, driver: &DriverRef) -> RenewalRule {
        let id: RuleId = self.allocate_id();
        let index: usize = match self.entries.iter().position(|e| e.key == driver.key) {
            Some(index) => index,
            None => {
                self.entries.push(DriverRules {
                    key: driver.key.clone(),
                    display_name: driver.display_name.clone(),
                    rules: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry: &mut DriverRules = &mut self.entries[index];
        let rule: RenewalRule =
            RenewalRule::with_defaults(id, &entry.display_name, entry.rules.len() + 1);
        entry.rules.push(rule.clone());
        rule
    }

    /// Adds one defaulted rule for every driver that has no entry yet.
    ///
    /// Drivers already present are skipped, and a driver listed twice is
    /// only added once. Returns the created rules in input order.
    pub fn bulk_add(&mut self, drivers: &[DriverRef]) -> Vec<RenewalRule> {
        let mut created: Vec<RenewalRule> = Vec::new();
        for driver in drivers {
            if self.contains(&driver.key) {
                continue;
            }
            created.push(self.add_rule(driver));
        }
        created
    }

    /// Replaces a single field of a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or the rule does not exist. The store
    /// is unchanged in that case.
    pub fn update_field(
        &mut self,
        key: &DriverKey,
        rule_id: RuleId,
        field: RuleField,
    ) -> Result<(), CoreError> {
        let rule: &mut RenewalRule = self.rule_mut(key, rule_id)?;
        field.write_to(rule);
        Ok(())
    }

    /// Flips one work day of a rule and returns whether it is now set.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or the rule does not exist.
    pub fn toggle_work_day(
        &mut self,
        key: &DriverKey,
        rule_id: RuleId,
        day: WorkDay,
    ) -> Result<bool, CoreError> {
        let rule: &mut RenewalRule = self.rule_mut(key, rule_id)?;
        Ok(rule.work_days.toggle(day))
    }

    /// Sets a rule's status. Setting the current status is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or the rule does not exist.
    pub fn set_status(
        &mut self,
        key: &DriverKey,
        rule_id: RuleId,
        status: RuleStatus,
    ) -> Result<StatusChange, CoreError> {
        let rule: &mut RenewalRule = self.rule_mut(key, rule_id)?;
        if rule.status == status {
            return Ok(StatusChange::Unchanged);
        }
        rule.status = status;
        Ok(StatusChange::Changed)
    }

    /// Removes a rule and returns it. Remaining rules keep their names.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or the rule does not exist.
    pub fn remove_rule(
        &mut self,
        key: &DriverKey,
        rule_id: RuleId,
    ) -> Result<RenewalRule, CoreError> {
        let entry: &mut DriverRules = self.entry_mut(key)?;
        let index: usize = entry
            .rules
            .iter()
            .position(|r| r.id == rule_id)
            .ok_or_else(|| CoreError::RuleNotFound {
                driver: key.clone(),
                rule_id,
            })?;
        Ok(entry.rules.remove(index))
    }

    const fn allocate_id(&mut self) -> RuleId {
        let id: RuleId = RuleId::new(self.next_rule_id);
        self.next_rule_id += 1;
        id
    }

    fn entry_mut(&mut self, key: &DriverKey) -> Result<&mut DriverRules, CoreError> {
        self.entries
            .iter_mut()
            .find(|e| &e.key == key)
            .ok_or_else(|| CoreError::DriverNotFound(key.clone()))
    }

    fn rule_mut(&mut self, key: &DriverKey, rule_id: RuleId) -> Result<&mut RenewalRule, CoreError> {
        self.entry_mut(key)?
            .rules
            .iter_mut()
            .find(|r| r.id == rule_id)
            .ok_or_else(|| CoreError::RuleNotFound {
                driver: key.clone(),
                rule_id,
            })
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}
