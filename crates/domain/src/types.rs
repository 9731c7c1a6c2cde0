// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;

/// Identifies a driver in the rule store.
///
/// This is the driver licence number from the roster, not the display
/// name, so two drivers sharing a name never share a rule list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverKey(String);

impl DriverKey {
    /// Creates a new `DriverKey`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DriverKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A driver reference as seen by the rule store: the key plus the name
/// used for rule labels and table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRef {
    /// The driver key.
    pub key: DriverKey,
    /// The display name.
    pub display_name: String,
}

impl DriverRef {
    /// Creates a new `DriverRef`.
    #[must_use]
    pub fn new(key: &str, display_name: &str) -> Self {
        Self {
            key: DriverKey::new(key),
            display_name: display_name.to_string(),
        }
    }
}

/// Opaque identifier of a renewal rule.
///
/// Allocated from a monotonic counter, so two rules never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(u64);

impl RuleId {
    /// Creates a `RuleId` from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The recurring work slot a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Shift {
    /// 早更
    #[default]
    Morning,
    /// 晚更
    Evening,
    /// 特更
    Special,
}

impl Shift {
    /// All shifts in display order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Evening, Self::Special];

    /// Converts this shift to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Special => "Special",
        }
    }

    /// Returns the label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Morning => "早更",
            Self::Evening => "晚更",
            Self::Special => "特更",
        }
    }
}

impl FromStr for Shift {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" | "早更" => Ok(Self::Morning),
            "Evening" | "晚更" => Ok(Self::Evening),
            "Special" | "特更" => Ok(Self::Special),
            _ => Err(DomainError::InvalidShift(s.to_string())),
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How long an automatic renewal runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenewalDuration {
    /// 一週
    OneWeek,
    /// 兩週
    TwoWeeks,
    /// 三週
    ThreeWeeks,
    /// 四週
    FourWeeks,
}

impl RenewalDuration {
    /// All durations in display order.
    pub const ALL: [Self; 4] = [
        Self::OneWeek,
        Self::TwoWeeks,
        Self::ThreeWeeks,
        Self::FourWeeks,
    ];

    /// Converts this duration to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneWeek => "OneWeek",
            Self::TwoWeeks => "TwoWeeks",
            Self::ThreeWeeks => "ThreeWeeks",
            Self::FourWeeks => "FourWeeks",
        }
    }

    /// Returns the label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneWeek => "一週",
            Self::TwoWeeks => "兩週",
            Self::ThreeWeeks => "三週",
            Self::FourWeeks => "四週",
        }
    }

    /// Parses an optional duration where the empty string means unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither empty nor a known duration.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, DomainError> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        s.trim().parse().map(Some)
    }
}

impl FromStr for RenewalDuration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OneWeek" | "一週" => Ok(Self::OneWeek),
            "TwoWeeks" | "兩週" => Ok(Self::TwoWeeks),
            "ThreeWeeks" | "三週" => Ok(Self::ThreeWeeks),
            "FourWeeks" | "四週" => Ok(Self::FourWeeks),
            _ => Err(DomainError::InvalidDuration(s.to_string())),
        }
    }
}

impl std::fmt::Display for RenewalDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weekday a rule's driver is scheduled to work.
///
/// Ordering follows the dashboard: Monday first, Sunday last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WorkDay {
    /// 周一
    Monday,
    /// 周二
    Tuesday,
    /// 周三
    Wednesday,
    /// 周四
    Thursday,
    /// 周五
    Friday,
    /// 周六
    Saturday,
    /// 周日
    Sunday,
}

impl WorkDay {
    /// All weekdays, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Converts this weekday to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the full label, e.g. 周一.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monday => "周一",
            Self::Tuesday => "周二",
            Self::Wednesday => "周三",
            Self::Thursday => "周四",
            Self::Friday => "周五",
            Self::Saturday => "周六",
            Self::Sunday => "周日",
        }
    }

    /// Returns the single-character label used on the day toggles.
    #[must_use]
    pub const fn short_label(&self) -> &'static str {
        match self {
            Self::Monday => "一",
            Self::Tuesday => "二",
            Self::Wednesday => "三",
            Self::Thursday => "四",
            Self::Friday => "五",
            Self::Saturday => "六",
            Self::Sunday => "日",
        }
    }
}

impl FromStr for WorkDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s || day.label() == s || day.short_label() == s)
            .ok_or_else(|| DomainError::InvalidWorkDay(s.to_string()))
    }
}

impl std::fmt::Display for WorkDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of weekdays a rule covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkDays(BTreeSet<WorkDay>);

impl WorkDays {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns whether the day is in the set.
    #[must_use]
    pub fn contains(&self, day: WorkDay) -> bool {
        self.0.contains(&day)
    }

    /// Adds the day if absent, removes it if present.
    ///
    /// Returns whether the day is in the set afterwards.
    pub fn toggle(&mut self, day: WorkDay) -> bool {
        if self.0.remove(&day) {
            false
        } else {
            self.0.insert(day);
            true
        }
    }

    /// Iterates Monday first.
    pub fn iter(&self) -> impl Iterator<Item = WorkDay> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of days in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no day is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<WorkDay> for WorkDays {
    fn from_iter<T: IntoIterator<Item = WorkDay>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether a rule currently renews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RuleStatus {
    /// The rule renews.
    #[default]
    Active,
    /// The rule is kept but no longer renews. It can be reactivated.
    Terminated,
}

impl RuleStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Terminated => "Terminated",
        }
    }
}

impl FromStr for RuleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Terminated" => Ok(Self::Terminated),
            _ => Err(DomainError::InvalidRuleStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-negative rent amount in whole HKD.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rent(u32);

impl Rent {
    /// Creates a new `Rent`.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.0
    }

    /// Parses rent as typed into the rent input.
    ///
    /// An empty input means zero, matching a cleared number field.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is negative or not a whole number.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed: &str = input.trim();
        if trimmed.is_empty() {
            return Ok(Self(0));
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidRent(input.to_string()))?;
        if value < 0 {
            return Err(DomainError::NegativeRent(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidRent(input.to_string()))
    }
}

impl std::fmt::Display for Rent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A driver's auto-renewal configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalRule {
    /// Stable identifier.
    pub id: RuleId,
    /// Display label.
    pub name: String,
    /// The shift the rule schedules.
    pub shift: Shift,
    /// Bound vehicle plate, empty when unbound.
    pub vehicle: String,
    /// Rent per renewal.
    pub rent: Rent,
    /// Renewal cadence, if chosen.
    pub duration: Option<RenewalDuration>,
    /// First auto-scheduling date, if chosen.
    pub effective_date: Option<Date>,
    /// Weekdays covered.
    pub work_days: WorkDays,
    /// Whether the rule renews.
    pub status: RuleStatus,
}

impl RenewalRule {
    /// Creates a rule with every field defaulted.
    ///
    /// `ordinal` is the 1-based position of the rule among the driver's
    /// rules at creation time. It is baked into the name and never
    /// renumbered.
    #[must_use]
    pub fn with_defaults(id: RuleId, display_name: &str, ordinal: usize) -> Self {
        Self {
            id,
            name: default_rule_name(display_name, ordinal),
            shift: Shift::default(),
            vehicle: String::new(),
            rent: Rent::default(),
            duration: None,
            effective_date: None,
            work_days: WorkDays::new(),
            status: RuleStatus::Active,
        }
    }

    /// Returns whether the rule is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RuleStatus::Active
    }
}

/// Builds the default label for a driver's `ordinal`-th rule.
#[must_use]
pub fn default_rule_name(display_name: &str, ordinal: usize) -> String {
    format!("{display_name}的規則 {ordinal}")
}
