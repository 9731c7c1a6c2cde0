// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The driver roster consumed by the rule editor.
//!
//! The roster is a static snapshot supplied from outside the editor. It is
//! used to label rules, to populate the all-drivers table and to offer
//! candidates in the bulk-add dialog.

use crate::error::DomainError;
use crate::types::{DriverKey, DriverRef};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A driver's gender as recorded on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// ♂ 男
    Male,
    /// ♀ 女
    Female,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Returns the label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "♂ 男",
            Self::Female => "♀ 女",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" | "男" => Ok(Self::Male),
            "Female" | "女" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

/// A driver's rental standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentalStatus {
    /// 可租用
    Available,
    /// 租用中
    #[default]
    Rented,
    /// 維修中
    Maintenance,
}

impl RentalStatus {
    /// Returns the label shown in the dashboard.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Available => "可租用",
            Self::Rented => "租用中",
            Self::Maintenance => "維修中",
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Driver licence number. Unique within a roster.
    pub id: String,
    /// Chinese name, used as the display name.
    pub name_cn: String,
    /// English name.
    pub name_en: String,
    /// Nickname, `-` when none.
    #[serde(default)]
    pub nickname: String,
    /// Gender.
    pub gender: Gender,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Current shift label, `-` when none.
    #[serde(default)]
    pub shift: String,
    /// Plate of the currently rented vehicle, `-` when none.
    #[serde(default)]
    pub rented_vehicle: String,
    /// Risk score.
    #[serde(default)]
    pub risk_score: u32,
    /// Free-text remark.
    #[serde(default)]
    pub remark: String,
    /// Rental standing.
    #[serde(default)]
    pub rental_status: RentalStatus,
}

impl Driver {
    /// Returns the key this driver's rules are stored under.
    #[must_use]
    pub fn key(&self) -> DriverKey {
        DriverKey::new(&self.id)
    }

    /// Returns the reference handed to the rule store.
    #[must_use]
    pub fn to_ref(&self) -> DriverRef {
        DriverRef::new(&self.id, &self.name_cn)
    }

    /// Returns whether the search text occurs in the Chinese name or the
    /// driver identifier.
    ///
    /// ASCII letters compare case-insensitively. An empty search matches.
    #[must_use]
    pub fn matches_search(&self, search: &str) -> bool {
        let needle: String = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name_cn.to_lowercase().contains(&needle) || self.id.to_lowercase().contains(&needle)
    }
}

/// An immutable, validated list of drivers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster {
    drivers: Vec<Driver>,
}

impl Roster {
    /// Creates a roster after validating the drivers.
    ///
    /// # Errors
    ///
    /// Returns an error if a driver identifier is empty or repeated.
    pub fn new(drivers: Vec<Driver>) -> Result<Self, DomainError> {
        crate::validation::validate_roster(&drivers)?;
        Ok(Self { drivers })
    }

    /// Returns the drivers in roster order.
    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Looks a driver up by key.
    #[must_use]
    pub fn find(&self, key: &DriverKey) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == key.value())
    }

    /// Returns the number of drivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// The roster snapshot the dashboard ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            drivers: vec![
                mock_driver("999999", "平板測試", "IPADTEST", Gender::Male, "30624770", "早更", "AAA123"),
                mock_driver("556612", "租的正", "ZU DI ZHENG", Gender::Male, "55991212", "-", "-"),
                mock_driver("987654", "租的好", "ZU DI HAO", Gender::Male, "55994646", "-", "-"),
                mock_driver("663459", "租的易", "ZU DI YI", Gender::Male, "95436639", "-", "-"),
                mock_driver("123456", "婷姐宜", "Ting Zu Yi", Gender::Female, "31415926", "-", "-"),
            ],
        }
    }
}

fn mock_driver(
    id: &str,
    name_cn: &str,
    name_en: &str,
    gender: Gender,
    phone: &str,
    shift: &str,
    rented_vehicle: &str,
) -> Driver {
    Driver {
        id: id.to_string(),
        name_cn: name_cn.to_string(),
        name_en: name_en.to_string(),
        nickname: String::from("-"),
        gender,
        phone: phone.to_string(),
        shift: shift.to_string(),
        rented_vehicle: rented_vehicle.to_string(),
        risk_score: 0,
        remark: String::new(),
        rental_status: RentalStatus::Rented,
    }
}
