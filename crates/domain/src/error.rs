// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rent amount is below zero.
    NegativeRent(i64),
    /// Rent amount could not be interpreted as a whole number.
    InvalidRent(String),
    /// Shift value is not one of the known shifts.
    InvalidShift(String),
    /// Renewal duration is not one of the known durations.
    InvalidDuration(String),
    /// Work day token is not a weekday.
    InvalidWorkDay(String),
    /// Rule status is not one of the known statuses.
    InvalidRuleStatus(String),
    /// Gender value is not one of the known values.
    InvalidGender(String),
    /// Failed to parse date from string.
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A driver in the roster has an empty identifier.
    EmptyDriverId {
        /// The display name of the offending driver.
        name: String,
    },
    /// Two drivers in the roster share the same identifier.
    DuplicateDriverId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeRent(amount) => {
                write!(f, "Rent must not be negative, got {amount}")
            }
            Self::InvalidRent(value) => write!(f, "Invalid rent amount: '{value}'"),
            Self::InvalidShift(value) => write!(f, "Invalid shift: '{value}'"),
            Self::InvalidDuration(value) => write!(f, "Invalid renewal duration: '{value}'"),
            Self::InvalidWorkDay(value) => write!(f, "Invalid work day: '{value}'"),
            Self::InvalidRuleStatus(value) => write!(f, "Invalid rule status: '{value}'"),
            Self::InvalidGender(value) => write!(f, "Invalid gender: '{value}'"),
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::EmptyDriverId { name } => {
                write!(f, "Driver '{name}' has an empty driver identifier")
            }
            Self::DuplicateDriverId(id) => {
                write!(f, "Driver identifier '{id}' appears more than once in the roster")
            }
        }
    }
}

impl std::error::Error for DomainError {}
