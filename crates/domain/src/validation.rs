// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::roster::Driver;
use std::collections::HashSet;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Validates that every driver in a roster has a unique, non-empty identifier.
///
/// # Arguments
///
/// * `drivers` - The drivers to validate
///
/// # Errors
///
/// Returns an error if:
/// - A driver identifier is empty
/// - A driver identifier appears more than once
pub fn validate_roster(drivers: &[Driver]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for driver in drivers {
        if driver.id.trim().is_empty() {
            return Err(DomainError::EmptyDriverId {
                name: driver.name_cn.clone(),
            });
        }
        // Rule: the rule store is keyed by driver id
        if !seen.insert(driver.id.as_str()) {
            return Err(DomainError::DuplicateDriverId(driver.id.clone()));
        }
    }
    Ok(())
}

/// Parses an effective date as entered in the date input.
///
/// The empty string clears the date.
///
/// # Errors
///
/// Returns an error if the value is not empty and not a `YYYY-MM-DD` date.
pub fn parse_effective_date(input: &str) -> Result<Option<Date>, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|e| DomainError::InvalidDate {
            date_string: input.to_string(),
            error: e.to_string(),
        })
}

/// Formats a date the way the date input expects it.
#[must_use]
pub fn format_effective_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
