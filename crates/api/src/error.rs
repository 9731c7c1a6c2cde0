// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fleet_desk::CoreError;
use fleet_desk_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::NegativeRent(_) | DomainError::InvalidRent(_) => ApiError::InvalidInput {
            field: String::from("rent"),
            message,
        },
        DomainError::InvalidShift(_) => ApiError::InvalidInput {
            field: String::from("shift"),
            message,
        },
        DomainError::InvalidDuration(_) => ApiError::InvalidInput {
            field: String::from("duration"),
            message,
        },
        DomainError::InvalidWorkDay(_) => ApiError::InvalidInput {
            field: String::from("work_days"),
            message,
        },
        DomainError::InvalidRuleStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidGender(_) => ApiError::InvalidInput {
            field: String::from("gender"),
            message,
        },
        DomainError::InvalidDate { .. } => ApiError::InvalidInput {
            field: String::from("effective_date"),
            message,
        },
        DomainError::EmptyDriverId { .. } => ApiError::InvalidInput {
            field: String::from("driver_id"),
            message,
        },
        DomainError::DuplicateDriverId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_driver_id"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DriverNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Driver rules"),
            message,
        },
        CoreError::RuleNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Rule"),
            message,
        },
        CoreError::UnknownDriver(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message,
        },
        CoreError::NotEditing(_) => ApiError::DomainRuleViolation {
            rule: String::from("edit_lock_required"),
            message,
        },
        CoreError::ReadOnly => ApiError::DomainRuleViolation {
            rule: String::from("read_only_session"),
            message,
        },
        CoreError::EmptySelection => ApiError::DomainRuleViolation {
            rule: String::from("non_empty_selection"),
            message,
        },
        CoreError::NotSelectable(_) => ApiError::DomainRuleViolation {
            rule: String::from("bulk_add_exclusion"),
            message,
        },
        CoreError::DialogNotOpen => ApiError::DomainRuleViolation {
            rule: String::from("bulk_add_dialog_open"),
            message,
        },
    }
}
