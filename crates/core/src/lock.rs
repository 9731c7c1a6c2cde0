// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_desk_domain::DriverKey;

/// The single, session-wide edit lock.
///
/// At most one driver's rules are editable at a time. The lock is released
/// only by [`EditLock::confirm`]; there is no timeout and no discard path,
/// because edits are applied to the store as they happen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditLock {
    /// No driver is being edited.
    #[default]
    Unlocked,
    /// The rules of this driver are being edited.
    LockedOn(DriverKey),
}

/// Result of asking for the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// The lock was free and is now held for the requested driver.
    Acquired,
    /// The requested driver already held the lock.
    AlreadyHeld,
    /// Another driver holds the lock; nothing changed.
    Refused {
        /// The driver currently holding the lock.
        holder: DriverKey,
    },
}

/// Result of asking whether a guarded action may run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No edit is pending; the action may run.
    Proceed,
    /// An edit is pending; the action must not run.
    Refused {
        /// The driver currently holding the lock.
        holder: DriverKey,
    },
}

impl EditLock {
    /// Asks for the lock on behalf of `key`.
    pub fn request_edit(&mut self, key: &DriverKey) -> LockOutcome {
        match self {
            Self::Unlocked => {
                *self = Self::LockedOn(key.clone());
                LockOutcome::Acquired
            }
            Self::LockedOn(holder) if holder == key => LockOutcome::AlreadyHeld,
            Self::LockedOn(holder) => LockOutcome::Refused {
                holder: holder.clone(),
            },
        }
    }

    /// Releases the lock, returning the driver that held it.
    ///
    /// Confirming while unlocked does nothing and returns `None`.
    pub fn confirm(&mut self) -> Option<DriverKey> {
        match std::mem::take(self) {
            Self::Unlocked => None,
            Self::LockedOn(holder) => Some(holder),
        }
    }

    /// Checks whether a navigation or query action may run.
    #[must_use]
    pub fn guard(&self) -> GuardOutcome {
        match self {
            Self::Unlocked => GuardOutcome::Proceed,
            Self::LockedOn(holder) => GuardOutcome::Refused {
                holder: holder.clone(),
            },
        }
    }

    /// Returns whether `key` may mutate its rules right now.
    #[must_use]
    pub fn permits(&self, key: &DriverKey) -> bool {
        matches!(self, Self::LockedOn(holder) if holder == key)
    }

    /// Returns the driver holding the lock.
    #[must_use]
    pub const fn holder(&self) -> Option<&DriverKey> {
        match self {
            Self::Unlocked => None,
            Self::LockedOn(holder) => Some(holder),
        }
    }

    /// Returns whether any driver holds the lock.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::LockedOn(_))
    }
}
