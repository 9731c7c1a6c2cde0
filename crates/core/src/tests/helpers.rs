// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Session, SessionConfig, TransitionResult, apply};
use fleet_desk_domain::{Driver, DriverKey, DriverRef, Gender, RentalStatus, Roster};
use std::sync::Arc;

pub fn create_test_driver(id: &str, name: &str) -> Driver {
    Driver {
        id: String::from(id),
        name_cn: String::from(name),
        name_en: name.to_uppercase(),
        nickname: String::from("-"),
        gender: Gender::Male,
        phone: format!("5550{id}"),
        shift: String::from("-"),
        rented_vehicle: String::from("-"),
        risk_score: 0,
        remark: String::new(),
        rental_status: RentalStatus::Rented,
    }
}

/// Alice (A1), Bob (B1) and Carol (C1).
pub fn create_test_roster() -> Arc<Roster> {
    Arc::new(
        Roster::new(vec![
            create_test_driver("A1", "Alice"),
            create_test_driver("B1", "Bob"),
            create_test_driver("C1", "Carol"),
        ])
        .unwrap(),
    )
}

pub fn alice() -> DriverKey {
    DriverKey::new("A1")
}

pub fn bob() -> DriverKey {
    DriverKey::new("B1")
}

pub fn carol() -> DriverKey {
    DriverKey::new("C1")
}

pub fn driver_ref(key: &DriverKey, name: &str) -> DriverRef {
    DriverRef::new(key.value(), name)
}

pub fn create_test_session() -> Session {
    Session::new(create_test_roster(), SessionConfig::default())
}

/// Applies a command that is expected to succeed and returns the new session.
pub fn step(session: &Session, command: Command) -> Session {
    apply(session, command).unwrap().new_session
}

/// Applies a sequence of commands that are all expected to succeed.
pub fn run(session: &Session, commands: Vec<Command>) -> Session {
    commands
        .into_iter()
        .fold(session.clone(), |current, command| step(&current, command))
}

pub fn apply_ok(session: &Session, command: Command) -> TransitionResult {
    apply(session, command).unwrap()
}
