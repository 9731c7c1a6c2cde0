// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommandRequest, CreateSessionRequest, execute, open_session};
use fleet_desk::Session;
use fleet_desk_domain::Roster;
use std::sync::Arc;

pub fn create_test_session() -> Session {
    open_session(
        Arc::new(Roster::builtin()),
        &CreateSessionRequest::default(),
        false,
    )
    .unwrap()
}

/// Executes a request that is expected to succeed and returns the new session.
pub fn exec(session: &Session, request: CommandRequest) -> Session {
    execute(session, request).unwrap().new_session
}

pub fn add_rule(driver_id: &str) -> CommandRequest {
    CommandRequest::AddRule {
        driver_id: String::from(driver_id),
    }
}

pub fn request_edit(driver_id: &str) -> CommandRequest {
    CommandRequest::RequestEdit {
        driver_id: String::from(driver_id),
    }
}

/// A session where 平板測試 (999999) has one rule and holds the lock.
pub fn create_editing_session() -> Session {
    let session: Session = exec(&create_test_session(), add_rule("999999"));
    exec(&session, request_edit("999999"))
}

pub fn first_rule_id(session: &Session, driver_id: &str) -> u64 {
    session
        .store
        .rules(&fleet_desk_domain::DriverKey::new(driver_id))
        .unwrap()[0]
        .id
        .value()
}
