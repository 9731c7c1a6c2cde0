// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, execute, list_roster, open_session, render_view, translate_command,
};
pub use request_response::{
    BulkAddView, CandidateView, CommandRequest, CommandResponse, CreateSessionRequest,
    CreateSessionResponse, FieldValue, FilterRequest, RosterResponse, RosterRowView,
    RosterTableView, RuleRowView, RuleTableView, ScreenView, WarningView,
};
