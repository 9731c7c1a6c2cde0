// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    BulkAddView, CandidateView, CommandRequest, CommandResponse, CreateSessionRequest, FieldValue,
    FilterRequest, RosterResponse, RosterRowView, RosterTableView, RuleRowView, RuleTableView,
    ScreenView, WarningView,
};
use fleet_desk::{
    Command, NavTarget, RosterColumn, RosterFilter, RuleColumn, RuleField, ScreenMode, Session,
    SessionConfig, Tab, TransitionResult, apply,
};
use fleet_desk_domain::{
    Driver, DriverKey, Gender, RenewalDuration, Rent, Roster, RuleId, Shift, WorkDay, WorkDays,
    parse_effective_date,
};
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

/// The result of an API operation that includes both the response and the
/// session to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The session after the operation.
    pub new_session: Session,
}

/// Opens a screen session over a roster snapshot.
///
/// # Arguments
///
/// * `roster` - The roster the session works against
/// * `request` - The requested initial view and mode
/// * `default_read_only` - The mode used when the request does not say
///
/// # Errors
///
/// Returns an error if the initial view is not a known tab.
pub fn open_session(
    roster: Arc<Roster>,
    request: &CreateSessionRequest,
    default_read_only: bool,
) -> Result<Session, ApiError> {
    let initial_view: Tab = match request.initial_view.as_deref() {
        None | Some("") => Tab::default(),
        Some(value) => parse_tab(value)?,
    };
    let mode: ScreenMode = if request.read_only.unwrap_or(default_read_only) {
        ScreenMode::ReadOnly
    } else {
        ScreenMode::Editable
    };
    info!(
        initial_view = initial_view.as_str(),
        read_only = mode == ScreenMode::ReadOnly,
        "Opening session"
    );
    Ok(Session::new(roster, SessionConfig { initial_view, mode }))
}

/// Executes a client command against a session.
///
/// This function:
/// - Translates the request into a core command
/// - Applies the command to the session
/// - Translates any errors to API errors
/// - Renders the resulting screen
///
/// # Arguments
///
/// * `session` - The current session
/// * `request` - The client command
///
/// # Errors
///
/// Returns an error if:
/// - A field value or identifier cannot be parsed
/// - The core refuses the command (see [`translate_core_error`])
pub fn execute(
    session: &Session,
    request: CommandRequest,
) -> Result<ApiResult<CommandResponse>, ApiError> {
    let command: Command = translate_command(request)?;
    let transition: TransitionResult = apply(session, command).map_err(translate_core_error)?;
    debug!(
        signals = transition.signals.len(),
        "Command executed through API"
    );

    let response: CommandResponse = CommandResponse {
        view: render_view(&transition.new_session),
        signals: transition.signals,
    };
    Ok(ApiResult {
        response,
        new_session: transition.new_session,
    })
}

/// Translates a client command into a core command.
///
/// # Errors
///
/// Returns an error if an identifier, navigation target or field value
/// is malformed.
pub fn translate_command(request: CommandRequest) -> Result<Command, ApiError> {
    let command: Command = match request {
        CommandRequest::RequestEdit { driver_id } => Command::RequestEdit {
            driver: driver_key(&driver_id)?,
        },
        CommandRequest::ConfirmEdit => Command::ConfirmEdit,
        CommandRequest::Navigate { target } => Command::Navigate(parse_nav_target(&target)?),
        CommandRequest::DismissWarning => Command::DismissWarning,
        CommandRequest::AddRule { driver_id } => Command::AddRule {
            driver: driver_key(&driver_id)?,
        },
        CommandRequest::UpdateField {
            driver_id,
            rule_id,
            field,
            value,
        } => Command::UpdateField {
            driver: driver_key(&driver_id)?,
            rule_id: RuleId::new(rule_id),
            field: parse_rule_field(&field, value)?,
        },
        CommandRequest::ToggleWorkDay {
            driver_id,
            rule_id,
            day,
        } => Command::ToggleWorkDay {
            driver: driver_key(&driver_id)?,
            rule_id: RuleId::new(rule_id),
            day: day.parse().map_err(translate_domain_error)?,
        },
        CommandRequest::StartRule { driver_id, rule_id } => Command::StartRule {
            driver: driver_key(&driver_id)?,
            rule_id: RuleId::new(rule_id),
        },
        CommandRequest::TerminateRule { driver_id, rule_id } => Command::TerminateRule {
            driver: driver_key(&driver_id)?,
            rule_id: RuleId::new(rule_id),
        },
        CommandRequest::DeleteRule { driver_id, rule_id } => Command::DeleteRule {
            driver: driver_key(&driver_id)?,
            rule_id: RuleId::new(rule_id),
        },
        CommandRequest::SetFilter { filter } => Command::SetFilter(parse_filter(filter)?),
        CommandRequest::BulkAddSearch { text } => Command::BulkAddSearch { text },
        CommandRequest::BulkAddToggle { driver_id } => Command::BulkAddToggle {
            driver: driver_key(&driver_id)?,
        },
        CommandRequest::BulkAddConfirm => Command::BulkAddConfirm,
        CommandRequest::BulkAddCancel => Command::BulkAddCancel,
    };
    Ok(command)
}

/// Lists the roster.
#[must_use]
pub fn list_roster(roster: &Roster) -> RosterResponse {
    RosterResponse {
        drivers: roster.drivers().to_vec(),
    }
}

/// Renders the whole screen for a session.
#[must_use]
pub fn render_view(session: &Session) -> ScreenView {
    let read_only: bool = session.is_read_only();

    let rule_rows: Vec<RuleRowView> = session
        .store
        .iter()
        .map(|entry| {
            let editable: bool = session.lock.permits(&entry.key);
            RuleRowView {
                driver_id: entry.key.value().to_string(),
                display_name: entry.display_name.clone(),
                editable,
                cells: RuleColumn::ALL
                    .iter()
                    .map(|column| column.render(entry, editable))
                    .collect(),
            }
        })
        .collect();

    let roster_columns: Vec<RosterColumn> = RosterColumn::visible(read_only);
    let roster_rows: Vec<RosterRowView> = session
        .filtered_roster()
        .into_iter()
        .map(|driver| {
            let key: DriverKey = driver.key();
            let editable: bool = session.lock.permits(&key);
            RosterRowView {
                driver_id: driver.id.clone(),
                cells: roster_columns
                    .iter()
                    .map(|column| column.render(driver, session.store.entry(&key), editable))
                    .collect(),
            }
        })
        .collect();

    ScreenView {
        active_tab: session.active_tab,
        mode: session.mode,
        editing: session.lock.holder().map(|k| k.value().to_string()),
        warning: session.warning_visible.then_some(WarningView {
            title: "您有未保存的更改",
            message: "請先點擊當前編輯行中的「確認」按鈕保存更改，然後再進行其他操作。",
            dismiss_label: "知道了",
        }),
        show_bulk_add_button: !read_only,
        rule_table: RuleTableView {
            columns: RuleColumn::ALL.to_vec(),
            headers: RuleColumn::ALL.iter().map(RuleColumn::header).collect(),
            rows: rule_rows,
        },
        roster_table: RosterTableView {
            headers: roster_columns.iter().map(RosterColumn::header).collect(),
            columns: roster_columns,
            rows: roster_rows,
        },
        bulk_add: render_bulk_add(session),
    }
}

fn render_bulk_add(session: &Session) -> BulkAddView {
    let candidates: Vec<CandidateView> = session
        .bulk_add_candidates()
        .into_iter()
        .map(|driver: &Driver| CandidateView {
            driver_id: driver.id.clone(),
            name: driver.name_cn.clone(),
            detail: format!("{} · {}", driver.id, driver.phone),
            selected: session.dialog.is_selected(&driver.key()),
        })
        .collect();
    let selected_count: usize = session.dialog.selected().len();
    BulkAddView {
        open: session.dialog.is_open(),
        title: "新增司機至自動編更",
        search: session.dialog.search().to_string(),
        search_placeholder: "搜尋司機姓名或證號...",
        empty_label: candidates.is_empty().then_some("沒有可添加的司機"),
        candidates,
        selected_count,
        can_confirm: session.dialog.can_confirm(),
        confirm_label: format!("確認添加 ({selected_count})"),
    }
}

fn driver_key(driver_id: &str) -> Result<DriverKey, ApiError> {
    let trimmed: &str = driver_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("driver_id"),
            message: String::from("Driver identifier must not be empty"),
        });
    }
    Ok(DriverKey::new(trimmed))
}

fn parse_tab(value: &str) -> Result<Tab, ApiError> {
    match value {
        "all_drivers" => Ok(Tab::AllDrivers),
        "renewal_rules" => Ok(Tab::RenewalRules),
        other => Err(ApiError::InvalidInput {
            field: String::from("initial_view"),
            message: format!("Unknown view '{other}'"),
        }),
    }
}

fn parse_nav_target(value: &str) -> Result<NavTarget, ApiError> {
    match value {
        "all_drivers" => Ok(NavTarget::AllDrivers),
        "renewal_rules" => Ok(NavTarget::RenewalRules),
        "renting" => Ok(NavTarget::Renting),
        "off_hire" => Ok(NavTarget::OffHire),
        "query" => Ok(NavTarget::Query),
        "reset" => Ok(NavTarget::Reset),
        "open_bulk_add" => Ok(NavTarget::OpenBulkAdd),
        other => Err(ApiError::InvalidInput {
            field: String::from("target"),
            message: format!("Unknown navigation target '{other}'"),
        }),
    }
}

fn parse_rule_field(field: &str, value: FieldValue) -> Result<RuleField, ApiError> {
    let rule_field: RuleField = match (field, value) {
        ("name", FieldValue::Text(name)) => RuleField::Name(name),
        ("shift", FieldValue::Text(shift)) => {
            let shift: Shift = shift.parse().map_err(translate_domain_error)?;
            RuleField::Shift(shift)
        }
        ("vehicle", FieldValue::Text(vehicle)) => RuleField::Vehicle(vehicle.trim().to_string()),
        ("rent", FieldValue::Text(rent)) => {
            RuleField::Rent(Rent::parse(&rent).map_err(translate_domain_error)?)
        }
        ("rent", FieldValue::Number(rent)) => {
            RuleField::Rent(Rent::parse(&rent.to_string()).map_err(translate_domain_error)?)
        }
        ("duration", FieldValue::Text(duration)) => {
            let duration: Option<RenewalDuration> =
                RenewalDuration::parse_optional(&duration).map_err(translate_domain_error)?;
            RuleField::Duration(duration)
        }
        ("effective_date", FieldValue::Text(date)) => {
            let date: Option<Date> = parse_effective_date(&date).map_err(translate_domain_error)?;
            RuleField::EffectiveDate(date)
        }
        ("work_days", FieldValue::List(days)) => {
            let days: WorkDays = days
                .iter()
                .map(|day| day.parse::<WorkDay>())
                .collect::<Result<WorkDays, _>>()
                .map_err(translate_domain_error)?;
            RuleField::WorkDays(days)
        }
        ("name" | "shift" | "vehicle" | "rent" | "duration" | "effective_date", _) => {
            return Err(ApiError::InvalidInput {
                field: field.to_string(),
                message: String::from("Expected a text value"),
            });
        }
        ("work_days", _) => {
            return Err(ApiError::InvalidInput {
                field: field.to_string(),
                message: String::from("Expected a list of days"),
            });
        }
        (other, _) => {
            return Err(ApiError::InvalidInput {
                field: String::from("field"),
                message: format!("Unknown rule field '{other}'"),
            });
        }
    };
    Ok(rule_field)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_filter(request: FilterRequest) -> Result<RosterFilter, ApiError> {
    if let (Some(min), Some(max)) = (request.min_risk, request.max_risk)
        && min > max
    {
        return Err(ApiError::InvalidInput {
            field: String::from("max_risk"),
            message: format!("Risk range {min} to {max} is empty"),
        });
    }
    let gender: Option<Gender> = non_empty(request.gender)
        .map(|g| g.parse())
        .transpose()
        .map_err(translate_domain_error)?;
    Ok(RosterFilter {
        driver_id: non_empty(request.driver_id),
        name: non_empty(request.name),
        nickname: non_empty(request.nickname),
        phone: non_empty(request.phone),
        gender,
        shift: non_empty(request.shift),
        min_risk: request.min_risk,
        max_risk: request.max_risk,
    })
}
