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
#![allow(clippy::multiple_crate_versions)]

mod registry;
mod roster_file;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use fleet_desk::Session;
use fleet_desk_api::{
    ApiError, ApiResult, CommandRequest, CommandResponse, CreateSessionRequest,
    CreateSessionResponse, RosterResponse, ScreenView, execute, list_roster, open_session,
    render_view,
};
use fleet_desk_domain::Roster;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::registry::SessionRegistry;

/// Fleet Desk Server - HTTP server for the renewal rule editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON roster file. If not provided, uses the built-in roster.
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Open new sessions read-only unless the request says otherwise
    #[arg(long)]
    read_only: bool,

    /// Maximum number of open sessions; the oldest is evicted beyond this
    #[arg(long, default_value_t = registry::DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,
}

/// Application state shared across handlers.
///
/// Sessions live behind a Mutex so commands against them are applied one at
/// a time. The roster is immutable and shared by every session.
#[derive(Clone)]
struct AppState {
    /// The open sessions.
    sessions: Arc<Mutex<SessionRegistry>>,
    /// The roster snapshot handed to new sessions.
    roster: Arc<Roster>,
    /// The mode used when a create request does not name one.
    default_read_only: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn session_not_found(session_id: u64) -> Self {
        Self::from(ApiError::ResourceNotFound {
            resource_type: String::from("Session"),
            message: format!("Session {session_id} does not exist"),
        })
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for POST `/sessions` endpoint.
///
/// Opens a screen session and returns its first view.
async fn handle_create_session(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, HttpError> {
    info!(
        initial_view = ?request.initial_view,
        read_only = ?request.read_only,
        "Handling create_session request"
    );

    let session: Session = open_session(
        Arc::clone(&app_state.roster),
        &request,
        app_state.default_read_only,
    )?;
    let view: ScreenView = render_view(&session);

    let mut sessions = app_state.sessions.lock().await;
    let session_id: u64 = sessions.open(session);
    let open_count: usize = sessions.len();
    drop(sessions);

    info!(session_id, open_count, "Session opened");
    Ok(Json(CreateSessionResponse { session_id, view }))
}

/// Handler for GET `/sessions/{session_id}` endpoint.
async fn handle_get_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<u64>,
) -> Result<Json<ScreenView>, HttpError> {
    info!(session_id, "Handling get_session request");

    let sessions = app_state.sessions.lock().await;
    let view: Option<ScreenView> = sessions.get(session_id).map(render_view);
    drop(sessions);

    view.map(Json)
        .ok_or_else(|| HttpError::session_not_found(session_id))
}

/// Handler for POST `/sessions/{session_id}/commands` endpoint.
///
/// Applies one user action. A refused command leaves the stored session
/// untouched.
async fn handle_command(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<u64>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    info!(session_id, "Handling command request");

    let mut sessions = app_state.sessions.lock().await;
    let Some(session) = sessions.get(session_id) else {
        return Err(HttpError::session_not_found(session_id));
    };

    let result: ApiResult<CommandResponse> = execute(session, request)?;
    sessions.replace(session_id, result.new_session);
    drop(sessions);

    debug!(
        session_id,
        signals = result.response.signals.len(),
        "Command applied"
    );
    Ok(Json(result.response))
}

/// Handler for DELETE `/sessions/{session_id}` endpoint.
///
/// Discards the session together with its rule store.
async fn handle_close_session(
    AxumState(app_state): AxumState<AppState>,
    Path(session_id): Path<u64>,
) -> Result<StatusCode, HttpError> {
    info!(session_id, "Handling close_session request");

    let mut sessions = app_state.sessions.lock().await;
    let closed: Option<Session> = sessions.close(session_id);
    drop(sessions);

    closed
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| HttpError::session_not_found(session_id))
}

/// Handler for GET `/roster` endpoint.
async fn handle_list_roster(AxumState(app_state): AxumState<AppState>) -> Json<RosterResponse> {
    info!("Handling list_roster request");
    Json(list_roster(&app_state.roster))
}

async fn handle_health() -> &'static str {
    "ok"
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/roster", get(handle_list_roster))
        .route("/sessions", post(handle_create_session))
        .route(
            "/sessions/{session_id}",
            get(handle_get_session).delete(handle_close_session),
        )
        .route("/sessions/{session_id}/commands", post(handle_command))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fleet Desk Server");

    let roster: Roster = if let Some(path) = &args.roster {
        info!("Loading roster from: {}", path.display());
        roster_file::load_roster(path)?
    } else {
        info!("Using built-in roster");
        Roster::builtin()
    };
    info!(
        drivers = roster.len(),
        read_only = args.read_only,
        max_sessions = args.max_sessions,
        "Roster ready"
    );

    let app_state: AppState = AppState {
        sessions: Arc::new(Mutex::new(SessionRegistry::with_max_sessions(
            args.max_sessions,
        ))),
        roster: Arc::new(roster),
        default_read_only: args.read_only,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
