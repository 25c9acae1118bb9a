//! HTTP boundary: axum router over the roster, catalog, and enrollment
//! service, plus static asset hosting for the landing page.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::catalog::ActivityCatalog;
use crate::enrollment::EnrollmentService;
use crate::error::ApiError;
use crate::roster::{Role, UserDirectory};

/// Server configuration
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: "static".to_string(),
        }
    }
}

/// Shared state for the request handlers. Constructed once at startup and
/// injected; the stores have no other owners.
pub struct AppState {
    pub roster: Arc<UserDirectory>,
    pub catalog: Arc<ActivityCatalog>,
    pub enrollment: Arc<EnrollmentService>,
}

impl AppState {
    pub fn new(roster: Arc<UserDirectory>, catalog: Arc<ActivityCatalog>) -> Arc<Self> {
        let enrollment = EnrollmentService::new(roster.clone(), catalog.clone());
        Arc::new(Self {
            roster,
            catalog,
            enrollment,
        })
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/users", get(list_users_handler))
        .route("/users/create", post(create_user_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/{activity_name}/signup", post(signup_handler))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Run the server until shutdown
pub async fn run(config: ServerConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.bind, config.port)).await?;
    eprintln!("[server] Listening on {}:{}", config.bind, config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Confirmation body for mutating endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

async fn root_handler() -> Redirect {
    Redirect::to("/static/index.html")
}

/// GET /users - full roster snapshot, insertion order
async fn list_users_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut map = serde_json::Map::new();
    for (email, user) in state.roster.snapshot() {
        map.insert(email, json!(user));
    }
    Json(Value::Object(map))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserQuery {
    pub email: String,
    /// Typed: any value outside student/teacher/staff is rejected at
    /// deserialization with a 400.
    pub role: Role,
}

/// POST /users/create?email=..&role=..
async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CreateUserQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.roster.create(&query.email, query.role)?;
    Ok(Json(MessageResponse {
        message: format!("Created user {} with role {}", query.email, query.role),
    }))
}

/// GET /activities - full catalog snapshot with current participants
async fn list_activities_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut map = serde_json::Map::new();
    for (name, activity) in state.catalog.snapshot() {
        map.insert(name, json!(activity));
    }
    Json(Value::Object(map))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// POST /activities/{activity_name}/signup?email=..
async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.enrollment.enroll(&activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

#[derive(Debug, Deserialize)]
pub struct UnregisterQuery {
    pub email: String,
    pub acting_user: String,
}

/// DELETE /activities/{activity_name}/unregister?email=..&acting_user=..
async fn unregister_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<UnregisterQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .enrollment
        .unenroll(&activity_name, &query.email, &query.acting_user)?;
    Ok(Json(MessageResponse { message }))
}
