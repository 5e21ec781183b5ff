/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::{build_router, AppState}, config::Config};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
///
/// let app = build_router(AppState::new(pool, config));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; the pool
/// is internally reference-counted so the clone is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router
///
/// ```text
/// /
/// ├── /health                       # Health check
/// ├── /auth
/// │   ├── POST /register
/// │   └── POST /login
/// ├── /boards
/// │   ├── GET  /?userId=            # Boards owned by or shared with a user
/// │   ├── POST /
/// │   ├── GET/PUT/DELETE /:id
/// │   └── POST/DELETE /:id/members
/// ├── /columns
/// │   ├── POST /
/// │   └── PUT/DELETE /:id
/// ├── /tasks
/// │   ├── POST /
/// │   ├── PUT/DELETE /:id
/// │   └── PUT /:id/move
/// └── /notifications
///     ├── GET /?userId=
///     ├── PUT /mark-all-read
///     └── PUT/DELETE /:id
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    let board_routes = Router::new()
        .route(
            "/",
            get(routes::boards::list_boards).post(routes::boards::create_board),
        )
        .route(
            "/:id",
            get(routes::boards::get_board)
                .put(routes::boards::update_board)
                .delete(routes::boards::delete_board),
        )
        .route(
            "/:id/members",
            post(routes::boards::add_member).delete(routes::boards::remove_member),
        );

    let column_routes = Router::new()
        .route("/", post(routes::columns::create_column))
        .route(
            "/:id",
            put(routes::columns::update_column).delete(routes::columns::delete_column),
        );

    let task_routes = Router::new()
        .route("/", post(routes::tasks::create_task))
        .route(
            "/:id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route("/:id/move", put(routes::tasks::move_task));

    let notification_routes = Router::new()
        .route("/", get(routes::notifications::list_notifications))
        .route("/mark-all-read", put(routes::notifications::mark_all_read))
        .route(
            "/:id",
            put(routes::notifications::update_notification)
                .delete(routes::notifications::delete_notification),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/auth", auth_routes)
        .nest("/boards", board_routes)
        .nest("/columns", column_routes)
        .nest("/tasks", task_routes)
        .nest("/notifications", notification_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
