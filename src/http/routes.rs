use super::handlers;
use super::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, OriginalUri, Request},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const CLIENT_PATH: &str = "/app";

/// Send `/app` to `/app/` so the page's relative asset links resolve
async fn client_trailing_slash(req: Request, next: Next) -> Response {
    let bare = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path() == CLIENT_PATH)
        .unwrap_or(false);

    if bare {
        return Redirect::permanent("/app/").into_response();
    }
    next.run(req).await
}

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let client = ServiceBuilder::new()
        .layer(middleware::from_fn(client_trailing_slash))
        .service(ServeDir::new(&state.static_dir));
    let body_limit = state.body_limit;

    Router::new()
        // Liveness
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Relays
        .route("/summarize", post(handlers::summarize))
        .route("/send-email", post(handlers::send_email))
        // Browser client
        .nest_service(CLIENT_PATH, client)
        .layer(DefaultBodyLimit::max(body_limit))
        // Request logging, then open CORS for any origin
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
