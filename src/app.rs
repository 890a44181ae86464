use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            patch(handlers::update_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/toggle", post(handlers::toggle))
        .route("/api/habits/:id/streak", get(handlers::get_streak))
        .route("/api/day", get(handlers::get_day))
        .route("/api/day/prev", post(handlers::previous_day))
        .route("/api/day/next", post(handlers::next_day))
        .route("/api/day/today", post(handlers::jump_to_today))
        .route("/api/day/goto", post(handlers::go_to_day))
        .route("/api/week", get(handlers::get_week))
        .route("/api/month", get(handlers::get_month))
        .route("/api/export", get(handlers::export))
        .route("/api/import", post(handlers::import))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
