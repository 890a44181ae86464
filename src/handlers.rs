use crate::calendar::{date_key, format_label, parse_date_key, today};
use crate::errors::AppError;
use crate::models::{
    DateQuery, DaySummary, ExportDocument, Habit, HabitUpdate, ImportSummary, MonthGrid,
    NewHabitRequest, StreakResponse, ToggleResponse, WeekGrid,
};
use crate::state::AppState;
use crate::stats::{day_summary, longest_streak, month_grid, streak_for, week_grid};
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let viewing = state.navigator.lock().await.viewing();
    Html(render_index(&format_label(viewing)))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let store = state.store.lock().await;
    let habits = store
        .data()
        .habits_newest_first()
        .into_iter()
        .cloned()
        .collect();
    Json(habits)
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let mut store = state.store.lock().await;
    match store.add_habit(&payload.name, payload.color).await? {
        Some(habit) => Ok((StatusCode::CREATED, Json(habit))),
        None => Err(AppError::bad_request("habit name must not be empty")),
    }
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HabitUpdate>,
) -> Result<Json<Habit>, AppError> {
    if payload.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(AppError::bad_request("habit name must not be empty"));
    }
    let mut store = state.store.lock().await;
    store
        .update_habit(&id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| unknown_habit(&id))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    store.delete_habit(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date = resolve_date(&state, query.date.as_deref()).await?;
    if date > today() {
        return Err(AppError::bad_request("cannot mark a day after today"));
    }

    let mut store = state.store.lock().await;
    let done = store
        .toggle_completion(&id, date)
        .await?
        .ok_or_else(|| unknown_habit(&id))?;

    Ok(Json(ToggleResponse {
        habit_id: id,
        date: date_key(date),
        done,
    }))
}

pub async fn get_streak(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<StreakResponse>, AppError> {
    let as_of = resolve_date(&state, query.date.as_deref()).await?;
    let store = state.store.lock().await;
    let data = store.data();
    if data.habit(&id).is_none() {
        return Err(unknown_habit(&id));
    }

    Ok(Json(StreakResponse {
        current: streak_for(data, &id, as_of),
        longest: longest_streak(data, &id),
        as_of: date_key(as_of),
        habit_id: id,
    }))
}

pub async fn get_day(State(state): State<AppState>) -> Json<DaySummary> {
    let viewing = state.navigator.lock().await.viewing();
    Json(summary_for(&state, viewing).await)
}

pub async fn previous_day(State(state): State<AppState>) -> Json<DaySummary> {
    let viewing = {
        let mut navigator = state.navigator.lock().await;
        navigator.go_to_previous_day();
        navigator.viewing()
    };
    Json(summary_for(&state, viewing).await)
}

pub async fn next_day(State(state): State<AppState>) -> Json<DaySummary> {
    let viewing = {
        let mut navigator = state.navigator.lock().await;
        navigator.go_to_next_day();
        navigator.viewing()
    };
    Json(summary_for(&state, viewing).await)
}

pub async fn jump_to_today(State(state): State<AppState>) -> Json<DaySummary> {
    let viewing = {
        let mut navigator = state.navigator.lock().await;
        navigator.reset_to_today();
        navigator.viewing()
    };
    Json(summary_for(&state, viewing).await)
}

pub async fn go_to_day(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DaySummary>, AppError> {
    let date = query
        .date
        .as_deref()
        .map(parse_date)
        .transpose()?
        .ok_or_else(|| AppError::bad_request("date is required"))?;

    let viewing = {
        let mut navigator = state.navigator.lock().await;
        if !navigator.go_to(date) {
            return Err(AppError::bad_request("cannot view a day after today"));
        }
        navigator.viewing()
    };
    Ok(Json(summary_for(&state, viewing).await))
}

pub async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<WeekGrid>, AppError> {
    let center = resolve_date(&state, query.date.as_deref()).await?;
    let store = state.store.lock().await;
    Ok(Json(week_grid(store.data(), center)))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    let center = resolve_date(&state, query.date.as_deref()).await?;
    let store = state.store.lock().await;
    Ok(Json(month_grid(store.data(), center)))
}

pub async fn export(State(state): State<AppState>) -> Json<ExportDocument> {
    let store = state.store.lock().await;
    Json(store.export())
}

pub async fn import(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportSummary>, AppError> {
    let mut store = state.store.lock().await;
    Ok(Json(store.import(&body).await?))
}

pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.lock().await.reset().await?;
    state.navigator.lock().await.reset_to_today();
    Ok(StatusCode::NO_CONTENT)
}

async fn summary_for(state: &AppState, viewing: NaiveDate) -> DaySummary {
    let store = state.store.lock().await;
    day_summary(store.data(), viewing)
}

/// Explicit `date` parameter, or the navigator's viewing date.
async fn resolve_date(state: &AppState, raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(state.navigator.lock().await.viewing()),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    parse_date_key(raw).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn unknown_habit(id: &str) -> AppError {
    AppError::not_found(format!("no habit with id '{id}'"))
}
