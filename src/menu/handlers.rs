//! REST API handlers for menu operations
//!
//! This module implements HTTP endpoints for listing, adding and removing
//! dishes, and for the per-course price overview.

use super::{models::*, state::SharedState, validation::DishDraft, view};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use tracing::info;

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/dishes", get(list_dishes).post(add_dish))
        .route("/dishes/:id", delete(remove_dish))
        .route("/averages", get(course_averages))
}

/// Endpoint: GET /dishes?course=<All|Starter|Main|Side|Dessert>
async fn list_dishes(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Json<MenuResponse> {
    let menu = state.menu();

    Json(MenuResponse {
        course: query.course,
        dishes: view::filter_by_course(menu.snapshot(), query.course),
        total: menu.len(),
    })
}

/// Endpoint: POST /dishes
/// Validates the submitted form draft and adds it to the menu.
async fn add_dish(
    State(state): State<SharedState>,
    body: Result<Json<DishDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(mut draft) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let dish = draft.submit(&mut state.menu()).map_err(|err| {
        info!(field = err.field(), reason = %err, "dish rejected");
        err
    })?;

    info!(dish_id = dish.id, course = %dish.course_type, "REST API ADD");
    Ok((StatusCode::CREATED, Json(dish)))
}

/// Endpoint: DELETE /dishes/:id
/// Unknown ids are reported, not treated as errors.
async fn remove_dish(State(state): State<SharedState>, Path(id): Path<u64>) -> impl IntoResponse {
    let mut menu = state.menu();
    let status = match menu.remove(id) {
        Some(dish) => {
            info!(dish_id = id, dish_name = %dish.dish_name, "REST API REMOVE");
            "removed"
        }
        None => "not_found",
    };

    Json(RemoveResponse {
        status: status.to_string(),
        id,
        total: menu.len(),
    })
}

/// Endpoint: GET /averages
async fn course_averages(State(state): State<SharedState>) -> Json<AveragesResponse> {
    Json(AveragesResponse {
        averages: view::average_price_by_course(state.menu().snapshot()),
    })
}
