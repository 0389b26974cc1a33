pub mod model;

use crate::AppState;
use crate::error::ApiError;
use crate::features::questions::model::{PageQuery, QuestionPageResponse};
use crate::features::questions::{page_number, to_json_questions};
use crate::services::pagination::paginate;
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};
use model::{CategoriesResponse, category_map};

pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/{id}/questions", get(category_questions_handler))
}

async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .get_all_categories()
        .await
        .map_err(ApiError::store)?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

async fn category_questions_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let page = page_number(query);

    let category = state
        .store
        .get_category(id)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound)?;

    let questions = state
        .store
        .get_questions_by_category(category.id)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: to_json_questions(paginate(page, &questions)),
        total_questions: questions.len(),
        categories: None,
        current_category: Some(category.category_type),
    }))
}
