pub mod model;

use crate::AppState;
use crate::domain::Question;
use crate::error::ApiError;
use crate::features::categories::model::category_map;
use crate::features::extract::ValidJson;
use crate::services::pagination::{paginate, requested_page};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::{delete, get, post},
};
use model::{
    JsonQuestion, NewQuestionRequest, PageQuery, QuestionPageResponse, SearchRequest,
    SuccessResponse,
};

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/{id}", delete(delete_question_handler))
        .route("/search", post(search_questions_handler))
}

// a malformed query string is treated like a missing page parameter
pub(crate) fn page_number(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    match query {
        Ok(Query(query)) => requested_page(query.page.as_deref()),
        Err(_) => requested_page(None),
    }
}

pub(crate) fn to_json_questions(questions: &[Question]) -> Vec<JsonQuestion> {
    questions.iter().map(JsonQuestion::from).collect()
}

async fn list_questions_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = page_number(query);

    let questions = state
        .store
        .get_all_questions()
        .await
        .map_err(ApiError::store)?;

    let page_questions = paginate(page, &questions);
    if page_questions.is_empty() {
        tracing::debug!(page, total = questions.len(), "requested question page is empty");
        return Err(ApiError::NotFound);
    }

    let categories = state
        .store
        .get_all_categories()
        .await
        .map_err(ApiError::store)?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: to_json_questions(page_questions),
        total_questions: questions.len(),
        categories: Some(category_map(&categories)),
        current_category: None,
    }))
}

async fn delete_question_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let deleted = state
        .store
        .delete_question(id)
        .await
        .map_err(ApiError::store)?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "deleted question");
    Ok(Json(SuccessResponse::ok()))
}

async fn create_question_handler(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<NewQuestionRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let new_question = request.validate().map_err(ApiError::Validation)?;

    let question = state
        .store
        .insert_question(&new_question)
        .await
        .map_err(ApiError::store)?;

    tracing::info!(id = question.id, category = question.category, "created question");
    Ok(Json(SuccessResponse::ok()))
}

async fn search_questions_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    ValidJson(request): ValidJson<SearchRequest>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = page_number(query);

    let matches = state
        .store
        .search_questions(&request.search_term)
        .await
        .map_err(ApiError::store)?;

    if matches.is_empty() {
        tracing::debug!(term = %request.search_term, "search matched nothing");
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: to_json_questions(paginate(page, &matches)),
        total_questions: matches.len(),
        categories: None,
        current_category: None,
    }))
}
