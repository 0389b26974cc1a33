pub mod model;

use crate::AppState;
use crate::error::ApiError;
use crate::features::extract::ValidJson;
use crate::features::questions::model::JsonQuestion;
use crate::services::quiz::{ALL_CATEGORIES, select_next_question};
use axum::{Json, Router, extract::State, routing::post};
use model::{QuizRequest, QuizResponse};

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_quiz_question_handler))
}

async fn next_quiz_question_handler(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category_id = request
        .quiz_category
        .id
        .resolve()
        .map_err(ApiError::Validation)?;

    let candidates = if category_id == ALL_CATEGORIES {
        state.store.get_all_questions().await
    } else {
        state.store.get_questions_by_category(category_id).await
    }
    .map_err(ApiError::store)?;

    let question = select_next_question(&candidates, &request.previous_question, &mut rand::rng())
        .map(JsonQuestion::from);

    tracing::debug!(
        category_id,
        category_label = ?request.quiz_category.category_type,
        candidates = candidates.len(),
        asked = request.previous_question.len(),
        exhausted = question.is_none(),
        "selected quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
