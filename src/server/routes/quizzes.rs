use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiResult},
        quiz::pick_unseen,
    },
    telemetry::QUIZ_QUESTION_CNTR,
};

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizPayload {
    success: bool,
    // null once the pool is exhausted, the client ends the quiz on it
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizBody>,
) -> ApiResult<QuizPayload> {
    let previous = body.previous_questions.ok_or(ApiError::BadRequest)?;
    let category = body.quiz_category.ok_or(ApiError::BadRequest)?;

    // category id 0 means "all categories"
    let candidates = if category.id == 0 {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, category.id).await?
    };

    let question = pick_unseen(&candidates, &previous).cloned();
    if question.is_some() {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[category.id.to_string().as_str()])
            .inc();
    }
    Ok(Json(QuizPayload {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
