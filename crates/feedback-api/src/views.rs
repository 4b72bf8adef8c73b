use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use feedback_db::{
    Database, TIMESTAMP_FORMAT,
    models::{AnswerRow, QuestionRow},
};
use feedback_types::models::{Answer, Question, QuestionWithAnswers};
use tracing::{error, info, warn};

use crate::error::{AppError, Result};
use crate::extract::{QuestionId, VoteSubmission};
use crate::state::AppState;
use crate::templates;

/// How many questions the index page lists.
pub const LATEST_LIMIT: u32 = 5;

pub const NO_ANSWER_SELECTED: &str = "You didn't select an answer.";

/// GET /: the most recently published questions.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let rows = run_db(&state, |db| db.latest_questions(LATEST_LIMIT)).await?;
    let questions: Vec<Question> = rows.into_iter().map(question_from_row).collect();

    Ok(Html(templates::index(&state.paths, &questions).into_string()))
}

/// GET /{question_id}/: voting form.
pub async fn detail(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
) -> Result<Html<String>> {
    let poll = load_poll(&state, question_id).await?;
    Ok(Html(templates::detail(&state.paths, &poll, None).into_string()))
}

/// GET /{question_id}/results/: vote tally.
pub async fn results(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
) -> Result<Html<String>> {
    let poll = load_poll(&state, question_id).await?;
    Ok(Html(templates::results(&state.paths, &poll).into_string()))
}

/// POST /{question_id}/answer/: cast one vote, then redirect to the results.
///
/// A missing or non-numeric `answer`, an unreadable body, or an answer of some
/// other question all re-render the voting form without touching any count.
pub async fn answer(
    State(state): State<AppState>,
    QuestionId(question_id): QuestionId,
    VoteSubmission(form): VoteSubmission,
) -> Result<Response> {
    let poll = load_poll(&state, question_id).await?;

    let Some(answer_id) = form.answer_id() else {
        return Ok(vote_rejected(&state, &poll));
    };

    if !run_db(&state, move |db| db.record_vote(question_id, answer_id)).await? {
        return Ok(vote_rejected(&state, &poll));
    }

    info!("Vote recorded for answer {} on question {}", answer_id, question_id);
    Ok(Redirect::to(&state.paths.results(question_id)).into_response())
}

/// Router fallback for anything that is not one of the pages above.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn health() -> &'static str {
    "ok"
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Run a blocking DB call off the async runtime.
async fn run_db<F, T>(state: &AppState, f: F) -> Result<T>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    let result = tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            AppError::Internal(e.into())
        })?;

    Ok(result?)
}

/// The voting form again, with the "nothing selected" message.
fn vote_rejected(state: &AppState, poll: &QuestionWithAnswers) -> Response {
    let page = templates::detail(&state.paths, poll, Some(NO_ANSWER_SELECTED));
    Html(page.into_string()).into_response()
}

async fn load_poll(state: &AppState, question_id: i64) -> Result<QuestionWithAnswers> {
    let (question, answers) = run_db(state, move |db| {
        let Some(question) = db.get_question(question_id)? else {
            return Ok((None, Vec::new()));
        };
        let answers = db.get_answers(question_id)?;
        Ok((Some(question), answers))
    })
    .await?;

    let question = question.ok_or(AppError::NotFound)?;

    Ok(QuestionWithAnswers {
        question: question_from_row(question),
        answers: answers.into_iter().map(answer_from_row).collect(),
    })
}

fn question_from_row(row: QuestionRow) -> Question {
    let pub_date = chrono::NaiveDateTime::parse_from_str(&row.pub_date, TIMESTAMP_FORMAT)
        .map(|ndt| ndt.and_utc())
        .unwrap_or_else(|e| {
            warn!("Corrupt pub_date '{}' on question {}: {}", row.pub_date, row.id, e);
            chrono::DateTime::default()
        });

    Question {
        id: row.id,
        text: row.question_text,
        pub_date,
    }
}

fn answer_from_row(row: AnswerRow) -> Answer {
    Answer {
        id: row.id,
        question_id: row.question_id,
        text: row.answer_text,
        votes: row.votes,
    }
}
