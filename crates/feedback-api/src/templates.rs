//! Server-rendered pages. maud escapes every interpolated value, so question
//! and answer text can be rendered as-is.

use feedback_types::models::{Question, QuestionWithAnswers};
use maud::{DOCTYPE, Markup, html};

use crate::paths::Paths;

fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body { (body) }
        }
    }
}

pub fn index(paths: &Paths, questions: &[Question]) -> Markup {
    page(
        "Feedback",
        html! {
            @if questions.is_empty() {
                p { "No feedback questions are available." }
            } @else {
                ul {
                    @for question in questions {
                        li { a href=(paths.detail(question.id)) { (question.text) } }
                    }
                }
            }
        },
    )
}

/// Voting form. `error_message` is shown above the choices after a bad submission.
pub fn detail(paths: &Paths, poll: &QuestionWithAnswers, error_message: Option<&str>) -> Markup {
    let question = &poll.question;
    page(
        &question.text,
        html! {
            h1 { (question.text) }
            @if let Some(message) = error_message {
                p.error { strong { (message) } }
            }
            form action=(paths.answer(question.id)) method="post" {
                @for answer in &poll.answers {
                    input type="radio" name="answer" id={ "answer" (answer.id) } value=(answer.id);
                    label for={ "answer" (answer.id) } { (answer.text) }
                    br;
                }
                input type="submit" value="Vote";
            }
        },
    )
}

pub fn results(paths: &Paths, poll: &QuestionWithAnswers) -> Markup {
    let question = &poll.question;
    page(
        &question.text,
        html! {
            h1 { (question.text) }
            ul {
                @for answer in &poll.answers {
                    li { (answer.text) " -- " (answer.votes) " " (vote_label(answer.votes)) }
                }
            }
            a href=(paths.detail(question.id)) { "Vote again?" }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "Not Found",
        html! {
            h1 { "Not Found" }
            p { "The requested resource was not found on this server." }
        },
    )
}

pub fn server_error() -> Markup {
    page("Server Error", html! { h1 { "Server Error (500)" } })
}

fn vote_label(votes: i64) -> &'static str {
    if votes == 1 { "vote" } else { "votes" }
}
