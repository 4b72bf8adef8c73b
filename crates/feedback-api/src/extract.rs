use std::convert::Infallible;

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header, request::Parts},
};
use feedback_types::api::VoteForm;
use tracing::warn;

use crate::error::AppError;

/// `{question_id}` path segment. Only plain ASCII digits match; anything else
/// (signs, letters, values past `i64::MAX`) is a missing page, not a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(Self)
    }
}

impl<S> FromRequestParts<S> for QuestionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        Self::parse(&raw).ok_or(AppError::NotFound)
    }
}

/// The vote form, read from a urlencoded or a `multipart/form-data` body.
///
/// Never rejects: an unreadable body is logged and yields an empty form,
/// which the handler treats like a missing `answer`.
#[derive(Debug, Default)]
pub struct VoteSubmission(pub VoteForm);

impl<S> FromRequest<S> for VoteSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(&req) {
            multipart_pairs(req, state).await
        } else {
            match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => pairs,
                Err(rejection) => {
                    warn!("Unreadable vote form: {}", rejection);
                    Vec::new()
                }
            }
        };

        Ok(Self(VoteForm::from_pairs(pairs)))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
}

/// Text of every `answer` part. Other parts are skipped unread.
async fn multipart_pairs<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!("Unreadable multipart vote: {}", rejection);
            return Vec::new();
        }
    };

    let mut pairs = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart vote: {}", e);
                break;
            }
        };

        if field.name() != Some("answer") {
            continue;
        }
        match field.text().await {
            Ok(value) => pairs.push(("answer".to_string(), value)),
            Err(e) => warn!("Unreadable multipart answer: {}", e),
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(QuestionId::parse("0"), Some(QuestionId(0)));
        assert_eq!(QuestionId::parse("42"), Some(QuestionId(42)));
        assert_eq!(QuestionId::parse("007"), Some(QuestionId(7)));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "-1", "+1", "1.5", "abc", " 1", "99999999999999999999"] {
            assert_eq!(QuestionId::parse(raw), None, "{raw:?}");
        }
    }
}
