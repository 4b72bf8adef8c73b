use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Voting --

/// Body of `POST /{question_id}/answer/`, urlencoded or multipart.
///
/// The field is kept as raw text: a missing, empty or non-numeric value is a
/// user mistake that re-renders the form, not a rejected request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VoteForm {
    pub answer: Option<String>,
}

impl VoteForm {
    /// Build from every submitted `(name, value)` pair. A repeated `answer`
    /// field resolves to its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let answer = pairs
            .into_iter()
            .filter(|(name, _)| name.as_ref() == "answer")
            .map(|(_, value)| value.into())
            .last();
        Self { answer }
    }

    /// The submitted answer id, if it is present and numeric.
    pub fn answer_id(&self) -> Option<i64> {
        self.answer.as_deref()?.trim().parse().ok()
    }
}

// -- Fixtures --

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixtures {
    pub questions: Vec<QuestionFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionFixture {
    pub text: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub answers: Vec<String>,
}

impl Fixtures {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
