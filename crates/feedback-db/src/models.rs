//! Database row types: these map directly to SQLite rows.
//! Distinct from feedback-types models to keep the DB layer independent.

pub struct QuestionRow {
    pub id: i64,
    pub question_text: String,
    pub pub_date: String,
}

pub struct AnswerRow {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub votes: i64,
}
