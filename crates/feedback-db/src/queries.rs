use crate::models::{AnswerRow, QuestionRow};
use crate::{Database, TIMESTAMP_FORMAT};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

impl Database {
    // -- Questions --

    pub fn insert_question(&self, text: &str, pub_date: DateTime<Utc>) -> Result<i64> {
        self.with_conn(|conn| insert_question(conn, text, pub_date))
    }

    /// Most recently published questions first, at most `limit` of them.
    pub fn latest_questions(&self, limit: u32) -> Result<Vec<QuestionRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, question_text, pub_date
                 FROM questions
                 ORDER BY pub_date DESC, id DESC
                 LIMIT ?1",
            )?;

            let rows = stmt
                .query_map([limit], map_question)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn get_question(&self, id: i64) -> Result<Option<QuestionRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, question_text, pub_date FROM questions WHERE id = ?1",
                    [id],
                    map_question,
                )
                .optional()?;

            Ok(row)
        })
    }

    pub fn count_questions(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?)
        })
    }

    // -- Answers --

    pub fn insert_answer(&self, question_id: i64, text: &str) -> Result<i64> {
        self.with_conn(|conn| insert_answer(conn, question_id, text))
    }

    /// Answers belonging to one question, in id order.
    pub fn get_answers(&self, question_id: i64) -> Result<Vec<AnswerRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, question_id, answer_text, votes
                 FROM answers
                 WHERE question_id = ?1
                 ORDER BY id",
            )?;

            let rows = stmt
                .query_map([question_id], map_answer)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    pub fn get_answer(&self, id: i64) -> Result<Option<AnswerRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, question_id, answer_text, votes FROM answers WHERE id = ?1",
                    [id],
                    map_answer,
                )
                .optional()?;

            Ok(row)
        })
    }

    /// Add one vote to `answer_id`, but only if it belongs to `question_id`.
    /// Returns false (and changes nothing) when no such answer exists.
    ///
    /// The increment happens inside SQLite, so concurrent votes never lose updates.
    pub fn record_vote(&self, question_id: i64, answer_id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE answers SET votes = votes + 1 WHERE id = ?1 AND question_id = ?2",
                [answer_id, question_id],
            )?;
            Ok(changed == 1)
        })
    }
}

pub(crate) fn insert_question(conn: &Connection, text: &str, pub_date: DateTime<Utc>) -> Result<i64> {
    conn.execute(
        "INSERT INTO questions (question_text, pub_date) VALUES (?1, ?2)",
        rusqlite::params![text, pub_date.format(TIMESTAMP_FORMAT).to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn insert_answer(conn: &Connection, question_id: i64, text: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO answers (question_id, answer_text) VALUES (?1, ?2)",
        rusqlite::params![question_id, text],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_question(row: &rusqlite::Row<'_>) -> rusqlite::Result<QuestionRow> {
    Ok(QuestionRow {
        id: row.get(0)?,
        question_text: row.get(1)?,
        pub_date: row.get(2)?,
    })
}

fn map_answer(row: &rusqlite::Row<'_>) -> rusqlite::Result<AnswerRow> {
    Ok(AnswerRow {
        id: row.get(0)?,
        question_id: row.get(1)?,
        answer_text: row.get(2)?,
        votes: row.get(3)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
