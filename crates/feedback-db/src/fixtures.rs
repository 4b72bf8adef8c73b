use anyhow::Result;
use feedback_types::api::Fixtures;
use tracing::info;

use crate::Database;
use crate::queries::{insert_answer, insert_question};

impl Database {
    /// Insert every fixture question with its answers in one transaction.
    /// Returns the number of questions inserted.
    pub fn load_fixtures(&self, fixtures: &Fixtures) -> Result<usize> {
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;

            for question in &fixtures.questions {
                let question_id = insert_question(&tx, &question.text, question.pub_date)?;
                for answer in &question.answers {
                    insert_answer(&tx, question_id, answer)?;
                }
            }

            tx.commit()?;
            info!("Loaded {} fixture questions", fixtures.questions.len());
            Ok(fixtures.questions.len())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &str = r#"{"questions": [
        {"text": "Was the talk useful?", "pub_date": "2026-05-01T10:00:00Z", "answers": ["Yes", "No"]},
        {"text": "Coffee or tea?", "pub_date": "2026-05-02T10:00:00Z", "answers": ["Coffee", "Tea", "Neither"]}
    ]}"#;

    #[test]
    fn loads_questions_and_answers() {
        let db = Database::open_in_memory().unwrap();
        let fixtures = Fixtures::from_json(FIXTURES).unwrap();

        assert_eq!(db.load_fixtures(&fixtures).unwrap(), 2);
        assert_eq!(db.count_questions().unwrap(), 2);

        let latest = db.latest_questions(5).unwrap();
        assert_eq!(latest[0].question_text, "Coffee or tea?");

        let answers = db.get_answers(latest[0].id).unwrap();
        let texts: Vec<_> = answers.iter().map(|a| a.answer_text.as_str()).collect();
        assert_eq!(texts, ["Coffee", "Tea", "Neither"]);
    }

    #[test]
    fn empty_fixtures_insert_nothing() {
        let db = Database::open_in_memory().unwrap();
        let fixtures: Fixtures = serde_json::from_str(r#"{"questions": []}"#).unwrap();

        assert_eq!(db.load_fixtures(&fixtures).unwrap(), 0);
        assert_eq!(db.count_questions().unwrap(), 0);
    }
}
