use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);"
    )?;

    let version: i64 = conn
        .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (questions and answers)");
        conn.execute_batch(
            "
            CREATE TABLE questions (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                question_text   TEXT NOT NULL,
                pub_date        TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX idx_questions_pub_date
                ON questions(pub_date);

            CREATE TABLE answers (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                question_id     INTEGER NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
                answer_text     TEXT NOT NULL,
                votes           INTEGER NOT NULL DEFAULT 0 CHECK (votes >= 0)
            );

            CREATE INDEX idx_answers_question
                ON answers(question_id);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
