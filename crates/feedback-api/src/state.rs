use std::sync::Arc;

use feedback_db::Database;

use crate::paths::Paths;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub paths: Paths,
}

impl AppStateInner {
    pub fn new(db: Database, paths: Paths) -> AppState {
        Arc::new(Self { db, paths })
    }
}
