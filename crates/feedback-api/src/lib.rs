pub mod error;
pub mod extract;
pub mod paths;
pub mod routes;
pub mod state;
pub mod templates;
pub mod views;

pub use paths::Paths;
pub use routes::router;
pub use state::{AppState, AppStateInner};
