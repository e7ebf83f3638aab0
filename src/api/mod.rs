pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, Session};
