//! RevelaCode server — HTTP routing over the legal and scripture services.

pub mod error;
pub mod routes;
pub mod seed;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
