mod dto;
pub mod handlers;
pub mod repo;
mod services;
pub mod types;

pub use repo::MealJournal;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
