mod handler;
mod service;
mod types;

pub use types::response::ACKNOWLEDGMENT;

use crate::types::Context;
use axum::routing::{post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/file2keyword", post(handler::handler))
}
