mod file2keyword;

pub use file2keyword::ACKNOWLEDGMENT;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().merge(file2keyword::get_router())
}
