use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::State;
use axum_typed_multipart::TypedMultipart;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    TypedMultipart(form): TypedMultipart<request::Form>,
) -> response::Response {
    let payload = request::Payload::try_from(form)?;
    service(ctx, payload).await
}
