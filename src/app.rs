use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::{io, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let body_limit = match ctx.storage.max_upload_size {
            Some(limit) => DefaultBodyLimit::max(limit),
            None => DefaultBodyLimit::disable(),
        };

        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(body_limit)
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([Method::OPTIONS, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await
    }

    pub async fn serve(self) -> io::Result<()> {
        let listener = self.bind().await?;
        self.serve_on(listener).await
    }

    /// Serves on an already bound listener, e.g. one on an ephemeral port.
    pub async fn serve_on(self, listener: TcpListener) -> io::Result<()> {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(
            "App is running on {} ({:?})",
            addr,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router).await
    }
}
