use file2keyword::{
    app::App,
    types::{Config, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let ctx = Arc::new(Config::default().to_context().await);
    let app = App::new(ctx);

    if let Err(err) = app.serve().await {
        tracing::error!("Server stopped: {:?}", err);
        std::process::exit(1);
    }
}
