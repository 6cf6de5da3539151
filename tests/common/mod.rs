use file2keyword::{
    app::App,
    types::{AppContext, AppEnvironment, Context, StorageContext},
};
use std::{path::Path, sync::Arc};
use tokio::net::TcpListener;

/// Starts the service on an ephemeral port and returns its base url.
pub async fn spawn_app(root: &Path, max_upload_size: Option<usize>) -> String {
    let ctx = Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 0,
        },
        storage: StorageContext {
            root: root.to_path_buf(),
            max_upload_size,
        },
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(App::new(ctx).serve_on(listener));

    format!("http://{}", addr)
}

pub fn file_part(file_name: &str, contents: &[u8]) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(contents.to_vec()).file_name(file_name.to_string())
}

/// Multipart form that sends file names exactly as given, separators included.
pub fn form() -> reqwest::multipart::Form {
    reqwest::multipart::Form::new().percent_encode_noop()
}
