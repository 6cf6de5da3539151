use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

/// Where uploads are copied to and how large a request may get.
#[derive(Clone)]
pub struct StorageContext {
    pub root: PathBuf,
    /// Request body cap in bytes, `None` leaves uploads unbounded.
    pub max_upload_size: Option<usize>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_dir: String,
    pub max_upload_size: Option<usize>,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

fn parse_max_upload_size(raw: Option<String>) -> Option<usize> {
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("unlimited") => None,
        Some(raw) => Some(
            raw.parse::<usize>()
                .expect("Invalid MAX_UPLOAD_SIZE, expected a byte count"),
        ),
    }
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("Invalid PORT number");
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| ".".to_string());
        let max_upload_size = parse_max_upload_size(env::var("MAX_UPLOAD_SIZE").ok());

        return Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            storage: StorageConfig {
                upload_dir,
                max_upload_size,
            },
        };
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let root = PathBuf::from(self.storage.upload_dir);

        match self.storage.max_upload_size {
            Some(limit) => tracing::info!(
                "Storing uploads under {} (max {} bytes per request)",
                root.display(),
                limit
            ),
            None => tracing::info!(
                "Storing uploads under {} (no request size limit)",
                root.display()
            ),
        }

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            storage: StorageContext {
                root,
                max_upload_size: self.storage.max_upload_size,
            },
        }
    }
}
