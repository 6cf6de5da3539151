use super::types::{request, response};
use crate::{types::Context, utils::storage};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let root = ctx.storage.root.as_path();

    // Stops at the first failure; files already written stay on disk.
    for upload in payload.files.iter() {
        storage::persist_spooled(root, &upload.file_name, &upload.contents)
            .await
            .map_err(|err| {
                tracing::error!("Failed to store upload {:?}: {}", upload.file_name, err);
                response::Error::FailedToStoreUpload
            })?;
    }

    Ok(response::Success::Acknowledged)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{AppContext, AppEnvironment, StorageContext};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn context(root: &Path) -> Arc<Context> {
        Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 0,
            },
            storage: StorageContext {
                root: root.to_path_buf(),
                max_upload_size: None,
            },
        })
    }

    fn upload(file_name: &str, contents: &[u8]) -> request::Upload {
        let mut spooled = NamedTempFile::new().unwrap();
        spooled.write_all(contents).unwrap();
        spooled.flush().unwrap();

        request::Upload {
            file_name: file_name.to_string(),
            contents: spooled,
        }
    }

    #[tokio::test]
    async fn should_acknowledge_empty_payload_without_writing() {
        let root = tempfile::tempdir().unwrap();

        let result = service(context(root.path()), request::Payload { files: vec![] }).await;

        assert!(matches!(result, Ok(response::Success::Acknowledged)));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn should_write_every_upload_in_order() {
        let root = tempfile::tempdir().unwrap();
        let payload = request::Payload {
            files: vec![
                upload("same.txt", b"first"),
                upload("other.txt", b"other"),
                upload("same.txt", b"last"),
            ],
        };

        let result = service(context(root.path()), payload).await;

        assert!(result.is_ok());
        assert_eq!(std::fs::read(root.path().join("_same.txt")).unwrap(), b"last");
        assert_eq!(std::fs::read(root.path().join("_other.txt")).unwrap(), b"other");
    }

    #[tokio::test]
    async fn should_abort_remaining_uploads_after_failure() {
        let root = tempfile::tempdir().unwrap();
        let payload = request::Payload {
            files: vec![
                upload("before.txt", b"kept"),
                upload("no-such-dir/inner.txt", b"lost"),
                upload("after.txt", b"never written"),
            ],
        };

        let result = service(context(root.path()), payload).await;

        assert!(matches!(result, Err(response::Error::FailedToStoreUpload)));
        assert_eq!(std::fs::read(root.path().join("_before.txt")).unwrap(), b"kept");
        assert!(!root.path().join("_after.txt").exists());
    }
}
