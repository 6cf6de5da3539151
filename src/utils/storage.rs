use std::{
    fmt, io,
    path::{Path, PathBuf},
};
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncWriteExt},
};

#[derive(Debug)]
pub enum Error {
    /// The spooled upload could not be opened for reading.
    ReadFailed { source: io::Error },
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { source } => write!(f, "failed to read upload: {}", source),
            Self::WriteFailed { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailed { source } | Self::WriteFailed { source, .. } => Some(source),
        }
    }
}

/// `root` joined with `_<file_name>`. The file name is used verbatim, so
/// separators and `..` inside it are resolved by the filesystem.
pub fn destination_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(format!("_{}", file_name))
}

/// Streams `contents` into the destination for `file_name`, truncating any
/// existing file, and returns the number of bytes written.
pub async fn persist<R>(root: &Path, file_name: &str, contents: &mut R) -> Result<u64, Error>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let path = destination_path(root, file_name);
    let write_failed = |source: io::Error| Error::WriteFailed {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).await.map_err(write_failed)?;
    let written = tokio::io::copy(contents, &mut file)
        .await
        .map_err(write_failed)?;
    file.flush().await.map_err(write_failed)?;

    tracing::debug!("Persisted {} bytes to {}", written, path.display());

    Ok(written)
}

/// Reopens a spooled upload and persists it.
pub async fn persist_spooled(
    root: &Path,
    file_name: &str,
    spooled: &tempfile::NamedTempFile,
) -> Result<u64, Error> {
    let reader = spooled
        .reopen()
        .map_err(|source| Error::ReadFailed { source })?;
    let mut reader = File::from_std(reader);

    persist(root, file_name, &mut reader).await
}
