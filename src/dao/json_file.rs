//! JSON document persistence shared by the file-backed stores.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`JsonFileError`] failures.
pub type JsonFileResult<T> = Result<T, JsonFileError>;

/// Failures that can occur while reading or replacing a JSON document file.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The document file exists but could not be read.
    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document file holds bytes that are not the expected JSON shape.
    #[error("failed to parse `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The in-memory document could not be serialized.
    #[error("failed to serialize document for `{path}`")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The parent directory could not be created.
    #[error("failed to create parent directory for `{path}`")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the staging file failed.
    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Moving the staging file over the document failed.
    #[error("failed to move `{temp}` over `{path}`")]
    Replace {
        temp: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<JsonFileError> for StorageError {
    fn from(err: JsonFileError) -> Self {
        match err {
            JsonFileError::Parse { .. } => StorageError::corrupt(err.to_string(), err),
            _ => StorageError::unavailable(err.to_string(), err),
        }
    }
}

/// Read and parse a JSON document, returning `None` when the file does not
/// exist yet.
pub async fn read_document<T>(path: &Path) -> JsonFileResult<Option<T>>
where
    T: DeserializeOwned,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(JsonFileError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let document = serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(document))
}

/// Serialize a document and atomically replace the target file.
///
/// The bytes are staged in a sibling file and moved into place with a rename,
/// so concurrent readers never observe a partially written document.
pub async fn replace_document<T>(path: &Path, document: &T) -> JsonFileResult<()>
where
    T: Serialize + ?Sized,
{
    let bytes =
        serde_json::to_vec_pretty(document).map_err(|source| JsonFileError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| JsonFileError::CreateDir {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
    }

    let temp = staging_path(path);
    fs::write(&temp, &bytes)
        .await
        .map_err(|source| JsonFileError::Write {
            path: temp.clone(),
            source,
        })?;

    fs::rename(&temp, path)
        .await
        .map_err(|source| JsonFileError::Replace {
            temp,
            path: path.to_path_buf(),
            source,
        })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".tmp");
    path.with_file_name(name)
}
