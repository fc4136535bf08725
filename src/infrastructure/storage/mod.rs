use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::{DirBuilder, File};

use crate::error::{SpeechError, SpeechResult};

/// Directories created for the audio cache are private to the owner
#[cfg(unix)]
const FOLDER_MODE: u32 = 0o700;

/// Ensure the audio folder exists, creating it and any missing parents.
///
/// An existing path is accepted as is, even when it is a regular file.
pub async fn ensure_folder(folder: &Path) -> SpeechResult<()> {
    match tokio::fs::metadata(folder).await {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_folder(folder)
                .await
                .map_err(|source| SpeechError::FolderCreation {
                    path: folder.to_path_buf(),
                    source,
                })?;
            tracing::debug!(folder = %folder.display(), "Created audio folder");
            Ok(())
        }
        _ => Ok(()),
    }
}

async fn create_folder(folder: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(FOLDER_MODE);
    builder.create(folder).await
}

/// Check whether a cached audio file is present.
///
/// Presence means the file can be opened for reading; its content is never
/// inspected, so a truncated file counts as cached.
pub async fn is_cached(path: &Path) -> bool {
    File::open(path).await.is_ok()
}
