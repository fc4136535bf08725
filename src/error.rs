use std::path::PathBuf;

use crate::domain::player::PlaybackError;

/// Main error type for speech operations
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to create folder {}: {source}", .path.display())]
    FolderCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Filesystem error on {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Speech endpoint returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

impl SpeechError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for failures that happened before or while talking to the endpoint
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::UnexpectedStatus { .. })
    }
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        SpeechError::Network(err.to_string())
    }
}

/// Custom result type for the library
pub type SpeechResult<T> = Result<T, SpeechError>;
