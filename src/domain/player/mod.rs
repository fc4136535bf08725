pub mod error;

use async_trait::async_trait;
use std::path::Path;

pub use error::PlaybackError;

/// Plays an audio file that already exists on disk.
///
/// The speech facade only ever talks to this trait, so any backend (an
/// external player process, a native audio API, a test double) can be
/// swapped in without touching it.
#[async_trait]
pub trait Player: Send + Sync {
    /// Play the file at `path`, returning once playback has finished
    async fn play(&self, path: &Path) -> Result<(), PlaybackError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "custom"
    }
}

/// Player that accepts every file and plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlayer;

#[async_trait]
impl Player for NoopPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        tracing::debug!(path = %path.display(), "Skipping playback");
        Ok(())
    }

    fn name(&self) -> &str {
        "none"
    }
}
