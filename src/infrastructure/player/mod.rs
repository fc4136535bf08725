use crate::domain::player::{PlaybackError, Player};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Player used when none is configured
pub const DEFAULT_PLAYER_PROGRAM: &str = "mplayer";

/// Plays audio by running an external program with the file path as its
/// last argument and waiting for it to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `mplayer <path>`, resolved through `PATH`
    pub fn mplayer() -> Self {
        Self::new(DEFAULT_PLAYER_PROGRAM, Vec::new())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::mplayer()
    }
}

#[async_trait]
impl Player for CommandPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        tracing::debug!(
            program = %self.program,
            path = %path.display(),
            "Starting playback"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .await
            .map_err(|source| PlaybackError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PlaybackError::ExitStatus {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
