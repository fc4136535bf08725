use super::naming;
use super::AUDIO_EXTENSION;
use crate::domain::player::{PlaybackError, Player};
use crate::error::SpeechResult;
use crate::infrastructure::player::CommandPlayer;
use crate::infrastructure::repositories::{GoogleTtsRepository, TtsRepository};
use crate::infrastructure::storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where audio is stored, which language is requested and how it is played
#[derive(Clone)]
pub struct SpeechConfig {
    pub folder: PathBuf,
    pub language: String,
    /// Falls back to `CommandPlayer::mplayer()` when unset
    pub player: Option<Arc<dyn Player>>,
}

impl SpeechConfig {
    pub fn new(folder: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            language: language.into(),
            player: None,
        }
    }

    pub fn with_player(mut self, player: Arc<dyn Player>) -> Self {
        self.player = Some(player);
        self
    }
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("folder", &self.folder)
            .field("language", &self.language)
            .field("player", &self.player.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

/// Text to speech facade: fetches audio, caches it on disk and plays it
pub struct Speech {
    folder: PathBuf,
    language: String,
    player: Arc<dyn Player>,
    tts_repo: Arc<dyn TtsRepository>,
}

impl Speech {
    pub fn new(config: SpeechConfig, tts_repo: Arc<dyn TtsRepository>) -> Self {
        let player = config
            .player
            .unwrap_or_else(|| Arc::new(CommandPlayer::mplayer()));

        Self {
            folder: config.folder,
            language: config.language,
            player,
            tts_repo,
        }
    }

    /// Facade backed by the public Google endpoint
    pub fn google(config: SpeechConfig) -> Self {
        Self::new(config, Arc::new(GoogleTtsRepository::new()))
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn player_name(&self) -> &str {
        self.player.name()
    }

    /// Cache key for `text` in the configured language
    pub fn cache_key(&self, text: &str) -> String {
        naming::cache_key(&self.language, text)
    }

    /// Path of the audio file named `file_name` inside the folder.
    ///
    /// Leading separators are dropped so the name always stays under the folder.
    pub fn speech_file_path(&self, file_name: &str) -> PathBuf {
        let file_name = file_name.trim_start_matches(['/', '\\']);
        self.folder.join(format!("{}.{}", file_name, AUDIO_EXTENSION))
    }

    /// Make sure `<folder>/<file_name>.mp3` holds speech for `text` and return its path.
    ///
    /// The endpoint is only called when the file does not exist yet; an
    /// existing file is trusted as is.
    pub async fn create_speech_file(&self, text: &str, file_name: &str) -> SpeechResult<PathBuf> {
        let path = self.speech_file_path(file_name);

        storage::ensure_folder(&self.folder).await?;
        self.download_if_not_exists(&path, text).await?;

        Ok(path)
    }

    /// Play an existing audio file with the configured player
    pub async fn play_speech_file(&self, path: &Path) -> Result<(), PlaybackError> {
        self.player.play(path).await
    }

    /// Fetch (or reuse) the audio for `text` and play it
    pub async fn speak(&self, text: &str) -> SpeechResult<()> {
        let file_name = self.cache_key(text);
        let path = self.create_speech_file(text, &file_name).await?;
        self.play_speech_file(&path).await?;
        Ok(())
    }

    /// Fetch the audio for `text` into memory, bypassing the disk cache
    pub async fn speak_bytes(&self, text: &str) -> SpeechResult<Vec<u8>> {
        self.tts_repo.synthesize(text, &self.language).await
    }

    async fn download_if_not_exists(&self, path: &Path, text: &str) -> SpeechResult<()> {
        if storage::is_cached(path).await {
            tracing::debug!(path = %path.display(), "TTS cache hit - reusing audio file");
            return Ok(());
        }

        tracing::debug!(path = %path.display(), "TTS cache miss");
        self.tts_repo.download(text, &self.language, path).await
    }
}
