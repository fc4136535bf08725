use crate::error::SpeechResult;
use async_trait::async_trait;
use std::path::Path;

/// Repository for TTS synthesis operations.
/// Abstracts the remote speech provider so the facade can be exercised
/// against fakes.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Fetch synthesized speech for `text` and return the whole body in memory
    ///
    /// # Arguments
    /// * `text` - The text to synthesize, sent exactly as given
    /// * `language` - Short language code, e.g. `en`
    ///
    /// # Errors
    /// Returns `SpeechError::Network` if the request or body transfer fails
    async fn synthesize(&self, text: &str, language: &str) -> SpeechResult<Vec<u8>>;

    /// Fetch synthesized speech for `text` and stream it into `destination`
    ///
    /// The destination is created or truncated. If the transfer fails midway
    /// the partial file is left in place.
    async fn download(&self, text: &str, language: &str, destination: &Path) -> SpeechResult<()>;
}
