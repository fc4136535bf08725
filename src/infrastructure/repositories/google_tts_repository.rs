use super::tts_repository::TtsRepository;
use crate::error::{SpeechError, SpeechResult};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Google Translate speech endpoint
pub const GOOGLE_TTS_ENDPOINT: &str = "http://translate.google.com/translate_tts";

/// Google Translate implementation of TTS repository
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    endpoint: String,
    validate_status: bool,
}

impl GoogleTtsRepository {
    pub fn new() -> Self {
        Self::with_endpoint(GOOGLE_TTS_ENDPOINT)
    }

    /// Talk to a relocated copy of the endpoint (a proxy or a local fake)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            validate_status: false,
        }
    }

    /// Reject non-2xx responses instead of treating their body as audio
    pub fn validate_status(mut self, validate: bool) -> Self {
        self.validate_status = validate;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL for a text and language
    pub fn build_url(&self, text: &str, language: &str) -> String {
        format!(
            "{}?ie=UTF-8&total=1&idx=0&textlen=32&client=tw-ob&q={}&tl={}",
            self.endpoint,
            encode_query_value(text),
            language
        )
    }

    async fn request(&self, text: &str, language: &str) -> SpeechResult<reqwest::Response> {
        let url = self.build_url(text, language);

        tracing::info!(
            language = language,
            text_length = text.len(),
            text_preview = preview(text),
            "Calling Google TTS endpoint"
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            if self.validate_status {
                return Err(SpeechError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }
            tracing::warn!(
                status = status.as_u16(),
                "Google TTS endpoint returned a non-success status, keeping body as audio"
            );
        }

        Ok(response)
    }
}

impl Default for GoogleTtsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language: &str) -> SpeechResult<Vec<u8>> {
        let start_time = std::time::Instant::now();

        let response = self.request(text, language).await?;
        let audio_data = response.bytes().await?.to_vec();

        tracing::info!(
            provider = "google",
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    async fn download(&self, text: &str, language: &str, destination: &Path) -> SpeechResult<()> {
        let start_time = std::time::Instant::now();

        let mut response = self.request(text, language).await?;

        let mut output = File::create(destination)
            .await
            .map_err(|e| SpeechError::filesystem(destination, e))?;

        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await? {
            output
                .write_all(&chunk)
                .await
                .map_err(|e| SpeechError::filesystem(destination, e))?;
            written += chunk.len();
        }
        output
            .flush()
            .await
            .map_err(|e| SpeechError::filesystem(destination, e))?;

        tracing::info!(
            provider = "google",
            language = language,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = written,
            path = %destination.display(),
            "TTS audio downloaded"
        );

        Ok(())
    }
}

/// Query component encoding with spaces sent as `+`
fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
