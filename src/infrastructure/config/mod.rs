use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::player::{NoopPlayer, Player};
use crate::domain::speech::SpeechConfig;
use crate::infrastructure::player::{CommandPlayer, DEFAULT_PLAYER_PROGRAM};
use crate::infrastructure::repositories::{GoogleTtsRepository, GOOGLE_TTS_ENDPOINT};

/// `SPEECH_PLAYER` value that disables playback
pub const NO_PLAYER: &str = "none";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub folder: PathBuf,
    pub language: String,
    pub player: String,
    pub player_args: Vec<String>,
    pub tts_endpoint: String,
    pub tts_validate_status: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("audio"),
            language: "en".to_string(),
            player: DEFAULT_PLAYER_PROGRAM.to_string(),
            player_args: Vec::new(),
            tts_endpoint: GOOGLE_TTS_ENDPOINT.to_string(),
            tts_validate_status: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let config = Config {
            folder: env::var("SPEECH_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.folder),
            language: env::var("SPEECH_LANGUAGE").unwrap_or(defaults.language),
            player: env::var("SPEECH_PLAYER").unwrap_or(defaults.player),
            player_args: env::var("SPEECH_PLAYER_ARGS")
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .unwrap_or(defaults.player_args),
            tts_endpoint: env::var("TTS_ENDPOINT").unwrap_or(defaults.tts_endpoint),
            tts_validate_status: env::var("TTS_VALIDATE_STATUS")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(defaults.tts_validate_status),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    /// Player selected by `player`, `none` meaning no playback
    pub fn player(&self) -> Arc<dyn Player> {
        if self.player == NO_PLAYER {
            Arc::new(NoopPlayer)
        } else {
            Arc::new(CommandPlayer::new(
                self.player.clone(),
                self.player_args.clone(),
            ))
        }
    }

    pub fn speech_config(&self) -> SpeechConfig {
        SpeechConfig::new(self.folder.clone(), self.language.clone()).with_player(self.player())
    }

    pub fn tts_repository(&self) -> GoogleTtsRepository {
        GoogleTtsRepository::with_endpoint(self.tts_endpoint.clone())
            .validate_status(self.tts_validate_status)
    }
}
