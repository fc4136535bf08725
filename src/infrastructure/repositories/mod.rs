pub mod google_tts_repository;
pub mod tts_repository;

pub use google_tts_repository::{GoogleTtsRepository, GOOGLE_TTS_ENDPOINT};
pub use tts_repository::TtsRepository;
