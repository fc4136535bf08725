pub mod naming;
pub mod service;

pub use naming::cache_key;
pub use service::{Speech, SpeechConfig};

/// Extension of every cached audio file
pub const AUDIO_EXTENSION: &str = "mp3";
