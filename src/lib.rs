//! Text to speech through the Google Translate speech endpoint.
//!
//! Audio is cached on disk under `<folder>/<language>_<md5(text)>.mp3` and
//! played with an external player (`mplayer` unless another [`Player`] is
//! configured).
//!
//! ```no_run
//! use gtts_speech::{Speech, SpeechConfig};
//!
//! # async fn run() -> gtts_speech::SpeechResult<()> {
//! let speech = Speech::google(SpeechConfig::new("audio", "en"));
//! speech.speak("Hello world").await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::player::{NoopPlayer, PlaybackError, Player};
pub use domain::speech::{cache_key, Speech, SpeechConfig};
pub use error::{SpeechError, SpeechResult};
pub use infrastructure::player::CommandPlayer;
pub use infrastructure::repositories::{GoogleTtsRepository, TtsRepository};
