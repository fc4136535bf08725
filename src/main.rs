use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use gtts_speech::infrastructure::config::{Config, LogFormat};
use gtts_speech::Speech;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Speak text through the Google Translate speech endpoint
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder holding cached audio (overrides SPEECH_FOLDER)
    #[arg(short, long, global = true)]
    folder: Option<PathBuf>,

    /// Language code, e.g. en, es (overrides SPEECH_LANGUAGE)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Player program, or "none" to skip playback (overrides SPEECH_PLAYER)
    #[arg(short, long, global = true)]
    player: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch (or reuse) the audio for TEXT and play it
    Speak {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Make sure <folder>/<NAME>.mp3 holds the audio for TEXT and print its path
    File {
        #[arg(value_name = "TEXT")]
        text: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Play an existing audio file
    Play {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Fetch the audio for TEXT without caching it
    Bytes {
        #[arg(value_name = "TEXT")]
        text: String,
        /// Write the audio here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env().map_err(|e| anyhow!("invalid configuration: {}", e))?;
    if let Some(folder) = args.folder {
        config.folder = folder;
    }
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(player) = args.player {
        config.player = player;
    }

    // Initialize logging
    init_logging(&config);

    tracing::debug!(
        folder = %config.folder.display(),
        language = %config.language,
        player = %config.player,
        endpoint = %config.tts_endpoint,
        "Configuration loaded"
    );

    let speech = Speech::new(config.speech_config(), Arc::new(config.tts_repository()));

    let result = run(&speech, args.command).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}

async fn run(speech: &Speech, command: Command) -> Result<()> {
    match command {
        Command::Speak { text } => {
            speech.speak(&text).await?;
        }
        Command::File { text, name } => {
            let path = speech.create_speech_file(&text, &name).await?;
            println!("{}", path.display());
        }
        Command::Play { path } => {
            speech.play_speech_file(&path).await?;
        }
        Command::Bytes { text, output } => {
            let audio = speech.speak_bytes(&text).await?;
            match output {
                Some(path) => tokio::fs::write(&path, &audio)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(&audio).await?;
                    stdout.flush().await?;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gtts_speech=info".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
