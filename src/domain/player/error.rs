#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("failed to launch player `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("player `{program}` exited with {}", exit_code_display(.code))]
    ExitStatus { program: String, code: Option<i32> },
    #[error("playback failed: {0}")]
    Other(String),
}

fn exit_code_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
