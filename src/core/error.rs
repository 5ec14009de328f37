use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (expected increment, decrement or reset)")]
    Unknown(String),

    #[error("command encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Failures of a terminal session driving a store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to write counter output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode counter output: {0}")]
    Render(#[source] serde_json::Error),

    #[error("failed to open log directory: {0}")]
    LogInit(#[from] tracing_appender::rolling::InitError),

    #[error("failed to initialise tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}
