use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::core::error::SessionError;

pub const LOG_FILE_PREFIX: &str = "trace.log";

/// Daily rolling `trace.log` under `log_dir`, created if missing.
pub fn open_log_appender(log_dir: &Path) -> Result<RollingFileAppender, SessionError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)?;
    Ok(appender)
}
