use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming the log file when `--log-file` is absent
pub const LOG_FILE_ENV: &str = "CHITCHAT_LOG_FILE";

/// Directive override for the file layer, e.g. `chitchat_core=trace`
pub const LOG_FILTER_ENV: &str = "CHITCHAT_LOG";

/// Which log file to write, if any. The flag wins over the environment.
pub fn resolve_log_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    pick_log_path(flag, std::env::var_os(LOG_FILE_ENV))
}

fn pick_log_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Install the file logging layer. Without a log path nothing is installed:
/// the terminal belongs to the UI.
pub fn init_tracing(log_path: Option<PathBuf>) -> Result<()> {
    let Some(log_path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;
    tracing::info!(path = %log_path.display(), "file logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let flag = PathBuf::from("/tmp/chitchat-flag.log");
        let env = Some(OsString::from("/tmp/chitchat-env.log"));
        assert_eq!(pick_log_path(Some(flag.clone()), env), Some(flag));
    }

    #[test]
    fn test_environment_used_without_flag() {
        let env = Some(OsString::from("/tmp/chitchat-env.log"));
        assert_eq!(
            pick_log_path(None, env),
            Some(PathBuf::from("/tmp/chitchat-env.log"))
        );
        assert_eq!(pick_log_path(None, Some(OsString::new())), None);
        assert_eq!(pick_log_path(None, None), None);
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let flag = PathBuf::from("/tmp/chitchat-flag.log");
        assert_eq!(resolve_log_path(Some(flag.clone())), Some(flag));
    }

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(init_tracing(None).is_ok());
    }
}
