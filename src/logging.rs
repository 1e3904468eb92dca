use crate::cli::Args;
use ncaa_casablanca::config::Config;
use ncaa_casablanca::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "ncaa_casablanca.log";
const DEFAULT_DIRECTIVE: &str = "ncaa_casablanca=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits the configured log file path into directory and file name.
/// `--log-file` wins over the config file; without either the platform
/// config directory is used.
fn resolve_log_location(args: &Args, config_log_path: Option<&String>) -> (String, String) {
    match args.log_file.as_ref().or(config_log_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging for the command line front end.
///
/// Logs always go to a daily rolling file. With `--debug` they are also
/// written to stdout.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config_log_path: Option<&String>,
) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    if args.debug {
        tracing_subscriber::registry()
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .init();
    } else {
        tracing_subscriber::registry().with(file_layer).init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_log_file_wins_over_config() {
        let args = Args::try_parse_from(["ncaa", "config", "--log-file", "/var/log/ncaa/cli.log"]).unwrap();
        let config_path = "/tmp/config.log".to_string();

        let (dir, file) = resolve_log_location(&args, Some(&config_path));
        assert_eq!(dir, "/var/log/ncaa");
        assert_eq!(file, "cli.log");
    }

    #[test]
    fn test_config_log_file_and_bare_names() {
        let args = Args::try_parse_from(["ncaa", "config"]).unwrap();

        let config_path = "/tmp/ncaa/app.log".to_string();
        assert_eq!(
            resolve_log_location(&args, Some(&config_path)),
            ("/tmp/ncaa".to_string(), "app.log".to_string())
        );

        let bare = "app.log".to_string();
        assert_eq!(
            resolve_log_location(&args, Some(&bare)),
            (".".to_string(), "app.log".to_string())
        );
    }

    #[test]
    fn test_default_location() {
        let args = Args::try_parse_from(["ncaa", "config"]).unwrap();
        let (dir, file) = resolve_log_location(&args, None);
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }
}
