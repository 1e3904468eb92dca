use crate::error::AppError;
use std::path::Path;

/// Checks that an endpoint setting is a usable absolute http(s) URL.
///
/// # Arguments
/// * `field` - Name of the setting, used in the error message
/// * `url` - The configured value
pub fn validate_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https:// (got '{url}')"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every endpoint must be an absolute http(s) URL
/// - HTTP timeout must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    urls: &[(&str, &str)],
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    for (field, url) in urls {
        validate_url(field, url)?;
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
