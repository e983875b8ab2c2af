//! Best-effort file logging of outbound completion requests.
//!
//! Call sites ignore the result (`let _ = log_request_to_file(...)`) so a
//! read-only home directory never breaks a completion.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get or create the base edugenie directory (~/.edugenie)
fn get_edugenie_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let dir = PathBuf::from(home_dir).join(".edugenie");
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create edugenie directory")?;
    }
    Ok(dir)
}

/// Get or create the logs directory (~/.edugenie/logs)
fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_edugenie_dir()?.join("logs");
    if !logs_dir.exists() {
        fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }
    Ok(logs_dir)
}

/// Log one HTTP request to file for persistent debugging. The API key is
/// redacted down to its first characters.
pub fn log_request_to_file(
    url: &str,
    body: &serde_json::Value,
    model: &str,
    api_key: &str,
) -> Result<()> {
    let logs_dir = get_logs_dir()?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let model_name = model.replace('/', "-");
    let file_path = logs_dir.join(format!("req-{}-{}.txt", timestamp, model_name));

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", chrono::Utc::now().to_rfc3339()));
    log_content.push_str(&format!("Model: {}\n", model));
    log_content.push_str(&format!("URL: {}\n\n", url));

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!(
        "  Authorization: Bearer {}***\n\n",
        api_key.chars().take(6).collect::<String>()
    ));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(body) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(())
}
