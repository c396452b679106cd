use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{mask_secret, safe_truncate};

const MAX_CONSOLE_BODY: usize = 5000;

fn describe_url(url: &str) -> Vec<(&'static str, String)> {
    match reqwest::Url::parse(url) {
        Ok(parsed_url) => vec![
            ("URL", url.to_string()),
            ("Host", parsed_url.host_str().unwrap_or("unknown").to_string()),
            (
                "Port",
                parsed_url
                    .port()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| {
                        if parsed_url.scheme() == "https" {
                            "443 (default)".to_string()
                        } else {
                            "80 (default)".to_string()
                        }
                    }),
            ),
            ("Scheme", parsed_url.scheme().to_string()),
        ],
        Err(_) => vec![("URL", url.to_string())],
    }
}

fn print_body(body: &str) {
    if body.chars().count() > MAX_CONSOLE_BODY {
        println!("{}", safe_truncate(body, MAX_CONSOLE_BODY));
        println!(
            "\n{}",
            format!("... (truncated, total {} bytes)", body.len()).bright_black()
        );
    } else {
        println!("{}", body);
    }
}

/// Log an outbound model request (console output)
pub fn log_request(url: &str, request: &serde_json::Value, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 MODEL REQUEST".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    for (label, value) in describe_url(url) {
        println!("{}: {}", label.bright_yellow(), value);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  API key: {}", mask_secret(api_key));

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(request) {
        Ok(json) => print_body(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log a model response (console output)
pub fn log_response(status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 MODEL RESPONSE".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Response Body:".bright_yellow());
    match serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
    {
        Some(pretty) => print_body(&pretty),
        None => print_body(body),
    }

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

/// Write an outbound model request to `logs_dir`; returns the file written
pub fn log_request_to_file(
    logs_dir: &Path,
    url: &str,
    request: &serde_json::Value,
    model: &str,
    api_key: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let model_name = model.replace(['/', ':'], "-");
    let file_path = logs_dir.join(format!("req-{}-{}.txt", timestamp, model_name));

    let mut log_content = String::new();
    log_content.push_str("MODEL REQUEST LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));

    for (label, value) in describe_url(url) {
        log_content.push_str(&format!("{}: {}\n", label, value));
    }

    log_content.push_str("\nHeaders:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!("  API key: {}\n\n", mask_secret(api_key)));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(request) {
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

    Ok(file_path)
}
