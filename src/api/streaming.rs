use crate::api::models::GenerateResponse;
use crate::api::response::chunk_text;
use crate::error::{IvanError, Result};
use colored::*;
use futures::StreamExt;
use tokio::time::{timeout, Duration};

/// Consume a server-sent-event response body, handing each text fragment
/// to `on_fragment` in arrival order. Returns the concatenated reply once
/// the stream closes.
pub async fn process_sse_stream(
    response: reqwest::Response,
    timeout_secs: u64,
    verbose: bool,
    on_fragment: &mut dyn FnMut(&str),
) -> Result<String> {
    let mut stream = response.bytes_stream();
    let mut buffer = String::new();
    let mut incomplete_line = String::new();
    let mut full_text = String::new();
    let chunk_timeout = Duration::from_secs(timeout_secs);

    loop {
        match timeout(chunk_timeout, stream.next()).await {
            Ok(Some(chunk)) => {
                let chunk = chunk.map_err(IvanError::NetworkError)?;
                let text = String::from_utf8_lossy(&chunk);
                incomplete_line.push_str(&text);
            }
            Ok(None) => break,
            Err(_) => return Err(IvanError::Timeout),
        }

        // Find last newline to ensure we only process complete lines
        if let Some(last_newline_pos) = incomplete_line.rfind('\n') {
            buffer.push_str(&incomplete_line[..=last_newline_pos]);
            incomplete_line = incomplete_line[last_newline_pos + 1..].to_string();
        } else {
            continue;
        }

        // Process complete lines
        while let Some(line_end) = buffer.find('\n') {
            let line = buffer[..line_end].to_string();
            buffer = buffer[line_end + 1..].to_string();

            if line.is_empty() || line.starts_with(':') {
                continue;
            }

            // Parse SSE field
            if let Some(colon_pos) = line.find(':') {
                let field = line[..colon_pos].trim();
                let value = line[colon_pos + 1..].trim_start();

                match field {
                    "data" => match serde_json::from_str::<GenerateResponse>(value) {
                        Ok(parsed) => {
                            let fragment = chunk_text(&parsed);
                            if !fragment.is_empty() {
                                full_text.push_str(&fragment);
                                on_fragment(&fragment);
                            }
                        }
                        Err(e) => {
                            if verbose {
                                eprintln!(
                                    "{}",
                                    format!("[ivan] JSON parse error: {}", e).dimmed()
                                );
                            }
                        }
                    },
                    "event" | "id" | "retry" => {
                        if verbose {
                            eprintln!("{}", format!("[ivan] SSE {}: {}", field, value).dimmed());
                        }
                    }
                    _ => {
                        if verbose {
                            eprintln!("{}", format!("[ivan] Unknown SSE field: {}", field).dimmed());
                        }
                    }
                }
            }
        }
    }

    Ok(full_text)
}
