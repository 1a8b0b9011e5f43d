use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Response body after normalization. Bodies are read as text first and only
/// then JSON-parsed, so a malformed-but-present body still reaches the caller
/// as `Raw` instead of failing the request.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Raw(String),
}

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("cannot read file: {0}")]
    File(#[from] std::io::Error),
}

/// Trailing slashes stripped; whitespace-only input collapses to "".
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Thin transport over the backend. No retries, no caching.
pub struct Gateway {
    base: String,
    client: reqwest::blocking::Client,
}

impl Gateway {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base: normalize_base(base_url),
            client,
        })
    }

    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Payload, GatewayError> {
        let resp = self.client.get(self.url(path)).query(query).send()?;
        normalize_response(resp)
    }

    /// Multipart POST with the file under the fixed field name `file`.
    pub fn post_file(&self, path: &str, file: &Path) -> Result<Payload, GatewayError> {
        let form = reqwest::blocking::multipart::Form::new().file("file", file)?;
        let resp = self.client.post(self.url(path)).multipart(form).send()?;
        normalize_response(resp)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn normalize_response(resp: reqwest::blocking::Response) -> Result<Payload, GatewayError> {
    let status = resp.status();
    let text = resp.text()?;
    let payload = match serde_json::from_str::<Value>(&text) {
        Ok(value) => Payload::Json(value),
        Err(_) => Payload::Raw(text),
    };
    if !status.is_success() {
        return Err(GatewayError::Backend(failure_message(
            status.as_u16(),
            &payload,
        )));
    }
    Ok(payload)
}

/// Error text for a non-2xx response: the body's `detail` field when the body
/// is an object carrying one, otherwise a generic `HTTP <status>`.
fn failure_message(status: u16, payload: &Payload) -> String {
    if let Payload::Json(Value::Object(map)) = payload {
        if let Some(detail) = map.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    format!("HTTP {}", status)
}
