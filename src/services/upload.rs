use crate::domain::models::{RecordResult, ValidationOutcome};
use crate::gateway::{Gateway, Payload};
use crate::services::session::NO_BASE_URL_MESSAGE;
use crate::services::workflow::Workflow;
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "/validar";
pub const NO_FILE_MESSAGE: &str = "select a .json file first";

/// Upload-and-validate workflow. The submission endpoint is operator
/// configurable; only the multipart field name is fixed.
pub struct UploadController {
    pub state: Workflow<ValidationOutcome>,
    pub endpoint: String,
}

impl UploadController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            state: Workflow::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Multipart POST of `file` to the configured endpoint. Without a gateway
    /// or a file this fails locally and never touches the network.
    pub fn submit(&mut self, gateway: Option<&Gateway>, file: Option<&Path>) {
        let Some(gateway) = gateway else {
            self.state.fail_local(NO_BASE_URL_MESSAGE);
            return;
        };
        let Some(file) = file else {
            self.state.fail_local(NO_FILE_MESSAGE);
            return;
        };
        let seq = self.state.begin();
        let outcome = gateway
            .post_file(&self.endpoint, file)
            .map(normalize_outcome)
            .map_err(|e| e.to_string());
        self.state.finish(seq, outcome);
    }
}

/// Array bodies become per-record results; everything else (single object,
/// primitive, undecodable list, non-JSON text) stays opaque.
pub fn normalize_outcome(payload: Payload) -> ValidationOutcome {
    match payload {
        Payload::Json(Value::Array(items)) => {
            match serde_json::from_value::<Vec<RecordResult>>(Value::Array(items.clone())) {
                Ok(records) => ValidationOutcome::Records(records),
                Err(_) => ValidationOutcome::Other(Value::Array(items)),
            }
        }
        Payload::Json(other) => ValidationOutcome::Other(other),
        Payload::Raw(text) => ValidationOutcome::Other(serde_json::json!({ "_raw": text })),
    }
}
