use crate::domain::models::StoredRecord;
use crate::gateway::{Gateway, Payload};
use crate::services::session::NO_BASE_URL_MESSAGE;
use crate::services::workflow::Workflow;

/// Persisted-records workflow. "Fetched, found nothing" and "never fetched"
/// both render as an empty list; the distinction is not tracked.
pub struct ListController {
    pub state: Workflow<Vec<StoredRecord>>,
}

impl ListController {
    pub fn new() -> Self {
        Self {
            state: Workflow::new(),
        }
    }

    /// GET /empreendimentos, with `status=` appended only for a non-empty
    /// filter.
    pub fn fetch(&mut self, gateway: Option<&Gateway>, status: Option<&str>) {
        let Some(gateway) = gateway else {
            self.state.fail_local(NO_BASE_URL_MESSAGE);
            return;
        };
        let seq = self.state.begin();
        let query: Vec<(&str, &str)> = match status {
            Some(s) if !s.is_empty() => vec![("status", s)],
            _ => Vec::new(),
        };
        let outcome = gateway
            .get("/empreendimentos", &query)
            .map_err(|e| e.to_string())
            .and_then(decode_records);
        self.state.finish(seq, outcome);
    }

    pub fn records(&self) -> &[StoredRecord] {
        self.state.result().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_records(payload: Payload) -> Result<Vec<StoredRecord>, String> {
    match payload {
        Payload::Json(value) => {
            serde_json::from_value(value).map_err(|e| format!("unexpected response shape: {}", e))
        }
        Payload::Raw(_) => Err("response is not valid JSON".to_string()),
    }
}
