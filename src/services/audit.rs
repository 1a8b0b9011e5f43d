use crate::domain::models::RuleAudit;
use crate::gateway::{Gateway, Payload};
use crate::services::session::NO_BASE_URL_MESSAGE;
use crate::services::workflow::Workflow;

/// Rule-audit workflow: which rule sets apply to a city/builder combination.
pub struct AuditController {
    pub state: Workflow<RuleAudit>,
}

impl AuditController {
    pub fn new() -> Self {
        Self {
            state: Workflow::new(),
        }
    }

    /// GET /regras-aplicadas. Both filters are independently optional; empty
    /// inputs send no query parameters at all.
    pub fn fetch(&mut self, gateway: Option<&Gateway>, city: Option<&str>, builder: Option<&str>) {
        let Some(gateway) = gateway else {
            self.state.fail_local(NO_BASE_URL_MESSAGE);
            return;
        };
        let seq = self.state.begin();
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(city) = city.filter(|c| !c.is_empty()) {
            query.push(("cidade", city));
        }
        if let Some(builder) = builder.filter(|b| !b.is_empty()) {
            query.push(("construtora", builder));
        }
        let outcome = gateway
            .get("/regras-aplicadas", &query)
            .map_err(|e| e.to_string())
            .and_then(decode_audit);
        self.state.finish(seq, outcome);
    }
}

impl Default for AuditController {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_audit(payload: Payload) -> Result<RuleAudit, String> {
    match payload {
        Payload::Json(value) => {
            serde_json::from_value(value).map_err(|e| format!("unexpected response shape: {}", e))
        }
        Payload::Raw(_) => Err("response is not valid JSON".to_string()),
    }
}
