use crate::domain::models::RuleOptions;
use crate::gateway::{Gateway, Payload};

/// Best-effort fetch of the known cities/builders used to populate the
/// selectors. Advisory only: any failure leaves the lists empty and is never
/// surfaced to the user.
pub fn load_options(gateway: &Gateway) -> RuleOptions {
    match gateway.get("/regras-opcoes", &[]) {
        Ok(Payload::Json(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(Payload::Raw(_)) | Err(_) => RuleOptions::default(),
    }
}
