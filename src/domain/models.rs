use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One per-record validation verdict. Wire names are the backend's Portuguese
/// field names; fields are defaulted so partially-filled records still decode.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecordResult {
    #[serde(rename = "construtora", default)]
    pub builder: String,
    #[serde(rename = "cidade", default)]
    pub city: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "erros", default)]
    pub errors: Vec<String>,
}

/// A persisted record carries an identifier; fresh upload results do not.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoredRecord {
    pub id: i64,
    #[serde(flatten)]
    pub record: RecordResult,
}

/// The validation endpoint is not contractually fixed to one shape: it may
/// answer with a record list or with a single opaque value. Both are accepted
/// and dispatched at render time.
#[derive(Debug, Serialize, Clone)]
#[serde(untagged)]
pub enum ValidationOutcome {
    Records(Vec<RecordResult>),
    Other(Value),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Rule {
    pub key: String,
    pub description: String,
}

/// Rule sets applicable to a city/builder combination. `merged_rules` is the
/// effective application order as sent by the backend and is never re-sorted.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuleAudit {
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "construtora", default)]
    pub builder: Option<String>,
    #[serde(default)]
    pub default_city_rules: bool,
    #[serde(default)]
    pub city_rules: Vec<Rule>,
    #[serde(default)]
    pub builder_rules: Vec<Rule>,
    #[serde(default)]
    pub merged_rules: Vec<Rule>,
}

/// Known cities/builders for the selectors. Advisory only: values outside
/// these lists are still accepted everywhere.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuleOptions {
    #[serde(rename = "cidades", default)]
    pub cities: Vec<String>,
    #[serde(rename = "construtoras", default)]
    pub builders: Vec<String>,
}
