use crate::domain::models::RuleOptions;
use crate::gateway::{normalize_base, Gateway};
use crate::services::audit::AuditController;
use crate::services::listing::ListController;
use crate::services::options::load_options;
use crate::services::upload::UploadController;
use std::path::Path;

pub const NO_BASE_URL_MESSAGE: &str = "set a base URL first";

/// One console session: the base URL, the gateway built from it, the cached
/// selector options and the three independent workflow controllers. The
/// controllers share nothing but the read-only gateway, so their requests may
/// interleave freely.
pub struct Session {
    base_url: String,
    timeout_ms: u64,
    gateway: Option<Gateway>,
    pub options: RuleOptions,
    pub upload: UploadController,
    pub listing: ListController,
    pub audit: AuditController,
}

impl Session {
    /// Builds the gateway but does not fetch selector options yet: one-shot
    /// commands that never show a selector must not pay for the fetch.
    pub fn new(base_url: &str, endpoint: &str, timeout_ms: u64) -> Self {
        let base_url = normalize_base(base_url);
        let gateway = Self::build_gateway(&base_url, timeout_ms);
        Self {
            base_url,
            timeout_ms,
            gateway,
            options: RuleOptions::default(),
            upload: UploadController::new(endpoint),
            listing: ListController::new(),
            audit: AuditController::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn gateway(&self) -> Option<&Gateway> {
        self.gateway.as_ref()
    }

    /// Strips the trailing slash, rebuilds the gateway and re-runs the
    /// options loader. An empty URL tears the gateway down; either way the
    /// reload is silent.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = normalize_base(url);
        self.gateway = Self::build_gateway(&self.base_url, self.timeout_ms);
        self.reload_options();
    }

    /// Best-effort selector refresh; failures leave the lists empty and are
    /// never surfaced.
    pub fn reload_options(&mut self) {
        self.options = match &self.gateway {
            Some(gateway) => load_options(gateway),
            None => RuleOptions::default(),
        };
    }

    fn build_gateway(base_url: &str, timeout_ms: u64) -> Option<Gateway> {
        if base_url.is_empty() {
            None
        } else {
            Gateway::new(base_url, timeout_ms).ok()
        }
    }

    pub fn submit(&mut self, file: Option<&Path>) {
        self.upload.submit(self.gateway.as_ref(), file);
    }

    pub fn fetch_list(&mut self, status: Option<&str>) {
        self.listing.fetch(self.gateway.as_ref(), status);
    }

    pub fn fetch_rules(&mut self, city: Option<&str>, builder: Option<&str>) {
        self.audit.fetch(self.gateway.as_ref(), city, builder);
    }
}
