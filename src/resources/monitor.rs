//! Health monitor records

use crate::error::Result;
use crate::extract::{FieldKind, FieldSpec, FieldValue, Record, Resource};
use crate::page::LinkedPage;
use crate::types::JsonObject;

/// A health check applied to the members of a pool
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Monitor {
    /// Unique ID of the monitor
    pub id: String,

    /// Monitor name
    pub name: String,

    /// Owner of the monitor
    pub tenant_id: String,

    /// Check type: PING, TCP, HTTP, or HTTPS
    pub kind: String,

    /// Seconds between health checks
    pub delay: i64,

    /// Seconds a check may take before it counts as failed
    pub timeout: i64,

    /// Failed checks before a member is marked down
    pub max_retries: i64,

    /// HTTP method used by HTTP(S) checks
    pub http_method: String,

    /// Request path used by HTTP(S) checks
    pub url_path: String,

    /// Status codes treated as healthy, e.g. "200" or "200-202"
    pub expected_codes: String,

    /// Administrative state: up (true) or down (false)
    pub admin_state_up: bool,

    /// Pool stubs the monitor is attached to
    pub pools: Vec<JsonObject>,
}

impl Record for Monitor {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("tenant_id", FieldKind::Text),
        FieldSpec::new("type", FieldKind::Text),
        FieldSpec::new("delay", FieldKind::Int),
        FieldSpec::new("timeout", FieldKind::Int),
        FieldSpec::new("max_retries", FieldKind::Int),
        FieldSpec::new("http_method", FieldKind::Text),
        FieldSpec::new("url_path", FieldKind::Text),
        FieldSpec::new("expected_codes", FieldKind::Text),
        FieldSpec::new("admin_state_up", FieldKind::Flag),
        FieldSpec::new("pools", FieldKind::RefList),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("id", FieldValue::Text(v)) => self.id = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            ("tenant_id", FieldValue::Text(v)) => self.tenant_id = v,
            ("type", FieldValue::Text(v)) => self.kind = v,
            ("delay", FieldValue::Int(v)) => self.delay = v,
            ("timeout", FieldValue::Int(v)) => self.timeout = v,
            ("max_retries", FieldValue::Int(v)) => self.max_retries = v,
            ("http_method", FieldValue::Text(v)) => self.http_method = v,
            ("url_path", FieldValue::Text(v)) => self.url_path = v,
            ("expected_codes", FieldValue::Text(v)) => self.expected_codes = v,
            ("admin_state_up", FieldValue::Flag(v)) => self.admin_state_up = v,
            ("pools", FieldValue::RefList(v)) => self.pools = v,
            _ => {}
        }
        Ok(())
    }
}

impl Resource for Monitor {
    const SINGULAR: &'static str = "healthmonitor";
    const PLURAL: &'static str = "healthmonitors";
    const LINKS: &'static str = "healthmonitors_links";
}

/// Extract a page's collection into monitor records
pub fn extract_monitors(page: &LinkedPage) -> Result<Vec<Monitor>> {
    page.records()
}
