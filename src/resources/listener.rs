//! Listener records

use crate::error::Result;
use crate::extract::{FieldKind, FieldSpec, FieldValue, Record, Resource};
use crate::page::LinkedPage;
use crate::types::JsonObject;

/// The listening endpoint of a load-balanced service
///
/// Binds a protocol and port on the load balancer's VIP and forwards
/// accepted traffic to its default pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listener {
    /// Unique ID of the listener
    pub id: String,

    /// Listener name; not required to be unique
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Owner of the listener
    pub tenant_id: String,

    /// Protocol to listen for: TCP, HTTP, or HTTPS
    pub protocol: String,

    /// Port to listen on
    pub protocol_port: i64,

    /// ID of the pool traffic is forwarded to by default
    pub default_pool_id: String,

    /// Load balancer stubs the listener is attached to
    pub loadbalancers: Vec<JsonObject>,

    /// Maximum number of simultaneous connections (-1 for unlimited)
    pub connection_limit: i64,

    /// References to SNI TLS containers
    pub sni_container_refs: Vec<String>,

    /// Reference to the default TLS container
    pub default_tls_container_ref: String,

    /// Administrative state: up (true) or down (false)
    pub admin_state_up: bool,
}

impl Record for Listener {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("tenant_id", FieldKind::Text),
        FieldSpec::new("protocol", FieldKind::Text),
        FieldSpec::new("protocol_port", FieldKind::Int),
        FieldSpec::new("default_pool_id", FieldKind::Text),
        FieldSpec::new("loadbalancers", FieldKind::RefList),
        FieldSpec::new("connection_limit", FieldKind::Int),
        FieldSpec::new("sni_container_refs", FieldKind::TextList),
        FieldSpec::new("default_tls_container_ref", FieldKind::Text),
        FieldSpec::new("admin_state_up", FieldKind::Flag),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("id", FieldValue::Text(v)) => self.id = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("tenant_id", FieldValue::Text(v)) => self.tenant_id = v,
            ("protocol", FieldValue::Text(v)) => self.protocol = v,
            ("protocol_port", FieldValue::Int(v)) => self.protocol_port = v,
            ("default_pool_id", FieldValue::Text(v)) => self.default_pool_id = v,
            ("loadbalancers", FieldValue::RefList(v)) => self.loadbalancers = v,
            ("connection_limit", FieldValue::Int(v)) => self.connection_limit = v,
            ("sni_container_refs", FieldValue::TextList(v)) => self.sni_container_refs = v,
            ("default_tls_container_ref", FieldValue::Text(v)) => {
                self.default_tls_container_ref = v;
            }
            ("admin_state_up", FieldValue::Flag(v)) => self.admin_state_up = v,
            _ => {}
        }
        Ok(())
    }
}

impl Resource for Listener {
    const SINGULAR: &'static str = "listener";
    const PLURAL: &'static str = "listeners";
    const LINKS: &'static str = "listeners_links";
}

/// Extract a page's collection into listener records
pub fn extract_listeners(page: &LinkedPage) -> Result<Vec<Listener>> {
    page.records()
}
