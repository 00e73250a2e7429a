//! Pool and pool member records

use crate::error::Result;
use crate::extract::{decode_record, FieldKind, FieldSpec, FieldValue, Record, Resource};
use crate::page::LinkedPage;
use crate::types::JsonObject;

/// Session persistence configuration of a pool
///
/// Forces connections or requests in the same session to be processed by
/// the same member. Supported modes:
///
/// - `SOURCE_IP`: all connections from the same source IP go to the same
///   member
/// - `HTTP_COOKIE`: the load balancer sets a cookie on the first request
///   and routes on it afterwards
/// - `APP_COOKIE`: routing keys off a cookie established by the backend
///   application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPersistence {
    /// The persistence mode
    pub kind: String,

    /// Cookie name, when the mode uses one
    pub cookie_name: String,
}

impl Record for SessionPersistence {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("type", FieldKind::Text),
        FieldSpec::new("cookie_name", FieldKind::Text),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("type", FieldValue::Text(v)) => self.kind = v,
            ("cookie_name", FieldValue::Text(v)) => self.cookie_name = v,
            _ => {}
        }
        Ok(())
    }
}

/// A logical set of backend devices grouped to receive traffic
///
/// The load balancing function picks a member of the pool per the
/// configured algorithm for each request arriving on the VIP address.
/// Associated listeners, members, and load balancers appear as
/// cross-reference stubs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    /// Unique ID of the pool
    pub id: String,

    /// Pool name; not required to be unique
    pub name: String,

    /// Description for the pool
    pub description: String,

    /// The load-balancer algorithm (round-robin, least-connections, ...);
    /// provider-dependent, round-robin must be supported
    pub lb_method: String,

    /// Protocol of the pool: TCP, HTTP, or HTTPS
    pub protocol: String,

    /// Listener stubs associated with the pool
    pub listeners: Vec<JsonObject>,

    /// Member stubs belonging to the pool
    pub members: Vec<JsonObject>,

    /// IDs of monitors checking the health of the pool members
    pub monitor_ids: Vec<String>,

    /// Network the pool members are located on
    pub subnet_id: String,

    /// Owner of the pool
    pub tenant_id: String,

    /// Administrative state: up (true) or down (false)
    pub admin_state_up: bool,

    /// Load balancer stubs associated with the pool
    pub loadbalancers: Vec<JsonObject>,

    /// Session persistence configuration, when set
    pub persistence: SessionPersistence,

    /// The provider
    pub provider: String,
}

impl Record for Pool {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("lb_algorithm", FieldKind::Text),
        FieldSpec::new("protocol", FieldKind::Text),
        FieldSpec::new("listeners", FieldKind::RefList),
        FieldSpec::new("members", FieldKind::RefList),
        FieldSpec::new("health_monitors", FieldKind::TextList),
        FieldSpec::new("subnet_id", FieldKind::Text),
        FieldSpec::new("tenant_id", FieldKind::Text),
        FieldSpec::new("admin_state_up", FieldKind::Flag),
        FieldSpec::new("loadbalancers", FieldKind::RefList),
        FieldSpec::new("session_persistence", FieldKind::Map),
        FieldSpec::new("provider", FieldKind::Text),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("id", FieldValue::Text(v)) => self.id = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("lb_algorithm", FieldValue::Text(v)) => self.lb_method = v,
            ("protocol", FieldValue::Text(v)) => self.protocol = v,
            ("listeners", FieldValue::RefList(v)) => self.listeners = v,
            ("members", FieldValue::RefList(v)) => self.members = v,
            ("health_monitors", FieldValue::TextList(v)) => self.monitor_ids = v,
            ("subnet_id", FieldValue::Text(v)) => self.subnet_id = v,
            ("tenant_id", FieldValue::Text(v)) => self.tenant_id = v,
            ("admin_state_up", FieldValue::Flag(v)) => self.admin_state_up = v,
            ("loadbalancers", FieldValue::RefList(v)) => self.loadbalancers = v,
            // The persistence block is a genuinely inlined sub-record, not
            // a cross-reference stub, so it decodes recursively.
            ("session_persistence", FieldValue::Map(v)) => {
                self.persistence = decode_record(&v)?;
            }
            ("provider", FieldValue::Text(v)) => self.provider = v,
            _ => {}
        }
        Ok(())
    }
}

impl Resource for Pool {
    const SINGULAR: &'static str = "pool";
    const PLURAL: &'static str = "pools";
    const LINKS: &'static str = "pools_links";
}

/// The application running on a backend server
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    /// Unique ID of the member
    pub id: String,

    /// Name of the member
    pub name: String,

    /// Weight of the member in the balancing algorithm
    pub weight: i64,

    /// Administrative state: up (true) or down (false)
    pub admin_state_up: bool,

    /// Owner of the member
    pub tenant_id: String,

    /// Subnet UUID the member lives on
    pub subnet_id: String,

    /// The pool the member belongs to
    pub pool_id: String,

    /// IP address of the member
    pub address: String,

    /// Port the application is hosted on
    pub protocol_port: i64,
}

impl Record for Member {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("weight", FieldKind::Int),
        FieldSpec::new("admin_state_up", FieldKind::Flag),
        FieldSpec::new("tenant_id", FieldKind::Text),
        FieldSpec::new("subnet_id", FieldKind::Text),
        FieldSpec::new("pool_id", FieldKind::Text),
        FieldSpec::new("address", FieldKind::Text),
        FieldSpec::new("protocol_port", FieldKind::Int),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("id", FieldValue::Text(v)) => self.id = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            ("weight", FieldValue::Int(v)) => self.weight = v,
            ("admin_state_up", FieldValue::Flag(v)) => self.admin_state_up = v,
            ("tenant_id", FieldValue::Text(v)) => self.tenant_id = v,
            ("subnet_id", FieldValue::Text(v)) => self.subnet_id = v,
            ("pool_id", FieldValue::Text(v)) => self.pool_id = v,
            ("address", FieldValue::Text(v)) => self.address = v,
            ("protocol_port", FieldValue::Int(v)) => self.protocol_port = v,
            _ => {}
        }
        Ok(())
    }
}

impl Resource for Member {
    const SINGULAR: &'static str = "member";
    const PLURAL: &'static str = "members";
    const LINKS: &'static str = "members_links";
}

/// Extract a page's collection into pool records
pub fn extract_pools(page: &LinkedPage) -> Result<Vec<Pool>> {
    page.records()
}

/// Extract a page's collection into member records
pub fn extract_members(page: &LinkedPage) -> Result<Vec<Member>> {
    page.records()
}
