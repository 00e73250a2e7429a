//! Load balancer records

use crate::error::Result;
use crate::extract::{FieldKind, FieldSpec, FieldValue, Record, Resource};
use crate::page::LinkedPage;

/// The primary load balancing configuration object
///
/// Specifies the virtual IP address on which client traffic is received,
/// plus details such as provisioning state and provider. Known in some
/// products as a "virtual server" or "vserver".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBalancer {
    /// Unique ID of the load balancer
    pub id: String,

    /// Human-readable name; not required to be unique
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Administrative state: up (true) or down (false)
    pub admin_state_up: bool,

    /// Owner of the load balancer
    pub tenant_id: String,

    /// Provisioning status: ACTIVE, PENDING_CREATE or ERROR
    pub provisioning_status: String,

    /// Operating status: ONLINE or OFFLINE
    pub operating_status: String,

    /// IP address of the virtual IP
    pub vip_address: String,

    /// UUID of the subnet the virtual IP is allocated on
    pub vip_subnet_id: String,

    /// UUID of a flavor, if set
    pub flavor: String,

    /// Name of the provider
    pub provider: String,
}

impl Record for LoadBalancer {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("description", FieldKind::Text),
        FieldSpec::new("admin_state_up", FieldKind::Flag),
        FieldSpec::new("tenant_id", FieldKind::Text),
        FieldSpec::new("provisioning_status", FieldKind::Text),
        FieldSpec::new("operating_status", FieldKind::Text),
        FieldSpec::new("vip_address", FieldKind::Text),
        FieldSpec::new("vip_subnet_id", FieldKind::Text),
        FieldSpec::new("flavor", FieldKind::Text),
        FieldSpec::new("provider", FieldKind::Text),
    ];

    fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
        match (wire_key, value) {
            ("id", FieldValue::Text(v)) => self.id = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            ("description", FieldValue::Text(v)) => self.description = v,
            ("admin_state_up", FieldValue::Flag(v)) => self.admin_state_up = v,
            ("tenant_id", FieldValue::Text(v)) => self.tenant_id = v,
            ("provisioning_status", FieldValue::Text(v)) => self.provisioning_status = v,
            ("operating_status", FieldValue::Text(v)) => self.operating_status = v,
            ("vip_address", FieldValue::Text(v)) => self.vip_address = v,
            ("vip_subnet_id", FieldValue::Text(v)) => self.vip_subnet_id = v,
            ("flavor", FieldValue::Text(v)) => self.flavor = v,
            ("provider", FieldValue::Text(v)) => self.provider = v,
            _ => {}
        }
        Ok(())
    }
}

impl Resource for LoadBalancer {
    const SINGULAR: &'static str = "loadbalancer";
    const PLURAL: &'static str = "loadbalancers";
    // The service deviates from the "<collection>_links" convention here.
    const LINKS: &'static str = "loadbalancer_links";
}

/// Extract a page's collection into load balancer records
pub fn extract_loadbalancers(page: &LinkedPage) -> Result<Vec<LoadBalancer>> {
    page.records()
}
