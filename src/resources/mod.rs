//! Load-balancing resource records
//!
//! The record shapes for the service's load-balancing family, declared
//! through the extractor's field-mapping tables: load balancers, pools,
//! pool members, listeners, and health monitors. Associated resources
//! appear on the wire as cross-reference stubs (identifier-bearing
//! mappings), never as inlined sub-resources, and are kept verbatim.

mod listener;
mod loadbalancer;
mod monitor;
mod pool;

pub use listener::{extract_listeners, Listener};
pub use loadbalancer::{extract_loadbalancers, LoadBalancer};
pub use monitor::{extract_monitors, Monitor};
pub use pool::{extract_members, extract_pools, Member, Pool, SessionPersistence};
