//! Low-level discovery (LLD) document encoding.
mod lld;

pub use lld::{DiscoveryDocument, DiscoveryEntry, PID_MACRO, PNAME_MACRO};
