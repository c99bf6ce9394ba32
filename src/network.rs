//! Cluster network provisioning
//!
//! Provides:
//! - Deterministic IPv6 ULA subnet derivation from a network name
//! - Exact-name existence checks against the container runtime
//! - Idempotent creation of the shared bridge network

pub mod exists;
pub mod provision;
pub mod subnet;

pub use exists::network_exists;
pub use provision::{EnsureOutcome, ensure_network};
pub use subnet::{Subnet, derive_subnet};

/// Network name used when none is configured
pub const DEFAULT_NETWORK_NAME: &str = "kind";
