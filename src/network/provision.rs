//! Idempotent network provisioning
//!
//! `ensure_network` checks for the network and creates it only when the
//! runtime reports it absent. The check and the create are separate
//! runtime calls: a concurrent creator can win in between, in which case
//! the create error is returned to the caller like any other failure.
//! Retrying is the caller's decision.

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::network::exists::network_exists;
use crate::network::subnet::{Subnet, derive_subnet};
use crate::runtime::ContainerRuntime;

/// What `ensure_network` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The network was already there; nothing was changed
    AlreadyPresent,
    /// The network was created with this IPv6 subnet
    Created(Subnet),
}

/// Arguments for creating a dual-stack bridge network
fn create_args(name: &str, subnet: &Subnet) -> Vec<String> {
    vec![
        "network".to_string(),
        "create".to_string(),
        "-d=bridge".to_string(),
        "--ipv6".to_string(),
        "--subnet".to_string(),
        subnet.to_string(),
        name.to_string(),
    ]
}

/// Make sure a network named `name` exists
///
/// An existing network is left untouched, even if it lacks IPv6.
pub fn ensure_network<R: CommandRunner>(
    runtime: &ContainerRuntime<R>,
    name: &str,
) -> Result<EnsureOutcome> {
    if network_exists(runtime, name)? {
        tracing::info!(network = %name, "Network already exists");
        return Ok(EnsureOutcome::AlreadyPresent);
    }

    let subnet = derive_subnet(name);
    tracing::info!(network = %name, subnet = %subnet, runtime = %runtime.program(), "Creating network");

    runtime.run(&create_args(name, &subnet))?;
    Ok(EnsureOutcome::Created(subnet))
}
