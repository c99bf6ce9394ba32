//! Network existence check
//!
//! The runtime's `network ls --filter name=...` matches by regular
//! expression, so the name is escaped and anchored on both ends to get a
//! literal, whole-name match.

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::runtime::ContainerRuntime;

/// Build the anchored, literal name filter for `network ls`
pub fn name_filter(name: &str) -> String {
    format!("^{}$", regex::escape(name))
}

/// Arguments for listing networks whose name is exactly `name`
fn list_args(name: &str) -> Vec<String> {
    vec![
        "network".to_string(),
        "ls".to_string(),
        format!("--filter=name={}", name_filter(name)),
        "--format={{.Name}}".to_string(),
    ]
}

/// Check whether a network named exactly `name` exists
///
/// Only the output `"<name>\n"` counts as present. Listing failures are
/// returned as-is; they never mean "not found".
pub fn network_exists<R: CommandRunner>(runtime: &ContainerRuntime<R>, name: &str) -> Result<bool> {
    let out = runtime.output(&list_args(name))?;
    let exists = out.strip_suffix('\n') == Some(name);

    tracing::debug!(network = %name, exists, "Checked network existence");
    Ok(exists)
}
