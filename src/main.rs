//! clusternet - shared network provisioning for container-based clusters
//!
//! Ensures the single bridge network that cluster nodes attach to exists,
//! creating it with a name-derived IPv6 subnet when it is missing.

mod cli;
mod error;
mod exec;
mod manifest;
mod network;
mod runtime;

use cli::{Cli, Commands};
use error::Result;
use exec::HostRunner;
use network::EnsureOutcome;
use runtime::ContainerRuntime;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct SubnetReport<'a> {
    network: &'a str,
    subnet: network::Subnet,
    address: std::net::Ipv6Addr,
    prefix_len: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Commands that don't require config
    if let Commands::Completion { shell } = cli.command {
        Cli::generate_completion(shell);
        return Ok(());
    }

    init_logging(cli.verbose);

    let name_override = match &cli.command {
        Commands::Ensure { name } | Commands::Exists { name } | Commands::Subnet { name, .. } => {
            name.clone()
        }
        Commands::Completion { .. } => None,
    };
    let config = manifest::load_or_default(cli.config.as_deref())?
        .with_overrides(name_override, cli.runtime.clone())?;
    let name = config.network.name.as_str();

    match cli.command {
        Commands::Ensure { .. } => {
            let runtime = ContainerRuntime::new(config.runtime.command.clone(), HostRunner);
            match network::ensure_network(&runtime, name)? {
                EnsureOutcome::AlreadyPresent => {
                    println!("Network '{}' already exists", name);
                }
                EnsureOutcome::Created(subnet) => {
                    println!("Created network '{}' (subnet {})", name, subnet);
                }
            }
        }
        Commands::Exists { .. } => {
            let runtime = ContainerRuntime::new(config.runtime.command.clone(), HostRunner);
            println!("{}", network::network_exists(&runtime, name)?);
        }
        Commands::Subnet { json, .. } => {
            let subnet = network::derive_subnet(name);
            if json {
                let report = SubnetReport {
                    network: name,
                    subnet,
                    address: subnet.addr(),
                    prefix_len: subnet.prefix_len(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", subnet);
            }
        }
        Commands::Completion { .. } => {}
    }

    Ok(())
}
