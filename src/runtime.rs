//! Container runtime handle
//!
//! Pairs the runtime binary (docker, podman, nerdctl...) with the
//! [`CommandRunner`] used to invoke it.

use crate::error::Result;
use crate::exec::CommandRunner;

/// Default container runtime binary
pub const DEFAULT_RUNTIME: &str = "docker";

/// A container runtime reachable through a command runner
#[derive(Debug)]
pub struct ContainerRuntime<R: CommandRunner> {
    /// Runtime binary name or path
    program: String,
    runner: R,
}

impl<R: CommandRunner> ContainerRuntime<R> {
    /// Create a runtime handle for `program`
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Get the runtime binary
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Get the underlying runner
    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run a runtime subcommand and return its stdout
    pub fn output(&self, args: &[String]) -> Result<String> {
        self.runner.output(&self.program, args)
    }

    /// Run a runtime subcommand for its side effect
    pub fn run(&self, args: &[String]) -> Result<()> {
        self.runner.run(&self.program, args)
    }
}
