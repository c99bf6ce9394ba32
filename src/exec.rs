//! External command execution
//!
//! Everything that talks to the container runtime goes through the
//! [`CommandRunner`] trait so the network logic never spawns processes
//! directly. [`HostRunner`] is the real implementation; tests use
//! [`fake::FakeRunner`].

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Runs an external program and captures its standard output
pub trait CommandRunner {
    /// Run `program` with `args` and return its raw stdout
    ///
    /// A non-zero exit status is an error carrying the program's stderr.
    fn output(&self, program: &str, args: &[String]) -> Result<String>;

    /// Run `program` with `args`, discarding stdout
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        self.output(program, args).map(|_| ())
    }
}

/// Runs commands on the host with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct HostRunner;

impl CommandRunner for HostRunner {
    fn output(&self, program: &str, args: &[String]) -> Result<String> {
        let command = display_command(program, args);
        tracing::debug!(command = %command, "Executing runtime command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::CommandSpawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            tracing::warn!(command = %command, status = %output.status, "Command failed");
            return Err(Error::CommandFailed { command, message });
        }

        // stdout is returned untrimmed: callers compare exact output
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Render a command line for logs and error messages
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_command() {
        assert_eq!(
            display_command("docker", &args(&["network", "ls"])),
            "docker network ls"
        );
        assert_eq!(display_command("docker", &[]), "docker");
    }

    #[test]
    fn test_host_runner_captures_stdout() {
        let out = HostRunner.output("echo", &args(&["kind"])).unwrap();
        assert_eq!(out, "kind\n");
    }

    #[test]
    fn test_host_runner_nonzero_exit() {
        let err = HostRunner
            .output("sh", &args(&["-c", "echo boom >&2; exit 3"]))
            .unwrap_err();
        match err {
            Error::CommandFailed { command, message } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_host_runner_missing_program() {
        let err = HostRunner
            .run("clusternet-no-such-binary", &[])
            .unwrap_err();
        assert!(matches!(err, Error::CommandSpawn { .. }));
    }

    #[test]
    fn test_fake_runner_replays_in_order() {
        let runner = fake::FakeRunner::new()
            .respond(Ok("first\n".to_string()))
            .respond(Ok("second\n".to_string()));

        assert_eq!(runner.output("docker", &args(&["a"])).unwrap(), "first\n");
        assert_eq!(runner.output("docker", &args(&["b"])).unwrap(), "second\n");
        assert_eq!(runner.output("docker", &args(&["c"])).unwrap(), "");
        assert_eq!(runner.calls().len(), 3);
    }
}
