//! Process-backed build environment.

use std::process::Command;

use crate::graph::BuildEnvironment;

/// A [`BuildEnvironment`] backed by the operating system.
///
/// Commands run as real child processes inheriting this process' stdio, and
/// the call blocks until the compiler exits. Hosts with their own execution
/// machinery supply their own implementation instead.
#[derive(Debug, Default, Copy, Clone)]
pub struct OsEnvironment;

impl BuildEnvironment for OsEnvironment {
    fn is_windows_host(&self) -> bool {
        cfg!(windows)
    }

    fn execute(&mut self, command_line: &str) -> bool {
        let mut parts = command_line.split_whitespace();
        let executable = match parts.next() {
            Some(executable) => executable,
            None => return false,
        };
        if let Err(e) = which::which(executable) {
            error!("could not find `{}` on PATH: {}", executable, e);
            return false;
        }

        trace!("attempting to execute command: {:?}", command_line);
        match Command::new(executable).args(parts).status() {
            Ok(status) => status.success(),
            Err(e) => {
                error!("failed to spawn `{}`: {}", executable, e);
                false
            }
        }
    }
}
