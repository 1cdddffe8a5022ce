// src/trigger/runner.rs

//! Process execution boundary for refresh tools
//!
//! The executor never spawns processes directly; it goes through a
//! [`CommandRunner`] so tests can record invocations without the real
//! icon cache or desktop database tools installed.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;
use wait_timeout::ChildExt;

/// A single external command: program plus arguments
///
/// Arguments are kept as `OsString` so non-UTF-8 paths reach the tool
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new<I, A>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Captured result of a tool that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code, `None` if the tool was terminated by a signal
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }
}

/// Runs external commands on behalf of the trigger executor
pub trait CommandRunner: Send + Sync {
    /// Check whether `program` can be resolved to an executable
    fn handler_exists(&self, program: &str) -> bool;

    /// Run the command to completion, or kill it after `timeout`
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`RunOutput::status_code`].
    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput>;
}

/// Runner backed by real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn handler_exists(&self, program: &str) -> bool {
        if program.is_empty() {
            return false;
        }

        // Absolute or relative paths are checked as-is
        if program.contains('/') {
            return Path::new(program).is_file();
        }

        which::which(program).is_ok()
    }

    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput> {
        debug!("Executing: {} {:?}", invocation.program, invocation.args);

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        // Drain both pipes while waiting so a chatty tool never blocks on write
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        match child.wait_timeout(timeout)? {
            Some(status) => Ok(RunOutput {
                status_code: status.code(),
                stdout: collect(stdout),
                stderr: collect(stderr),
            }),
            None => {
                // Readers are left detached; they finish once the pipes close
                let _ = child.kill();
                let _ = child.wait();
                Err(Error::Timeout {
                    program: invocation.program.clone(),
                    secs: timeout.as_secs(),
                })
            }
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    })
}

fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> String {
    reader
        .and_then(|handle| handle.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}
