// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use desktop_postinstall::{CommandRunner, Error, Invocation, Result, RunOutput};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// How the recording runner answers a `run` call
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Succeed,
    ExitWith(i32),
    NotFound,
    SpawnFails,
}

/// Mock runner that records every invocation instead of spawning it.
pub struct RecordingRunner {
    behaviour: Behaviour,
    calls: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded invocations rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn handler_exists(&self, _program: &str) -> bool {
        !matches!(self.behaviour, Behaviour::NotFound)
    }

    fn run(&self, invocation: &Invocation, _timeout: Duration) -> Result<RunOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        match self.behaviour {
            Behaviour::Succeed => Ok(RunOutput {
                status_code: Some(0),
                ..RunOutput::default()
            }),
            Behaviour::ExitWith(code) => Ok(RunOutput {
                status_code: Some(code),
                stdout: String::new(),
                stderr: "simulated failure".to_string(),
            }),
            Behaviour::NotFound | Behaviour::SpawnFails => Err(Error::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

/// Write an executable shell script that appends its argv to `log`
/// and exits with `code`.
pub fn write_stub_tool(dir: &Path, name: &str, log: &Path, code: i32) -> PathBuf {
    let body = format!(
        "echo \"{} $*\" >> '{}'\nexit {}\n",
        name,
        log.display(),
        code
    );
    write_script_tool(dir, name, &body)
}

/// Write an executable shell script with the given body.
pub fn write_script_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
