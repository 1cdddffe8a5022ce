// src/trigger/mod.rs

//! Refresh triggers for post-installation desktop integration
//!
//! A trigger is one external tool invocation that rebuilds a desktop index
//! under the install data directory. Two are built in and always run in
//! this order:
//!
//! - `icon-cache`: `gtk-update-icon-cache -qtf <datadir>/icons/hicolor`
//! - `desktop-database`: `update-desktop-database -q <datadir>/applications`
//!
//! Execution is best-effort. A missing tool is skipped, a failing tool is
//! logged and counted, and nothing is ever propagated to the installer.

pub mod runner;

pub use runner::{CommandRunner, Invocation, RunOutput, SystemRunner};

use crate::error::Error;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default timeout for each refresh tool (2 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default icon theme cache tool
pub const ICON_CACHE_TOOL: &str = "gtk-update-icon-cache";

/// Default desktop entry database tool
pub const DESKTOP_DATABASE_TOOL: &str = "update-desktop-database";

/// One refresh action: a tool run against a directory below the data dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTrigger {
    pub name: String,
    pub description: String,
    /// Progress line printed to stdout before the tool runs
    pub notice: String,
    pub program: String,
    /// Flags passed ahead of the target directory
    pub args: Vec<String>,
    /// Target directory, relative to the data dir
    pub subdir: String,
}

impl RefreshTrigger {
    /// Icon theme cache refresh for the hicolor theme
    pub fn icon_cache(program: impl Into<String>) -> Self {
        Self {
            name: "icon-cache".to_string(),
            description: "Update GTK icon cache".to_string(),
            notice: "Updating icon cache...".to_string(),
            program: program.into(),
            args: vec!["-qtf".to_string()],
            subdir: "icons/hicolor".to_string(),
        }
    }

    /// Desktop entry database refresh
    pub fn desktop_database(program: impl Into<String>) -> Self {
        Self {
            name: "desktop-database".to_string(),
            description: "Update desktop entry database".to_string(),
            notice: "Updating desktop database...".to_string(),
            program: program.into(),
            args: vec!["-q".to_string()],
            subdir: "applications".to_string(),
        }
    }

    /// Build the command line for this trigger against `datadir`
    ///
    /// The directory is joined as-is: an empty `datadir` yields a relative
    /// target and non-UTF-8 bytes are preserved.
    pub fn command_for(&self, datadir: &Path) -> Invocation {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push(datadir.join(&self.subdir).into_os_string());
        Invocation::new(self.program.clone(), args)
    }
}

/// Built-in triggers in execution order
pub fn builtin_triggers(
    icon_cache_tool: &str,
    desktop_database_tool: &str,
) -> Vec<RefreshTrigger> {
    vec![
        RefreshTrigger::icon_cache(icon_cache_tool),
        RefreshTrigger::desktop_database(desktop_database_tool),
    ]
}

/// Trigger executor runs refresh triggers through a [`CommandRunner`]
pub struct TriggerExecutor<'a, R: CommandRunner> {
    runner: &'a R,
    timeout: Duration,
    dry_run: bool,
}

impl<'a, R: CommandRunner> TriggerExecutor<'a, R> {
    /// Create a new trigger executor
    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            timeout: DEFAULT_TIMEOUT,
            dry_run: false,
        }
    }

    /// Set custom timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable dry-run mode (don't actually execute triggers)
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run every trigger against `datadir`, one after the other
    pub fn execute(&self, triggers: &[RefreshTrigger], datadir: &Path) -> TriggerResults {
        info!(
            "Executing {} trigger(s) (datadir: {})",
            triggers.len(),
            datadir.display()
        );

        let mut results = TriggerResults::new();

        for trigger in triggers {
            println!("{}", trigger.notice);
            let invocation = trigger.command_for(datadir);

            if self.dry_run {
                println!("  [DRY-RUN] Would run: {}", invocation);
                results.skipped += 1;
                continue;
            }

            if !self.runner.handler_exists(&invocation.program) {
                info!(
                    "  [SKIP] Trigger '{}': handler '{}' not found",
                    trigger.name, invocation.program
                );
                results.skipped += 1;
                continue;
            }

            info!(
                "  Running trigger: {} - {} ({})",
                trigger.name, trigger.description, invocation
            );

            match self.run_one(trigger, &invocation) {
                Ok(()) => {
                    info!("  [OK] Trigger '{}' completed", trigger.name);
                    results.succeeded += 1;
                }
                Err(e) => {
                    warn!("  [FAIL] Trigger '{}': {}", trigger.name, e);
                    results.failed += 1;
                    results.errors.push(format!("{}: {}", trigger.name, e));
                }
            }
        }

        results
    }

    fn run_one(&self, trigger: &RefreshTrigger, invocation: &Invocation) -> Result<(), Error> {
        let output = self.runner.run(invocation, self.timeout)?;

        for line in output.stdout.lines() {
            debug!("[{}] {}", trigger.name, line);
        }
        for line in output.stderr.lines() {
            warn!("[{}] {}", trigger.name, line);
        }

        if output.success() {
            Ok(())
        } else {
            Err(Error::Failed {
                program: invocation.program.clone(),
                code: output.status_code.unwrap_or(-1),
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}

/// Results of trigger execution
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TriggerResults {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl TriggerResults {
    fn new() -> Self {
        Self::default()
    }

    /// Check if all triggers succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Total triggers processed
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }
}
