// src/notifier.rs

//! Post-install notifier: decide, then refresh

use crate::hook::{decide, HookDecision, SkipReason};
use crate::trigger::{
    builtin_triggers, CommandRunner, TriggerExecutor, TriggerResults, DEFAULT_TIMEOUT,
    DESKTOP_DATABASE_TOOL, ICON_CACHE_TOOL,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Everything one hook invocation needs
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Install data directory, e.g. `/usr/share`
    pub datadir: Option<PathBuf>,
    /// Value of `DESTDIR`, if set
    pub destdir: Option<String>,
    pub dry_run: bool,
    pub timeout: Duration,
    pub icon_cache_tool: String,
    pub desktop_database_tool: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            datadir: None,
            destdir: None,
            dry_run: false,
            timeout: DEFAULT_TIMEOUT,
            icon_cache_tool: ICON_CACHE_TOOL.to_string(),
            desktop_database_tool: DESKTOP_DATABASE_TOOL.to_string(),
        }
    }
}

/// What a hook invocation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookReport {
    Skipped(SkipReason),
    Refreshed(TriggerResults),
}

/// Run the post-install hook
///
/// Never fails: tool problems are logged and folded into the report.
pub fn run_hook<R: CommandRunner>(config: &HookConfig, runner: &R) -> HookReport {
    match decide(config.destdir.as_deref(), config.datadir.as_deref()) {
        HookDecision::Skip(reason) => {
            info!("Skipping desktop cache refresh: {}", reason);
            HookReport::Skipped(reason)
        }
        HookDecision::Refresh { datadir } => {
            let triggers =
                builtin_triggers(&config.icon_cache_tool, &config.desktop_database_tool);
            let results = TriggerExecutor::new(runner)
                .with_timeout(config.timeout)
                .dry_run(config.dry_run)
                .execute(&triggers, &datadir);
            HookReport::Refreshed(results)
        }
    }
}
