// src/hook.rs

//! Live-system vs. staged-install decision
//!
//! Packaging tools that build archives install into a redirected root and
//! announce it through `DESTDIR`. Refreshing the desktop caches only makes
//! sense on the live system, so the hook refreshes when `DESTDIR` is empty
//! and a data directory was given, and skips otherwise.

use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming the staged install root
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Why the hook decided not to refresh anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Files are being staged under an alternate root
    StagedInstall(String),
    /// No data directory argument was supplied
    NoDataDir,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::StagedInstall(root) => {
                write!(f, "staged install ({}={})", DESTDIR_VAR, root)
            }
            SkipReason::NoDataDir => write!(f, "no data directory given"),
        }
    }
}

/// Outcome of the entry decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    Skip(SkipReason),
    Refresh { datadir: PathBuf },
}

impl HookDecision {
    pub fn is_refresh(&self) -> bool {
        matches!(self, HookDecision::Refresh { .. })
    }
}

/// Decide whether to refresh the desktop caches
///
/// An empty `destdir` counts as unset. The value is not checked against the
/// filesystem: any non-empty string means a staged install.
pub fn decide(destdir: Option<&str>, datadir: Option<&Path>) -> HookDecision {
    if let Some(root) = destdir.filter(|d| !d.is_empty()) {
        return HookDecision::Skip(SkipReason::StagedInstall(root.to_string()));
    }

    match datadir {
        Some(dir) => HookDecision::Refresh {
            datadir: dir.to_path_buf(),
        },
        None => HookDecision::Skip(SkipReason::NoDataDir),
    }
}
