// src/lib.rs

//! Desktop post-install hook
//!
//! Refreshes the hicolor icon theme cache and the desktop entry database
//! after an application is installed, so its icon and launcher show up
//! without a logout.
//!
//! # Behaviour
//!
//! - Staged installs (`DESTDIR` set and non-empty) are left alone
//! - Without a data directory argument nothing runs
//! - Tool failures are logged, never reported as an install failure

mod error;
pub mod hook;
pub mod notifier;
pub mod trigger;

pub use error::{Error, Result};
pub use hook::{decide, HookDecision, SkipReason, DESTDIR_VAR};
pub use notifier::{run_hook, HookConfig, HookReport};
pub use trigger::{
    CommandRunner, Invocation, RefreshTrigger, RunOutput, SystemRunner, TriggerExecutor,
    TriggerResults,
};
