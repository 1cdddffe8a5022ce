// src/cli.rs
//! CLI definitions for the desktop post-install hook

use clap::Parser;
use desktop_postinstall::trigger::{DESKTOP_DATABASE_TOOL, ICON_CACHE_TOOL};
use desktop_postinstall::HookConfig;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "desktop-postinstall")]
#[command(author, version)]
#[command(about = "Refresh the icon cache and desktop database after install", long_about = None)]
pub struct Cli {
    /// Install data directory (e.g. /usr/share); nothing runs without it
    ///
    /// Taken verbatim: an empty value or one starting with '-' still counts.
    #[arg(allow_hyphen_values = true)]
    pub datadir: Option<OsString>,

    /// Additional arguments passed by the installer (ignored)
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,

    /// Show what would run without invoking any tool
    #[arg(long)]
    pub dry_run: bool,

    /// Timeout for each tool in seconds
    #[arg(long, default_value = "120")]
    pub timeout: u64,

    /// Icon theme cache tool
    #[arg(long, default_value = ICON_CACHE_TOOL)]
    pub icon_cache_tool: String,

    /// Desktop entry database tool
    #[arg(long, default_value = DESKTOP_DATABASE_TOOL)]
    pub desktop_database_tool: String,
}

impl Cli {
    /// Combine the parsed arguments with the `DESTDIR` value
    pub fn into_config(self, destdir: Option<String>) -> HookConfig {
        HookConfig {
            datadir: self.datadir.map(PathBuf::from),
            destdir,
            dry_run: self.dry_run,
            timeout: Duration::from_secs(self.timeout),
            icon_cache_tool: self.icon_cache_tool,
            desktop_database_tool: self.desktop_database_tool,
        }
    }
}
