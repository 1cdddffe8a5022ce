// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("desktop-postinstall")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Refresh the icon cache and desktop database after install")
        .long_about(
            "Runs gtk-update-icon-cache and update-desktop-database against DATADIR. \
             Does nothing when DESTDIR is set to a non-empty value or when DATADIR \
             is omitted. Always exits successfully.",
        )
        .arg(
            Arg::new("datadir")
                .value_name("DATADIR")
                .help("Install data directory (e.g. /usr/share); nothing runs without it"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Show what would run without invoking any tool"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .default_value("120")
                .help("Timeout for each tool in seconds"),
        )
        .arg(
            Arg::new("icon_cache_tool")
                .long("icon-cache-tool")
                .value_name("PROGRAM")
                .default_value("gtk-update-icon-cache")
                .help("Icon theme cache tool"),
        )
        .arg(
            Arg::new("desktop_database_tool")
                .long("desktop-database-tool")
                .value_name("PROGRAM")
                .default_value("update-desktop-database")
                .help("Desktop entry database tool"),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("desktop-postinstall.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
