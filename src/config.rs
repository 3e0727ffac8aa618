use std::path::PathBuf;

use crate::cli::Cli;

/// Default os-release location
pub const OS_RELEASE: &str = "/etc/os-release";

/// Debian testing/unstable omit VERSION_ID; assume this release
pub const DEBIAN_FALLBACK_VERSION: &str = crate::distro::debian::DEFAULT_FALLBACK_VERSION;

/// Default package manager program
pub const APT_PROGRAM: &str = "apt";

/// Runtime configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search roots, in priority order
    pub folders: Vec<PathBuf>,
    pub os_release: PathBuf,
    pub debian_fallback_version: String,
    pub apt_program: String,
    /// Print the plan without running it
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            os_release: PathBuf::from(OS_RELEASE),
            debian_fallback_version: DEBIAN_FALLBACK_VERSION.to_string(),
            apt_program: APT_PROGRAM.to_string(),
            dry_run: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            folders: cli.folders,
            os_release: cli.os_release,
            debian_fallback_version: cli.debian_fallback_version,
            apt_program: cli.apt,
            dry_run: cli.dry_run,
        }
    }
}
