use clap::Parser;
use std::path::PathBuf;

use crate::config;

const AFTER_HELP: &str = "\
Each folder is searched recursively for files with the following patterns:
  * common.pkglist
  * common.prepkg.*
  * common.postpkg.*
  * <codename>.pkglist
  * <codename>-backports.pkglist
  * <codename>.prepkg.*
  * <codename>.postpkg.*

<codename> is the distribution's codename, e.g. 'buster', 'bookworm' or
'focal', detected from /etc/os-release.

The *.pkglist files contain one package name per line and are concatenated
before calling the package manager. Lines starting with '#' are comments.
The *.prepkg.* and *.postpkg.* files must be executable; they run before and
after the package manager respectively. Any failure aborts the run.

Example:

  $ tree deps
  deps
  |-- dev
  |   |-- bullseye.pkglist
  |   |-- buster.pkglist
  |   |-- buster.postpkg.py
  |   |-- buster.prepkg.sh
  |   |-- buster-backports.pkglist
  |   |-- common.pkglist
  |-- runtime
      |-- buster.pkglist

Pass 'deps' to install everything, or only 'deps/runtime' for the runtime
dependencies.";

/// Install OS package dependencies declared in pkglist files.
#[derive(Debug, Parser)]
#[command(name = "depinstall")]
#[command(author, version, about, long_about = None)]
#[command(after_long_help = AFTER_HELP)]
pub struct Cli {
    /// Folders to search for dependency lists and hooks
    #[arg(required = true, value_name = "FOLDER")]
    pub folders: Vec<PathBuf>,

    /// os-release file used to detect the distribution
    #[arg(long, env = "DEPINSTALL_OS_RELEASE", default_value = config::OS_RELEASE)]
    pub os_release: PathBuf,

    /// Debian VERSION_ID to assume when the system does not report one
    #[arg(
        long,
        env = "DEPINSTALL_DEBIAN_FALLBACK_VERSION",
        default_value = config::DEBIAN_FALLBACK_VERSION
    )]
    pub debian_fallback_version: String,

    /// Package manager program
    #[arg(long, env = "DEPINSTALL_APT", default_value = config::APT_PROGRAM)]
    pub apt: String,

    /// Show what would be done without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
