//! Discover OS package dependency declarations in a directory tree and
//! install them with the system package manager, running pre/post hooks.

pub mod cli;
pub mod cmd;
pub mod color;
pub mod config;
pub mod distro;
pub mod driver;
pub mod error;
pub mod os_release;
pub mod pkgmgr;
pub mod plan;
pub mod scan;

pub use error::{Error, Result};
