mod apt;

pub use apt::Apt;

use crate::error::Result;

/// Package manager seam used by the install driver
pub trait PackageManager: Send + Sync {
    /// Name of the package manager (e.g., "apt")
    fn name(&self) -> &str;

    /// Refresh the package database
    fn update(&self) -> Result<()>;

    /// Install packages non-interactively in a single invocation
    fn install(&self, packages: &[String]) -> Result<()>;

    /// Install packages preferring the given repository suite
    /// (e.g. "bookworm-backports")
    fn install_from_suite(&self, suite: &str, packages: &[String]) -> Result<()>;
}
