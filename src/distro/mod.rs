pub mod debian;
pub mod ubuntu;

use std::fmt;

use crate::error::{Error, Result};
use crate::os_release::OsRelease;

/// Distributions whose codenames we can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroKind {
    Debian,
    Ubuntu,
}

impl DistroKind {
    /// Match an os-release `ID` value
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "debian" => Some(DistroKind::Debian),
            "ubuntu" => Some(DistroKind::Ubuntu),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DistroKind::Debian => "Debian",
            DistroKind::Ubuntu => "Ubuntu",
        }
    }
}

/// Release nickname used to select `<codename>.*` files, e.g. "bookworm"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codename(String);

impl Codename {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Repository suite for backports, e.g. "bookworm-backports"
    pub fn backports_suite(&self) -> String {
        format!("{}-backports", self.0)
    }
}

impl fmt::Display for Codename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map the system identity to a release codename.
///
/// `debian_fallback_version` stands in for `VERSION_ID` on Debian
/// testing/unstable, which do not set it. Ubuntu has no such fallback.
pub fn resolve_codename(os: &OsRelease, debian_fallback_version: &str) -> Result<Codename> {
    let id = os.id().ok_or_else(|| unsupported("Unable to find Linux distribution"))?;

    let kind = DistroKind::from_id(id)
        .ok_or_else(|| unsupported(format!("Unable to find Linux distribution (ID={})", id)))?;

    let name = match kind {
        DistroKind::Debian => {
            let version = os.version_id().unwrap_or(debian_fallback_version);
            debian::codename(version).ok_or_else(|| unknown_version(kind, version))?
        }
        DistroKind::Ubuntu => {
            let version = os.version_id().ok_or_else(|| {
                unsupported("Unable to find Ubuntu distro codename (no VERSION_ID)")
            })?;
            ubuntu::codename(version).ok_or_else(|| unknown_version(kind, version))?
        }
    };

    tracing::debug!("{} {:?} -> {}", kind.name(), os.version_id(), name);

    Ok(Codename::new(name))
}

fn unsupported(reason: impl Into<String>) -> Error {
    Error::UnsupportedDistribution {
        reason: reason.into(),
    }
}

fn unknown_version(kind: DistroKind, version: &str) -> Error {
    unsupported(format!(
        "Unable to find {} distro codename (VERSION_ID={})",
        kind.name(),
        version
    ))
}
