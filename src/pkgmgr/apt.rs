use super::PackageManager;
use std::path::{Path, PathBuf};

use crate::cmd;
use crate::error::{Error, Result};

/// Environment applied to install invocations only
const NONINTERACTIVE: &[(&str, &str)] = &[("DEBIAN_FRONTEND", "noninteractive")];

/// Apt package manager (Debian, Ubuntu)
#[derive(Debug, Clone)]
pub struct Apt {
    program: String,
}

impl Apt {
    /// `program` is looked up in PATH unless it is a path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Paths are spawned as given so launch failures keep their cause;
    /// bare names go through a PATH lookup.
    fn resolve(&self) -> Result<PathBuf> {
        let program = Path::new(&self.program);
        if program.components().count() > 1 || program.is_absolute() {
            return Ok(program.to_path_buf());
        }

        which::which(&self.program).map_err(|_| Error::PackageManagerNotFound {
            program: self.program.clone(),
        })
    }

    fn install_args<'a>(suite: Option<&'a str>, packages: &'a [String]) -> Vec<&'a str> {
        let mut args = vec!["install"];
        if let Some(suite) = suite {
            args.extend(["-t", suite]);
        }
        args.push("-y");
        args.extend(packages.iter().map(String::as_str));
        args
    }
}

impl PackageManager for Apt {
    fn name(&self) -> &str {
        "apt"
    }

    fn update(&self) -> Result<()> {
        cmd::run_captured(self.resolve()?, ["update"], &[])
    }

    fn install(&self, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        cmd::run_captured(
            self.resolve()?,
            Self::install_args(None, packages),
            NONINTERACTIVE,
        )
    }

    fn install_from_suite(&self, suite: &str, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        cmd::run_captured(
            self.resolve()?,
            Self::install_args(Some(suite), packages),
            NONINTERACTIVE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn install_args_plain() {
        let packages = pkgs(&["git", "vim"]);
        assert_eq!(
            Apt::install_args(None, &packages),
            vec!["install", "-y", "git", "vim"]
        );
    }

    #[test]
    fn install_args_with_suite() {
        let packages = pkgs(&["meson"]);
        assert_eq!(
            Apt::install_args(Some("bookworm-backports"), &packages),
            vec!["install", "-t", "bookworm-backports", "-y", "meson"]
        );
    }

    #[test]
    fn missing_program_is_reported() {
        let apt = Apt::new("depinstall-no-such-apt");
        let err = apt.update().unwrap_err();
        assert!(matches!(
            err,
            Error::PackageManagerNotFound { program } if program == "depinstall-no-such-apt"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_program_is_launch_denied() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("apt");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();

        let apt = Apt::new(fake.to_string_lossy());
        let err = apt.update().unwrap_err();
        assert!(matches!(err, Error::HookLaunchDenied { .. }));
        assert!(err.to_string().contains("Is the file executable?"));
    }

    #[test]
    fn missing_path_is_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let apt = Apt::new(dir.path().join("apt").to_string_lossy());
        assert!(matches!(apt.update().unwrap_err(), Error::LaunchFailed { .. }));
    }

    #[test]
    fn empty_install_is_noop() {
        let apt = Apt::new("depinstall-no-such-apt");
        apt.install(&[]).unwrap();
        apt.install_from_suite("bookworm-backports", &[]).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn runs_program_with_noninteractive_env() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let fake = dir.path().join("apt");
        std::fs::write(
            &fake,
            format!(
                "#!/bin/sh\necho \"$*|$DEBIAN_FRONTEND\" >> '{}'\n",
                log.display()
            ),
        )
        .unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let apt = Apt::new(fake.to_string_lossy());
        apt.update().unwrap();
        apt.install(&pkgs(&["git"])).unwrap();
        apt.install_from_suite("bookworm-backports", &pkgs(&["meson"]))
            .unwrap();

        let calls = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("update|"));
        assert_eq!(lines[1], "install -y git|noninteractive");
        assert_eq!(
            lines[2],
            "install -t bookworm-backports -y meson|noninteractive"
        );
    }
}
