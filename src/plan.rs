use std::fmt;
use std::path::PathBuf;

use crate::distro::Codename;
use crate::error::Result;
use crate::scan::{self, HookPhase};

/// Everything one run will execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub codename: Codename,
    pub prehooks: Vec<PathBuf>,
    pub packages: Vec<String>,
    pub backport_packages: Vec<String>,
    pub posthooks: Vec<PathBuf>,
}

impl InstallPlan {
    /// A plan with nothing to run.
    pub fn new(codename: Codename) -> Self {
        Self {
            codename,
            prehooks: Vec::new(),
            packages: Vec::new(),
            backport_packages: Vec::new(),
            posthooks: Vec::new(),
        }
    }

    /// Scan `roots` for files applying to `codename`.
    ///
    /// Roots must already be canonical (see [`scan::canonical_roots`]).
    pub fn discover(roots: &[PathBuf], codename: &Codename) -> Result<Self> {
        Ok(Self {
            codename: codename.clone(),
            prehooks: scan::hooks(roots, codename, HookPhase::Pre),
            packages: scan::packages(roots, codename, false)?,
            backport_packages: scan::packages(roots, codename, true)?,
            posthooks: scan::hooks(roots, codename, HookPhase::Post),
        })
    }

    pub fn has_packages(&self) -> bool {
        !self.packages.is_empty() || !self.backport_packages.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_packages() && self.prehooks.is_empty() && self.posthooks.is_empty()
    }
}

impl fmt::Display for InstallPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "  (nothing to do)");
        }

        write_hooks(f, "Pre-package hooks", &self.prehooks)?;
        if !self.packages.is_empty() {
            writeln!(f, "  Packages: {}", self.packages.join(" "))?;
        }
        if !self.backport_packages.is_empty() {
            writeln!(
                f,
                "  Packages ({}): {}",
                self.codename.backports_suite(),
                self.backport_packages.join(" ")
            )?;
        }
        write_hooks(f, "Post-package hooks", &self.posthooks)
    }
}

fn write_hooks(f: &mut fmt::Formatter<'_>, label: &str, hooks: &[PathBuf]) -> fmt::Result {
    if hooks.is_empty() {
        return Ok(());
    }
    writeln!(f, "  {}:", label)?;
    for hook in hooks {
        writeln!(f, "    {}", hook.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discover_fills_every_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let deps = dir.path().join("deps");
        fs::create_dir_all(deps.join("dev")).unwrap();
        fs::create_dir_all(deps.join("runtime")).unwrap();
        fs::write(deps.join("dev/common.pkglist"), "git\n# editor\nvim\n").unwrap();
        fs::write(deps.join("dev/bookworm.pkglist"), "clang\n").unwrap();
        fs::write(deps.join("dev/bookworm-backports.pkglist"), "meson\n").unwrap();
        fs::write(deps.join("dev/bookworm.prepkg.sh"), "").unwrap();
        fs::write(deps.join("dev/bookworm.postpkg.py"), "").unwrap();
        fs::write(deps.join("runtime/bookworm.pkglist"), "libssl3\n").unwrap();

        let roots = scan::canonical_roots(&[deps]).unwrap();
        let plan = InstallPlan::discover(&roots, &Codename::new("bookworm")).unwrap();

        assert_eq!(plan.packages, vec!["git", "vim", "clang", "libssl3"]);
        assert_eq!(plan.backport_packages, vec!["meson"]);
        assert_eq!(plan.prehooks, vec![roots[0].join("dev/bookworm.prepkg.sh")]);
        assert_eq!(plan.posthooks, vec![roots[0].join("dev/bookworm.postpkg.py")]);
        assert!(plan.has_packages());
    }

    #[test]
    fn empty_plan() {
        let plan = InstallPlan::new(Codename::new("bookworm"));
        assert!(plan.is_empty());
        assert!(!plan.has_packages());
        assert_eq!(plan.to_string(), "  (nothing to do)\n");
    }

    #[test]
    fn hooks_only_plan_has_no_packages() {
        let plan = InstallPlan {
            prehooks: vec![PathBuf::from("/deps/common.prepkg.sh")],
            ..InstallPlan::new(Codename::new("bookworm"))
        };
        assert!(!plan.is_empty());
        assert!(!plan.has_packages());
    }

    #[test]
    fn display_lists_sections() {
        let plan = InstallPlan {
            codename: Codename::new("bookworm"),
            prehooks: vec![PathBuf::from("/deps/common.prepkg.sh")],
            packages: vec!["a".into(), "b".into()],
            backport_packages: vec!["d".into()],
            posthooks: vec![],
        };
        let text = plan.to_string();
        assert!(text.contains("Pre-package hooks:\n    /deps/common.prepkg.sh"));
        assert!(text.contains("Packages: a b"));
        assert!(text.contains("Packages (bookworm-backports): d"));
        assert!(!text.contains("Post-package hooks"));
    }
}
