//! Sequential, fail-fast execution of an [`InstallPlan`].

use std::fmt;
use std::path::PathBuf;

use crate::cmd;
use crate::color::{bold, cyan};
use crate::error::Result;
use crate::pkgmgr::PackageManager;
use crate::plan::InstallPlan;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreHooks,
    UpdateDb,
    Install,
    InstallBackports,
    PostHooks,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PreHooks => "pre-package hooks",
            Stage::UpdateDb => "database update",
            Stage::Install => "install",
            Stage::InstallBackports => "backports install",
            Stage::PostHooks => "post-package hooks",
        };
        f.write_str(name)
    }
}

pub struct Driver<'a> {
    pkgmgr: &'a dyn PackageManager,
}

impl<'a> Driver<'a> {
    pub fn new(pkgmgr: &'a dyn PackageManager) -> Self {
        Self { pkgmgr }
    }

    /// Run every non-empty stage, stopping at the first failure.
    ///
    /// Returns the stages that ran to completion.
    pub fn run(&self, plan: &InstallPlan) -> Result<Vec<Stage>> {
        let mut completed = Vec::new();

        if !plan.prehooks.is_empty() {
            println!("{}", cyan("running pre-packages hooks"));
            run_hooks(&plan.prehooks)?;
            completed.push(Stage::PreHooks);
        }

        if plan.has_packages() {
            println!("{}", cyan(format!("updating {} database", self.pkgmgr.name())));
            self.pkgmgr.update()?;
            completed.push(Stage::UpdateDb);
        }

        if !plan.packages.is_empty() {
            println!(
                "{}{}",
                cyan("installing packages: "),
                plan.packages.join(" ")
            );
            self.pkgmgr.install(&plan.packages)?;
            completed.push(Stage::Install);
        }

        if !plan.backport_packages.is_empty() {
            println!(
                "{}{}",
                cyan("installing packages from backports: "),
                plan.backport_packages.join(" ")
            );
            self.pkgmgr
                .install_from_suite(&plan.codename.backports_suite(), &plan.backport_packages)?;
            completed.push(Stage::InstallBackports);
        }

        if !plan.posthooks.is_empty() {
            println!("{}", cyan("running post-packages hooks"));
            run_hooks(&plan.posthooks)?;
            completed.push(Stage::PostHooks);
        }

        Ok(completed)
    }
}

fn run_hooks(hooks: &[PathBuf]) -> Result<()> {
    for hook in hooks {
        println!("  {} {}", bold(">"), hook.display());
        cmd::run_captured(hook, Vec::<&str>::new(), &[])?;
    }
    Ok(())
}
