mod args;

pub use args::Cli;

use anyhow::{Context, Result};

use crate::color::{bold, cyan, green, red};
use crate::config::Config;
use crate::distro::resolve_codename;
use crate::driver::Driver;
use crate::error::{return_code, Error};
use crate::os_release::OsRelease;
use crate::pkgmgr::Apt;
use crate::plan::InstallPlan;
use crate::scan;

/// Detect the codename, discover the plan and execute it.
pub fn run(config: &Config) -> Result<()> {
    let os = OsRelease::load(&config.os_release)?;
    let codename = resolve_codename(&os, &config.debian_fallback_version)?;
    println!("{}{}", cyan("distro codename: "), codename);

    let roots = scan::canonical_roots(&config.folders)?;
    let plan = InstallPlan::discover(&roots, &codename)
        .context("Failed to collect dependency lists")?;

    if config.dry_run {
        println!("{}", cyan("dry run, would execute:"));
        print!("{}", plan);
        return Ok(());
    }

    if plan.is_empty() {
        println!("{}", green("nothing to install"));
        return Ok(());
    }

    if !nix::unistd::Uid::effective().is_root() {
        tracing::warn!("not running as root, the package manager will likely refuse to run");
    }

    let apt = Apt::new(config.apt_program.clone());
    let stages = Driver::new(&apt).run(&plan)?;
    tracing::debug!("completed stages: {:?}", stages);

    Ok(())
}

/// Print a failure report to stdout, including captured process output.
pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::SubprocessFailed {
            command,
            code,
            stdout,
            stderr,
        }) => {
            println!("{}", red("Error in subprocess, aborting."));
            println!("{}{}", bold("  cmd: "), command);
            println!("{}{}", bold("  return code: "), return_code(code));
            if !stdout.is_empty() {
                println!("{}", bold("  stdout:"));
                println!("{}", stdout);
            }
            if !stderr.is_empty() {
                println!("{}", bold("  stderr:"));
                println!("{}", stderr);
            }
        }
        Some(Error::HookLaunchDenied { command }) => {
            println!(
                "{}",
                red(format!(
                    "Permission denied while executing {}. {}",
                    command,
                    bold("Is the file executable?")
                ))
            );
        }
        _ => println!("{}", bold(red(format!("{:#}", err)))),
    }
}
