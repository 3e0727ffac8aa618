use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Run a program to completion with captured output.
///
/// Output is discarded on success and attached to the error otherwise.
/// Stdin is inherited. `envs` is added to the child environment only.
pub fn run_captured<P, I, S>(program: P, args: I, envs: &[(&str, &str)]) -> Result<()>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let args: Vec<_> = args.into_iter().collect();
    let command = display_command(program, &args);

    tracing::debug!("running {}", command);

    let output = Command::new(program)
        .args(&args)
        .envs(envs.iter().copied())
        .stdin(Stdio::inherit())
        .output()
        .map_err(|source| match source.kind() {
            ErrorKind::PermissionDenied => Error::HookLaunchDenied {
                command: command.clone(),
            },
            _ => Error::LaunchFailed {
                command: command.clone(),
                source,
            },
        })?;

    if !output.status.success() {
        return Err(Error::SubprocessFailed {
            command,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

fn display_command<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(|a| a.as_ref()))
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
