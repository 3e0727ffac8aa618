//! Discovery of pkglist files and hook executables under search roots.
//!
//! Ordering is deterministic: roots in the order given, then for each root
//! every `common.*` match before every `<codename>.*` match, each group in
//! depth-first order with directory entries sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::distro::Codename;
use crate::error::{Error, Result};

const COMMON: &str = "common";

/// When a hook runs relative to the package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Pre,
    Post,
}

impl HookPhase {
    fn marker(&self) -> &'static str {
        match self {
            HookPhase::Pre => "prepkg",
            HookPhase::Post => "postpkg",
        }
    }
}

/// Canonicalize each root, failing on anything that is not a directory.
pub fn canonical_roots(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    roots
        .iter()
        .map(|root| match fs::canonicalize(root) {
            Ok(path) if path.is_dir() => Ok(path),
            _ => Err(Error::InvalidSearchRoot { path: root.clone() }),
        })
        .collect()
}

/// Pkglist files for one pass, in concatenation order.
///
/// The regular pass takes `common.pkglist` and `<codename>.pkglist`; the
/// backports pass takes only `<codename>-backports.pkglist`.
pub fn package_lists(roots: &[PathBuf], codename: &Codename, backports: bool) -> Vec<PathBuf> {
    let names = if backports {
        vec![format!("{}.pkglist", codename.backports_suite())]
    } else {
        vec![
            format!("{}.pkglist", COMMON),
            format!("{}.pkglist", codename),
        ]
    };

    roots
        .iter()
        .flat_map(|root| {
            names
                .iter()
                .flat_map(move |name| find_files(root, |file| file == name.as_str()))
        })
        .collect()
}

/// Package names from every list of one pass, in order.
pub fn packages(roots: &[PathBuf], codename: &Codename, backports: bool) -> Result<Vec<String>> {
    let mut packages = Vec::new();
    for list in package_lists(roots, codename, backports) {
        packages.extend(read_package_list(&list)?);
    }
    Ok(packages)
}

/// Read one pkglist, dropping blank lines and `#` comments.
pub fn read_package_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let packages: Vec<String> = parse_package_list(&content);
    tracing::debug!("{}: {} package(s)", path.display(), packages.len());

    Ok(packages)
}

fn parse_package_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Hook executables for a phase, matching `common.<phase>.*` then
/// `<codename>.<phase>.*`. Executability is not checked here.
pub fn hooks(roots: &[PathBuf], codename: &Codename, phase: HookPhase) -> Vec<PathBuf> {
    let prefixes = [
        format!("{}.{}.", COMMON, phase.marker()),
        format!("{}.{}.", codename, phase.marker()),
    ];

    roots
        .iter()
        .flat_map(|root| {
            prefixes
                .iter()
                .flat_map(move |prefix| find_files(root, |file| file.starts_with(prefix.as_str())))
        })
        .collect()
}

fn find_files<F>(root: &Path, matches: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> bool,
{
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| entry.file_name().to_str().is_some_and(&matches))
        .map(|entry| {
            tracing::debug!("matched {}", entry.path().display());
            entry.into_path()
        })
        .collect()
}
