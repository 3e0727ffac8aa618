use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Parsed `KEY=VALUE` pairs from an os-release file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    fields: HashMap<String, String>,
}

impl OsRelease {
    /// Load from `path`. A missing file yields an empty mapping.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found, assuming empty", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Lines that are not `KEY=VALUE` (uppercase/underscore keys) are skipped.
    pub fn parse(content: &str) -> Self {
        let fields = content.lines().filter_map(parse_line).collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    pub fn version_id(&self) -> Option<&str> {
        self.get("VERSION_ID")
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        return None;
    }

    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);

    Some((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKWORM: &str = r#"PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
NAME="Debian GNU/Linux"
VERSION_ID="12"
VERSION="12 (bookworm)"
VERSION_CODENAME=bookworm
ID=debian
HOME_URL="https://www.debian.org/"
"#;

    #[test]
    fn parses_quoted_and_bare_values() {
        let os = OsRelease::parse(BOOKWORM);
        assert_eq!(os.id(), Some("debian"));
        assert_eq!(os.version_id(), Some("12"));
        assert_eq!(os.get("NAME"), Some("Debian GNU/Linux"));
        assert_eq!(os.get("HOME_URL"), Some("https://www.debian.org/"));
    }

    #[test]
    fn skips_malformed_lines() {
        let os = OsRelease::parse("# comment\nlower=case\nNO_EQUALS\n\nID=ubuntu\n");
        assert_eq!(os.id(), Some("ubuntu"));
        assert_eq!(os.get("lower"), None);
        assert_eq!(os.get("NO_EQUALS"), None);
    }

    #[test]
    fn keys_with_digits_are_skipped() {
        let os = OsRelease::parse("X1=foo\nID=debian\n");
        assert_eq!(os.get("X1"), None);
        assert_eq!(os.id(), Some("debian"));
    }

    #[test]
    fn half_quoted_value_is_stripped() {
        let os = OsRelease::parse("NAME=\"Debian\nVERSION_ID=11\"\n");
        assert_eq!(os.get("NAME"), Some("Debian"));
        assert_eq!(os.version_id(), Some("11"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let os = OsRelease::load(&dir.path().join("os-release")).unwrap();
        assert_eq!(os, OsRelease::default());
        assert_eq!(os.id(), None);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("os-release");
        fs::write(&path, BOOKWORM).unwrap();
        let os = OsRelease::load(&path).unwrap();
        assert_eq!(os.version_id(), Some("12"));
    }
}
