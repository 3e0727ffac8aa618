/// Debian `VERSION_ID` to release codename.
pub const CODENAMES: &[(&str, &str)] = &[
    ("9", "stretch"),
    ("10", "buster"),
    ("11", "bullseye"),
    ("12", "bookworm"),
];

/// VERSION_ID assumed when testing/unstable omits it.
pub const DEFAULT_FALLBACK_VERSION: &str = "12";

pub fn codename(version_id: &str) -> Option<&'static str> {
    CODENAMES
        .iter()
        .find(|(version, _)| *version == version_id)
        .map(|(_, name)| *name)
}
