/// Ubuntu `VERSION_ID` to release codename.
pub const CODENAMES: &[(&str, &str)] = &[("20.04", "focal")];

pub fn codename(version_id: &str) -> Option<&'static str> {
    CODENAMES
        .iter()
        .find(|(version, _)| *version == version_id)
        .map(|(_, name)| *name)
}
