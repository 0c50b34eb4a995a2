use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Worth It";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Schema of the constant tables this build understands. Bump the minor
/// version for additive changes, the major one when fields change meaning.
pub const TABLE_SCHEMA_VERSION: Version = Version::new(1, 0, 0);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

pub fn parse_version_str(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| VersionError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, VersionError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// A table file is usable when it shares our major version and was not
/// written by a newer minor release.
pub fn is_schema_compatible(found: &Version) -> bool {
    found.major == TABLE_SCHEMA_VERSION.major && found.minor <= TABLE_SCHEMA_VERSION.minor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_with_prefix_parse() {
        assert_eq!(parse_version_str("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version_str(" V0.4.0\n").unwrap(), Version::new(0, 4, 0));
        assert!(matches!(
            parse_version_str("release-7"),
            Err(VersionError::InvalidVersion(_))
        ));
    }

    #[test]
    fn label_always_has_a_leading_v() {
        let label = version_label();
        assert!(label.starts_with('v') || label.starts_with('V'), "{label}");
    }

    #[test]
    fn current_version_parses() {
        assert!(current_version().is_ok());
    }

    #[test]
    fn schema_compatibility() {
        assert!(is_schema_compatible(&TABLE_SCHEMA_VERSION));
        assert!(is_schema_compatible(&Version::new(1, 0, 7)));
        assert!(!is_schema_compatible(&Version::new(1, 1, 0)));
        assert!(!is_schema_compatible(&Version::new(2, 0, 0)));
        assert!(!is_schema_compatible(&Version::new(0, 9, 0)));
    }
}
