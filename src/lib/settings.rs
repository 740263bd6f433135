use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "npy-fixtures";

/// Value of the environment variable `key`, or `default` if unset.
pub fn key_or_default(key: &str, default: &str) -> String {
    key_or_none(key).unwrap_or_else(|| default.to_owned())
}

pub fn key_or_none(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// "true" and "1" turn a flag on, "false" and "0" off; anything else
/// keeps the fallback.
pub fn parse_flag(value: Option<&str>, fallback: bool) -> bool {
    match value {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => fallback,
    }
}

/// output_dir: folder the .npy files are written to, created if missing.
/// include_u8: also write the 8 byte unsigned fixture.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub include_u8: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            include_u8: false,
        }
    }
}

impl Settings {
    /// Reads `NPY_FIXTURES_DIR` and `NPY_FIXTURES_INCLUDE_U8`.
    pub fn from_env() -> Self {
        Settings {
            output_dir: PathBuf::from(key_or_default("NPY_FIXTURES_DIR", DEFAULT_OUTPUT_DIR)),
            include_u8: parse_flag(key_or_none("NPY_FIXTURES_INCLUDE_U8").as_deref(), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default() {
        env::remove_var("NPY_FIXTURES_TEST_UNSET");
        assert_eq!(key_or_default("NPY_FIXTURES_TEST_UNSET", "npy-fixtures"), "npy-fixtures");
        assert_eq!(key_or_none("NPY_FIXTURES_TEST_UNSET"), None);

        env::set_var("NPY_FIXTURES_TEST_SET", "out");
        assert_eq!(key_or_default("NPY_FIXTURES_TEST_SET", "npy-fixtures"), "out");
        assert_eq!(key_or_none("NPY_FIXTURES_TEST_SET"), Some("out".to_owned()));
    }

    #[test]
    fn should_parse_flags() {
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some("1"), false));
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some("0"), true));
        assert!(parse_flag(Some("yes"), true));
        assert!(!parse_flag(None, false));
    }

    #[test]
    fn should_default_to_original_catalog() {
        let settings = Settings::default();
        assert_eq!(settings.output_dir, PathBuf::from("npy-fixtures"));
        assert!(!settings.include_u8);
    }
}
