//! Minimum deployment targets of the generated package
use serde::{Deserialize, Serialize};

use crate::manifest::PlatformName;

/// [`PlatformAttribute`] - A minimum deployment version for a platform
/// * `name` - The platform, spelled as on the manifest (`iOS`, `macOS`...). The lower
/// case spelling is accepted too
/// * `version` - The minimum version supported
///
/// ### Tests
///
/// ```rust
/// use spm_gen::config_file::platform::PlatformAttribute;
/// use spm_gen::manifest::PlatformName;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[platforms]]
///     name = 'watchos'
///     version = '9.0'
///"#;
///
/// let config: PlatformAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the spm-gen toml file");
///
/// assert_eq!(config.name, PlatformName::WatchOS);
/// assert_eq!(config.version, "9.0");
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
///
/// For a test over a real example, please look at the
/// [`spm_gen::config_file::SpmGenConfigFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct PlatformAttribute<'a> {
    pub name: PlatformName,
    pub version: &'a str,
}
