//! External packages that must be referenced by their repository instead of by the
//! local checkout found on the graph
use serde::{Deserialize, Serialize};

/// [`RemotePackageAttribute`] - A source control reference for an external package
/// * `url` - The location of the repository
/// * `from` - Accepts every version up to the next major one
/// * `exact` - Pins the package to a version
/// * `branch` - Follows a branch of the repository
///
/// Exactly one of `from`, `exact` and `branch` must be present. That's checked when the
/// settings of the run are assembled, not when the file is parsed
///
/// ### Tests
///
/// ```rust
/// use spm_gen::config_file::remote::RemotePackageAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[remote_packages.Kingfisher]
///     url = 'https://github.com/onevcat/Kingfisher.git'
///     exact = '7.10.0'
///"#;
///
/// let config: RemotePackageAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the spm-gen toml file");
///
/// assert_eq!(config.url, "https://github.com/onevcat/Kingfisher.git");
/// assert_eq!(config.exact, Some("7.10.0"));
/// assert_eq!(config.from, None);
/// assert_eq!(config.branch, None);
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct RemotePackageAttribute<'a> {
    pub url: &'a str,
    pub from: Option<&'a str>,
    pub exact: Option<&'a str>,
    pub branch: Option<&'a str>,
}
