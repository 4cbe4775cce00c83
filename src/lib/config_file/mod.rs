//! root file for the crate where the datastructures that holds the TOML
//! parsed data of the optional `spm-gen.toml` configuration file lives.
pub mod platform;
pub mod remote;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::settings::SourceLayout;

use self::{platform::PlatformAttribute, remote::RemotePackageAttribute};

/// ```rust
/// use spm_gen::config_file::SpmGenConfigFile;
/// use spm_gen::manifest::PlatformName;
/// use spm_gen::settings::SourceLayout;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     tools_version = '5.9'
///     bundle_extensions = ['xcassets', 'bundle']
///     ignored_dependencies = ['SwiftRex']
///     source_layout = 'sources'
///
///     [[platforms]]
///     name = 'iOS'
///     version = '15.0'
///
///     [remote_packages.Alamofire]
///     url = 'https://github.com/Alamofire/Alamofire.git'
///     from = '5.6.0'
/// "#;
///
/// let config: SpmGenConfigFile = toml::from_str(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the spm-gen toml file");
///
/// assert_eq!(config.tools_version, Some("5.9"));
/// assert_eq!(config.bundle_extensions, Some(vec!["xcassets", "bundle"]));
/// assert_eq!(config.ignored_dependencies, Some(vec!["SwiftRex"]));
/// assert_eq!(config.source_layout, Some(SourceLayout::Sources));
/// assert!(config.checkout_marker.is_none());
/// assert!(config.library_products.is_none());
///
/// let platforms = config.platforms.expect("platforms are declared on the mock");
/// assert_eq!(platforms[0].name, PlatformName::IOS);
/// assert_eq!(platforms[0].version, "15.0");
///
/// let remotes = config.remote_packages.expect("remote packages are declared on the mock");
/// let alamofire = remotes.get("Alamofire").expect("Remote package named
///     'Alamofire' not found on the configuration");
/// assert_eq!(alamofire.from, Some("5.6.0"));
/// assert!(alamofire.branch.is_none());
/// ```
/// The [`SpmGenConfigFile`] is the type that holds the whole hierarchy of the
/// configuration file attributes. Every one of them is optional, the defaults are
/// applied when the settings of a run are assembled
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpmGenConfigFile<'a> {
    pub tools_version: Option<&'a str>,
    #[serde(borrow)]
    pub platforms: Option<Vec<PlatformAttribute<'a>>>,
    pub checkout_marker: Option<&'a str>,
    #[serde(borrow)]
    pub bundle_extensions: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub regular_products: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub test_products: Option<Vec<&'a str>>,
    #[serde(borrow)]
    pub ignored_dependencies: Option<Vec<&'a str>>,
    pub library_products: Option<bool>,
    pub source_layout: Option<SourceLayout>,
    #[serde(borrow)]
    pub remote_packages: Option<IndexMap<&'a str, RemotePackageAttribute<'a>>>,
}

pub fn spm_gen_cfg_from_file(cfg: &'_ str) -> Result<SpmGenConfigFile<'_>, toml::de::Error> {
    <SpmGenConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::CONFIG_FILE_MOCK;
    use color_eyre::Result;

    #[test]
    fn test_empty_configuration_file() -> Result<()> {
        let config = spm_gen_cfg_from_file("")?;
        assert_eq!(config, SpmGenConfigFile::default());
        Ok(())
    }

    #[test]
    fn test_configuration_file_mock() -> Result<()> {
        let config = spm_gen_cfg_from_file(CONFIG_FILE_MOCK)?;

        assert_eq!(config.library_products, Some(true));
        assert_eq!(config.source_layout, Some(SourceLayout::Path));
        assert_eq!(config.platforms.map(|platforms| platforms.len()), Some(2));

        let remotes = config.remote_packages.unwrap_or_default();
        let names: Vec<&str> = remotes.keys().copied().collect();
        assert_eq!(names, vec!["Alamofire", "Kingfisher"]);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(spm_gen_cfg_from_file("tools = '5.7'").is_err());
        assert!(spm_gen_cfg_from_file("source_layout = 'folders'").is_err());
    }
}
