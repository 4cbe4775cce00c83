//! The resolved settings of a run: the configuration file values with the defaults
//! applied on every missing key

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::manifest::{Platform, PlatformName, Requirement};
use crate::utils::constants::defaults;

/// How the targets of the generated manifest locate their sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLayout {
    /// By the folder that contains every source file of the target
    #[default]
    Path,
    /// By the explicit list of source files, relative to the project root
    Sources,
}

/// A source control reference that replaces the local checkout of an external package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePackage {
    pub url: String,
    pub requirement: Requirement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub tools_version: String,
    pub platforms: Vec<Platform>,
    /// Path segment that identifies the packages checked out by the package manager
    pub checkout_marker: String,
    /// Resources with these extensions are copied as they are
    pub bundle_extensions: Vec<String>,
    pub regular_products: Vec<String>,
    pub test_products: Vec<String>,
    pub ignored_dependencies: Vec<String>,
    /// Whether every regular target that isn't an application is vended as a library
    pub library_products: bool,
    pub source_layout: SourceLayout,
    pub remote_packages: IndexMap<String, RemotePackage>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            tools_version: defaults::TOOLS_VERSION.to_string(),
            platforms: vec![
                Platform {
                    name: PlatformName::IOS,
                    version: defaults::IOS_VERSION.to_string(),
                },
                Platform {
                    name: PlatformName::MacOS,
                    version: defaults::MACOS_VERSION.to_string(),
                },
            ],
            checkout_marker: defaults::CHECKOUT_MARKER.to_string(),
            bundle_extensions: to_owned(&defaults::BUNDLE_EXTENSIONS),
            regular_products: to_owned(&defaults::REGULAR_PRODUCTS),
            test_products: to_owned(&defaults::TEST_PRODUCTS),
            ignored_dependencies: Vec::new(),
            library_products: false,
            source_layout: SourceLayout::default(),
            remote_packages: IndexMap::new(),
        }
    }
}

impl GeneratorSettings {
    pub fn is_regular_product(&self, product: &str) -> bool {
        self.regular_products.iter().any(|known| known == product)
    }

    pub fn is_test_product(&self, product: &str) -> bool {
        self.test_products.iter().any(|known| known == product)
    }

    pub fn is_ignored_dependency(&self, name: &str) -> bool {
        self.ignored_dependencies.iter().any(|ignored| ignored == name)
    }

    /// Whether a file with the given extension must be copied instead of processed
    pub fn is_bundle_extension(&self, extension: &str) -> bool {
        self.bundle_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }
}

pub(crate) fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
