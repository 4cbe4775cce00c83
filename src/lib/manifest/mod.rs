//! The data model of a Swift package manifest, that is, the shape that the project graph
//! is mapped into before being rendered as the source code of a `Package.swift` file

pub mod describe;
pub mod hooks;
pub mod writer;

use core::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::paths;

/// The top level description of a package manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub products: Vec<Product>,
    pub dependencies: Vec<PackageDependency>,
    pub targets: Vec<Target>,
}

/// A minimum deployment version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: PlatformName,
    pub version: String,
}

/// The platforms that a manifest can constraint, spelled as they appear on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformName {
    #[serde(rename = "iOS", alias = "ios")]
    IOS,
    #[serde(rename = "macOS", alias = "macos")]
    MacOS,
    #[serde(rename = "tvOS", alias = "tvos")]
    TvOS,
    #[serde(rename = "watchOS", alias = "watchos")]
    WatchOS,
    #[serde(rename = "macCatalyst", alias = "maccatalyst")]
    MacCatalyst,
    #[serde(rename = "driverKit", alias = "driverkit")]
    DriverKit,
    #[serde(rename = "visionOS", alias = "visionos")]
    VisionOS,
}

impl PlatformName {
    pub fn as_str(&self) -> &'static str {
        match *self {
            PlatformName::IOS => "iOS",
            PlatformName::MacOS => "macOS",
            PlatformName::TvOS => "tvOS",
            PlatformName::WatchOS => "watchOS",
            PlatformName::MacCatalyst => "macCatalyst",
            PlatformName::DriverKit => "driverKit",
            PlatformName::VisionOS => "visionOS",
        }
    }
}

impl AsRef<str> for PlatformName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A library product vended by the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub targets: Vec<String>,
}

/// A reference to another package that this one depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDependency {
    pub name: Option<String>,
    pub kind: PackageDependencyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageDependencyKind {
    FileSystem { path: String },
    SourceControl { url: String, requirement: Requirement },
}

/// Version requirement of a source control package reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Up to the next major version
    From(String),
    Exact(String),
    Branch(String),
}

impl PackageDependency {
    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            name: None,
            kind: PackageDependencyKind::FileSystem { path: path.into() },
        }
    }

    pub fn source_control(
        name: impl Into<String>,
        url: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            name: Some(name.into()),
            kind: PackageDependencyKind::SourceControl {
                url: url.into(),
                requirement,
            },
        }
    }

    /// The name used to match this dependency against the product references of the
    /// targets. References without an explicit name are identified by the last
    /// component of their path
    pub fn identity(&self) -> Option<String> {
        match (&self.name, &self.kind) {
            (Some(name), _) => Some(name.clone()),
            (None, PackageDependencyKind::FileSystem { path }) => {
                paths::last_component(Path::new(path))
            }
            (None, PackageDependencyKind::SourceControl { .. }) => None,
        }
    }
}

/// A target of the package manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    pub dependencies: Vec<TargetDependency>,
    pub location: SourceLocation,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    #[default]
    Regular,
    Test,
}

impl Target {
    pub fn is_test(&self) -> bool {
        self.kind == TargetKind::Test
    }
}

/// Where the sources of a target live. A manifest target is located either by a single
/// folder or by an explicit list of files, never by both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Path(String),
    Sources(Vec<String>),
}

/// A dependency of a manifest target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDependency {
    /// Another target of the same manifest
    Target { name: String },
    /// A product exported by a package dependency
    Product {
        name: String,
        package: Option<String>,
    },
    /// Resolved by name when the manifest is processed, to a target of the same
    /// manifest or a product of one of its package dependencies
    ByName { name: String },
}

impl TargetDependency {
    pub fn name(&self) -> &str {
        match self {
            TargetDependency::Target { name }
            | TargetDependency::Product { name, .. }
            | TargetDependency::ByName { name } => name,
        }
    }
}

/// A resource of a target, with a path relative to the target's source folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Handled by the default resource processing of the package manager
    Process(String),
    /// Copied verbatim, files or whole directories alike
    Copy(String),
}

impl Resource {
    pub fn rule(&self) -> &'static str {
        match self {
            Resource::Process(_) => "process",
            Resource::Copy(_) => "copy",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Resource::Process(path) | Resource::Copy(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_of_package_dependencies() {
        let local = PackageDependency::file_system("/root/.build/checkouts/swift-log");
        assert_eq!(local.identity().as_deref(), Some("swift-log"));

        let remote = PackageDependency::source_control(
            "Alamofire",
            "https://github.com/Alamofire/Alamofire.git",
            Requirement::From("5.6.0".into()),
        );
        assert_eq!(remote.identity().as_deref(), Some("Alamofire"));
    }

    #[test]
    fn test_platform_names_from_config_spelling() {
        let names: Vec<PlatformName> = serde_json::from_str(r#"["iOS", "macos", "visionOS"]"#)
            .expect("A failure happened parsing the platform names");
        assert_eq!(
            names,
            vec![PlatformName::IOS, PlatformName::MacOS, PlatformName::VisionOS]
        );
        assert_eq!(PlatformName::WatchOS.to_string(), "watchOS");
    }
}
