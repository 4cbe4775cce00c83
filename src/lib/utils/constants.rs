//! Constant value definitions to use across the whole program

pub const SPM_GEN: &str = "spm-gen";

pub const MANIFEST_FILE_NAME: &str = "Package.swift";
pub const CONFIG_FILE_NAME: &str = "spm-gen";
pub const CONFIG_FILE_EXT: &str = "toml";

/// The file written by `tuist graph --format json` in its output directory
pub const GRAPH_FILE_NAME: &str = "graph.json";
pub const TUIST_BINARY: &str = "tuist";

pub const XCODEPROJ_SUFFIX: &str = ".xcodeproj";
/// Entries containing any of these are generated by the project tool itself and
/// never name the user's project
pub const XCODEPROJ_EXCLUDED_MARKERS: [&str; 2] = ["Manifests.", "Plugin."];

/// Defaults for the values that the configuration file may override
pub mod defaults {
    pub const TOOLS_VERSION: &str = "5.7";
    pub const CHECKOUT_MARKER: &str = ".build/checkouts";
    pub const BUNDLE_EXTENSIONS: [&str; 1] = ["xcassets"];
    pub const REGULAR_PRODUCTS: [&str; 2] = ["app", "staticFramework"];
    pub const TEST_PRODUCTS: [&str; 1] = ["unit_tests"];
    pub const APP_PRODUCT: &str = "app";
    pub const IOS_VERSION: &str = "13.0";
    pub const MACOS_VERSION: &str = "15.0";
}

/// Lines that the output filter drops if they survive the field hooks
pub mod residual_noise {
    pub const ABSENT_VALUE: &str = ": nil";
    pub const REGULAR_TARGET_TYPE: &str = "type: .regular";
}

pub mod error_messages {
    pub const INVALID_REMOTE_REQUIREMENT: &str =
        "A remote package must declare exactly one of `from`, `exact` or `branch`";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const READ_GRAPH_FILE: &str = "Could not read the project graph file";
    pub const PARSE_GRAPH_FILE: &str = "Could not parse the project graph file";
    pub const FAILURE_LOADING_GRAPH: &str = "Failed to load the project graph";
    pub const FAILURE_LAUNCHING_TUIST: &str =
        "Failed to launch `tuist graph`. Is tuist installed and available on the PATH?";
    pub const TUIST_GRAPH_FAILED: &str = "`tuist graph` finished with a non-zero exit status";
    pub const FAILURE_MAPPING_PROJECT: &str = "Failed to map the project into a package manifest";
    pub const FAILURE_FILTERING_TARGETS: &str = "Failed to filter the package by the requested targets";
    pub const FAILURE_RENDERING_MANIFEST: &str = "Failed to render the package manifest";
    pub const FAILURE_WRITING_MANIFEST: &str = "Failed to write the package manifest";
    pub const FAILURE_LISTING_PROJECT_ROOT: &str = "Failed to list the entries of the project root";
}

pub const CONFIG_FILE_MOCK: &str = r#"
tools_version = "5.9"
checkout_marker = ".build/checkouts"
bundle_extensions = ["xcassets", "bundle"]
regular_products = ["app", "staticFramework", "framework"]
test_products = ["unit_tests"]
ignored_dependencies = ["SwiftRex"]
library_products = true
source_layout = "path"

[[platforms]]
name = "iOS"
version = "15.0"

[[platforms]]
name = "macOS"
version = "12.0"

[remote_packages.Alamofire]
url = "https://github.com/Alamofire/Alamofire.git"
from = "5.6.0"

[remote_packages.Kingfisher]
url = "https://github.com/onevcat/Kingfisher.git"
branch = "master"
"#;
