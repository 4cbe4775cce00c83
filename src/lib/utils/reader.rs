use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use indexmap::IndexMap;

use crate::config_file::{
    platform::PlatformAttribute, remote::RemotePackageAttribute, spm_gen_cfg_from_file,
    SpmGenConfigFile,
};
use crate::manifest::{Platform, Requirement};
use crate::settings::{self, GeneratorSettings, RemotePackage};

use super::constants::{error_messages, CONFIG_FILE_EXT, CONFIG_FILE_NAME};

/// Looks for the configuration file of the project.
///
/// An explicit path always wins and must exist. Otherwise the `spm-gen.toml` file at
/// the project root is used when present. A project without configuration file is
/// valid, and runs with the default settings
pub fn find_config_file(project_root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(eyre!("{}: {path:?} is not a file", error_messages::READ_CFG_FILE));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidate = project_root
        .join(CONFIG_FILE_NAME)
        .with_extension(CONFIG_FILE_EXT);
    log::debug!("Searching for a configuration file at {candidate:?}");
    Ok(candidate.is_file().then_some(candidate))
}

/// Reads and parses the configuration file of the project, if any, and assembles the
/// settings of the run from it
pub fn load_settings(project_root: &Path, explicit: Option<&Path>) -> Result<GeneratorSettings> {
    let Some(path) = find_config_file(project_root, explicit)? else {
        log::debug!("No configuration file found. Using the default settings");
        return Ok(GeneratorSettings::default());
    };

    log::debug!("Loading the configuration file: {path:?}");
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("{}: {path:?}", error_messages::READ_CFG_FILE))?;
    let config = spm_gen_cfg_from_file(&raw)
        .with_context(|| format!("{}: {path:?}", error_messages::PARSE_CFG_FILE))?;

    build_settings(config)
}

pub fn build_settings(config: SpmGenConfigFile<'_>) -> Result<GeneratorSettings> {
    let defaults = GeneratorSettings::default();

    Ok(GeneratorSettings {
        tools_version: config
            .tools_version
            .map_or(defaults.tools_version, str::to_string),
        platforms: config
            .platforms
            .map_or(defaults.platforms, assemble_platforms),
        checkout_marker: config
            .checkout_marker
            .map_or(defaults.checkout_marker, str::to_string),
        bundle_extensions: config
            .bundle_extensions
            .map_or(defaults.bundle_extensions, |values| settings::to_owned(&values)),
        regular_products: config
            .regular_products
            .map_or(defaults.regular_products, |values| settings::to_owned(&values)),
        test_products: config
            .test_products
            .map_or(defaults.test_products, |values| settings::to_owned(&values)),
        ignored_dependencies: config
            .ignored_dependencies
            .map_or(defaults.ignored_dependencies, |values| settings::to_owned(&values)),
        library_products: config.library_products.unwrap_or(defaults.library_products),
        source_layout: config.source_layout.unwrap_or(defaults.source_layout),
        remote_packages: config
            .remote_packages
            .map(assemble_remote_packages)
            .transpose()?
            .unwrap_or(defaults.remote_packages),
    })
}

fn assemble_platforms(config: Vec<PlatformAttribute<'_>>) -> Vec<Platform> {
    config
        .into_iter()
        .map(|platform| Platform {
            name: platform.name,
            version: platform.version.to_string(),
        })
        .collect()
}

fn assemble_remote_packages(
    config: IndexMap<&str, RemotePackageAttribute<'_>>,
) -> Result<IndexMap<String, RemotePackage>> {
    config
        .into_iter()
        .map(|(name, remote)| {
            let requirement = match (remote.from, remote.exact, remote.branch) {
                (Some(version), None, None) => Requirement::From(version.to_string()),
                (None, Some(version), None) => Requirement::Exact(version.to_string()),
                (None, None, Some(branch)) => Requirement::Branch(branch.to_string()),
                _ => {
                    return Err(eyre!(
                        "{} (remote package `{name}`)",
                        error_messages::INVALID_REMOTE_REQUIREMENT
                    ))
                }
            };
            Ok((
                name.to_string(),
                RemotePackage {
                    url: remote.url.to_string(),
                    requirement,
                },
            ))
        })
        .collect()
}
