//! Maps a project of the source graph into the package manifest model.
//!
//! Every target is mapped on its own: its kind is decided by its product type, its
//! location by the folder shared by its sources, and its resources and dependencies are
//! translated one by one. The package level gathers the packages, checkouts or sibling
//! projects, whose products the mapped targets use.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::GeneratorError;
use crate::manifest::{
    Package, PackageDependency, Product, Resource, SourceLocation, Target, TargetDependency,
    TargetKind,
};
use crate::project_model::project::SourceProject;
use crate::project_model::target::{SourceDependency, SourceTarget};
use crate::settings::{GeneratorSettings, SourceLayout};
use crate::utils::constants::defaults::APP_PRODUCT;
use crate::utils::paths;

pub struct ProjectMapper<'s> {
    settings: &'s GeneratorSettings,
}

impl<'s> ProjectMapper<'s> {
    pub fn new(settings: &'s GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Maps `project` into a [`Package`] named after it.
    ///
    /// Targets of an unsupported product type are dropped with a warning. A target
    /// without sources, or with a dependency that a manifest can't express, aborts the
    /// mapping
    pub fn map_project(&self, project: &SourceProject) -> Result<Package, GeneratorError> {
        let mut targets = Vec::with_capacity(project.targets.len());
        let mut products = Vec::new();
        let mut packages = BTreeSet::new();

        for source in &project.targets {
            let Some(target) = self.map_target(&project.path, source)? else {
                continue;
            };

            packages.extend(self.packages_of(source));
            if self.vends_library(source, &target) {
                products.push(Product {
                    name: target.name.clone(),
                    targets: vec![target.name.clone()],
                });
            }
            targets.push(target);
        }

        Ok(Package {
            name: project.name.clone(),
            platforms: self.settings.platforms.clone(),
            products,
            dependencies: packages
                .iter()
                .map(|package| self.package_dependency(&project.path, package))
                .collect(),
            targets,
        })
    }

    /// Maps a single target, or returns [`None`] when its product type has no
    /// counterpart on a manifest
    pub fn map_target(
        &self,
        project_root: &Path,
        source: &SourceTarget,
    ) -> Result<Option<Target>, GeneratorError> {
        let Some(kind) = self.target_kind(&source.product) else {
            log::warn!(
                "Unsupported target `{}` with product type `{}`. Skipping it",
                source.name,
                source.product
            );
            return Ok(None);
        };

        let source_root =
            paths::source_root(source.sources.as_slice()).ok_or_else(|| GeneratorError::NoSourceRoot {
                target: source.name.clone(),
            })?;
        log::debug!("Source root of `{}`: {source_root:?}", source.name);

        let dependencies = source
            .dependencies
            .iter()
            .filter_map(|dependency| self.map_dependency(&source.name, dependency).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Target {
            name: source.name.clone(),
            kind,
            dependencies,
            location: self.location(project_root, &source_root, source),
            resources: source
                .resources
                .iter()
                .map(|resource| self.map_resource(&source_root, resource))
                .collect(),
        }))
    }

    pub fn target_kind(&self, product: &str) -> Option<TargetKind> {
        if self.settings.is_regular_product(product) {
            Some(TargetKind::Regular)
        } else if self.settings.is_test_product(product) {
            Some(TargetKind::Test)
        } else {
            None
        }
    }

    fn location(&self, project_root: &Path, source_root: &Path, source: &SourceTarget) -> SourceLocation {
        match self.settings.source_layout {
            SourceLayout::Path => SourceLocation::Path(paths::or_current_dir(
                paths::full_relative(source_root, project_root),
            )),
            SourceLayout::Sources => SourceLocation::Sources(
                source
                    .sources
                    .iter()
                    .map(|file| paths::or_current_dir(paths::full_relative(file, project_root)))
                    .collect(),
            ),
        }
    }

    /// Resources live below the source root of their target, and are located relative
    /// to it. Directories and bundles are copied as a whole, any other file is processed
    pub fn map_resource(&self, source_root: &Path, resource: &Path) -> Resource {
        let relative = paths::strict_suffix(resource, source_root).unwrap_or_else(|| {
            log::warn!("Resource {resource:?} is outside of its source root {source_root:?}");
            paths::full_relative(resource, source_root)
        });
        let relative = paths::or_current_dir(relative);

        let is_bundle = resource
            .extension()
            .map_or(false, |extension| {
                self.settings.is_bundle_extension(&extension.to_string_lossy())
            });

        if is_bundle || resource.is_dir() {
            Resource::Copy(relative)
        } else {
            Resource::Process(relative)
        }
    }

    /// Returns [`None`] for the dependencies that the configuration asks to ignore
    pub fn map_dependency(
        &self,
        target: &str,
        dependency: &SourceDependency,
    ) -> Result<Option<TargetDependency>, GeneratorError> {
        let mapped = match dependency {
            SourceDependency::Target { name } => TargetDependency::Target { name: name.clone() },
            SourceDependency::Project { target: name, path } => TargetDependency::Product {
                name: name.clone(),
                package: paths::last_component(path),
            },
            SourceDependency::Other { kind } => {
                return Err(GeneratorError::UnsupportedDependencyKind {
                    target: target.to_string(),
                    kind: kind.clone(),
                })
            }
        };

        if self.settings.is_ignored_dependency(mapped.name()) {
            log::debug!("Ignoring the dependency `{}` of `{target}`", mapped.name());
            return Ok(None);
        }
        Ok(Some(mapped))
    }

    fn is_checkout(&self, path: &Path) -> bool {
        path.to_string_lossy()
            .contains(self.settings.checkout_marker.as_str())
    }

    /// The folders of the other projects `source` depends on, skipping the ignored ones
    fn packages_of(&self, source: &SourceTarget) -> Vec<PathBuf> {
        source
            .dependencies
            .iter()
            .filter_map(|dependency| match dependency {
                SourceDependency::Project { target, path }
                    if !self.settings.is_ignored_dependency(target) =>
                {
                    Some(path.clone())
                }
                _ => None,
            })
            .collect()
    }

    /// A package is referenced by its local folder, unless the configuration declares
    /// the repository it comes from. Checkouts keep their absolute path, sibling
    /// projects are located relative to the project root
    fn package_dependency(&self, project_root: &Path, package: &Path) -> PackageDependency {
        let remote = paths::last_component(package).and_then(|identity| {
            self.settings
                .remote_packages
                .get(&identity)
                .map(|remote| (identity, remote))
        });

        match remote {
            Some((identity, remote)) => {
                PackageDependency::source_control(identity, &remote.url, remote.requirement.clone())
            }
            None if self.is_checkout(package) => {
                PackageDependency::file_system(package.to_string_lossy())
            }
            None => PackageDependency::file_system(paths::or_current_dir(paths::full_relative(
                package,
                project_root,
            ))),
        }
    }

    fn vends_library(&self, source: &SourceTarget, target: &Target) -> bool {
        self.settings.library_products && !target.is_test() && source.product != APP_PRODUCT
    }
}
