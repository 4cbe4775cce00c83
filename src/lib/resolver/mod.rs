//! Dependency closure of the targets of a project or a package, and the filtering of
//! both down to the closure of a set of requested targets

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

use crate::error::GeneratorError;
use crate::manifest::{Package, Target, TargetDependency};
use crate::project_model::project::SourceProject;
use crate::project_model::target::{SourceDependency, SourceTarget};

/// A target seen as a node of a dependency graph
pub trait DependencyNode {
    fn node_name(&self) -> &str;

    /// The names this node depends on, targets or not
    fn edges(&self) -> Vec<&str>;
}

impl DependencyNode for Target {
    fn node_name(&self) -> &str {
        &self.name
    }

    /// A product dependency reaches both the product and the package that exports it
    fn edges(&self) -> Vec<&str> {
        let mut edges = Vec::with_capacity(self.dependencies.len());
        for dependency in &self.dependencies {
            edges.push(dependency.name());
            if let TargetDependency::Product {
                package: Some(package),
                ..
            } = dependency
            {
                edges.push(package.as_str());
            }
        }
        edges
    }
}

impl DependencyNode for SourceTarget {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter_map(|dependency| match dependency {
                SourceDependency::Target { name } => Some(name.as_str()),
                SourceDependency::Project { target, .. } => Some(target.as_str()),
                SourceDependency::Other { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current traversal path
    InProgress,
    Done,
}

#[derive(Debug, Default)]
struct Walk<'n> {
    marks: HashMap<&'n str, Mark>,
    path: Vec<&'n str>,
}

/// Targets indexed by name, viewed as a graph whose edges are their dependencies
#[derive(Debug)]
pub struct TargetGraph<'a, T = Target> {
    targets: IndexMap<&'a str, &'a T>,
}

impl<'a, T: DependencyNode> TargetGraph<'a, T> {
    pub fn new(targets: &'a [T]) -> Self {
        Self {
            targets: targets
                .iter()
                .map(|target| (target.node_name(), target))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Every name reachable from `roots`, the roots included.
    ///
    /// Names that aren't targets of the graph (products, packages) are leaves. A
    /// dependency cycle between targets is reported with the path that closes it
    ///
    /// ```rust
    /// use spm_gen::manifest::{SourceLocation, Target, TargetDependency, TargetKind};
    /// use spm_gen::resolver::TargetGraph;
    ///
    /// let target = |name: &str, dependencies: Vec<TargetDependency>| Target {
    ///     name: name.into(),
    ///     kind: TargetKind::Regular,
    ///     dependencies,
    ///     location: SourceLocation::Path(name.into()),
    ///     resources: vec![],
    /// };
    /// let targets = vec![
    ///     target("A", vec![TargetDependency::Target { name: "B".into() }]),
    ///     target("B", vec![]),
    ///     target("C", vec![]),
    /// ];
    ///
    /// let closure = TargetGraph::new(&targets).closure(&["A"]).unwrap();
    /// assert_eq!(closure.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    /// ```
    pub fn closure<S: AsRef<str>>(&self, roots: &[S]) -> Result<BTreeSet<String>, GeneratorError> {
        let mut walk = Walk::default();
        for root in roots {
            self.visit(root.as_ref(), &mut walk)?;
        }
        Ok(walk.marks.into_keys().map(str::to_string).collect())
    }

    /// Fails on the first dependency cycle between the targets of the graph
    pub fn check_acyclic(&self) -> Result<(), GeneratorError> {
        let roots: Vec<&str> = self.targets.keys().copied().collect();
        self.closure(&roots).map(|_| ())
    }

    fn visit<'n>(&self, name: &'n str, walk: &mut Walk<'n>) -> Result<(), GeneratorError>
    where
        'a: 'n,
    {
        match walk.marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::InProgress) => {
                let start = walk
                    .path
                    .iter()
                    .position(|visiting| *visiting == name)
                    .unwrap_or_default();
                let mut cycle: Vec<String> =
                    walk.path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(name.to_string());
                return Err(GeneratorError::DependencyCycle { cycle });
            }
            None => {}
        }

        walk.marks.insert(name, Mark::InProgress);
        walk.path.push(name);

        if let Some(&target) = self.targets.get(name) {
            for edge in target.edges() {
                self.visit(edge, walk)?;
            }
        }

        walk.path.pop();
        walk.marks.insert(name, Mark::Done);
        Ok(())
    }
}

/// Keeps on `project` only the targets of the closure of the requested ones, so the
/// targets nobody asked for are never mapped. Requesting nothing keeps every target
pub fn filter_project(
    project: &SourceProject,
    requested: &[String],
) -> Result<SourceProject, GeneratorError> {
    if requested.is_empty() {
        return Ok(project.clone());
    }

    let reachable = TargetGraph::new(&project.targets).closure(requested)?;
    Ok(SourceProject {
        name: project.name.clone(),
        path: project.path.clone(),
        targets: project
            .targets
            .iter()
            .filter(|target| reachable.contains(&target.name))
            .cloned()
            .collect(),
    })
}

/// Keeps on `package` only what the requested targets need: the targets of their
/// closure, the package dependencies reached from them, and the products whose targets
/// are all kept. Requesting nothing keeps the whole package
pub fn filter_package(mut package: Package, requested: &[String]) -> Result<Package, GeneratorError> {
    let graph = TargetGraph::new(&package.targets);

    if requested.is_empty() {
        graph.check_acyclic()?;
        return Ok(package);
    }

    for name in requested.iter().filter(|name| !graph.contains(name)) {
        log::warn!("Requested target `{name}` isn't a target of the package");
    }

    let reachable = graph.closure(requested)?;
    log::debug!("Dependency closure of {requested:?}: {reachable:?}");

    package
        .targets
        .retain(|target| reachable.contains(&target.name));
    package.dependencies.retain(|dependency| {
        dependency
            .identity()
            .map_or(false, |identity| reachable.contains(&identity))
    });
    package.products.retain(|product| {
        product
            .targets
            .iter()
            .all(|target| reachable.contains(target))
    });

    Ok(package)
}
