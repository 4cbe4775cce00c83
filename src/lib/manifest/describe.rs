//! Structural descriptions of the manifest entities.
//!
//! Every entity declares here the fields it exposes to the [`printer`](crate::printer),
//! in the order in which they're declared by the manifest description types, and which
//! of them hold the value that the manifest assumes when the field is omitted.

use crate::printer::{Field, Node, Scalar};

use super::{
    Package, PackageDependency, PackageDependencyKind, Platform, Product, Requirement,
    Resource, SourceLocation, Target, TargetDependency, TargetKind,
};

/// The typed value behind every node of a described manifest
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Package(&'a Package),
    Platform(&'a Platform),
    Product(&'a Product),
    PackageDependency(&'a PackageDependency),
    Requirement(&'a Requirement),
    Target(&'a Target),
    TargetKind(TargetKind),
    TargetDependency(&'a TargetDependency),
    Resource(&'a Resource),
    /// Plain values without a manifest entity of their own
    Value,
}

pub type ManifestNode<'a> = Node<Subject<'a>>;

/// Types that know how to describe themselves as a printable [`Node`] tree
pub trait Describe {
    fn describe(&self) -> ManifestNode<'_>;
}

fn string<'a>(value: &str) -> ManifestNode<'a> {
    Node::Scalar {
        subject: Subject::Value,
        value: Scalar::Str(value.to_string()),
    }
}

fn nil<'a>() -> ManifestNode<'a> {
    Node::Scalar {
        subject: Subject::Value,
        value: Scalar::Nil,
    }
}

fn optional_string<'a>(value: Option<&str>) -> ManifestNode<'a> {
    value.map_or_else(nil, string)
}

fn strings<'a>(values: &[String]) -> ManifestNode<'a> {
    Node::Seq(values.iter().map(|value| string(value)).collect())
}

fn many<T: Describe>(values: &[T]) -> ManifestNode<'_> {
    Node::Seq(values.iter().map(Describe::describe).collect())
}

/// A field holding an optional value, which is at its default when absent
fn absent<'a>(label: &'static str) -> Field<Subject<'a>> {
    Field::new(label, nil()).default_when(true)
}

impl Describe for Package {
    fn describe(&self) -> ManifestNode<'_> {
        Node::Record {
            subject: Subject::Package(self),
            type_name: "Package",
            fields: vec![
                Field::new("name", string(&self.name)),
                absent("defaultLocalization"),
                Field::new("platforms", many(&self.platforms))
                    .default_when(self.platforms.is_empty()),
                absent("pkgConfig"),
                absent("providers"),
                Field::new("targets", many(&self.targets)),
                Field::new("products", many(&self.products))
                    .default_when(self.products.is_empty()),
                Field::new("dependencies", many(&self.dependencies))
                    .default_when(self.dependencies.is_empty()),
                absent("swiftLanguageVersions"),
                absent("cLanguageStandard"),
                absent("cxxLanguageStandard"),
            ],
        }
    }
}

impl Describe for Platform {
    fn describe(&self) -> ManifestNode<'_> {
        Node::Record {
            subject: Subject::Platform(self),
            type_name: "SupportedPlatform",
            fields: vec![
                Field::new(
                    "platform",
                    Node::Case {
                        subject: Subject::Value,
                        name: self.name.as_str(),
                        fields: vec![],
                    },
                ),
                Field::new("version", string(&self.version)),
            ],
        }
    }
}

impl Describe for Product {
    fn describe(&self) -> ManifestNode<'_> {
        Node::Record {
            subject: Subject::Product(self),
            type_name: "Product",
            fields: vec![
                Field::new("name", string(&self.name)),
                Field::new(
                    "type",
                    Node::Case {
                        subject: Subject::Value,
                        name: "automatic",
                        fields: vec![],
                    },
                )
                .default_when(true),
                Field::new("targets", strings(&self.targets)),
            ],
        }
    }
}

impl Describe for PackageDependency {
    fn describe(&self) -> ManifestNode<'_> {
        let kind = match &self.kind {
            PackageDependencyKind::FileSystem { path } => Node::Case {
                subject: Subject::Value,
                name: "fileSystem",
                fields: vec![
                    Field::new("name", optional_string(self.name.as_deref())),
                    Field::new("path", string(path)),
                ],
            },
            PackageDependencyKind::SourceControl { url, requirement } => Node::Case {
                subject: Subject::Value,
                name: "sourceControl",
                fields: vec![
                    Field::new("name", optional_string(self.name.as_deref())),
                    Field::new("location", string(url)),
                    Field::new("requirement", requirement.describe()),
                ],
            },
        };

        Node::Record {
            subject: Subject::PackageDependency(self),
            type_name: "Dependency",
            fields: vec![Field::new("kind", kind), absent("moduleAliases")],
        }
    }
}

impl Describe for Requirement {
    fn describe(&self) -> ManifestNode<'_> {
        let (name, version) = match self {
            Requirement::From(version) => ("upToNextMajor", version),
            Requirement::Exact(version) => ("exact", version),
            Requirement::Branch(branch) => ("branch", branch),
        };
        Node::Case {
            subject: Subject::Requirement(self),
            name,
            fields: vec![Field::unlabeled(string(version))],
        }
    }
}

impl Describe for Target {
    fn describe(&self) -> ManifestNode<'_> {
        let (path, sources) = match &self.location {
            SourceLocation::Path(path) => (Field::new("path", string(path)), absent("sources")),
            SourceLocation::Sources(sources) => {
                (absent("path"), Field::new("sources", strings(sources)))
            }
        };

        Node::Record {
            subject: Subject::Target(self),
            type_name: "Target",
            fields: vec![
                Field::new("name", string(&self.name)),
                Field::new(
                    "type",
                    Node::Case {
                        subject: Subject::TargetKind(self.kind),
                        name: match self.kind {
                            TargetKind::Regular => "regular",
                            TargetKind::Test => "test",
                        },
                        fields: vec![],
                    },
                )
                // The kind is carried by the constructor keyword
                .default_when(true),
                path,
                sources,
                Field::new("resources", many(&self.resources))
                    .default_when(self.resources.is_empty()),
                Field::new("exclude", Node::Seq(vec![])).default_when(true),
                absent("publicHeadersPath"),
                Field::new("dependencies", many(&self.dependencies))
                    .default_when(self.dependencies.is_empty()),
            ],
        }
    }
}

impl Describe for TargetDependency {
    fn describe(&self) -> ManifestNode<'_> {
        let (name, fields) = match self {
            TargetDependency::Target { name } => ("targetItem", vec![Field::new("name", string(name))]),
            TargetDependency::Product { name, package } => (
                "productItem",
                vec![
                    Field::new("name", string(name)),
                    Field::new("package", optional_string(package.as_deref())),
                ],
            ),
            TargetDependency::ByName { name } => ("byNameItem", vec![Field::new("name", string(name))]),
        };

        let mut fields = fields;
        fields.push(absent("condition"));

        Node::Case {
            subject: Subject::TargetDependency(self),
            name,
            fields,
        }
    }
}

impl Describe for Resource {
    fn describe(&self) -> ManifestNode<'_> {
        Node::Record {
            subject: Subject::Resource(self),
            type_name: "Resource",
            fields: vec![
                Field::new("rule", string(self.rule())),
                Field::new("path", string(self.path())),
                absent("localization"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PlatformName;
    use crate::printer::{Identity, Renderer};

    /// Forgets the typed subjects, so the generic rendering can be inspected
    fn untyped(node: ManifestNode<'_>) -> Node<()> {
        match node {
            Node::Scalar { value, .. } => Node::Scalar { subject: (), value },
            Node::Seq(items) => Node::Seq(items.into_iter().map(untyped).collect()),
            Node::Case { name, fields, .. } => Node::Case {
                subject: (),
                name,
                fields: untyped_fields(fields),
            },
            Node::Record {
                type_name, fields, ..
            } => Node::Record {
                subject: (),
                type_name,
                fields: untyped_fields(fields),
            },
        }
    }

    fn untyped_fields(fields: Vec<Field<Subject<'_>>>) -> Vec<Field<()>> {
        fields
            .into_iter()
            .map(|field| Field {
                label: field.label,
                value: untyped(field.value),
                is_default: field.is_default,
            })
            .collect()
    }

    fn generic(node: ManifestNode<'_>) -> String {
        Renderer::new(Identity)
            .render(&untyped(node))
            .expect("the identity hooks never fail")
    }

    fn field_defaults(node: &ManifestNode<'_>) -> Vec<(&'static str, bool)> {
        match node {
            Node::Record { fields, .. } | Node::Case { fields, .. } => fields
                .iter()
                .map(|field| (field.label.unwrap_or_default(), field.is_default))
                .collect(),
            _ => vec![],
        }
    }

    #[test]
    fn test_generic_rendering_of_a_resource() {
        let resource = Resource::Copy("Assets.xcassets".into());
        assert_eq!(
            generic(resource.describe()),
            "Resource(\n    rule: \"copy\",\n    path: \"Assets.xcassets\",\n    localization: nil\n)"
        );
    }

    #[test]
    fn test_generic_rendering_of_a_dependency() {
        let dependency = TargetDependency::Product {
            name: "Logging".into(),
            package: Some("swift-log".into()),
        };
        assert_eq!(
            generic(dependency.describe()),
            ".productItem(name: \"Logging\", package: \"swift-log\", condition: nil)"
        );
    }

    #[test]
    fn test_target_defaults_are_declared_on_typed_values() {
        let mut target = Target {
            name: "App".into(),
            kind: TargetKind::Regular,
            dependencies: vec![],
            location: SourceLocation::Path("App".into()),
            resources: vec![],
        };

        let defaults = field_defaults(&target.describe());
        assert!(defaults.contains(&("path", false)));
        assert!(defaults.contains(&("sources", true)));
        assert!(defaults.contains(&("resources", true)));
        assert!(defaults.contains(&("dependencies", true)));
        assert!(defaults.contains(&("type", true)));

        target.location = SourceLocation::Sources(vec!["App/main.swift".into()]);
        target.dependencies.push(TargetDependency::Target { name: "Core".into() });
        let defaults = field_defaults(&target.describe());
        assert!(defaults.contains(&("path", true)));
        assert!(defaults.contains(&("sources", false)));
        assert!(defaults.contains(&("dependencies", false)));
    }

    #[test]
    fn test_generic_rendering_of_a_platform() {
        let platform = Platform {
            name: PlatformName::IOS,
            version: "13.0".into(),
        };
        assert_eq!(
            generic(platform.describe()),
            "SupportedPlatform(\n    platform: .iOS,\n    version: \"13.0\"\n)"
        );
    }
}
