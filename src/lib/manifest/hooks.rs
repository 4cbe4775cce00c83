//! The [`RenderHooks`] that turn the generic rendering of a described
//! [`Package`](super::Package) into
//! the textual conventions of a hand written `Package.swift` file

use std::marker::PhantomData;

use crate::printer::{self, quoted, RenderError, RenderHooks, RenderedField};

use super::describe::Subject;
use super::{PackageDependencyKind, Requirement, TargetDependency};

const PACKAGE_FIELDS_ORDER: [&str; 5] = ["name", "platforms", "products", "dependencies", "targets"];
const TARGET_FIELDS_ORDER: [&str; 6] = ["name", "dependencies", "path", "sources", "exclude", "resources"];

/// Renders manifest entities the way they're written on a package manifest
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestHooks<'a> {
    subjects: PhantomData<Subject<'a>>,
}

impl<'a> ManifestHooks<'a> {
    pub fn new() -> Self {
        Self {
            subjects: PhantomData,
        }
    }
}

impl<'a> RenderHooks for ManifestHooks<'a> {
    type Subject = Subject<'a>;

    fn enum_case(&self, subject: Subject<'a>, generic: String) -> Result<String, RenderError> {
        let Subject::TargetDependency(dependency) = subject else {
            return Ok(generic);
        };

        match dependency {
            TargetDependency::Target { name } | TargetDependency::ByName { name } => Ok(quoted(name)),
            TargetDependency::Product {
                name,
                package: Some(package),
            } => Ok(format!(
                ".product(name: {}, package: {})",
                quoted(name),
                quoted(package)
            )),
            TargetDependency::Product {
                name,
                package: None,
            } => Err(RenderError::UnsupportedDependencyKind(format!(
                "product `{name}` without a package"
            ))),
        }
    }

    fn reorder_fields(
        &self,
        subject: Subject<'a>,
        fields: Vec<RenderedField>,
    ) -> Result<Vec<RenderedField>, RenderError> {
        let fields: Vec<RenderedField> = fields.into_iter().map(canonical_label).collect();

        Ok(match subject {
            Subject::Package(_) => without_defaults(ordered(fields, &PACKAGE_FIELDS_ORDER)),
            Subject::Target(_) => without_defaults(ordered(fields, &TARGET_FIELDS_ORDER)),
            Subject::Product(_) => without_defaults(fields),
            _ => fields,
        })
    }

    fn object(
        &self,
        subject: Subject<'a>,
        generic: String,
        fields: &[RenderedField],
    ) -> Result<String, RenderError> {
        match subject {
            Subject::Platform(platform) => Ok(format!(
                ".{}({})",
                platform.name.as_str(),
                quoted(&platform.version)
            )),
            Subject::Resource(_) => {
                let rule = field_text(fields, "Resource", "rule")?;
                let path = field_text(fields, "Resource", "path")?;
                match rule.trim_matches('"') {
                    "copy" => Ok(format!(".copy({path})")),
                    "process" => Ok(format!(".process({path})")),
                    _ => Err(RenderError::UnsupportedResourceRule(rule.to_string())),
                }
            }
            Subject::PackageDependency(dependency) => Ok(match &dependency.kind {
                PackageDependencyKind::FileSystem { path } => {
                    format!(".package(path: {})", quoted(path))
                }
                PackageDependencyKind::SourceControl { url, requirement } => {
                    let (label, value) = match requirement {
                        Requirement::From(version) => ("from", version),
                        Requirement::Exact(version) => ("exact", version),
                        Requirement::Branch(branch) => ("branch", branch),
                    };
                    format!(".package(url: {}, {label}: {})", quoted(url), quoted(value))
                }
            }),
            Subject::Target(target) => {
                let keyword = if target.is_test() { ".testTarget" } else { ".target" };
                Ok(printer::call(keyword, fields))
            }
            Subject::Product(_) => Ok(printer::call(".library", fields)),
            _ => Ok(generic),
        }
    }
}

/// Storage-style labels (`_platforms`) are rendered with their public spelling
fn canonical_label(mut field: RenderedField) -> RenderedField {
    if let Some(label) = field.label.as_mut() {
        if let Some(stripped) = label.strip_prefix('_') {
            *label = stripped.to_string();
        }
    }
    field
}

/// Moves the fields named on `order` to the front, in that order, keeping the relative
/// order of the rest
fn ordered(mut fields: Vec<RenderedField>, order: &[&str]) -> Vec<RenderedField> {
    fields.sort_by_key(|field| {
        field
            .label
            .as_deref()
            .and_then(|label| order.iter().position(|known| *known == label))
            .unwrap_or(order.len())
    });
    fields
}

fn without_defaults(mut fields: Vec<RenderedField>) -> Vec<RenderedField> {
    fields.retain(|field| !field.is_default);
    fields
}

fn field_text<'f>(
    fields: &'f [RenderedField],
    subject: &'static str,
    field: &'static str,
) -> Result<&'f str, RenderError> {
    fields
        .iter()
        .find(|rendered| rendered.has_label(field))
        .map(|rendered| rendered.text.as_str())
        .ok_or(RenderError::MissingField { subject, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::describe::{Describe, Subject};
    use crate::manifest::{
        Package, PackageDependency, Platform, PlatformName, Product, Resource, SourceLocation,
        Target, TargetKind,
    };
    use crate::printer::{Field, Node, Renderer, Scalar};

    fn render(node: &Node<Subject<'_>>) -> Result<String, RenderError> {
        Renderer::new(ManifestHooks::new()).render(node)
    }

    fn target(name: &str, kind: TargetKind) -> Target {
        Target {
            name: name.into(),
            kind,
            dependencies: vec![],
            location: SourceLocation::Path(name.into()),
            resources: vec![],
        }
    }

    #[test]
    fn test_dependency_shorthands() {
        let local = TargetDependency::Target { name: "Core".into() };
        let by_name = TargetDependency::ByName { name: "Shared".into() };
        let product = TargetDependency::Product {
            name: "Logging".into(),
            package: Some("swift-log".into()),
        };

        assert_eq!(render(&local.describe()).unwrap(), "\"Core\"");
        assert_eq!(render(&by_name.describe()).unwrap(), "\"Shared\"");
        assert_eq!(
            render(&product.describe()).unwrap(),
            ".product(name: \"Logging\", package: \"swift-log\")"
        );
    }

    #[test]
    fn test_product_dependency_without_package_fails() {
        let product = TargetDependency::Product {
            name: "Logging".into(),
            package: None,
        };
        assert!(matches!(
            render(&product.describe()),
            Err(RenderError::UnsupportedDependencyKind(_))
        ));
    }

    #[test]
    fn test_resources_short_form() {
        let asset_catalog = Resource::Copy("Assets.xcassets".into());
        let strings = Resource::Process("en.lproj/Localizable.strings".into());

        assert_eq!(render(&asset_catalog.describe()).unwrap(), ".copy(\"Assets.xcassets\")");
        assert_eq!(
            render(&strings.describe()).unwrap(),
            ".process(\"en.lproj/Localizable.strings\")"
        );
    }

    #[test]
    fn test_unknown_resource_rule_fails() {
        let resource = Resource::Copy("x".into());
        let node = Node::Record {
            subject: Subject::Resource(&resource),
            type_name: "Resource",
            fields: vec![
                Field::new(
                    "rule",
                    Node::Scalar {
                        subject: Subject::Value,
                        value: Scalar::Str("embedInCode".into()),
                    },
                ),
                Field::new(
                    "path",
                    Node::Scalar {
                        subject: Subject::Value,
                        value: Scalar::Str("x".into()),
                    },
                ),
            ],
        };
        assert_eq!(
            render(&node),
            Err(RenderError::UnsupportedResourceRule("\"embedInCode\"".into()))
        );

        let missing_path = Node::Record {
            subject: Subject::Resource(&resource),
            type_name: "Resource",
            fields: vec![],
        };
        assert_eq!(
            render(&missing_path),
            Err(RenderError::MissingField {
                subject: "Resource",
                field: "rule"
            })
        );
    }

    #[test]
    fn test_target_keyword_follows_the_kind() {
        let app = target("App", TargetKind::Regular);
        let tests = target("AppTests", TargetKind::Test);

        assert_eq!(
            render(&app.describe()).unwrap(),
            ".target(\n    name: \"App\",\n    path: \"App\"\n)"
        );
        assert_eq!(
            render(&tests.describe()).unwrap(),
            ".testTarget(\n    name: \"AppTests\",\n    path: \"AppTests\"\n)"
        );
    }

    #[test]
    fn test_target_fields_are_reordered() {
        let mut app = target("App", TargetKind::Regular);
        app.dependencies.push(TargetDependency::Target { name: "Core".into() });
        app.resources.push(Resource::Process("Info.plist".into()));

        let expected = "\
.target(
    name: \"App\",
    dependencies: [
        \"Core\",
    ],
    path: \"App\",
    resources: [
        .process(\"Info.plist\"),
    ]
)";
        assert_eq!(render(&app.describe()).unwrap(), expected);
    }

    #[test]
    fn test_package_rendering() {
        let package = Package {
            name: "Shop".into(),
            platforms: vec![
                Platform {
                    name: PlatformName::IOS,
                    version: "13.0".into(),
                },
                Platform {
                    name: PlatformName::MacOS,
                    version: "15.0".into(),
                },
            ],
            products: vec![Product {
                name: "Core".into(),
                targets: vec!["Core".into()],
            }],
            dependencies: vec![PackageDependency::source_control(
                "Alamofire",
                "https://github.com/Alamofire/Alamofire.git",
                Requirement::From("5.6.0".into()),
            )],
            targets: vec![target("Core", TargetKind::Regular)],
        };

        let expected = "\
Package(
    name: \"Shop\",
    platforms: [
        .iOS(\"13.0\"),
        .macOS(\"15.0\"),
    ],
    products: [
        .library(
            name: \"Core\",
            targets: [
                \"Core\",
            ]
        ),
    ],
    dependencies: [
        .package(url: \"https://github.com/Alamofire/Alamofire.git\", from: \"5.6.0\"),
    ],
    targets: [
        .target(
            name: \"Core\",
            path: \"Core\"
        ),
    ]
)";
        assert_eq!(render(&package.describe()).unwrap(), expected);
    }

    #[test]
    fn test_package_defaults_are_omitted() {
        let package = Package {
            name: "Empty".into(),
            ..Default::default()
        };
        assert_eq!(
            render(&package.describe()).unwrap(),
            "Package(\n    name: \"Empty\",\n    targets: []\n)"
        );
    }

    #[test]
    fn test_package_dependency_forms() {
        let local = PackageDependency::file_system("/root/.build/checkouts/swift-log");
        let exact = PackageDependency::source_control("A", "https://a.git", Requirement::Exact("1.2.3".into()));
        let branch = PackageDependency::source_control("B", "https://b.git", Requirement::Branch("main".into()));

        assert_eq!(
            render(&local.describe()).unwrap(),
            ".package(path: \"/root/.build/checkouts/swift-log\")"
        );
        assert_eq!(
            render(&exact.describe()).unwrap(),
            ".package(url: \"https://a.git\", exact: \"1.2.3\")"
        );
        assert_eq!(
            render(&branch.describe()).unwrap(),
            ".package(url: \"https://b.git\", branch: \"main\")"
        );
    }

    #[test]
    fn test_storage_labels_use_their_public_spelling() {
        let package = Package::default();
        let node = Node::Record {
            subject: Subject::Package(&package),
            type_name: "Package",
            fields: vec![
                Field::new(
                    "_platforms",
                    Node::Seq(vec![Node::Case {
                        subject: Subject::Value,
                        name: "iOS",
                        fields: vec![],
                    }]),
                ),
                Field::new(
                    "name",
                    Node::Scalar {
                        subject: Subject::Value,
                        value: Scalar::Str("P".into()),
                    },
                ),
            ],
        };

        assert_eq!(
            render(&node).unwrap(),
            "Package(\n    name: \"P\",\n    platforms: [\n        .iOS,\n    ]\n)"
        );
    }
}
