use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A buildable or testable unit of a project
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SourceTarget {
    pub name: String,
    /// The kind of product built by the target (`app`, `staticFramework`, `unit_tests`...)
    pub product: String,
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    #[serde(default)]
    pub resources: Vec<PathBuf>,
    #[serde(default)]
    pub dependencies: Vec<SourceDependency>,
}

/// A dependency of a [`SourceTarget`].
///
/// On the exported graph every dependency is an object with a single key naming its
/// kind. Only the kinds that a package manifest can express are modelled, every other
/// kind is kept as [`SourceDependency::Other`] so it can be reported by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDependency {
    /// A target of the same project
    Target { name: String },
    /// A target of another project, rooted at `path`
    Project { target: String, path: PathBuf },
    Other { kind: String },
}

/// The kinds that have a model of their own, with the exact shape of the graph
#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum KnownDependency {
    Target { name: String },
    Project { target: String, path: PathBuf },
}

impl From<KnownDependency> for SourceDependency {
    fn from(known: KnownDependency) -> Self {
        match known {
            KnownDependency::Target { name } => SourceDependency::Target { name },
            KnownDependency::Project { target, path } => SourceDependency::Project { target, path },
        }
    }
}

impl<'de> Deserialize<'de> for SourceDependency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;

        let kind = match &raw {
            // Dependencies without associated values may be exported as bare strings
            serde_json::Value::String(kind) => {
                return Ok(SourceDependency::Other { kind: kind.clone() })
            }
            serde_json::Value::Object(entries) if entries.len() == 1 => {
                entries.keys().next().cloned().unwrap_or_default()
            }
            other => {
                return Err(D::Error::custom(format!(
                    "ill-formed target dependency: {other}"
                )))
            }
        };

        match kind.as_str() {
            "target" | "project" => KnownDependency::deserialize(raw)
                .map(SourceDependency::from)
                .map_err(D::Error::custom),
            _ => Ok(SourceDependency::Other { kind }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;

    #[test]
    fn test_known_dependency_kinds() -> Result<()> {
        let target: SourceDependency = serde_json::from_str(r#"{ "target": { "name": "Core" } }"#)?;
        assert_eq!(target, SourceDependency::Target { name: "Core".into() });

        let project: SourceDependency = serde_json::from_str(
            r#"{ "project": { "target": "Kingfisher", "path": "/root/.build/checkouts/Kingfisher" } }"#,
        )?;
        assert_eq!(
            project,
            SourceDependency::Project {
                target: "Kingfisher".into(),
                path: "/root/.build/checkouts/Kingfisher".into()
            }
        );
        Ok(())
    }

    #[test]
    fn test_other_dependency_kinds_are_kept_by_name() -> Result<()> {
        let sdk: SourceDependency = serde_json::from_str(
            r#"{ "sdk": { "name": "StoreKit.framework", "status": "required" } }"#,
        )?;
        assert_eq!(sdk, SourceDependency::Other { kind: "sdk".into() });

        let xctest: SourceDependency = serde_json::from_str(r#""xctest""#)?;
        assert_eq!(xctest, SourceDependency::Other { kind: "xctest".into() });
        Ok(())
    }

    #[test]
    fn test_ill_formed_dependencies_are_rejected() {
        assert!(serde_json::from_str::<SourceDependency>("42").is_err());
        assert!(serde_json::from_str::<SourceDependency>(r#"{ "a": {}, "b": {} }"#).is_err());
        assert!(serde_json::from_str::<SourceDependency>(r#"{ "target": { "id": 1 } }"#).is_err());
    }
}
