//! Dependency manifest parsing. Malformed manifests contribute nothing; the
//! configuration rules report JSON errors separately.

use std::collections::BTreeMap;

use super::Dependencies;

pub const PACKAGE_JSON: &str = "package.json";
pub const CARGO_TOML: &str = "Cargo.toml";
pub const REQUIREMENTS_TXT: &str = "requirements.txt";
pub const PYPROJECT_TOML: &str = "pyproject.toml";

/// Dependencies and package name declared by one manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub dependencies: Dependencies,
}

#[must_use]
pub fn parse_package_json(value: &serde_json::Value) -> Manifest {
    let section = |key: &str| -> BTreeMap<String, String> {
        value
            .get(key)
            .and_then(serde_json::Value::as_object)
            .map(|deps| {
                deps.iter()
                    .map(|(name, version)| {
                        let version = version
                            .as_str()
                            .map_or_else(|| version.to_string(), str::to_string);
                        (name.clone(), version)
                    })
                    .collect()
            })
            .unwrap_or_default()
    };

    Manifest {
        name: value
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        dependencies: Dependencies {
            production: section("dependencies"),
            development: section("devDependencies"),
        },
    }
}

#[must_use]
pub fn parse_cargo_toml(content: &str) -> Option<Manifest> {
    let value: toml::Value = toml::from_str(content).ok()?;

    let section = |key: &str| -> BTreeMap<String, String> {
        value
            .get(key)
            .and_then(toml::Value::as_table)
            .map(|deps| {
                deps.iter()
                    .map(|(name, spec)| (name.clone(), cargo_version(spec)))
                    .collect()
            })
            .unwrap_or_default()
    };

    Some(Manifest {
        name: value
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(toml::Value::as_str)
            .map(str::to_string),
        dependencies: Dependencies {
            production: section("dependencies"),
            development: section("dev-dependencies"),
        },
    })
}

fn cargo_version(spec: &toml::Value) -> String {
    match spec {
        toml::Value::String(v) => v.clone(),
        toml::Value::Table(t) => t
            .get("version")
            .and_then(toml::Value::as_str)
            .unwrap_or("*")
            .to_string(),
        _ => "*".to_string(),
    }
}

/// Parses `requirements.txt`; every requirement counts as a production dependency.
#[must_use]
pub fn parse_requirements(content: &str) -> Manifest {
    const OPERATORS: &[&str] = &["===", "==", ">=", "<=", "~=", "!=", ">", "<"];

    let production = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty() && !line.starts_with('-'))
        .map(|line| line.split(';').next().unwrap_or(line).trim())
        .map(|line| {
            let split_at = OPERATORS.iter().filter_map(|op| line.find(op)).min();
            match split_at {
                Some(idx) => (line[..idx].trim().to_string(), line[idx..].trim().to_string()),
                None => (line.to_string(), "*".to_string()),
            }
        })
        .map(|(name, version)| {
            let name = name.split('[').next().unwrap_or(&name).trim().to_string();
            (name, version)
        })
        .filter(|(name, _)| !name.is_empty())
        .collect();

    Manifest {
        name: None,
        dependencies: Dependencies {
            production,
            development: BTreeMap::new(),
        },
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
