use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::checker::Severity;

/// Case convention applied to file, directory and identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Casing {
    #[serde(alias = "kebab-case")]
    Kebab,
    #[serde(alias = "camel-case", alias = "camelCase")]
    Camel,
    #[serde(alias = "pascal-case", alias = "PascalCase")]
    Pascal,
    #[serde(alias = "snake-case", alias = "snake_case")]
    Snake,
    #[serde(alias = "SCREAMING_SNAKE_CASE", alias = "screaming-snake-case")]
    ScreamingSnake,
}

impl Casing {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kebab => "kebab-case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
}

/// The declarative rule catalog every validation run is evaluated against.
///
/// Loaded once per process and never mutated afterwards. Each section falls
/// back to the built-in defaults for keys a document leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsModel {
    #[serde(default)]
    pub naming_rules: NamingRules,
    #[serde(default)]
    pub structure_rules: StructureRules,
    #[serde(default)]
    pub style_rules: StyleRules,
    #[serde(default)]
    pub doc_rules: DocRules,
    #[serde(default)]
    pub config_rules: ConfigRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NamingRules {
    pub file_casing: Casing,
    pub directory_casing: Casing,
    pub variable_casing: Casing,
    pub constant_casing: Casing,
    /// Names that keep their conventional spelling (`README.md`, `Dockerfile`, ...).
    pub exempt_names: IndexSet<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            file_casing: Casing::Kebab,
            directory_casing: Casing::Kebab,
            variable_casing: Casing::Camel,
            constant_casing: Casing::ScreamingSnake,
            exempt_names: to_set(&[
                "README.md",
                "LICENSE",
                "LICENSE.md",
                "CHANGELOG.md",
                "CONTRIBUTING.md",
                "CODE_OF_CONDUCT.md",
                "SECURITY.md",
                "AUTHORS",
                "NOTICE",
                "Dockerfile",
                "Makefile",
                "Gemfile",
                "Procfile",
                "Jenkinsfile",
                "Vagrantfile",
                "Cargo.toml",
                "Cargo.lock",
                "__tests__",
                "__mocks__",
                "__init__.py",
                "__main__.py",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StructureRules {
    /// Directory name (relative to the root) to a short description of its purpose.
    pub required_directories: IndexMap<String, String>,
    pub required_files: IndexSet<String>,
    pub recommended_files: IndexSet<String>,
    pub max_depth: usize,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self {
            required_directories: IndexMap::new(),
            required_files: to_set(&["README.md", "package.json"]),
            recommended_files: IndexSet::new(),
            max_depth: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StyleRules {
    pub indent_width: usize,
    pub quote_style: QuoteStyle,
    pub require_trailing_comma: bool,
    /// Extensions (without the dot) whose files get the textual style checks.
    pub extensions: IndexSet<String>,
    /// Subset of extensions where the quote style check is meaningful.
    pub quote_extensions: IndexSet<String>,
}

impl Default for StyleRules {
    fn default() -> Self {
        Self {
            indent_width: 2,
            quote_style: QuoteStyle::Single,
            require_trailing_comma: false,
            extensions: to_set(&[
                "js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "css", "scss",
            ]),
            quote_extensions: to_set(&["js", "jsx", "ts", "tsx", "mjs", "cjs", "vue"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DocRules {
    pub required_files: IndexSet<String>,
    pub required_readme_sections: IndexSet<String>,
}

impl Default for DocRules {
    fn default() -> Self {
        Self {
            required_files: to_set(&["README.md"]),
            required_readme_sections: to_set(&["Installation", "Usage", "License"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigRules {
    /// Tracked configuration file name to the keys it must define.
    pub per_file: IndexMap<String, ConfigFileRule>,
}

impl Default for ConfigRules {
    fn default() -> Self {
        let mut per_file = IndexMap::new();
        per_file.insert(
            "package.json".to_string(),
            ConfigFileRule::new(&["name", "version"], Severity::Warning),
        );
        per_file.insert(
            "tsconfig.json".to_string(),
            ConfigFileRule::new(&["compilerOptions"], Severity::Error),
        );
        Self { per_file }
    }
}

/// Required keys of one tracked configuration file.
///
/// Accepts either a bare list of keys or a table with an explicit severity for
/// missing keys. Keys may be dotted paths into nested objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ConfigFileRuleRepr")]
pub struct ConfigFileRule {
    pub required_keys: Vec<String>,
    pub missing_key_severity: Severity,
}

impl ConfigFileRule {
    #[must_use]
    pub fn new(keys: &[&str], missing_key_severity: Severity) -> Self {
        Self {
            required_keys: keys.iter().map(|k| (*k).to_string()).collect(),
            missing_key_severity,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFileRuleRepr {
    Keys(Vec<String>),
    #[serde(rename_all = "camelCase")]
    Table {
        #[serde(default)]
        required_keys: Vec<String>,
        #[serde(default = "default_missing_key_severity")]
        missing_key_severity: Severity,
    },
}

impl From<ConfigFileRuleRepr> for ConfigFileRule {
    fn from(repr: ConfigFileRuleRepr) -> Self {
        match repr {
            ConfigFileRuleRepr::Keys(required_keys) => Self {
                required_keys,
                missing_key_severity: default_missing_key_severity(),
            },
            ConfigFileRuleRepr::Table {
                required_keys,
                missing_key_severity,
            } => Self {
                required_keys,
                missing_key_severity,
            },
        }
    }
}

const fn default_missing_key_severity() -> Severity {
    Severity::Warning
}

fn to_set(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
