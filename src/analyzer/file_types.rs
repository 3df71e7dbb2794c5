use std::fmt;

use serde::Serialize;

/// Coarse type tag derived from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    Typescript,
    Javascript,
    Vue,
    Svelte,
    Python,
    Rust,
    Go,
    Java,
    Kotlin,
    Swift,
    C,
    Cpp,
    Csharp,
    Ruby,
    Php,
    Solidity,
    Shell,
    Html,
    Css,
    Markdown,
    Json,
    Yaml,
    Toml,
    Xml,
    Sql,
    Image,
    Text,
    Unknown,
}

const EXTENSION_TABLE: &[(&str, FileType)] = &[
    ("ts", FileType::Typescript),
    ("tsx", FileType::Typescript),
    ("mts", FileType::Typescript),
    ("cts", FileType::Typescript),
    ("js", FileType::Javascript),
    ("jsx", FileType::Javascript),
    ("mjs", FileType::Javascript),
    ("cjs", FileType::Javascript),
    ("vue", FileType::Vue),
    ("svelte", FileType::Svelte),
    ("py", FileType::Python),
    ("pyi", FileType::Python),
    ("ipynb", FileType::Python),
    ("rs", FileType::Rust),
    ("go", FileType::Go),
    ("java", FileType::Java),
    ("kt", FileType::Kotlin),
    ("kts", FileType::Kotlin),
    ("swift", FileType::Swift),
    ("c", FileType::C),
    ("h", FileType::C),
    ("cpp", FileType::Cpp),
    ("cc", FileType::Cpp),
    ("cxx", FileType::Cpp),
    ("hpp", FileType::Cpp),
    ("cs", FileType::Csharp),
    ("rb", FileType::Ruby),
    ("php", FileType::Php),
    ("sol", FileType::Solidity),
    ("sh", FileType::Shell),
    ("bash", FileType::Shell),
    ("ps1", FileType::Shell),
    ("html", FileType::Html),
    ("htm", FileType::Html),
    ("css", FileType::Css),
    ("scss", FileType::Css),
    ("sass", FileType::Css),
    ("less", FileType::Css),
    ("md", FileType::Markdown),
    ("markdown", FileType::Markdown),
    ("mdx", FileType::Markdown),
    ("json", FileType::Json),
    ("yml", FileType::Yaml),
    ("yaml", FileType::Yaml),
    ("toml", FileType::Toml),
    ("xml", FileType::Xml),
    ("sql", FileType::Sql),
    ("png", FileType::Image),
    ("jpg", FileType::Image),
    ("jpeg", FileType::Image),
    ("gif", FileType::Image),
    ("svg", FileType::Image),
    ("webp", FileType::Image),
    ("ico", FileType::Image),
    ("txt", FileType::Text),
];

impl FileType {
    /// Looks up a lowercase extension (without the dot). Unmapped extensions are `Unknown`.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map_or(Self::Unknown, |(_, t)| *t)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Javascript => "javascript",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::Swift => "swift",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Csharp => "csharp",
            Self::Ruby => "ruby",
            Self::Php => "php",
            Self::Solidity => "solidity",
            Self::Shell => "shell",
            Self::Html => "html",
            Self::Css => "css",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Xml => "xml",
            Self::Sql => "sql",
            Self::Image => "image",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase extension of the last path segment, without the dot.
///
/// Dot-prefixed names such as `.gitignore` have no extension.
#[must_use]
pub fn extension_of(relative: &str) -> Option<String> {
    let name = relative.rsplit('/').next().unwrap_or(relative);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
#[path = "file_types_tests.rs"]
mod tests;
