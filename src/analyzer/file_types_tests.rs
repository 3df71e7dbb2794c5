use super::*;

#[test]
fn known_extensions_map_to_types() {
    assert_eq!(FileType::from_extension("ts"), FileType::Typescript);
    assert_eq!(FileType::from_extension("md"), FileType::Markdown);
    assert_eq!(FileType::from_extension("py"), FileType::Python);
    assert_eq!(FileType::from_extension("sol"), FileType::Solidity);
}

#[test]
fn unmapped_extension_is_unknown() {
    assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
    assert_eq!(FileType::from_extension(""), FileType::Unknown);
}

#[test]
fn extension_of_uses_last_segment() {
    assert_eq!(extension_of("src/app.test.TS"), Some("ts".to_string()));
    assert_eq!(extension_of("README.md"), Some("md".to_string()));
}

#[test]
fn dotfiles_and_bare_names_have_no_extension() {
    assert_eq!(extension_of(".gitignore"), None);
    assert_eq!(extension_of("config/.env"), None);
    assert_eq!(extension_of("Makefile"), None);
    assert_eq!(extension_of("trailing."), None);
}

#[test]
fn dotted_directory_does_not_leak_extension() {
    assert_eq!(extension_of("v1.2/LICENSE"), None);
}

#[test]
fn type_tags_serialize_in_kebab_case() {
    let json = serde_json::to_string(&FileType::Typescript).unwrap();
    assert_eq!(json, "\"typescript\"");
}
