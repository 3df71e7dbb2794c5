use super::{Dependencies, ProjectType};

const MOBILE_FRAMEWORKS: &[&str] = &[
    "react-native",
    "expo",
    "@ionic/react",
    "@ionic/angular",
    "@capacitor/core",
    "nativescript",
];

const DESKTOP_FRAMEWORKS: &[&str] = &["electron", "@tauri-apps/api", "tauri", "nw"];

const API_FRAMEWORKS: &[&str] = &[
    "express",
    "fastify",
    "koa",
    "@nestjs/core",
    "@hapi/hapi",
    "restify",
    "axum",
    "actix-web",
    "rocket",
];

const WEB_FRAMEWORKS: &[&str] = &[
    "react",
    "vue",
    "@angular/core",
    "next",
    "nuxt",
    "svelte",
    "solid-js",
    "yew",
    "leptos",
];

/// Facts about the root that project-type inference looks at.
#[derive(Debug, Clone, Copy)]
pub struct TypeSignals<'a> {
    pub dependencies: Option<&'a Dependencies>,
    pub has_manifest: bool,
    pub has_python_requirements: bool,
    pub has_assets_dir: bool,
    pub has_contracts_dir: bool,
}

/// Infers the project type. Rules are tried in a fixed order and the first match wins:
/// mobile, desktop, api and web frameworks declared in a manifest, a Python
/// requirements file, a game-engine `Assets/` directory, a smart-contract
/// `contracts/` directory, any manifest without a known framework (library).
#[must_use]
pub fn infer(signals: &TypeSignals<'_>) -> ProjectType {
    let declares_any = |frameworks: &[&str]| {
        signals
            .dependencies
            .is_some_and(|deps| frameworks.iter().any(|f| deps.contains(f)))
    };

    if declares_any(MOBILE_FRAMEWORKS) {
        ProjectType::Mobile
    } else if declares_any(DESKTOP_FRAMEWORKS) {
        ProjectType::Desktop
    } else if declares_any(API_FRAMEWORKS) {
        ProjectType::Api
    } else if declares_any(WEB_FRAMEWORKS) {
        ProjectType::Web
    } else if signals.has_python_requirements {
        ProjectType::AiMl
    } else if signals.has_assets_dir {
        ProjectType::Game
    } else if signals.has_contracts_dir {
        ProjectType::Blockchain
    } else if signals.has_manifest {
        ProjectType::Library
    } else {
        ProjectType::Unknown
    }
}

#[cfg(test)]
#[path = "project_type_tests.rs"]
mod tests;
