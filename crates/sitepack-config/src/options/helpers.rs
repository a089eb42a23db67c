use std::path::PathBuf;

use indexmap::IndexMap;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_title() -> String {
    "WebKit".to_string()
}

pub(crate) fn default_favicon() -> PathBuf {
    PathBuf::from("src/assets/icons/favicon.svg")
}

pub(crate) fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_pages_dir() -> PathBuf {
    PathBuf::from("src/pages")
}

pub(crate) fn default_assets_dir() -> PathBuf {
    PathBuf::from("src/assets")
}

pub(crate) fn default_assets_output() -> String {
    "assets".to_string()
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_template_extension() -> String {
    "html".to_string()
}

pub(crate) fn default_entries() -> IndexMap<String, PathBuf> {
    IndexMap::from([("main".to_string(), PathBuf::from("src/js/main.js"))])
}

pub(crate) fn default_resolve_extensions() -> Vec<String> {
    vec![".js".to_string(), ".jsx".to_string()]
}

pub(crate) fn default_aliases() -> IndexMap<String, PathBuf> {
    IndexMap::from([("@".to_string(), PathBuf::from("src/"))])
}

pub(crate) fn default_transpile_extensions() -> Vec<String> {
    vec!["js".to_string(), "jsx".to_string()]
}

pub(crate) fn default_transpile_exclude() -> String {
    "node_modules".to_string()
}

pub(crate) fn default_transpile_loader() -> String {
    "babel-loader".to_string()
}

pub(crate) fn default_transpile_presets() -> Vec<String> {
    vec!["@babel/preset-env".to_string()]
}
