//! File contents written by the init command.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::Result;

/// Files scaffolded by `sitepack init`, relative to the project directory.
pub const INDEX_PAGE: &str = "src/pages/index.html";
pub const MAIN_SCRIPT: &str = "src/js/main.js";
pub const MAIN_STYLESHEET: &str = "src/styles/main.scss";
pub const FAVICON: &str = "src/assets/icons/favicon.svg";

#[derive(Serialize)]
struct ScaffoldConfig {
    site: ScaffoldSite,
    paths: ScaffoldPaths,
}

#[derive(Serialize)]
struct ScaffoldSite {
    title: String,
    favicon: PathBuf,
}

#[derive(Serialize)]
struct ScaffoldPaths {
    pages: PathBuf,
    output: PathBuf,
    entries: ScaffoldEntries,
}

#[derive(Serialize)]
struct ScaffoldEntries {
    main: PathBuf,
}

/// Generate sitepack.toml for a new project.
pub fn site_toml(title: &str) -> Result<String> {
    let config = ScaffoldConfig {
        site: ScaffoldSite {
            title: title.to_string(),
            favicon: PathBuf::from(FAVICON),
        },
        paths: ScaffoldPaths {
            pages: PathBuf::from("src/pages"),
            output: PathBuf::from("dist"),
            entries: ScaffoldEntries {
                main: PathBuf::from(MAIN_SCRIPT),
            },
        },
    };

    let mut out = toml::to_string_pretty(&config)?;
    out.push_str(
        r#"
# Overrides applied when NODE_ENV=development
[profiles.development.dev]
port = 3000
hot = true
"#,
    );
    Ok(out)
}

/// Generate the landing page template.
pub fn index_html(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body>
    <main>
      <h1>{title}</h1>
      <p>Edit src/pages/index.html to get started.</p>
    </main>
  </body>
</html>
"#
    )
}

pub fn main_js() -> &'static str {
    r#"import '../styles/main.scss';

document.addEventListener('DOMContentLoaded', () => {
  document.body.classList.add('ready');
});
"#
}

pub fn main_scss() -> &'static str {
    r#"$accent: #3b82f6;

body {
  margin: 0;
  font-family: system-ui, sans-serif;
}

h1 {
  color: $accent;
}
"#
}

pub fn favicon_svg() -> &'static str {
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><rect width="32" height="32" rx="6" fill="#3b82f6"/></svg>
"##
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
