//! Output filename templates with content-derived identifiers.
//!
//! Templates use the bracket placeholders common to JavaScript bundlers:
//!
//! | Placeholder     | Expands to                                  |
//! |-----------------|---------------------------------------------|
//! | `[name]`        | chunk or file stem                          |
//! | `[contenthash]` | BLAKE3 digest of the emitted bytes (hex)    |
//! | `[hash]`        | same digest, used for copied asset modules  |
//! | `[ext]`         | extension including the leading dot         |
//! | `[query]`       | original query string including the `?`     |
//!
//! Hash placeholders accept a length suffix, e.g. `[contenthash:8]`.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Digest length used when a hash placeholder has no explicit length.
pub const DEFAULT_HASH_LENGTH: usize = 20;

/// Longest digest a placeholder may request (full BLAKE3 hex output).
const MAX_HASH_LENGTH: usize = 64;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([a-z]+)(?::(\d+))?\]").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Name,
    ContentHash(usize),
    Hash(usize),
    Ext,
    Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed filename template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilenameTemplate {
    source: String,
    segments: Vec<Segment>,
}

/// The file being named.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    pub name: &'a str,
    pub ext: &'a str,
    pub query: &'a str,
    pub content: &'a [u8],
}

impl<'a> FileContext<'a> {
    /// Build a context from a source path: stem for `[name]`, `.ext` for `[ext]`.
    pub fn from_path(path: &'a Path, content: &'a [u8]) -> Self {
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        // `[ext]` keeps the dot, so slice it off the full path instead of `extension()`
        let ext = match (path.to_str(), path.extension().and_then(|e| e.to_str())) {
            (Some(full), Some(e)) => &full[full.len() - e.len() - 1..],
            _ => "",
        };
        Self {
            name,
            ext,
            query: "",
            content,
        }
    }

    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }
}

impl FilenameTemplate {
    /// Parse a template, rejecting unknown placeholders.
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::{FileContext, FilenameTemplate};
    ///
    /// let template = FilenameTemplate::parse("js/[name].js").unwrap();
    /// let ctx = FileContext { name: "main", ext: ".js", query: "", content: b"" };
    /// assert_eq!(template.render(&ctx), "js/main.js");
    /// ```
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTemplate {
            template: source.to_string(),
            reason,
        };

        if source.trim().is_empty() {
            return Err(invalid("template is empty".to_string()));
        }

        let mut segments = Vec::new();
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(source[last..whole.start()].to_string()));
            }
            last = whole.end();

            let length = match caps.get(2) {
                Some(m) => Some(
                    m.as_str()
                        .parse::<usize>()
                        .map_err(|e| invalid(format!("bad length '{}': {e}", m.as_str())))?,
                ),
                None => None,
            };

            let placeholder = match (&caps[1], length) {
                ("name", None) => Placeholder::Name,
                ("ext", None) => Placeholder::Ext,
                ("query", None) => Placeholder::Query,
                ("contenthash", len) => Placeholder::ContentHash(hash_length(len).map_err(&invalid)?),
                ("hash", len) => Placeholder::Hash(hash_length(len).map_err(&invalid)?),
                (other, Some(_)) if matches!(other, "name" | "ext" | "query") => {
                    return Err(invalid(format!("[{other}] does not take a length")));
                }
                (other, _) => return Err(invalid(format!("unknown placeholder [{other}]"))),
            };
            segments.push(Segment::Placeholder(placeholder));
        }
        if last < source.len() {
            segments.push(Segment::Literal(source[last..].to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the rendered name depends on file content.
    pub fn is_content_addressed(&self) -> bool {
        self.segments.iter().any(|s| {
            matches!(
                s,
                Segment::Placeholder(Placeholder::ContentHash(_) | Placeholder::Hash(_))
            )
        })
    }

    /// Expand the template for one file.
    ///
    /// Deterministic: identical context yields an identical name.
    pub fn render(&self, ctx: &FileContext<'_>) -> String {
        let mut digest: Option<String> = None;
        let mut out = String::with_capacity(self.source.len() + DEFAULT_HASH_LENGTH);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::Name) => out.push_str(ctx.name),
                Segment::Placeholder(Placeholder::Ext) => out.push_str(ctx.ext),
                Segment::Placeholder(Placeholder::Query) => out.push_str(ctx.query),
                Segment::Placeholder(Placeholder::ContentHash(len) | Placeholder::Hash(len)) => {
                    let hex = digest.get_or_insert_with(|| content_digest(ctx.content));
                    out.push_str(&hex[..*len]);
                }
            }
        }

        out
    }
}

fn hash_length(requested: Option<usize>) -> Result<usize, String> {
    match requested {
        None => Ok(DEFAULT_HASH_LENGTH),
        Some(0) => Err("hash length must be at least 1".to_string()),
        Some(n) if n > MAX_HASH_LENGTH => {
            Err(format!("hash length {n} exceeds {MAX_HASH_LENGTH}"))
        }
        Some(n) => Ok(n),
    }
}

/// Full hex BLAKE3 digest of `content`.
pub fn content_digest(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for FilenameTemplate {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FilenameTemplate> for String {
    fn from(template: FilenameTemplate) -> Self {
        template.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(name: &'a str, ext: &'a str, content: &'a [u8]) -> FileContext<'a> {
        FileContext {
            name,
            ext,
            query: "",
            content,
        }
    }

    #[test]
    fn named_template_is_human_readable() {
        let template = FilenameTemplate::parse("css/[name].css").unwrap();
        assert!(!template.is_content_addressed());
        assert_eq!(template.render(&ctx("main", ".css", b"a{}")), "css/main.css");
    }

    #[test]
    fn content_hash_is_stable_for_identical_bytes() {
        let template = FilenameTemplate::parse("js/[contenthash].js").unwrap();
        let a = template.render(&ctx("main", ".js", b"console.log(1)"));
        let b = template.render(&ctx("other", ".js", b"console.log(1)"));
        assert_eq!(a, b);
        assert_eq!(a.len(), "js/".len() + DEFAULT_HASH_LENGTH + ".js".len());
    }

    #[test]
    fn content_hash_changes_with_content() {
        let template = FilenameTemplate::parse("js/[contenthash].js").unwrap();
        let a = template.render(&ctx("main", ".js", b"console.log(1)"));
        let b = template.render(&ctx("main", ".js", b"console.log(2)"));
        assert_ne!(a, b);
    }

    #[test]
    fn asset_template_keeps_extension_and_query() {
        let template = FilenameTemplate::parse("assets/[hash][ext][query]").unwrap();
        let path = Path::new("src/assets/logo.png");
        let rendered = template.render(&FileContext::from_path(path, b"png").with_query("?v=2"));
        assert!(rendered.starts_with("assets/"));
        assert!(rendered.ends_with(".png?v=2"));
    }

    #[test]
    fn explicit_hash_length() {
        let template = FilenameTemplate::parse("[name].[contenthash:8].js").unwrap();
        let rendered = template.render(&ctx("app", ".js", b"x"));
        assert_eq!(rendered.len(), "app.".len() + 8 + ".js".len());
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let err = FilenameTemplate::parse("js/[chunkhash].js").unwrap_err();
        assert!(err.to_string().contains("unknown placeholder [chunkhash]"));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(FilenameTemplate::parse("[hash:0]").is_err());
        assert!(FilenameTemplate::parse("[hash:65]").is_err());
        assert!(FilenameTemplate::parse("[name:4]").is_err());
        assert!(FilenameTemplate::parse("  ").is_err());
    }

    #[test]
    fn serde_uses_source_string() {
        let template = FilenameTemplate::parse("css/[contenthash].css").unwrap();
        let json = serde_json::to_string(&template).unwrap();
        assert_eq!(json, "\"css/[contenthash].css\"");
        let back: FilenameTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
