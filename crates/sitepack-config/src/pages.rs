//! Page template discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// One page template and the HTML file it renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub source_template_path: PathBuf,
    pub output_filename: String,
}

/// List the page templates directly inside `pages_dir`.
///
/// Only regular files whose extension equals `extension` (case-sensitive,
/// without the leading dot) are kept, in directory-listing order. An empty
/// directory yields an empty list.
///
/// # Errors
///
/// Returns a [`DiscoveryError`] when `pages_dir` is missing, is not a
/// directory, or cannot be listed.
pub fn discover_pages(
    pages_dir: &Path,
    extension: &str,
) -> Result<Vec<PageDescriptor>, DiscoveryError> {
    let metadata = fs::metadata(pages_dir).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DiscoveryError::Missing {
                path: pages_dir.to_path_buf(),
            }
        } else {
            DiscoveryError::Unreadable {
                path: pages_dir.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: pages_dir.to_path_buf(),
        });
    }

    let unreadable = |source| DiscoveryError::Unreadable {
        path: pages_dir.to_path_buf(),
        source,
    };

    let mut pages = Vec::new();
    for entry in fs::read_dir(pages_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        if !entry.file_type().map_err(unreadable)?.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping page with non UTF-8 name");
            continue;
        };

        pages.push(PageDescriptor {
            output_filename: name.to_string(),
            source_template_path: path.clone(),
        });
    }

    tracing::debug!(
        dir = %pages_dir.display(),
        count = pages.len(),
        "discovered page templates"
    );

    Ok(pages)
}
