//! Embedded template bundles for scaffold generation.

use include_dir::{Dir, include_dir};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/templates");

/// File names of the static site bundle, in write order.
const STATIC_SITE_FILES: [&str; 2] = ["Dockerfile", "nginx.conf"];

/// A file embedded in a template bundle.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// File name as written into the target directory.
    pub name: &'static str,
    /// Raw file content.
    pub content: &'static [u8],
}

/// Returns the static site bundle (Dockerfile, then nginx.conf).
pub fn static_site_bundle() -> Vec<TemplateFile> {
    STATIC_SITE_FILES
        .iter()
        .filter_map(|name| {
            TEMPLATE_DIR
                .get_file(format!("static/{name}"))
                .map(|file| TemplateFile { name, content: file.contents() })
        })
        .collect()
}
