use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "readmeConfig.json";
pub const DEFAULT_TEMPLATE_FILE: &str = "templateReadme.md";
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

/// Contents of `readmeConfig.json`. Read once per run and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConfig {
    /// Content root, relative to the project root.
    pub base_url: String,
    /// Folder names skipped along with everything below them.
    #[serde(default)]
    pub exclude: HashSet<String>,
    /// Folder names listed first, in this order.
    #[serde(default)]
    pub order: Vec<String>,
}

/// A template with the rendered index spliced in.
#[derive(Debug)]
pub struct RenderedDocument {
    pub content: String,
    pub placeholder_found: bool,
}

/// What a successful `update` wrote.
#[derive(Debug)]
pub struct UpdateReport {
    pub output: PathBuf,
    pub bytes_written: usize,
    pub placeholder_found: bool,
}
