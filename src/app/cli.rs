use crate::app::models::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Regenerate README.md from a folder of markdown notes"
)]
pub struct Cli {
    /// Project root that the other paths are resolved against (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// JSON file with baseUrl, exclude and order
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Template containing the {updateReadme} placeholder
    #[arg(long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Document to overwrite with the rendered template
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Print the rendered document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}
