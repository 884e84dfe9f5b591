pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use pathdiff::diff_paths;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use self::cli::Cli;
use self::config::{load_config, resolve_source_root};
use self::error::IndexError;
use self::formatter::MarkdownFormatter;
use self::models::{RenderedDocument, UpdateReport};
use self::scanner::Scanner;

/// Loads the config, renders the notes tree and splices it into the template.
/// Every path is resolved against `root`.
pub struct ReadmeUpdater {
    root: PathBuf,
    config_path: PathBuf,
    template_path: PathBuf,
    output_path: PathBuf,
}

impl ReadmeUpdater {
    pub fn new(root: PathBuf, config: &Path, template: &Path, output: &Path) -> Self {
        Self {
            config_path: root.join(config),
            template_path: root.join(template),
            output_path: root.join(output),
            root,
        }
    }

    /// Everything up to, but not including, the write.
    pub fn render_document(&self) -> Result<RenderedDocument, IndexError> {
        let config = load_config(&self.config_path)?;
        let source_root = resolve_source_root(&self.root, &config, &self.config_path)?;

        let link_base = self.link_base(&source_root, &config.base_url);
        let fragment = Scanner::new(link_base, &config.exclude, &config.order)
            .render_root(&source_root)?;

        let template =
            fs::read_to_string(&self.template_path).map_err(|source| IndexError::Template {
                path: self.template_path.clone(),
                source,
            })?;

        Ok(MarkdownFormatter::substitute(&template, &fragment))
    }

    /// Renders and overwrites the output document with a single write.
    pub fn update(&self) -> Result<UpdateReport, IndexError> {
        let document = self.render_document()?;
        fs::write(&self.output_path, &document.content)
            .map_err(|e| IndexError::filesystem(&self.output_path, e))?;

        Ok(UpdateReport {
            output: self.output_path.clone(),
            bytes_written: document.content.len(),
            placeholder_found: document.placeholder_found,
        })
    }

    /// Link prefix for the source root as seen from the output document's folder.
    /// Falls back to the configured `baseUrl` when no relative path exists.
    fn link_base(&self, source_root: &Path, base_url: &str) -> String {
        let output_dir = self.output_path.parent().unwrap_or(&self.root);
        diff_paths(source_root, output_dir)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_url.to_string())
    }
}

/// Parses the command line and regenerates (or previews) the output document.
pub fn run() -> Result<()> {
    execute(Cli::parse(), &mut io::stdout().lock())
}

/// `--stdout` sends the document to `out`; otherwise it is written to disk.
fn execute(args: Cli, out: &mut impl Write) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve project root {:?}", root))?;

    let updater = ReadmeUpdater::new(root, &args.config, &args.template, &args.output);

    if args.stdout {
        let document = updater.render_document()?;
        warn_missing_placeholder(document.placeholder_found, &updater.template_path);
        out.write_all(document.content.as_bytes())
            .context("Failed to print rendered document")?;
        return Ok(());
    }

    let report = updater.update()?;
    warn_missing_placeholder(report.placeholder_found, &updater.template_path);
    log::info!("Wrote {} bytes to {:?}", report.bytes_written, report.output);

    Ok(())
}

fn warn_missing_placeholder(found: bool, template: &Path) {
    if !found {
        log::warn!(
            "No {} placeholder in {:?}; template copied unchanged",
            formatter::PLACEHOLDER,
            template
        );
    }
}
