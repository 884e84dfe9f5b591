use crate::app::error::IndexError;
use crate::app::formatter::MarkdownFormatter;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Immediate children of one directory that the index cares about.
pub struct Listing {
    /// Raw names, so non-UTF-8 folders can still be descended into.
    pub folders: Vec<OsString>,
    /// `.md` files, sorted.
    pub files: Vec<String>,
}

type Lister = fn(&Path) -> Result<Listing, IndexError>;

/// Renders a directory of notes into a nested markdown index.
pub struct Scanner<'a> {
    source_base: String,
    exclude: &'a HashSet<String>,
    order: &'a [String],
    lister: Lister,
}

impl<'a> Scanner<'a> {
    /// `source_base` is prepended to every link so it resolves from the output document.
    pub fn new(
        source_base: impl Into<String>,
        exclude: &'a HashSet<String>,
        order: &'a [String],
    ) -> Self {
        Self {
            source_base: source_base.into(),
            exclude,
            order,
            lister: list_dir,
        }
    }

    #[cfg(test)]
    fn with_lister(mut self, lister: Lister) -> Self {
        self.lister = lister;
        self
    }

    pub fn render_root(&self, dir: &Path) -> Result<String, IndexError> {
        self.render(dir, Path::new(""), 1)
    }

    /// Subfolder blocks first (priority order), then this directory's own notes.
    /// Folders that end up empty get no heading.
    pub fn render(&self, dir: &Path, relative: &Path, depth: usize) -> Result<String, IndexError> {
        let Listing { folders, files } = (self.lister)(dir)?;
        let mut markdown = String::new();

        for folder in order_folders(folders, self.order) {
            let label = folder.to_string_lossy();
            // Must happen before recursing: excluded trees are never read.
            if self.exclude.contains(&*label) {
                log::debug!("Skipping excluded folder {:?}", dir.join(&folder));
                continue;
            }

            let nested = self.render(&dir.join(&folder), &relative.join(&folder), depth + 1)?;
            if nested.is_empty() {
                continue;
            }
            markdown.push_str(&MarkdownFormatter::heading(depth, &label));
            markdown.push_str(&nested);
        }

        for file in &files {
            markdown.push_str(&MarkdownFormatter::link_line(
                &self.source_base,
                relative,
                file,
            ));
        }

        Ok(markdown)
    }
}

/// Sorts sibling folders: listed names by their position in `order`, then the
/// rest by name.
pub fn order_folders<S: AsRef<OsStr>>(mut folders: Vec<S>, order: &[String]) -> Vec<S> {
    folders.sort_by(|a, b| compare_folders(a.as_ref(), b.as_ref(), order));
    folders
}

fn compare_folders(a: &OsStr, b: &OsStr, order: &[String]) -> Ordering {
    let rank = |name: &OsStr| order.iter().position(|o| OsStr::new(o) == name);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// One `read_dir` of `dir`. Other files are dropped.
fn list_dir(dir: &Path) -> Result<Listing, IndexError> {
    let fs_err = |e| IndexError::filesystem(dir, e);
    log::debug!("Listing {:?}", dir);

    let mut folders = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(fs_err)? {
        let entry = entry.map_err(fs_err)?;
        let file_type = entry.file_type().map_err(fs_err)?;

        if file_type.is_dir() {
            folders.push(entry.file_name());
        } else if file_type.is_file() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".md") {
                files.push(name);
            }
        }
    }

    files.sort();
    Ok(Listing { folders, files })
}
