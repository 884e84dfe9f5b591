use crate::app::models::RenderedDocument;
use std::path::Path;

/// Token in the template that receives the rendered index.
pub const PLACEHOLDER: &str = "{updateReadme}";

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Heading for a folder found while listing a directory at `depth` (1-based).
    pub fn heading(depth: usize, name: &str) -> String {
        match depth {
            0 | 1 => format!("## {}\n", name),
            2 => format!("### {}\n", name),
            _ => format!("\n#### {}\n", name),
        }
    }

    /// One list item linking to `file_name`, relative to the output document.
    pub fn link_line(source_base: &str, relative: &Path, file_name: &str) -> String {
        let title = file_name.strip_suffix(".md").unwrap_or(file_name);

        let mut segments: Vec<String> = source_base
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();
        segments.extend(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        );
        segments.push(file_name.to_string());

        let link = segments.join("/").replace(' ', "%20");
        format!("  - [{}](./{})\n", title, link)
    }

    /// Replaces the first placeholder. A template without one comes back unchanged.
    pub fn substitute(template: &str, fragment: &str) -> RenderedDocument {
        RenderedDocument {
            content: template.replacen(PLACEHOLDER, fragment, 1),
            placeholder_found: template.contains(PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_by_depth() {
        assert_eq!(MarkdownFormatter::heading(1, "a"), "## a\n");
        assert_eq!(MarkdownFormatter::heading(2, "b"), "### b\n");
        assert_eq!(MarkdownFormatter::heading(3, "c"), "\n#### c\n");
        assert_eq!(MarkdownFormatter::heading(7, "deep"), "\n#### deep\n");
    }

    #[test]
    fn link_joins_base_prefix_and_file() {
        let line = MarkdownFormatter::link_line("src", Path::new("a/b"), "example.md");
        assert_eq!(line, "  - [example](./src/a/b/example.md)\n");
    }

    #[test]
    fn link_normalizes_dot_base() {
        let line = MarkdownFormatter::link_line("./src", Path::new("troubleshooting"), "example1.md");
        assert_eq!(line, "  - [example1](./src/troubleshooting/example1.md)\n");
    }

    #[test]
    fn link_with_empty_base_and_prefix() {
        let line = MarkdownFormatter::link_line("", Path::new(""), "top.md");
        assert_eq!(line, "  - [top](./top.md)\n");
    }

    #[test]
    fn link_converts_backslashes() {
        let line = MarkdownFormatter::link_line(r"docs\notes", Path::new(""), "x.md");
        assert_eq!(line, "  - [x](./docs/notes/x.md)\n");
    }

    #[test]
    fn spaces_are_percent_encoded_in_link_only() {
        let line = MarkdownFormatter::link_line("src", Path::new("dev notes"), "my note.md");
        assert_eq!(line, "  - [my note](./src/dev%20notes/my%20note.md)\n");
        assert!(!line.contains("(./src/dev notes"));
    }

    #[test]
    fn other_characters_are_left_alone() {
        let line = MarkdownFormatter::link_line("src", Path::new(""), "a&b#c.md");
        assert_eq!(line, "  - [a&b#c](./src/a&b#c.md)\n");
    }

    #[test]
    fn substitute_replaces_only_first_placeholder() {
        let doc = MarkdownFormatter::substitute("x {updateReadme} y {updateReadme}", "LIST");
        assert_eq!(doc.content, "x LIST y {updateReadme}");
        assert!(doc.placeholder_found);
    }

    #[test]
    fn substitute_without_placeholder_is_noop() {
        let template = "# Title\n\nNo index here.\n";
        let doc = MarkdownFormatter::substitute(template, "LIST");
        assert_eq!(doc.content, template);
        assert!(!doc.placeholder_found);
    }
}
