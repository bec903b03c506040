//! Page descriptors and document assembly.

use std::fmt::Write;

use crate::template::render;

/// Metadata identifying one guide page to generate.
///
/// The `name` doubles as the path segment for both the source
/// (`<source_dir>/<name>/README.md`) and the output
/// (`<output_dir>/<name>/index.html`), so it must be unique within a
/// guide list. List position determines the "next section" link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Unique name, used as a path segment.
    pub name: String,
    /// Title shown in navigation links and the index listing.
    pub title: String,
    /// Optional page description.
    pub description: Option<String>,
}

impl PageDescriptor {
    /// Create a descriptor without a description.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A standalone post with explicit source and destination paths.
///
/// Posts are not part of the guide sequence and get no navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDescriptor {
    /// Markdown source path, relative to the project root.
    pub source: String,
    /// Output path, relative to the project root.
    pub destination: String,
}

impl PostDescriptor {
    /// Create a post descriptor.
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Build the "next section" link for a guide page.
///
/// Returns the empty string when `next` is `None` (the last guide).
/// The target is relative: guide pages live one directory below the
/// guide root, so the successor is reached via `../<name>`.
#[must_use]
pub fn next_guide_link(next: Option<&PageDescriptor>) -> String {
    match next {
        Some(next) => format!(
            "Next section: <a href=\"../{}\">{}</a>",
            next.name, next.title
        ),
        None => String::new(),
    }
}

/// Assemble a complete guide document from its parts.
///
/// Substitutes the rendered body, title, description (empty string when
/// absent), and the computed navigation link into `template`.
#[must_use]
pub fn assemble_page(
    descriptor: &PageDescriptor,
    body: &str,
    template: &str,
    next: Option<&PageDescriptor>,
) -> String {
    let nav = next_guide_link(next);
    render(
        template,
        &[
            ("body", body),
            ("title", &descriptor.title),
            ("description", descriptor.description.as_deref().unwrap_or("")),
            ("next_guide", &nav),
        ],
    )
}

/// Build the index listing: one `<li>` link per guide, in order.
#[must_use]
pub fn index_listing(guides: &[PageDescriptor]) -> String {
    let mut items = String::new();
    for guide in guides {
        let _ = write!(
            items,
            "<li><a href=\"{}\">{}</a></li>",
            guide.name, guide.title
        );
    }
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::template::GUIDE_TEMPLATE;

    #[test]
    fn nav_link_points_to_successor() {
        let next = PageDescriptor::new("02-run-script", "Run script");
        let link = next_guide_link(Some(&next));

        assert_eq!(
            link,
            "Next section: <a href=\"../02-run-script\">Run script</a>"
        );
    }

    #[test]
    fn nav_link_empty_for_last_page() {
        assert_eq!(next_guide_link(None), "");
    }

    #[test]
    fn assemble_fills_every_placeholder() {
        let descriptor =
            PageDescriptor::new("01-hello-world", "Hello, world!").with_description("First steps");
        let next = PageDescriptor::new("02-run-script", "Run script");

        let page = assemble_page(&descriptor, "<p>body</p>", GUIDE_TEMPLATE, Some(&next));

        assert!(page.contains("<p>body</p>"));
        assert!(page.contains("title: Hello, world!"));
        assert!(page.contains("description: First steps"));
        assert!(page.contains("<a href=\"../02-run-script\">Run script</a>"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn assemble_without_description_leaves_field_empty() {
        let descriptor = PageDescriptor::new("01-hello-world", "Hello, world!");

        let page = assemble_page(&descriptor, "<p>x</p>", GUIDE_TEMPLATE, None);

        // The description line survives with an empty value.
        assert!(page.contains("description: \n"));
    }

    #[test]
    fn assemble_last_page_has_empty_nav_div() {
        let descriptor = PageDescriptor::new("06-looping", "Looping");

        let page = assemble_page(&descriptor, "<p>x</p>", GUIDE_TEMPLATE, None);

        assert!(page.contains("<div class=\"next-guide\"></div>"));
    }

    #[test]
    fn index_listing_preserves_order() {
        let guides = vec![
            PageDescriptor::new("01-hello-world", "Hello, world!"),
            PageDescriptor::new("02-run-script", "Run script"),
        ];

        let listing = index_listing(&guides);

        assert_eq!(
            listing,
            "<li><a href=\"01-hello-world\">Hello, world!</a></li>\
             <li><a href=\"02-run-script\">Run script</a></li>"
        );
    }

    #[test]
    fn index_listing_empty_for_no_guides() {
        assert_eq!(index_listing(&[]), "");
    }
}
