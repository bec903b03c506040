//! Markdown conversion trait and error types.

/// Error returned by Markdown conversion.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Transport-level HTTP failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),
    /// The API answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },
    /// The response body could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Converts raw Markdown text to an HTML fragment.
///
/// One synchronous, potentially-failing call per page. No retries are
/// built in; a failed conversion is fatal for the page being built.
pub trait MarkdownConverter {
    /// Convert Markdown text to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the conversion does not succeed.
    fn convert(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Remove literal `<br>` sequences from a rendered fragment.
///
/// The rendering API emits hard `<br>` tags for single newlines inside
/// paragraphs, which breaks flowed text in the page layout. Stripping
/// them restores normal paragraph wrapping.
#[must_use]
pub fn strip_line_breaks(html: &str) -> String {
    html.replace("<br>", "")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strip_removes_all_br_tags() {
        let html = "<p>one<br>two</p><br><p>three</p>";
        assert_eq!(strip_line_breaks(html), "<p>onetwo</p><p>three</p>");
    }

    #[test]
    fn strip_leaves_other_markup_alone() {
        let html = "<p>no breaks here</p>";
        assert_eq!(strip_line_breaks(html), html);
    }

    #[test]
    fn strip_ignores_self_closing_variant() {
        // Only the literal "<br>" form is produced by the API.
        let html = "<p>a<br/>b</p>";
        assert_eq!(strip_line_breaks(html), html);
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::Api {
            status: 403,
            body: "rate limited".to_owned(),
        };
        assert_eq!(err.to_string(), "API error: HTTP 403: rate limited");
    }
}
