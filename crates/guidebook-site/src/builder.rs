//! Sequential site build pipeline.
//!
//! [`SiteBuilder`] walks the ordered guide list and the standalone post
//! list, processing each page fully (read → convert → assemble → write)
//! before the next. The default policy is fail-fast: the first page
//! error aborts the run. With `continue_on_error` set, failures are
//! logged and collected instead.

use std::sync::Arc;

use guidebook_renderer::{MarkdownConverter, RenderError};
use guidebook_storage::{Storage, StorageError};
use tracing::{info, warn};

use crate::page::{PageDescriptor, PostDescriptor, assemble_page, index_listing};
use crate::sequence::with_successors;
use crate::template::{GUIDE_TEMPLATE, INDEX_TEMPLATE, POST_TEMPLATE, render};

/// Error for a single failed page build.
///
/// Carries the page identifier (guide name, post destination, or
/// "index") so the failing page can be reported.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Source file missing or unreadable.
    #[error("failed to read source for page '{page}': {source}")]
    Read {
        /// Page identifier.
        page: String,
        /// Underlying storage error.
        source: StorageError,
    },
    /// The Markdown rendering call did not succeed.
    #[error("failed to render page '{page}': {source}")]
    Render {
        /// Page identifier.
        page: String,
        /// Underlying renderer error.
        source: RenderError,
    },
    /// The output file could not be written.
    #[error("failed to write output for page '{page}': {source}")]
    Write {
        /// Page identifier.
        page: String,
        /// Underlying storage error.
        source: StorageError,
    },
}

impl BuildError {
    /// The identifier of the page that failed.
    #[must_use]
    pub fn page(&self) -> &str {
        match self {
            Self::Read { page, .. } | Self::Render { page, .. } | Self::Write { page, .. } => page,
        }
    }
}

/// Result of a completed build run.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Number of pages written.
    pub pages_built: usize,
    /// Per-page failures, only populated with `continue_on_error`.
    pub failures: Vec<BuildError>,
}

impl BuildSummary {
    /// True when every page was built.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Options controlling a build run.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Guide source directory, relative to the storage root.
    pub source_dir: String,
    /// Guide output directory, relative to the storage root.
    pub output_dir: String,
    /// Site title for the index page.
    pub title: String,
    /// Site description for the index page.
    pub description: String,
    /// Keep building remaining pages when one page fails.
    pub continue_on_error: bool,
    /// Write an index page listing all guides.
    pub write_index: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            source_dir: "guides".to_owned(),
            output_dir: "site".to_owned(),
            title: String::new(),
            description: String::new(),
            continue_on_error: false,
            write_index: true,
        }
    }
}

/// Sequential site build pipeline.
///
/// Reads sources and writes outputs through a [`Storage`] backend and
/// converts Markdown through a [`MarkdownConverter`], so both seams can
/// be substituted in tests.
pub struct SiteBuilder {
    storage: Arc<dyn Storage>,
    converter: Box<dyn MarkdownConverter>,
    options: SiteOptions,
}

impl SiteBuilder {
    /// Create a builder.
    #[must_use]
    pub fn new(
        storage: Arc<dyn Storage>,
        converter: Box<dyn MarkdownConverter>,
        options: SiteOptions,
    ) -> Self {
        Self {
            storage,
            converter,
            options,
        }
    }

    /// Build the whole site: every guide in order, every post, and the
    /// index page.
    ///
    /// # Errors
    ///
    /// Fail-fast mode returns the first [`BuildError`]. With
    /// `continue_on_error`, returns `Ok` with failures collected in the
    /// [`BuildSummary`]; callers decide how to report them.
    pub fn build(
        &self,
        guides: &[PageDescriptor],
        posts: &[PostDescriptor],
    ) -> Result<BuildSummary, BuildError> {
        info!(guides = guides.len(), posts = posts.len(), "building site");
        let mut summary = BuildSummary::default();

        for (guide, next) in with_successors(guides) {
            self.step(&mut summary, self.build_guide(guide, next))?;
        }

        for post in posts {
            self.step(&mut summary, self.build_post(post))?;
        }

        if self.options.write_index {
            self.step(&mut summary, self.build_index(guides))?;
        }

        Ok(summary)
    }

    /// Record one page result, honoring the failure policy.
    fn step(
        &self,
        summary: &mut BuildSummary,
        result: Result<(), BuildError>,
    ) -> Result<(), BuildError> {
        match result {
            Ok(()) => {
                summary.pages_built += 1;
                Ok(())
            }
            Err(error) if self.options.continue_on_error => {
                warn!(%error, "page build failed, continuing");
                summary.failures.push(error);
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Build one guide page.
    fn build_guide(
        &self,
        guide: &PageDescriptor,
        next: Option<&PageDescriptor>,
    ) -> Result<(), BuildError> {
        info!(page = %guide.name, "building guide");

        let source_path = format!("{}/{}/README.md", self.options.source_dir, guide.name);
        let markdown = self
            .storage
            .read(&source_path)
            .map_err(|source| BuildError::Read {
                page: guide.name.clone(),
                source,
            })?;

        let body = self
            .converter
            .convert(&markdown)
            .map_err(|source| BuildError::Render {
                page: guide.name.clone(),
                source,
            })?;

        let document = assemble_page(guide, &body, GUIDE_TEMPLATE, next);

        let output_path = format!("{}/{}/index.html", self.options.output_dir, guide.name);
        self.storage
            .write(&output_path, &document)
            .map_err(|source| BuildError::Write {
                page: guide.name.clone(),
                source,
            })
    }

    /// Build one standalone post.
    fn build_post(&self, post: &PostDescriptor) -> Result<(), BuildError> {
        info!(page = %post.destination, "building post");

        let markdown = self
            .storage
            .read(&post.source)
            .map_err(|source| BuildError::Read {
                page: post.destination.clone(),
                source,
            })?;

        let body = self
            .converter
            .convert(&markdown)
            .map_err(|source| BuildError::Render {
                page: post.destination.clone(),
                source,
            })?;

        let document = render(POST_TEMPLATE, &[("body", &body)]);

        self.storage
            .write(&post.destination, &document)
            .map_err(|source| BuildError::Write {
                page: post.destination.clone(),
                source,
            })
    }

    /// Build the index page listing all guides in order.
    fn build_index(&self, guides: &[PageDescriptor]) -> Result<(), BuildError> {
        info!("building index");

        let listing = index_listing(guides);
        let document = render(
            INDEX_TEMPLATE,
            &[
                ("body", &listing),
                ("title", &self.options.title),
                ("description", &self.options.description),
            ],
        );

        let output_path = format!("{}/index.html", self.options.output_dir);
        self.storage
            .write(&output_path, &document)
            .map_err(|source| BuildError::Write {
                page: "index".to_owned(),
                source,
            })
    }
}
