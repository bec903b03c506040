//! Page assembly and build pipeline for guidebook.
//!
//! This crate provides:
//! - [`render`]: placeholder substitution over page templates
//! - [`PageDescriptor`] / [`PostDescriptor`]: the page metadata model
//! - [`with_successors`]: pairs each guide with its successor for
//!   "next section" links
//! - [`SiteBuilder`]: the sequential read → convert → assemble → write
//!   pipeline
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use guidebook_renderer::ApiRenderer;
//! use guidebook_site::{PageDescriptor, SiteBuilder, SiteOptions};
//! use guidebook_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new("."));
//! let renderer = Box::new(ApiRenderer::new("https://api.github.com", "user/repo"));
//! let builder = SiteBuilder::new(storage, renderer, SiteOptions::default());
//!
//! let guides = vec![
//!     PageDescriptor::new("01-hello-world", "Hello, world!"),
//!     PageDescriptor::new("02-run-script", "Run script"),
//! ];
//! let summary = builder.build(&guides, &[])?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod page;
mod sequence;
mod template;

pub use builder::{BuildError, BuildSummary, SiteBuilder, SiteOptions};
pub use page::{PageDescriptor, PostDescriptor, assemble_page, index_listing, next_guide_link};
pub use sequence::with_successors;
pub use template::{GUIDE_TEMPLATE, INDEX_TEMPLATE, POST_TEMPLATE, render};
