//! Remote Markdown rendering for guidebook.
//!
//! This crate provides:
//! - [`MarkdownConverter`]: trait abstracting Markdown-to-HTML conversion
//! - [`ApiRenderer`]: client for a GitHub-style `/markdown` rendering API
//! - [`strip_line_breaks`]: post-processing applied to rendered fragments
//!
//! The build pipeline consumes the trait, so tests can substitute a stub
//! converter and never touch the network.

mod api;
mod converter;

pub use api::ApiRenderer;
pub use converter::{MarkdownConverter, RenderError, strip_line_breaks};
