//! `guidebook build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use guidebook_config::{CliSettings, Config, GuideEntry, PostEntry};
use guidebook_renderer::ApiRenderer;
use guidebook_site::{PageDescriptor, PostDescriptor, SiteBuilder, SiteOptions};
use guidebook_storage::FsStorage;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover guidebook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Guide source directory, relative to the project root (overrides config).
    #[arg(short, long)]
    source_dir: Option<String>,

    /// Guide output directory, relative to the project root (overrides config).
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Keep building remaining pages when one page fails.
    #[arg(long)]
    continue_on_error: bool,

    /// Enable verbose output (per-page build logs).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Map config guide entries to page descriptors, preserving order.
fn guide_descriptors(entries: &[GuideEntry]) -> Vec<PageDescriptor> {
    entries
        .iter()
        .map(|entry| PageDescriptor {
            name: entry.name.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
        })
        .collect()
}

/// Map config post entries to post descriptors.
fn post_descriptors(entries: &[PostEntry]) -> Vec<PostDescriptor> {
    entries
        .iter()
        .map(|entry| PostDescriptor::new(entry.source.clone(), entry.destination.clone()))
        .collect()
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if configuration loading or any page build
    /// fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            continue_on_error: self.continue_on_error.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let guides = guide_descriptors(&config.guides);
        let posts = post_descriptors(&config.posts);

        if guides.is_empty() && posts.is_empty() {
            output.warning("No guides or posts configured, nothing to build");
            return Ok(());
        }

        output.info(&format!(
            "Building {} guides and {} posts",
            guides.len(),
            posts.len()
        ));

        let storage = Arc::new(FsStorage::new(&config.paths_resolved.project_dir));
        let renderer = Box::new(ApiRenderer::with_timeout(
            &config.site.endpoint,
            &config.site.context,
            Duration::from_secs(config.site.timeout_secs),
        ));
        let options = SiteOptions {
            source_dir: config.paths_resolved.source_dir.clone(),
            output_dir: config.paths_resolved.output_dir.clone(),
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            continue_on_error: config.site.continue_on_error,
            write_index: config.site.write_index,
        };

        let builder = SiteBuilder::new(storage, renderer, options);
        let summary = builder.build(&guides, &posts)?;

        if summary.is_success() {
            output.success(&format!("Built {} pages", summary.pages_built));
            Ok(())
        } else {
            for failure in &summary.failures {
                output.warning(&failure.to_string());
            }
            Err(CliError::Failed(format!(
                "{} of {} pages failed",
                summary.failures.len(),
                summary.pages_built + summary.failures.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn guide_entries_map_in_order() {
        let entries = vec![
            GuideEntry {
                name: "01-hello-world".to_owned(),
                title: "Hello, world!".to_owned(),
                description: None,
            },
            GuideEntry {
                name: "02-run-script".to_owned(),
                title: "Run script".to_owned(),
                description: Some("Scripting".to_owned()),
            },
        ];

        let descriptors = guide_descriptors(&entries);

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "01-hello-world");
        assert_eq!(descriptors[1].description.as_deref(), Some("Scripting"));
    }

    #[test]
    fn post_entries_map_source_and_destination() {
        let entries = vec![PostEntry {
            source: "blog/post.md".to_owned(),
            destination: "_posts/2017-02-20-post.md".to_owned(),
        }];

        let descriptors = post_descriptors(&entries);

        assert_eq!(descriptors[0].source, "blog/post.md");
        assert_eq!(descriptors[0].destination, "_posts/2017-02-20-post.md");
    }
}
