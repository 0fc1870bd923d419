use path_schema::{Opening, OpeningStat, PathNode};
use tracing::debug;

use crate::{build_path_with_options, LayoutError, LayoutOptions};

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    openings: Vec<Opening>,
    stats: Vec<OpeningStat>,
}

/// Keeps the last laid-out path and rebuilds only when the catalog or the
/// stats differ from the previous call.
#[derive(Debug, Clone, Default)]
pub struct PathLayoutCache {
    options: LayoutOptions,
    key: Option<CacheKey>,
    nodes: Vec<PathNode>,
    builds: usize,
}

impl PathLayoutCache {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replaces the options. The cached path is dropped if they changed.
    pub fn set_options(&mut self, options: LayoutOptions) {
        if self.options != options {
            self.options = options;
            self.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.nodes.clear();
    }

    /// Number of full rebuilds performed so far.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    pub fn get_or_build(
        &mut self,
        openings: &[Opening],
        stats: &[OpeningStat],
    ) -> Result<&[PathNode], LayoutError> {
        let hit = self
            .key
            .as_ref()
            .is_some_and(|k| k.openings == openings && k.stats == stats);

        if !hit {
            let nodes = build_path_with_options(openings, stats, &self.options)?;
            self.builds += 1;
            debug!(builds = self.builds, nodes = nodes.len(), "path cache rebuilt");
            self.nodes = nodes;
            self.key = Some(CacheKey {
                openings: openings.to_vec(),
                stats: stats.to_vec(),
            });
        }

        Ok(&self.nodes)
    }
}
