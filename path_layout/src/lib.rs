use path_schema::{Opening, OpeningStat, PathNode};
use tracing::debug;

mod cache;
mod error;
mod generate;
mod options;
mod sort;
mod summary;

pub use cache::PathLayoutCache;
pub use error::{LayoutError, LayoutErrorKind};
pub use generate::{classify, unit_theme, UnitTheme, UNIT_THEMES};
pub use options::LayoutOptions;
pub use sort::{current_index, sort_openings};
pub use summary::PathSummary;

/// Lays out the lesson path with the default geometry.
///
/// Cannot fail: the default options are always valid, missing stats mean "no
/// progress", and an empty catalog yields an empty path.
pub fn build_path(openings: &[Opening], stats: &[OpeningStat]) -> Vec<PathNode> {
    layout(openings, stats, &LayoutOptions::default())
}

pub fn build_path_with_options(
    openings: &[Opening],
    stats: &[OpeningStat],
    options: &LayoutOptions,
) -> Result<Vec<PathNode>, LayoutError> {
    options.validate()?;
    Ok(layout(openings, stats, options))
}

fn layout(openings: &[Opening], stats: &[OpeningStat], options: &LayoutOptions) -> Vec<PathNode> {
    let sorted = sort_openings(openings);
    let stat_index = sort::index_stats(stats);
    let current = sort::current_index_in(&sorted, &stat_index);
    debug!(
        openings = sorted.len(),
        stats = stat_index.len(),
        current_index = current,
        "building lesson path"
    );

    let nodes = generate::layout_nodes(&sorted, &stat_index, current, options);
    debug!(nodes = nodes.len(), "lesson path built");
    nodes
}
