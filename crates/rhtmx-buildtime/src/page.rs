// File: src/page.rs
// Purpose: Page routes backed by a module or a markdown file

use std::path::Path;

use crate::context::{BuildContext, BuildRoute, PageSource, RouteKind};
use crate::fs::split_extension;
use crate::route::{parse_layout_selector, route_id, route_pattern};

/// Creates a page route tagged with where its content comes from
///
/// The file stem may select its layouts: `index@admin` asks for the
/// `layout-admin` layout, `index!` drops every inherited layout.
pub fn create_page_route(ctx: &BuildContext, file_path: &Path, source: PageSource) -> BuildRoute {
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let (stem, _) = split_extension(&file_name);
    let (_, layout_name, layout_stop) = parse_layout_selector(stem);

    let parsed = route_pattern(&ctx.opts, file_path);
    let priority = parsed.priority();

    BuildRoute {
        id: route_id(&ctx.opts, file_path),
        file_path: file_path.to_path_buf(),
        kind: RouteKind::Page(source),
        pattern: parsed.pattern,
        params: parsed.params,
        has_catch_all: parsed.has_catch_all,
        priority,
        layout_name: layout_name.map(str::to_string),
        layout_stop,
        layouts: Vec::new(),
    }
}
