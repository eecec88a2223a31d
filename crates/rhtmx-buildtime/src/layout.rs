// File: src/layout.rs
// Purpose: Layout file detection and layout records

use std::path::Path;

use crate::context::{BuildContext, BuildLayout, BuildOptions, LayoutKind};
use crate::fs::{is_page_module_file_name, split_extension};
use crate::route::route_id;

/// Parses a layout stem into its kind and optional name
///
/// Recognized stems:
/// - `layout` → nested, unnamed
/// - `layout!` → top, unnamed
/// - `layout-admin` / `layout-admin!` → named "admin"
/// - `_<dir_name>` → the directory's own layout, nested and unnamed
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::layout::parse_layout_stem;
/// use rhtmx_buildtime::LayoutKind;
///
/// assert_eq!(parse_layout_stem("blog", "layout"), Some((LayoutKind::Nested, None)));
/// assert_eq!(parse_layout_stem("blog", "layout!"), Some((LayoutKind::Top, None)));
/// assert_eq!(
///     parse_layout_stem("blog", "layout-wide"),
///     Some((LayoutKind::Nested, Some("wide".to_string())))
/// );
/// assert_eq!(parse_layout_stem("blog", "_blog"), Some((LayoutKind::Nested, None)));
/// assert_eq!(parse_layout_stem("blog", "_docs"), None);
/// ```
pub fn parse_layout_stem(dir_name: &str, stem: &str) -> Option<(LayoutKind, Option<String>)> {
    if !dir_name.is_empty() && stem.strip_prefix('_') == Some(dir_name) {
        return Some((LayoutKind::Nested, None));
    }

    let (stem, kind) = match stem.strip_suffix('!') {
        Some(base) => (base, LayoutKind::Top),
        None => (stem, LayoutKind::Nested),
    };

    match stem.strip_prefix("layout") {
        Some("") => Some((kind, None)),
        Some(rest) => rest
            .strip_prefix('-')
            .filter(|name| !name.is_empty())
            .map(|name| (kind, Some(name.to_string()))),
        None => None,
    }
}

/// Whether `file_name` inside directory `dir_name` is a layout
pub fn is_layout_file_name(opts: &BuildOptions, dir_name: &str, file_name: &str) -> bool {
    if !is_page_module_file_name(opts, file_name) {
        return false;
    }
    let (stem, _) = split_extension(file_name);
    parse_layout_stem(dir_name, stem).is_some()
}

/// Creates the layout record for a file already known to be a layout
pub fn create_layout(
    ctx: &BuildContext,
    dir_path: &Path,
    dir_name: &str,
    file_path: &Path,
) -> BuildLayout {
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let (stem, _) = split_extension(&file_name);
    let (kind, name) = parse_layout_stem(dir_name, stem).unwrap_or((LayoutKind::Nested, None));

    BuildLayout {
        id: route_id(&ctx.opts, file_path),
        file_path: file_path.to_path_buf(),
        dir_path: dir_path.to_path_buf(),
        name,
        kind,
    }
}
