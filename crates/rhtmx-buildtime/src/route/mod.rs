//! Route module for file-based routing
//!
//! Turns paths inside the routes directory into URL patterns and ids.

pub mod parser;
pub mod pattern;

use std::path::Path;

use crate::context::BuildOptions;
use crate::fs::split_extension;

pub use parser::{calculate_priority, parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, is_index_stem, parse_layout_selector, PatternSegmentType};

/// Stable id for a file: its routes-relative path without extension
///
/// `src/routes/blog/[id]/index.tsx` → `blog/[id]/index`
pub fn route_id(opts: &BuildOptions, file_path: &Path) -> String {
    let relative = opts.relative_path(file_path);
    match relative.rsplit_once('/') {
        Some((dir, file_name)) => format!("{}/{}", dir, split_extension(file_name).0),
        None => split_extension(&relative).0.to_string(),
    }
}

/// Parses the URL pattern for a route file, applying base path and trailing slash
pub fn route_pattern(opts: &BuildOptions, file_path: &Path) -> ParsedPattern {
    parse_with_options(opts, &route_id(opts, file_path))
}

/// URL pattern for a directory inside the routes directory
pub fn directory_pattern(opts: &BuildOptions, dir_path: &Path) -> ParsedPattern {
    parse_with_options(opts, &opts.relative_path(dir_path))
}

fn parse_with_options(opts: &BuildOptions, relative: &str) -> ParsedPattern {
    let mut parsed = parse_pattern(relative);
    parsed.pattern = apply_options(opts, &parsed.pattern);
    parsed
}

fn apply_options(opts: &BuildOptions, pattern: &str) -> String {
    let base = opts
        .base_path
        .as_deref()
        .map(crate::fs::normalize_path)
        .filter(|b| &**b != "/");

    let mut pattern = match base {
        Some(base) if pattern == "/" => base.into_owned(),
        Some(base) => format!("{}{}", base, pattern),
        None => pattern.to_string(),
    };

    if opts.trailing_slash && pattern != "/" {
        pattern.push('/');
    }
    pattern
}
