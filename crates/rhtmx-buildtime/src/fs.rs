//! File naming conventions for the routes directory
//!
//! All functions are **pure**: they only look at names, never at the disk.

use std::borrow::Cow;

use crate::context::BuildOptions;

/// File and directory names that are skipped without a diagnostic
pub const IGNORE_FS_NAMES: [&str; 6] = [
    "node_modules",
    ".gitignore",
    ".gitattributes",
    ".gitkeep",
    ".DS_Store",
    "thumbs.db",
];

/// Directory name reserved for tests
pub const TEST_DIR_NAME: &str = "__tests__";

const TEST_STEM_SUFFIXES: [&str; 3] = [".test", ".spec", ".unit"];

/// Exact, case-sensitive match against [`IGNORE_FS_NAMES`]
pub fn is_ignored_name(name: &str) -> bool {
    IGNORE_FS_NAMES.contains(&name)
}

pub fn is_test_dir_name(dir_name: &str) -> bool {
    dir_name == TEST_DIR_NAME
}

/// Splits `name.ext` into `(name, Some(ext))`
///
/// Dotfiles such as `.gitkeep` have no extension.
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::fs::split_extension;
///
/// assert_eq!(split_extension("index.tsx"), ("index", Some("tsx")));
/// assert_eq!(split_extension("foo.test.ts"), ("foo.test", Some("ts")));
/// assert_eq!(split_extension(".gitkeep"), (".gitkeep", None));
/// assert_eq!(split_extension("README"), ("README", None));
/// ```
pub fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    }
}

fn has_extension(file_name: &str, extensions: &[String]) -> bool {
    split_extension(file_name)
        .1
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

/// `.tsx` / `.jsx` by default
pub fn is_page_module_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    has_extension(file_name, &opts.page_extensions)
}

/// Server-only request handler: `.ts` / `.js` by default
pub fn is_endpoint_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    has_extension(file_name, &opts.endpoint_extensions)
}

/// `.md` / `.mdx` by default
pub fn is_markdown_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    has_extension(file_name, &opts.markdown_extensions)
}

/// Page modules and markdown pages
pub fn is_page_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    is_page_module_file_name(opts, file_name) || is_markdown_file_name(opts, file_name)
}

fn is_route_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    is_page_file_name(opts, file_name) || is_endpoint_file_name(opts, file_name)
}

/// `foo.test.ts`, `bar.spec.tsx`, `baz.unit.md`
pub fn is_test_file_name(opts: &BuildOptions, file_name: &str) -> bool {
    if !is_route_file_name(opts, file_name) {
        return false;
    }
    let (stem, _) = split_extension(file_name);
    TEST_STEM_SUFFIXES
        .iter()
        .any(|suffix| stem.len() > suffix.len() && stem.ends_with(suffix))
}

/// Normalize a URL path to canonical form
///
/// Returns `Cow::Borrowed` when input is already canonical.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::fs::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("docs//"), "/docs");
/// assert_eq!(normalize_path("\\users\\123"), "/users/123");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

fn is_canonical_path(path: &str) -> bool {
    if !path.starts_with('/') || path.contains("//") || path.contains('\\') {
        return false;
    }
    path == "/" || !path.ends_with('/')
}
