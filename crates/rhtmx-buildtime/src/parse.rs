// File: src/parse.rs
// Purpose: Classifies one routes-directory entry and records it on the build context

use std::path::Path;

use crate::context::{add_error, BuildContext, BuildOptions, PageSource};
use crate::endpoint::create_endpoint_route;
use crate::fs::{
    is_endpoint_file_name, is_ignored_name, is_markdown_file_name, is_page_file_name,
    is_test_dir_name, is_test_file_name,
};
use crate::layout::{create_layout, is_layout_file_name};
use crate::menu::{create_menu, is_menu_file_name};
use crate::page::create_page_route;

/// Role of a routes-directory entry
///
/// Variants are listed in precedence order: [`classify_entry`] returns the
/// first one whose convention matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEntryKind {
    /// Known noise (`node_modules`, `.DS_Store`, ...)
    Ignored,
    /// Any entry inside a `__tests__` directory
    TestDirectory,
    /// `*.test.*`, `*.spec.*`, `*.unit.*`
    TestFile,
    /// Any entry inside a directory whose name contains `@`
    NamedLayoutDirectory,
    Layout,
    Menu,
    Endpoint,
    MarkdownPage,
    ModulePage,
    /// No convention matched; left to the caller
    Unrecognized,
}

/// Decides the role of `file_name` inside directory `dir_name` (pure function)
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::{classify_entry, BuildOptions, FsEntryKind};
///
/// let opts = BuildOptions::default();
/// assert_eq!(classify_entry(&opts, "blog", "layout.tsx"), FsEntryKind::Layout);
/// assert_eq!(classify_entry(&opts, "blog", "index.md"), FsEntryKind::MarkdownPage);
/// assert_eq!(classify_entry(&opts, "@admin", "index.tsx"), FsEntryKind::NamedLayoutDirectory);
/// assert_eq!(classify_entry(&opts, "blog", "random.txt"), FsEntryKind::Unrecognized);
/// ```
pub fn classify_entry(opts: &BuildOptions, dir_name: &str, file_name: &str) -> FsEntryKind {
    if is_ignored_name(file_name) {
        FsEntryKind::Ignored
    } else if is_test_dir_name(dir_name) {
        FsEntryKind::TestDirectory
    } else if is_test_file_name(opts, file_name) {
        FsEntryKind::TestFile
    } else if dir_name.contains('@') {
        FsEntryKind::NamedLayoutDirectory
    } else if is_layout_file_name(opts, dir_name, file_name) {
        FsEntryKind::Layout
    } else if is_menu_file_name(file_name) {
        FsEntryKind::Menu
    } else if is_endpoint_file_name(opts, file_name) {
        FsEntryKind::Endpoint
    } else if is_markdown_file_name(opts, file_name) {
        FsEntryKind::MarkdownPage
    } else if is_page_file_name(opts, file_name) {
        FsEntryKind::ModulePage
    } else {
        FsEntryKind::Unrecognized
    }
}

/// Classifies one entry and records the outcome on `ctx`
///
/// Returns `true` when the entry was consumed, including when it was
/// rejected with an error. `false` leaves the entry to the caller, which
/// treats it as a static asset or descends into it.
///
/// Every call appends; classifying the same entry twice records it twice.
pub fn parse_file_system(
    ctx: &mut BuildContext,
    dir_path: &Path,
    dir_name: &str,
    file_path: &Path,
    file_name: &str,
) -> bool {
    let kind = classify_entry(&ctx.opts, dir_name, file_name);
    tracing::debug!("{:?} -> {:?}", file_path, kind);

    match kind {
        FsEntryKind::Ignored => {}
        FsEntryKind::TestDirectory => add_error(
            ctx,
            format!(
                "Test directory \"{}\" should not be included within the routes directory. Please move test directories to a different location.",
                file_path.display()
            ),
        ),
        FsEntryKind::TestFile => add_error(
            ctx,
            format!(
                "Test file \"{}\" should not be included within the routes directory. Please move test files to a different location.",
                file_path.display()
            ),
        ),
        FsEntryKind::NamedLayoutDirectory => add_error(
            ctx,
            format!(
                "Route directories cannot have a named layout. Please change the named layout from the directory \"{}\" to a file.",
                dir_path.display()
            ),
        ),
        FsEntryKind::Layout => {
            let layout = create_layout(ctx, dir_path, dir_name, file_path);
            ctx.layouts.push(layout);
        }
        FsEntryKind::Menu => {
            let menu = create_menu(ctx, file_path);
            ctx.menus.push(menu);
        }
        FsEntryKind::Endpoint => {
            let route = create_endpoint_route(ctx, file_path);
            ctx.routes.push(route);
        }
        FsEntryKind::MarkdownPage => {
            let route = create_page_route(ctx, file_path, PageSource::Markdown);
            ctx.routes.push(route);
        }
        FsEntryKind::ModulePage => {
            let route = create_page_route(ctx, file_path, PageSource::Module);
            ctx.routes.push(route);
        }
        FsEntryKind::Unrecognized => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("__tests__", "index.tsx", FsEntryKind::TestDirectory)]
    #[case("__tests__", "node_modules", FsEntryKind::Ignored)]
    #[case("blog", "index.test.tsx", FsEntryKind::TestFile)]
    #[case("@admin", "index.test.tsx", FsEntryKind::TestFile)]
    #[case("@admin", "layout.tsx", FsEntryKind::NamedLayoutDirectory)]
    #[case("blog", "layout.tsx", FsEntryKind::Layout)]
    #[case("blog", "menu.md", FsEntryKind::Menu)]
    #[case("api", "index.ts", FsEntryKind::Endpoint)]
    #[case("blog", "post.mdx", FsEntryKind::MarkdownPage)]
    #[case("blog", "about.jsx", FsEntryKind::ModulePage)]
    #[case("blog", "logo.svg", FsEntryKind::Unrecognized)]
    fn test_classify_precedence(
        #[case] dir_name: &str,
        #[case] file_name: &str,
        #[case] expected: FsEntryKind,
    ) {
        let opts = BuildOptions::default();
        assert_eq!(classify_entry(&opts, dir_name, file_name), expected);
    }

    #[test]
    fn test_layout_wins_over_page() {
        // layout.tsx is also a valid page file name
        let opts = BuildOptions::default();
        assert!(is_page_file_name(&opts, "layout.tsx"));
        assert_eq!(classify_entry(&opts, "docs", "layout.tsx"), FsEntryKind::Layout);
    }

    #[test]
    fn test_menu_wins_over_markdown() {
        let opts = BuildOptions::default();
        assert_eq!(classify_entry(&opts, "docs", "menu.md"), FsEntryKind::Menu);
    }
}
