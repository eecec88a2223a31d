// File: src/context.rs
// Purpose: Build context accumulated while walking the routes directory

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options controlling how the routes directory is interpreted
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory containing route files (e.g. "src/routes")
    pub routes_dir: PathBuf,
    /// Prefix for every generated pattern (e.g. "/app")
    pub base_path: Option<String>,
    /// Append `/` to every non-root pattern
    pub trailing_slash: bool,
    /// Extensions of page modules (without the dot)
    pub page_extensions: Vec<String>,
    /// Extensions of server-only endpoint modules
    pub endpoint_extensions: Vec<String>,
    /// Extensions of markdown pages
    pub markdown_extensions: Vec<String>,
}

impl BuildOptions {
    /// Options with default naming conventions for the given routes directory
    pub fn new(routes_dir: impl Into<PathBuf>) -> Self {
        Self {
            routes_dir: routes_dir.into(),
            base_path: None,
            trailing_slash: false,
            page_extensions: to_strings(&["tsx", "jsx"]),
            endpoint_extensions: to_strings(&["ts", "js"]),
            markdown_extensions: to_strings(&["md", "mdx"]),
        }
    }

    /// Set the base path prepended to all patterns
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Enable or disable trailing slashes on generated patterns
    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    /// Path of `path` relative to the routes directory, `/`-separated
    pub fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.routes_dir).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new("src/routes")
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Severity of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Error,
    Warning,
}

/// A human-readable message recorded during the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// How a layout participates in inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Wraps nested routes together with every outer layout
    Nested,
    /// Outermost layout for its subtree (`layout!`), outer layouts are dropped
    Top,
}

/// A layout file discovered in the routes directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildLayout {
    pub id: String,
    pub file_path: PathBuf,
    pub dir_path: PathBuf,
    /// Name for `layout-<name>` files
    pub name: Option<String>,
    pub kind: LayoutKind,
}

/// A menu file discovered in the routes directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildMenu {
    pub id: String,
    pub file_path: PathBuf,
    /// Pattern of the directory the menu belongs to
    pub pathname: String,
}

/// Where a page's content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSource {
    Markdown,
    Module,
}

impl PageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSource::Markdown => "markdown",
            PageSource::Module => "module",
        }
    }
}

/// Whether a route renders a page or only handles requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "source")]
pub enum RouteKind {
    Page(PageSource),
    Endpoint,
}

/// A page or endpoint route discovered in the routes directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRoute {
    pub id: String,
    pub file_path: PathBuf,
    pub kind: RouteKind,
    /// URL pattern like "/users/:id"
    pub pattern: String,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
    pub has_catch_all: bool,
    /// Lower = matched first
    pub priority: usize,
    /// Named layout requested with `index@name`
    pub layout_name: Option<String>,
    /// `index!` stops layout inheritance
    pub layout_stop: bool,
    /// Ids of the layouts wrapping this route, outermost first
    pub layouts: Vec<String>,
}

impl BuildRoute {
    pub fn is_endpoint(&self) -> bool {
        matches!(self.kind, RouteKind::Endpoint)
    }

    /// Directory containing the route file
    pub fn dir_path(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Mutable accumulator for one build
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub opts: BuildOptions,
    pub layouts: Vec<BuildLayout>,
    pub menus: Vec<BuildMenu>,
    pub routes: Vec<BuildRoute>,
    pub diagnostics: Vec<Diagnostic>,
    /// Files no convention claimed, passed through as-is
    pub static_files: Vec<PathBuf>,
}

impl BuildContext {
    pub fn new(opts: BuildOptions) -> Self {
        Self {
            opts,
            layouts: Vec::new(),
            menus: Vec::new(),
            routes: Vec::new(),
            diagnostics: Vec::new(),
            static_files: Vec::new(),
        }
    }

    /// Error diagnostics in the order they were recorded
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Record a non-fatal error on the context
pub fn add_error(ctx: &mut BuildContext, message: impl Into<String>) {
    let message = message.into();
    tracing::warn!("{}", message);
    ctx.diagnostics.push(Diagnostic {
        kind: DiagnosticKind::Error,
        message,
    });
}

/// Record a warning on the context
pub fn add_warning(ctx: &mut BuildContext, message: impl Into<String>) {
    let message = message.into();
    tracing::warn!("{}", message);
    ctx.diagnostics.push(Diagnostic {
        kind: DiagnosticKind::Warning,
        message,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_error_records_in_order() {
        let mut ctx = BuildContext::new(BuildOptions::default());
        add_error(&mut ctx, "first");
        add_warning(&mut ctx, "careful");
        add_error(&mut ctx, "second");

        let errors: Vec<&str> = ctx.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(errors, vec!["first", "second"]);
        assert_eq!(ctx.diagnostics.len(), 3);
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warning_only_is_not_error() {
        let mut ctx = BuildContext::new(BuildOptions::default());
        add_warning(&mut ctx, "careful");
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_relative_path() {
        let opts = BuildOptions::new("src/routes");
        assert_eq!(
            opts.relative_path(Path::new("src/routes/blog/[id]/index.tsx")),
            "blog/[id]/index.tsx"
        );
        assert_eq!(opts.relative_path(Path::new("src/routes")), "");
    }

    #[test]
    fn test_default_extensions() {
        let opts = BuildOptions::default();
        assert_eq!(opts.page_extensions, vec!["tsx", "jsx"]);
        assert_eq!(opts.endpoint_extensions, vec!["ts", "js"]);
        assert_eq!(opts.markdown_extensions, vec!["md", "mdx"]);
    }
}
