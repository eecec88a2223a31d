//! # RHTMX Buildtime
//!
//! Build-time file-system routing. A routes directory is walked depth-first and
//! every entry is classified into one of:
//! - Layouts (`layout.tsx`, `layout-admin.tsx`, `layout!.tsx`, `_blog.tsx` inside `blog/`)
//! - Menus (`menu.md`)
//! - Endpoints (`.ts` / `.js` server-only handlers)
//! - Pages (`.tsx` / `.jsx` modules, `.md` / `.mdx` markdown)
//!
//! Entries that break the routing rules (test files, test directories,
//! directories carrying a named layout) are recorded as diagnostics on the
//! [`BuildContext`] instead of aborting the build.
//!
//! ## Example
//!
//! ```
//! use rhtmx_buildtime::{parse_file_system, BuildContext, BuildOptions};
//! use std::path::Path;
//!
//! let mut ctx = BuildContext::new(BuildOptions::new("src/routes"));
//!
//! let handled = parse_file_system(
//!     &mut ctx,
//!     Path::new("src/routes/blog"),
//!     "blog",
//!     Path::new("src/routes/blog/index.md"),
//!     "index.md",
//! );
//!
//! assert!(handled);
//! assert_eq!(ctx.routes[0].pattern, "/blog");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod fs;
pub mod layout;
pub mod menu;
pub mod page;
pub mod parse;
pub mod resolve;
pub mod route;
pub mod walk;

pub use config::{Config, RoutingConfig};
pub use context::{
    add_error, add_warning, BuildContext, BuildLayout, BuildMenu, BuildOptions, BuildRoute,
    Diagnostic, DiagnosticKind, LayoutKind, PageSource, RouteKind,
};
pub use endpoint::create_endpoint_route;
pub use error::BuildError;
pub use layout::{create_layout, is_layout_file_name};
pub use menu::{create_menu, is_menu_file_name};
pub use page::create_page_route;
pub use parse::{classify_entry, parse_file_system, FsEntryKind};
pub use resolve::{
    detect_duplicate_layouts, detect_duplicate_routes, resolve_layouts, sort_routes,
    warn_unused_named_layouts,
};
pub use walk::walk_routes;
