// File: src/resolve.rs
// Purpose: Post-walk passes over the collected routes: layout chains, duplicates, ordering

use std::collections::BTreeMap;
use std::path::Path;

use crate::context::{add_error, add_warning, BuildContext, BuildLayout, BuildRoute, LayoutKind};

/// Fills `layouts` of every page route with the ids of its wrapping layouts
///
/// Walks from the route's directory up to the routes directory. At each level
/// the layout named by `index@name` wins over the unnamed one; a `Top` layout
/// ends the chain. Endpoints and `index!` pages get no layouts.
pub fn resolve_layouts(ctx: &mut BuildContext) {
    let mut missing = Vec::new();

    for route in ctx.routes.iter_mut() {
        if route.is_endpoint() || route.layout_stop {
            route.layouts.clear();
            continue;
        }

        let (chain, found_named) = layout_chain(&ctx.opts.routes_dir, &ctx.layouts, route);
        route.layouts = chain;

        if let Some(name) = route.layout_name.as_deref().filter(|_| !found_named) {
            missing.push(format!(
                "Unable to find \"{}\" layout for \"{}\".",
                name,
                route.file_path.display()
            ));
        }
    }

    for message in missing {
        add_error(ctx, message);
    }
}

fn layout_chain(routes_dir: &Path, layouts: &[BuildLayout], route: &BuildRoute) -> (Vec<String>, bool) {
    let mut chain = Vec::new();
    let mut found_named = false;

    for dir in route
        .dir_path()
        .ancestors()
        .take_while(|dir| dir.starts_with(routes_dir))
    {
        let mut in_dir = layouts.iter().filter(|l| l.dir_path == dir);
        let named = route
            .layout_name
            .as_deref()
            .and_then(|name| in_dir.clone().find(|l| l.name.as_deref() == Some(name)));

        let chosen = match named {
            Some(layout) => {
                found_named = true;
                Some(layout)
            }
            None => in_dir.find(|l| l.name.is_none()),
        };

        if let Some(layout) = chosen {
            chain.push(layout.id.clone());
            if layout.kind == LayoutKind::Top {
                break;
            }
        }
    }

    chain.reverse();
    (chain, found_named)
}

/// Records an error for every pattern claimed by more than one route
pub fn detect_duplicate_routes(ctx: &mut BuildContext) {
    let mut by_pattern: BTreeMap<&str, Vec<&Path>> = BTreeMap::new();
    for route in &ctx.routes {
        by_pattern
            .entry(route.pattern.as_str())
            .or_default()
            .push(route.file_path.as_path());
    }

    let messages: Vec<String> = by_pattern
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(pattern, files)| {
            let files = files
                .iter()
                .map(|f| f.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "More than one route has been found for pathname \"{}\". Please narrow it down to only one of these files: {}",
                pattern, files
            )
        })
        .collect();

    for message in messages {
        add_error(ctx, message);
    }
}

/// Records an error for every directory with more than one layout of the same name
///
/// `layout.tsx`, `layout!.tsx` and `_<dir>.tsx` all claim the unnamed slot;
/// `layout-x.tsx` and `layout-x!.tsx` both claim `x`.
pub fn detect_duplicate_layouts(ctx: &mut BuildContext) {
    let mut by_slot: BTreeMap<(&Path, Option<&str>), Vec<&Path>> = BTreeMap::new();
    for layout in &ctx.layouts {
        by_slot
            .entry((layout.dir_path.as_path(), layout.name.as_deref()))
            .or_default()
            .push(layout.file_path.as_path());
    }

    let messages: Vec<String> = by_slot
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|((dir, name), files)| {
            let files = files
                .iter()
                .map(|f| f.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let layout = match name {
                Some(name) => format!("\"{}\" layout", name),
                None => "layout".to_string(),
            };
            format!(
                "More than one {} has been found in \"{}\". Please narrow it down to only one of these files: {}",
                layout,
                dir.display(),
                files
            )
        })
        .collect();

    for message in messages {
        add_error(ctx, message);
    }
}

/// Warns about named layouts that no route ends up wrapped in
///
/// Runs after [`resolve_layouts`].
pub fn warn_unused_named_layouts(ctx: &mut BuildContext) {
    let messages: Vec<String> = ctx
        .layouts
        .iter()
        .filter(|layout| !ctx.routes.iter().any(|r| r.layouts.contains(&layout.id)))
        .filter_map(|layout| {
            layout.name.as_deref().map(|name| {
                format!(
                    "Layout \"{}\" is not used by any route: {}",
                    name,
                    layout.file_path.display()
                )
            })
        })
        .collect();

    for message in messages {
        add_warning(ctx, message);
    }
}

/// Orders routes for matching: lower priority first, then by pattern
pub fn sort_routes(ctx: &mut BuildContext) {
    ctx.routes.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.pattern.cmp(&b.pattern))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BuildOptions, Diagnostic, DiagnosticKind, PageSource};
    use crate::endpoint::create_endpoint_route;
    use crate::layout::create_layout;
    use crate::page::create_page_route;
    use pretty_assertions::assert_eq;

    fn ctx() -> BuildContext {
        BuildContext::new(BuildOptions::new("routes"))
    }

    fn push_layout(ctx: &mut BuildContext, dir: &str, file: &str) {
        let dir_path = Path::new(dir);
        let dir_name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let layout = create_layout(ctx, dir_path, &dir_name, &dir_path.join(file));
        ctx.layouts.push(layout);
    }

    fn push_page(ctx: &mut BuildContext, file: &str) {
        let route = create_page_route(ctx, Path::new(file), PageSource::Module);
        ctx.routes.push(route);
    }

    #[test]
    fn test_nested_layouts_outermost_first() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_layout(&mut ctx, "routes/docs", "layout.tsx");
        push_page(&mut ctx, "routes/docs/intro/index.tsx");

        resolve_layouts(&mut ctx);
        assert_eq!(ctx.routes[0].layouts, vec!["layout", "docs/layout"]);
    }

    #[test]
    fn test_top_layout_cuts_outer_layouts() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_layout(&mut ctx, "routes/admin", "layout!.tsx");
        push_page(&mut ctx, "routes/admin/index.tsx");

        resolve_layouts(&mut ctx);
        assert_eq!(ctx.routes[0].layouts, vec!["admin/layout!"]);
    }

    #[test]
    fn test_named_layout_selected() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_layout(&mut ctx, "routes", "layout-wide.tsx");
        push_page(&mut ctx, "routes/blog/index@wide.tsx");
        push_page(&mut ctx, "routes/blog/post.tsx");

        resolve_layouts(&mut ctx);
        assert_eq!(ctx.routes[0].layouts, vec!["layout-wide"]);
        assert_eq!(ctx.routes[1].layouts, vec!["layout"]);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_missing_named_layout_is_error() {
        let mut ctx = ctx();
        push_page(&mut ctx, "routes/blog/index@nope.tsx");

        resolve_layouts(&mut ctx);
        assert_eq!(ctx.errors().count(), 1);
    }

    #[test]
    fn test_layout_stop_and_endpoints_have_no_layouts() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_page(&mut ctx, "routes/print/index!.tsx");
        let endpoint = create_endpoint_route(&ctx, Path::new("routes/api/index.ts"));
        ctx.routes.push(endpoint);

        resolve_layouts(&mut ctx);
        assert!(ctx.routes.iter().all(|r| r.layouts.is_empty()));
    }

    #[test]
    fn test_detect_duplicate_routes() {
        let mut ctx = ctx();
        push_page(&mut ctx, "routes/about.tsx");
        push_page(&mut ctx, "routes/about/index.tsx");
        push_page(&mut ctx, "routes/contact.tsx");

        detect_duplicate_routes(&mut ctx);
        let errors: Vec<_> = ctx.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("\"/about\""));
    }

    #[test]
    fn test_detect_duplicate_layouts() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes/blog", "_blog.tsx");
        push_layout(&mut ctx, "routes/blog", "layout!.tsx");
        push_layout(&mut ctx, "routes/blog", "layout.tsx");
        push_layout(&mut ctx, "routes", "layout-x!.tsx");
        push_layout(&mut ctx, "routes", "layout-x.tsx");
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_layout(&mut ctx, "routes/docs", "layout.tsx");

        detect_duplicate_layouts(&mut ctx);
        let errors: Vec<&str> = ctx.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("More than one \"x\" layout has been found in \"routes\""));
        assert!(errors[0].ends_with("routes/layout-x!.tsx, routes/layout-x.tsx"));
        assert!(errors[1].starts_with("More than one layout has been found in \"routes/blog\""));
        assert!(errors[1].ends_with(
            "routes/blog/_blog.tsx, routes/blog/layout!.tsx, routes/blog/layout.tsx"
        ));
    }

    #[test]
    fn test_unused_named_layout_is_warning() {
        let mut ctx = ctx();
        push_layout(&mut ctx, "routes", "layout.tsx");
        push_layout(&mut ctx, "routes", "layout-wide.tsx");
        push_layout(&mut ctx, "routes", "layout-print.tsx");
        push_page(&mut ctx, "routes/blog/index@wide.tsx");

        resolve_layouts(&mut ctx);
        warn_unused_named_layouts(&mut ctx);

        assert!(!ctx.has_errors());
        let warnings: Vec<&Diagnostic> = ctx
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].message,
            "Layout \"print\" is not used by any route: routes/layout-print.tsx"
        );
    }

    #[test]
    fn test_sort_routes() {
        let mut ctx = ctx();
        push_page(&mut ctx, "routes/docs/[...slug].tsx");
        push_page(&mut ctx, "routes/users/[id].tsx");
        push_page(&mut ctx, "routes/users/new.tsx");
        push_page(&mut ctx, "routes/about.tsx");

        sort_routes(&mut ctx);
        let patterns: Vec<&str> = ctx.routes.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/about", "/users/new", "/users/:id", "/docs/*slug"]);
    }
}
