use anyhow::Result;
use colored::Colorize;
use rhtmx_buildtime::{BuildContext, BuildLayout, BuildMenu, BuildRoute, Diagnostic, DiagnosticKind, RouteKind};
use serde::Serialize;
use std::path::PathBuf;

use crate::RoutesSource;

/// Serialized form of a finished build
#[derive(Serialize)]
pub struct Manifest<'a> {
    pub layouts: &'a [BuildLayout],
    pub menus: &'a [BuildMenu],
    pub routes: &'a [BuildRoute],
    pub static_files: &'a [PathBuf],
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> From<&'a BuildContext> for Manifest<'a> {
    fn from(ctx: &'a BuildContext) -> Self {
        Self {
            layouts: &ctx.layouts,
            menus: &ctx.menus,
            routes: &ctx.routes,
            static_files: &ctx.static_files,
            diagnostics: &ctx.diagnostics,
        }
    }
}

pub fn execute(source: &RoutesSource, json: bool) -> Result<()> {
    let ctx = super::load_context(source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Manifest::from(&ctx))?);
        return Ok(());
    }

    println!("{}", format!("Routes in {:?}", ctx.opts.routes_dir).green().bold());
    println!();

    for route in &ctx.routes {
        println!("  {}", route_line(route));
    }

    if !ctx.layouts.is_empty() {
        println!();
        println!("{}", "Layouts".bold());
        for layout in &ctx.layouts {
            let name = layout.name.as_deref().unwrap_or("-");
            println!("  {} ({}, {:?})", layout.id.cyan(), name, layout.kind);
        }
    }

    if !ctx.menus.is_empty() {
        println!();
        println!("{}", "Menus".bold());
        for menu in &ctx.menus {
            println!("  {} {}", menu.pathname.cyan(), menu.id);
        }
    }

    print_diagnostics(&ctx);

    Ok(())
}

/// One line per route: pattern, kind and wrapping layouts
pub fn route_line(route: &BuildRoute) -> String {
    let kind = match route.kind {
        RouteKind::Page(source) => source.as_str(),
        RouteKind::Endpoint => "endpoint",
    };
    if route.layouts.is_empty() {
        format!("{:<32} {:<9} {}", route.pattern, kind, route.id)
    } else {
        format!(
            "{:<32} {:<9} {} [{}]",
            route.pattern,
            kind,
            route.id,
            route.layouts.join(" > ")
        )
    }
}

pub fn print_diagnostics(ctx: &BuildContext) {
    if ctx.diagnostics.is_empty() {
        return;
    }

    println!();
    for diagnostic in &ctx.diagnostics {
        match diagnostic.kind {
            DiagnosticKind::Error => println!("  {} {}", "✗".red(), diagnostic.message),
            DiagnosticKind::Warning => println!("  {} {}", "⚠".yellow(), diagnostic.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rhtmx_buildtime::{walk_routes, BuildOptions};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("layout.tsx"), "").unwrap();
        fs::write(temp_dir.path().join("index.tsx"), "").unwrap();
        fs::write(temp_dir.path().join("foo.test.ts"), "").unwrap();

        let ctx = walk_routes(BuildOptions::new(temp_dir.path())).unwrap();
        let json = serde_json::to_value(Manifest::from(&ctx)).unwrap();

        assert_eq!(json["routes"][0]["pattern"], "/");
        assert_eq!(json["routes"][0]["layouts"][0], "layout");
        assert_eq!(json["layouts"][0]["kind"], "nested");
        assert_eq!(json["diagnostics"][0]["kind"], "error");
    }

    #[test]
    fn test_route_line() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("api")).unwrap();
        fs::write(temp_dir.path().join("api/index.ts"), "").unwrap();

        let ctx = walk_routes(BuildOptions::new(temp_dir.path())).unwrap();
        let line = route_line(&ctx.routes[0]);
        assert!(line.starts_with("/api "));
        assert!(line.contains("endpoint"));
        assert!(line.ends_with("api/index"));
    }
}
