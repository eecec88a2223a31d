// File: src/walk.rs
// Purpose: Walks the routes directory and feeds every entry to the classifier

use std::path::Path;
use walkdir::WalkDir;

use crate::context::{BuildContext, BuildOptions};
use crate::error::BuildError;
use crate::parse::parse_file_system;
use crate::resolve::{
    detect_duplicate_layouts, detect_duplicate_routes, resolve_layouts, sort_routes,
    warn_unused_named_layouts,
};

/// Walks `opts.routes_dir` depth-first and builds the route context
///
/// Within a directory, subdirectories come before files and siblings are
/// visited in name order. Every entry (file or directory) is offered to
/// [`parse_file_system`]. A consumed directory is not descended into; an
/// unclaimed one is. Unclaimed files are kept as static files.
///
/// Routing problems end up in `ctx.diagnostics`; only I/O failures are `Err`.
pub fn walk_routes(opts: BuildOptions) -> Result<BuildContext, BuildError> {
    if !opts.routes_dir.is_dir() {
        return Err(BuildError::MissingRoutesDir(opts.routes_dir.clone()));
    }

    let routes_dir = opts.routes_dir.clone();
    let mut ctx = BuildContext::new(opts);

    let mut entries = WalkDir::new(&routes_dir)
        .min_depth(1)
        .sort_by(|a, b| {
            b.file_type()
                .is_dir()
                .cmp(&a.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry?;
        let file_path = entry.path();
        let file_name = entry.file_name().to_string_lossy();
        let dir_path = file_path.parent().unwrap_or_else(|| Path::new(""));
        let dir_name = dir_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let is_dir = entry.file_type().is_dir();

        let handled = parse_file_system(&mut ctx, dir_path, &dir_name, file_path, &file_name);

        if is_dir {
            if handled {
                entries.skip_current_dir();
            }
        } else if !handled {
            tracing::debug!("Static file: {:?}", file_path);
            ctx.static_files.push(file_path.to_path_buf());
        }
    }

    detect_duplicate_layouts(&mut ctx);
    resolve_layouts(&mut ctx);
    warn_unused_named_layouts(&mut ctx);
    detect_duplicate_routes(&mut ctx);
    sort_routes(&mut ctx);

    tracing::info!(
        "Routes built from {:?}: {} routes, {} layouts, {} menus, {} errors",
        routes_dir,
        ctx.routes.len(),
        ctx.layouts.len(),
        ctx.menus.len(),
        ctx.errors().count()
    );

    Ok(ctx)
}
