use anyhow::{bail, Result};
use colored::Colorize;

use super::routes::print_diagnostics;
use crate::RoutesSource;

pub fn execute(source: &RoutesSource) -> Result<()> {
    let ctx = super::load_context(source)?;

    print_diagnostics(&ctx);

    let errors = ctx.errors().count();
    if errors > 0 {
        bail!("{} routing error(s) in {:?}", errors, ctx.opts.routes_dir);
    }

    println!(
        "{} {} routes, {} layouts, {} menus",
        "✓".green(),
        ctx.routes.len(),
        ctx.layouts.len(),
        ctx.menus.len()
    );

    Ok(())
}
