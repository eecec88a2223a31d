// File: src/menu.rs
// Purpose: Menu file detection and menu records

use std::path::Path;

use crate::context::{BuildContext, BuildMenu};
use crate::route::{directory_pattern, route_id};

pub const MENU_FILE_NAME: &str = "menu.md";

pub fn is_menu_file_name(file_name: &str) -> bool {
    file_name == MENU_FILE_NAME
}

/// Creates the menu record for `file_path`; its pathname is the containing directory's pattern
pub fn create_menu(ctx: &BuildContext, file_path: &Path) -> BuildMenu {
    let dir_path = file_path.parent().unwrap_or_else(|| Path::new(""));

    BuildMenu {
        id: route_id(&ctx.opts, file_path),
        file_path: file_path.to_path_buf(),
        pathname: directory_pattern(&ctx.opts, dir_path).pattern,
    }
}
