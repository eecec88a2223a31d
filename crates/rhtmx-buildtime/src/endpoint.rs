// File: src/endpoint.rs
// Purpose: Server-only endpoint routes

use std::path::Path;

use crate::context::{BuildContext, BuildRoute, RouteKind};
use crate::route::{route_id, route_pattern};

/// Creates an endpoint route; endpoints never take part in layouts
pub fn create_endpoint_route(ctx: &BuildContext, file_path: &Path) -> BuildRoute {
    let parsed = route_pattern(&ctx.opts, file_path);
    let priority = parsed.priority();

    BuildRoute {
        id: route_id(&ctx.opts, file_path),
        file_path: file_path.to_path_buf(),
        kind: RouteKind::Endpoint,
        pattern: parsed.pattern,
        params: parsed.params,
        has_catch_all: parsed.has_catch_all,
        priority,
        layout_name: None,
        layout_stop: false,
        layouts: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BuildOptions;

    #[test]
    fn test_create_endpoint_route() {
        let ctx = BuildContext::new(BuildOptions::new("routes"));
        let route = create_endpoint_route(&ctx, Path::new("routes/api/users/[id]/index.ts"));
        assert_eq!(route.kind, RouteKind::Endpoint);
        assert_eq!(route.pattern, "/api/users/:id");
        assert_eq!(route.params, vec!["id".to_string()]);
        assert!(route.is_endpoint());
        assert!(route.layouts.is_empty());
    }
}
