//! Pattern parsing and priority calculation for routes
//!
//! Pure functional parsers that transform route-relative file paths into URL patterns.

use super::pattern::{classify_segment, parse_layout_selector, PatternSegmentType};

/// Result of parsing a route path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPattern {
    /// URL pattern like "/users/:id"
    pub pattern: String,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
    /// Number of dynamic segments (catch-all counts as 100)
    pub dynamic_count: usize,
    pub has_catch_all: bool,
}

impl ParsedPattern {
    /// Adds a static segment to the pattern
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self
    }

    /// Adds a required parameter segment
    fn with_required_param(mut self, param_name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&param_name);
        self.params.push(param_name);
        self.dynamic_count += 1;
        self
    }

    /// Adds a catch-all parameter segment
    fn with_catch_all(mut self, param_name: String) -> Self {
        self.pattern.push_str("/*");
        self.pattern.push_str(&param_name);
        self.params.push(param_name);
        self.has_catch_all = true;
        self.dynamic_count += 100;
        self
    }

    /// Finalizes the pattern, handling empty pattern case
    fn finalize(mut self) -> Self {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        self
    }

    /// Number of `/`-separated levels in the pattern
    pub fn depth(&self) -> usize {
        if self.pattern == "/" {
            0
        } else {
            self.pattern.matches('/').count()
        }
    }

    /// Matching priority, see [`calculate_priority`]
    pub fn priority(&self) -> usize {
        calculate_priority(self.has_catch_all, self.dynamic_count, self.depth())
    }
}

/// Processes a single segment and updates the parse state
fn process_segment(state: ParsedPattern, segment: &str) -> ParsedPattern {
    if segment.is_empty() {
        return state;
    }

    // Layout selectors (`about@docs`, `about!`) never reach the URL
    let (segment, _, _) = parse_layout_selector(segment);

    match classify_segment(segment) {
        PatternSegmentType::CatchAll(param_name) => state.with_catch_all(param_name),
        PatternSegmentType::Required(param_name) => state.with_required_param(param_name),
        PatternSegmentType::Static(seg) => state.with_static_segment(seg),
        PatternSegmentType::Group(_) | PatternSegmentType::Index => state,
    }
}

/// Parses a route path (relative to the routes directory, extension stripped)
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::route::parser::parse_pattern;
///
/// assert_eq!(parse_pattern("about").pattern, "/about");
/// assert_eq!(parse_pattern("index").pattern, "/");
///
/// let parsed = parse_pattern("users/[id]/index");
/// assert_eq!(parsed.pattern, "/users/:id");
/// assert_eq!(parsed.params, vec!["id".to_string()]);
///
/// let parsed = parse_pattern("(docs)/docs/[...slug]");
/// assert_eq!(parsed.pattern, "/docs/*slug");
/// assert!(parsed.has_catch_all);
/// ```
pub fn parse_pattern(path: &str) -> ParsedPattern {
    path.split('/')
        .fold(ParsedPattern::default(), process_segment)
        .finalize()
}

/// Calculates route priority for matching order (pure function)
///
/// Lower number = higher priority (matched first).
///
/// 1. **Static routes** → 0
/// 2. **Dynamic routes** → dynamic count + depth + 1
/// 3. **Catch-all** → 1000 + depth
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(false, 0, 2), 0);
/// assert_eq!(calculate_priority(false, 1, 2), 4);
/// assert_eq!(calculate_priority(true, 100, 2), 1002);
/// ```
pub fn calculate_priority(has_catch_all: bool, dynamic_count: usize, depth: usize) -> usize {
    if has_catch_all {
        1000 + depth
    } else if dynamic_count > 0 {
        dynamic_count + depth + 1
    } else {
        0
    }
}
