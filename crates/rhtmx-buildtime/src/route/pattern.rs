//! Pattern parsing for route directory and file segments
//!
//! Pure functional parsing of file-based route segments into typed segments.

/// Represents different types of route pattern segments
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("about"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment("[id]"), PatternSegmentType::Required(_)));
/// assert!(matches!(classify_segment("[...slug]"), PatternSegmentType::CatchAll(_)));
/// assert!(matches!(classify_segment("(auth)"), PatternSegmentType::Group(_)));
/// assert!(matches!(classify_segment("index@admin"), PatternSegmentType::Index));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSegmentType {
    /// Catch-all segment: [...slug]
    CatchAll(String),
    /// Required parameter: [id]
    Required(String),
    /// Route group: (name), does not contribute to the URL
    Group(String),
    /// Index file stem: index, index@layout, index!
    Index,
    /// Static text segment
    Static(String),
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Index**: `index`, `index@name`, `index!`
/// 2. **Group**: `(name)`
/// 3. **Catch-all**: `[...name]`
/// 4. **Required param**: `[name]`
/// 5. **Static**: Any other text
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if is_index_stem(segment) {
        return PatternSegmentType::Index;
    }

    if let Some(group) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return PatternSegmentType::Group(group.to_string());
    }

    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(param_name) => PatternSegmentType::CatchAll(param_name.to_string()),
            None => PatternSegmentType::Required(inner.to_string()),
        },
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

/// `index`, `index@name` or `index!`
pub fn is_index_stem(stem: &str) -> bool {
    match stem.strip_prefix("index") {
        Some("") | Some("!") => true,
        Some(rest) => rest.starts_with('@') && rest.len() > 1,
        None => false,
    }
}

/// Splits the layout selection off a page stem
///
/// Returns `(stem, named_layout, layout_stop)`:
/// - `index@admin` → `("index", Some("admin"), false)`
/// - `about!` → `("about", None, true)`
///
/// # Examples
///
/// ```
/// use rhtmx_buildtime::route::pattern::parse_layout_selector;
///
/// assert_eq!(parse_layout_selector("index@admin"), ("index", Some("admin"), false));
/// assert_eq!(parse_layout_selector("index!"), ("index", None, true));
/// assert_eq!(parse_layout_selector("about"), ("about", None, false));
/// ```
pub fn parse_layout_selector(stem: &str) -> (&str, Option<&str>, bool) {
    if let Some(base) = stem.strip_suffix('!') {
        return (base, None, true);
    }
    match stem.split_once('@') {
        Some((base, name)) if !base.is_empty() && !name.is_empty() => (base, Some(name), false),
        _ => (stem, None, false),
    }
}
