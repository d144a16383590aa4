//! # Verdict Router
//!
//! A zero-dependency route table for the Verdict web client:
//! - Static routes (`/problems`)
//! - Dynamic parameters (`/problems/:id`)
//! - Optional parameters (`/contests/:id?`)
//! - Static aliases (`/` as an alias of `/problems`)
//! - Named routes and URL generation
//!
//! The table is declared as data — an ordered list of immutable route
//! records built once at startup — and matching walks the list in
//! declaration order, first match wins. Each pattern carries at most one
//! named parameter segment, matching the page contract of zero or one
//! string-valued route parameter.
//!
//! ## Path Normalization
//!
//! Request paths are normalized before matching, so the usual address-bar
//! mistakes resolve gracefully:
//! - Trailing slashes: `/problems/` → `/problems`
//! - Duplicate slashes: `/problems//42` → `/problems/42`
//! - Backslashes: `\problems\42` → `/problems/42`
//!
//! ## Example
//!
//! ```
//! use verdict_router::{Route, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     Route::new("/problems", "problem-list").alias("/"),
//!     Route::new("/problems/:id", "problem"),
//! ])
//! .unwrap();
//!
//! let hit = table.resolve("/problems/42").unwrap();
//! assert_eq!(*hit.target(), "problem");
//! assert_eq!(hit.param(), Some("42"));
//!
//! // The root path is an alias of the default route
//! let hit = table.resolve("/").unwrap();
//! assert_eq!(*hit.target(), "problem-list");
//! assert_eq!(hit.param(), None);
//! ```

use std::collections::HashSet;
use std::fmt;

pub mod path;
pub mod pattern;

pub use path::{is_canonical, normalize};
pub use pattern::{Captured, Pattern, PatternError, Segment};

// ============================================================================
// Route
// ============================================================================

/// A single route record: a path pattern, the target it resolves to, and
/// optional static aliases and a name.
///
/// The target type is opaque to the table — the UI layer stores page
/// component handles, tests store plain strings.
///
/// # Examples
///
/// ```
/// use verdict_router::Route;
///
/// let route = Route::new("/problems", "problem-list")
///     .alias("/")
///     .named("problems");
///
/// assert_eq!(route.pattern(), "/problems");
/// assert_eq!(route.aliases(), &["/"]);
/// assert_eq!(route.name(), Some("problems"));
/// ```
#[derive(Debug, Clone)]
pub struct Route<T> {
    pattern: String,
    target: T,
    aliases: Vec<String>,
    name: Option<String>,
}

impl<T> Route<T> {
    /// Creates a route record. The pattern is validated when the table is
    /// built, not here.
    pub fn new(pattern: impl Into<String>, target: T) -> Self {
        Self {
            pattern: pattern.into(),
            target,
            aliases: Vec::new(),
            name: None,
        }
    }

    /// Adds a static alias path that resolves to this route with no
    /// parameters. Useful for default pages reachable from more than one
    /// URL.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Names this route for URL generation via [`RouteTable::href`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The pattern string as declared.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The route's target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Static aliases, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The route's name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// Route Match
// ============================================================================

/// Result of resolving a path against the table: the matched route and the
/// parameter extracted from the path, if the pattern has one.
#[derive(Debug)]
pub struct RouteMatch<'t, T> {
    route: &'t Route<T>,
    param: Captured,
}

impl<'t, T> RouteMatch<'t, T> {
    /// The matched route record.
    pub fn route(&self) -> &'t Route<T> {
        self.route
    }

    /// The matched route's target.
    pub fn target(&self) -> &'t T {
        self.route.target()
    }

    /// The extracted parameter value, if any.
    ///
    /// At most one parameter exists per route, so a single `Option` covers
    /// the whole page contract.
    pub fn param(&self) -> Option<&str> {
        self.param.as_ref().map(|(_, value)| value.as_str())
    }

    /// The extracted parameter's declared name, if any.
    pub fn param_name(&self) -> Option<&str> {
        self.param.as_ref().map(|(name, _)| name.as_str())
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Why a route table failed validation at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A route's pattern string failed to parse
    InvalidPattern {
        pattern: String,
        source: PatternError,
    },
    /// An alias was not a canonical static path
    InvalidAlias { pattern: String, alias: String },
    /// Two routes (or a route and an alias) declared the same path
    DuplicatePattern(String),
    /// Two routes declared the same name
    DuplicateName(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern `{pattern}`: {source}")
            }
            TableError::InvalidAlias { pattern, alias } => {
                write!(f, "route `{pattern}` has non-canonical alias `{alias}`")
            }
            TableError::DuplicatePattern(p) => {
                write!(f, "path `{p}` is declared by more than one route")
            }
            TableError::DuplicateName(n) => {
                write!(f, "route name `{n}` is declared more than once")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Entry<T> {
    pattern: Pattern,
    route: Route<T>,
}

/// An ordered, immutable route table.
///
/// Built once from a list of [`Route`] records; [`RouteTable::resolve`]
/// walks the list in declaration order and the first match wins. The table
/// is never mutated after construction.
#[derive(Debug)]
pub struct RouteTable<T> {
    entries: Vec<Entry<T>>,
}

impl<T> RouteTable<T> {
    /// Builds the table, validating every record.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidPattern`] when a pattern fails to parse
    /// - [`TableError::InvalidAlias`] when an alias is not a canonical path
    /// - [`TableError::DuplicatePattern`] when two records claim the same
    ///   path (patterns and aliases share one namespace)
    /// - [`TableError::DuplicateName`] when two records share a name
    pub fn new(routes: Vec<Route<T>>) -> Result<Self, TableError> {
        let mut seen_paths: HashSet<String> = HashSet::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(routes.len());

        for route in routes {
            let pattern =
                Pattern::parse(&route.pattern).map_err(|source| TableError::InvalidPattern {
                    pattern: route.pattern.clone(),
                    source,
                })?;

            if !seen_paths.insert(route.pattern.clone()) {
                return Err(TableError::DuplicatePattern(route.pattern.clone()));
            }

            for alias in &route.aliases {
                if !is_canonical(alias) {
                    return Err(TableError::InvalidAlias {
                        pattern: route.pattern.clone(),
                        alias: alias.clone(),
                    });
                }
                if !seen_paths.insert(alias.clone()) {
                    return Err(TableError::DuplicatePattern(alias.clone()));
                }
            }

            if let Some(name) = &route.name {
                if !seen_names.insert(name.clone()) {
                    return Err(TableError::DuplicateName(name.clone()));
                }
            }

            entries.push(Entry { pattern, route });
        }

        Ok(Self { entries })
    }

    /// Resolves a request path to its route, first match in declaration
    /// order wins.
    ///
    /// The path is normalized before matching. Each entry is tried against
    /// its pattern, then against its static aliases; an alias match carries
    /// no parameter. Returns `None` when nothing matches — the rendering
    /// layer decides what an unmatched path means.
    pub fn resolve(&self, request_path: &str) -> Option<RouteMatch<'_, T>> {
        let path = normalize(request_path);

        self.entries.iter().find_map(|entry| {
            if let Some(param) = entry.pattern.matches(&path) {
                return Some(RouteMatch {
                    route: &entry.route,
                    param,
                });
            }

            entry
                .route
                .aliases
                .iter()
                .any(|alias| alias.as_str() == path.as_ref())
                .then(|| RouteMatch {
                    route: &entry.route,
                    param: None,
                })
        })
    }

    /// Generates a URL for a named route by parameter substitution.
    ///
    /// Returns `None` when no route carries the name or a required
    /// parameter is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::new(vec![
    ///     Route::new("/problems/:id", "problem").named("problem"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(table.href("problem", Some("42")), Some("/problems/42".to_string()));
    /// assert_eq!(table.href("problem", None), None);
    /// assert_eq!(table.href("missing", None), None);
    /// ```
    pub fn href(&self, name: &str, param: Option<&str>) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.route.name.as_deref() == Some(name))
            .and_then(|entry| entry.pattern.href(param))
    }

    /// Iterates the route records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<T>> {
        self.entries.iter().map(|entry| &entry.route)
    }

    /// Number of route records in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_invalid_pattern() {
        let err = RouteTable::new(vec![Route::new("problems", "x")]).unwrap_err();
        assert!(matches!(err, TableError::InvalidPattern { .. }));
    }

    #[test]
    fn test_build_rejects_duplicate_pattern() {
        let err = RouteTable::new(vec![
            Route::new("/problems", "a"),
            Route::new("/problems", "b"),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicatePattern("/problems".to_string()));
    }

    #[test]
    fn test_build_rejects_alias_colliding_with_pattern() {
        let err = RouteTable::new(vec![
            Route::new("/problems", "a"),
            Route::new("/contests", "b").alias("/problems"),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicatePattern("/problems".to_string()));
    }

    #[test]
    fn test_build_rejects_non_canonical_alias() {
        let err = RouteTable::new(vec![Route::new("/problems", "a").alias("problems/")])
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidAlias { .. }));
    }

    #[test]
    fn test_build_rejects_duplicate_name() {
        let err = RouteTable::new(vec![
            Route::new("/problems", "a").named("list"),
            Route::new("/contests", "b").named("list"),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateName("list".to_string()));
    }
}
