/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output
/// with no side effects.

use std::borrow::Cow;

/// Checks whether a request path is already in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use verdict_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/problems"));
/// assert!(is_canonical("/problems/42"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("problems")); // Missing leading /
/// assert!(!is_canonical("/problems/")); // Trailing /
/// assert!(!is_canonical("/problems//42")); // Double //
/// ```
pub fn is_canonical(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalizes a request path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already canonical (zero
/// allocations) and `Cow::Owned` when cleanup was needed.
///
/// Handles the usual address-bar mistakes:
///
/// - Trailing slashes: `/problems/` → `/problems`
/// - Duplicate slashes: `/problems//42` → `/problems/42`
/// - Backslashes: `\problems\42` → `/problems/42`
///
/// # Examples
///
/// ```
/// use verdict_router::path::normalize;
/// use std::borrow::Cow;
///
/// let path = normalize("/problems");
/// assert!(matches!(path, Cow::Borrowed("/problems")));
///
/// assert_eq!(normalize("/problems/"), "/problems");
/// assert_eq!(normalize("/problems//42"), "/problems/42");
/// assert_eq!(normalize("\\contests\\7"), "/contests/7");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    // Fast path: already canonical, return borrowed (zero-copy)
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let cleaned = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if cleaned.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", cleaned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("/"));
        assert!(is_canonical("/problems"));
        assert!(is_canonical("/problems/42"));
        assert!(is_canonical("/contests/7"));

        assert!(!is_canonical(""));
        assert!(!is_canonical("problems"));
        assert!(!is_canonical("/problems/"));
        assert!(!is_canonical("/problems//42"));
        assert!(!is_canonical("/problems\\42"));
    }

    #[test]
    fn test_normalize_canonical_is_borrowed() {
        let path = normalize("/problems");
        assert!(matches!(path, Cow::Borrowed("/problems")));

        let path = normalize("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize("/problems/"), "/problems");
        assert_eq!(normalize("/problems/42/"), "/problems/42");
    }

    #[test]
    fn test_normalize_duplicate_slashes() {
        assert_eq!(normalize("/problems//42"), "/problems/42");
        assert_eq!(normalize("/contests///7"), "/contests/7");
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize("\\problems"), "/problems");
        assert_eq!(normalize("\\problems\\42"), "/problems/42");
        assert_eq!(normalize("/problems\\42"), "/problems/42");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("//"), "/");
    }
}
