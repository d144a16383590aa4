/// Pattern parsing and matching for route path patterns
///
/// Pure functional parsing of pattern strings like `/problems/:id` into typed
/// segments. All functions are deterministic with no side effects.

use std::fmt;

/// A single parsed segment of a route pattern.
///
/// # Examples
///
/// ```
/// use verdict_router::pattern::{Pattern, Segment};
///
/// let pattern = Pattern::parse("/contests/:id?").unwrap();
/// assert!(matches!(pattern.segments()[0], Segment::Static(_)));
/// assert!(matches!(pattern.segments()[1], Segment::OptionalParam(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text segment that must compare equal
    Static(String),
    /// Required parameter: `:id`
    Param(String),
    /// Optional parameter in final position: `:id?`
    OptionalParam(String),
}

/// Why a pattern string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern string was empty
    Empty,
    /// Pattern did not start with `/`
    NotRooted(String),
    /// Pattern contained an empty segment (`//` or trailing `/`)
    EmptySegment(String),
    /// A parameter segment had no name (`:` or `:?`)
    EmptyParamName(String),
    /// More than one parameter segment; pages take at most one parameter
    MultipleParams(String),
    /// An optional parameter somewhere other than the final segment
    OptionalNotLast(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => write!(f, "pattern is empty"),
            PatternError::NotRooted(p) => write!(f, "pattern `{p}` must start with `/`"),
            PatternError::EmptySegment(p) => write!(f, "pattern `{p}` contains an empty segment"),
            PatternError::EmptyParamName(p) => write!(f, "pattern `{p}` has a parameter with no name"),
            PatternError::MultipleParams(p) => {
                write!(f, "pattern `{p}` declares more than one parameter segment")
            }
            PatternError::OptionalNotLast(p) => {
                write!(f, "pattern `{p}` has an optional parameter before the final segment")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// The parameter captured by a successful match, if the pattern has one:
/// `(name, value)`.
pub type Captured = Option<(String, String)>;

/// A parsed route pattern: an ordered sequence of [`Segment`]s.
///
/// Patterns carry at most one parameter segment, matching the page contract
/// of zero or one string-valued route parameter.
///
/// # Examples
///
/// ```
/// use verdict_router::pattern::Pattern;
///
/// let pattern = Pattern::parse("/problems/:id").unwrap();
/// assert_eq!(pattern.as_str(), "/problems/:id");
/// assert_eq!(pattern.param_name(), Some("id"));
///
/// let captured = pattern.matches("/problems/42").unwrap();
/// assert_eq!(captured, Some(("id".to_string(), "42".to_string())));
///
/// assert!(pattern.matches("/problems").is_none());
/// assert!(pattern.matches("/problems/42/extra").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string into typed segments.
    ///
    /// # Parsing Rules
    ///
    /// - Must start with `/`; `/` alone is the root pattern
    /// - `:name` is a required parameter segment
    /// - `:name?` is an optional parameter segment (final position only)
    /// - Anything else is a static segment
    /// - At most one parameter segment per pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_router::pattern::{Pattern, PatternError};
    ///
    /// assert!(Pattern::parse("/problems").is_ok());
    /// assert!(Pattern::parse("/problems/:id").is_ok());
    /// assert!(Pattern::parse("/contests/:id?").is_ok());
    ///
    /// assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
    /// assert!(matches!(
    ///     Pattern::parse("/a/:x/:y"),
    ///     Err(PatternError::MultipleParams(_))
    /// ));
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        if !pattern.starts_with('/') {
            return Err(PatternError::NotRooted(pattern.to_string()));
        }

        if pattern == "/" {
            return Ok(Self {
                source: pattern.to_string(),
                segments: Vec::new(),
            });
        }

        if pattern.ends_with('/') || pattern.contains("//") {
            return Err(PatternError::EmptySegment(pattern.to_string()));
        }

        let mut segments = Vec::new();
        let mut param_count = 0usize;

        for raw in pattern.split('/').skip(1) {
            let segment = match raw.strip_prefix(':') {
                Some(param) => {
                    let (name, optional) = match param.strip_suffix('?') {
                        Some(name) => (name, true),
                        None => (param, false),
                    };

                    if name.is_empty() {
                        return Err(PatternError::EmptyParamName(pattern.to_string()));
                    }

                    param_count += 1;
                    if param_count > 1 {
                        return Err(PatternError::MultipleParams(pattern.to_string()));
                    }

                    if optional {
                        Segment::OptionalParam(name.to_string())
                    } else {
                        Segment::Param(name.to_string())
                    }
                }
                None => Segment::Static(raw.to_string()),
            };

            segments.push(segment);
        }

        // An absent optional parameter shortens the path by one segment, so
        // anything after it would be ambiguous
        let optional_pos = segments
            .iter()
            .position(|s| matches!(s, Segment::OptionalParam(_)));
        if let Some(pos) = optional_pos {
            if pos + 1 != segments.len() {
                return Err(PatternError::OptionalNotLast(pattern.to_string()));
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Name of the pattern's parameter segment, if it has one.
    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Param(name) | Segment::OptionalParam(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches this pattern against a path.
    ///
    /// Static segments must compare equal; a parameter segment captures any
    /// single non-empty path segment. Returns `None` on no match, otherwise
    /// the captured parameter (if any).
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_router::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/contests/:id?").unwrap();
    ///
    /// // Parameter supplied
    /// let captured = pattern.matches("/contests/7").unwrap();
    /// assert_eq!(captured, Some(("id".to_string(), "7".to_string())));
    ///
    /// // Parameter absent
    /// let captured = pattern.matches("/contests").unwrap();
    /// assert_eq!(captured, None);
    /// ```
    pub fn matches(&self, path: &str) -> Option<Captured> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let required = self
            .segments
            .iter()
            .filter(|s| !matches!(s, Segment::OptionalParam(_)))
            .count();

        if parts.len() < required || parts.len() > self.segments.len() {
            return None;
        }

        let mut captured: Captured = None;

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(i).copied() != Some(expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    captured = Some((name.clone(), value.to_string()));
                }
                Segment::OptionalParam(name) => {
                    if let Some(value) = parts.get(i) {
                        captured = Some((name.clone(), value.to_string()));
                    }
                }
            }
        }

        Some(captured)
    }

    /// Generates a concrete URL from this pattern by parameter substitution.
    ///
    /// Returns `None` when the pattern requires a parameter and none was
    /// supplied. An absent optional parameter is simply omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_router::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/problems/:id").unwrap();
    /// assert_eq!(pattern.href(Some("42")), Some("/problems/42".to_string()));
    /// assert_eq!(pattern.href(None), None);
    ///
    /// let pattern = Pattern::parse("/contests/:id?").unwrap();
    /// assert_eq!(pattern.href(None), Some("/contests".to_string()));
    /// ```
    pub fn href(&self, param: Option<&str>) -> Option<String> {
        let mut url = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Static(s) => {
                    url.push('/');
                    url.push_str(s);
                }
                Segment::Param(_) => {
                    url.push('/');
                    url.push_str(param?);
                }
                Segment::OptionalParam(_) => {
                    if let Some(value) = param {
                        url.push('/');
                        url.push_str(value);
                    }
                }
            }
        }

        if url.is_empty() {
            url.push('/');
        }

        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let pattern = Pattern::parse("/problems").unwrap();
        assert_eq!(
            pattern.segments(),
            &[Segment::Static("problems".to_string())]
        );
        assert_eq!(pattern.param_name(), None);
    }

    #[test]
    fn test_parse_root() {
        let pattern = Pattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn test_parse_required_param() {
        let pattern = Pattern::parse("/problems/:id").unwrap();
        assert_eq!(pattern.param_name(), Some("id"));
        assert_eq!(
            pattern.segments()[1],
            Segment::Param("id".to_string())
        );
    }

    #[test]
    fn test_parse_optional_param() {
        let pattern = Pattern::parse("/contests/:id?").unwrap();
        assert_eq!(pattern.param_name(), Some("id"));
        assert_eq!(
            pattern.segments()[1],
            Segment::OptionalParam("id".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_not_rooted() {
        assert!(matches!(
            Pattern::parse("problems"),
            Err(PatternError::NotRooted(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(matches!(
            Pattern::parse("/problems/"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            Pattern::parse("/problems//42"),
            Err(PatternError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_param_name() {
        assert!(matches!(
            Pattern::parse("/problems/:"),
            Err(PatternError::EmptyParamName(_))
        ));
        assert!(matches!(
            Pattern::parse("/problems/:?"),
            Err(PatternError::EmptyParamName(_))
        ));
    }

    #[test]
    fn test_parse_rejects_multiple_params() {
        assert!(matches!(
            Pattern::parse("/a/:x/:y"),
            Err(PatternError::MultipleParams(_))
        ));
    }

    #[test]
    fn test_parse_rejects_optional_before_end() {
        assert!(matches!(
            Pattern::parse("/contests/:id?/standings"),
            Err(PatternError::OptionalNotLast(_))
        ));
    }

    #[test]
    fn test_matches_static() {
        let pattern = Pattern::parse("/problems").unwrap();
        assert_eq!(pattern.matches("/problems"), Some(None));
        assert!(pattern.matches("/contests").is_none());
        assert!(pattern.matches("/problems/42").is_none());
    }

    #[test]
    fn test_matches_root() {
        let pattern = Pattern::parse("/").unwrap();
        assert_eq!(pattern.matches("/"), Some(None));
        assert!(pattern.matches("/problems").is_none());
    }

    #[test]
    fn test_matches_required_param() {
        let pattern = Pattern::parse("/problems/:id").unwrap();
        let captured = pattern.matches("/problems/42").unwrap();
        assert_eq!(captured, Some(("id".to_string(), "42".to_string())));

        assert!(pattern.matches("/problems").is_none());
        assert!(pattern.matches("/problems/42/extra").is_none());
    }

    #[test]
    fn test_matches_optional_param() {
        let pattern = Pattern::parse("/contests/:id?").unwrap();

        let captured = pattern.matches("/contests/7").unwrap();
        assert_eq!(captured, Some(("id".to_string(), "7".to_string())));

        let captured = pattern.matches("/contests").unwrap();
        assert_eq!(captured, None);
    }

    #[test]
    fn test_href_substitution() {
        let pattern = Pattern::parse("/problems/:id").unwrap();
        assert_eq!(pattern.href(Some("42")), Some("/problems/42".to_string()));
        assert_eq!(pattern.href(None), None);
    }

    #[test]
    fn test_href_optional() {
        let pattern = Pattern::parse("/contests/:id?").unwrap();
        assert_eq!(pattern.href(Some("7")), Some("/contests/7".to_string()));
        assert_eq!(pattern.href(None), Some("/contests".to_string()));
    }

    #[test]
    fn test_href_static() {
        let pattern = Pattern::parse("/leaderboard").unwrap();
        assert_eq!(pattern.href(None), Some("/leaderboard".to_string()));
    }
}
