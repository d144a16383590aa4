use maud::Markup;
use std::sync::Arc;

/// A page-level component.
///
/// Pages are the leaves of the client: each one renders independently from
/// at most one string route parameter, and the shell consumes nothing from
/// them beyond the returned markup. Business logic behind a page (problem
/// data, contest state, authentication) lives elsewhere.
pub trait Page: Send + Sync {
    /// Stable identifier, used in markup class names and logs.
    fn slug(&self) -> &'static str;

    /// Document title for full-page renders.
    fn title(&self) -> &'static str;

    /// Renders the page given the route parameter extracted from the URL.
    fn render(&self, param: Option<&str>) -> Markup;
}

/// Shared handle to a page component, as stored in the route table.
pub type PageRef = Arc<dyn Page>;
