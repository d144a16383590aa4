// Route table
//
// The path → page mapping as data: an ordered list of immutable records
// built once at startup, never mutated afterwards. First match in
// declaration order wins; `/` is a static alias of `/problems`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use verdict_router::{Route, RouteTable, TableError};

use crate::page::{Page, PageRef};
use crate::pages::{
    Contest, Leaderboard, Login, NotFound, Problem, ProblemList, Register, Submission,
};

static ROUTES: Lazy<RouteTable<PageRef>> =
    Lazy::new(|| build().expect("client route table is statically valid"));

static NOT_FOUND: Lazy<PageRef> = Lazy::new(|| page(NotFound));

/// The client's route table.
pub fn routes() -> &'static RouteTable<PageRef> {
    &ROUTES
}

/// The page rendered in the content slot for unmatched paths.
pub fn not_found() -> &'static PageRef {
    &NOT_FOUND
}

fn build() -> Result<RouteTable<PageRef>, TableError> {
    RouteTable::new(vec![
        Route::new("/problems", page(ProblemList)).alias("/").named("problems"),
        Route::new("/problems/:id", page(Problem)).named("problem"),
        Route::new("/contests/:id?", page(Contest)).named("contests"),
        Route::new("/submissions/:id", page(Submission)).named("submission"),
        Route::new("/leaderboard", page(Leaderboard)).named("leaderboard"),
        Route::new("/login", page(Login)).named("login"),
        Route::new("/register", page(Register)).named("register"),
    ])
}

fn page<P: Page + 'static>(page: P) -> PageRef {
    Arc::new(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builds() {
        assert_eq!(routes().len(), 7);
    }

    #[test]
    fn test_root_and_problems_share_a_page() {
        let root = routes().resolve("/").unwrap();
        let problems = routes().resolve("/problems").unwrap();

        assert_eq!(root.target().slug(), "problem-list");
        assert!(Arc::ptr_eq(root.target(), problems.target()));
    }

    #[test]
    fn test_problem_page_receives_its_id() {
        let hit = routes().resolve("/problems/42").unwrap();
        assert_eq!(hit.target().slug(), "problem");
        assert_eq!(hit.param(), Some("42"));

        let markup = hit.target().render(hit.param()).into_string();
        assert!(markup.contains("Problem 42"));
    }

    #[test]
    fn test_contest_page_with_and_without_id() {
        let with_id = routes().resolve("/contests/7").unwrap();
        assert_eq!(with_id.target().slug(), "contest");
        assert_eq!(with_id.param(), Some("7"));

        let without_id = routes().resolve("/contests").unwrap();
        assert_eq!(without_id.target().slug(), "contest");
        assert_eq!(without_id.param(), None);
        assert!(Arc::ptr_eq(with_id.target(), without_id.target()));
    }

    #[test]
    fn test_submission_requires_an_id() {
        let hit = routes().resolve("/submissions/1337").unwrap();
        assert_eq!(hit.target().slug(), "submission");
        assert_eq!(hit.param(), Some("1337"));

        assert!(routes().resolve("/submissions").is_none());
    }

    #[test]
    fn test_unmatched_path_has_a_not_found_page() {
        assert!(routes().resolve("/no/such/page").is_none());
        assert_eq!(not_found().slug(), "not-found");
    }

    #[test]
    fn test_every_page_renders_in_isolation() {
        for route in routes().iter() {
            let markup = route.target().render(Some("1")).into_string();
            assert!(!markup.is_empty(), "{} rendered nothing", route.pattern());
        }
    }
}
