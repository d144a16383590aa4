use maud::{html, Markup};

use crate::page::Page;

/// The default page: the problem archive. Reachable from both `/` and
/// `/problems`.
pub struct ProblemList;

impl Page for ProblemList {
    fn slug(&self) -> &'static str {
        "problem-list"
    }

    fn title(&self) -> &'static str {
        "Problems"
    }

    fn render(&self, _param: Option<&str>) -> Markup {
        html! {
            section class="page problem-list" {
                h1 { "Problems" }
                p class="page-intro" {
                    "Browse the archive and pick something to solve."
                }
            }
        }
    }
}
