use maud::{html, Markup};

use crate::page::Page;

/// A single problem, addressed by id.
pub struct Problem;

impl Page for Problem {
    fn slug(&self) -> &'static str {
        "problem"
    }

    fn title(&self) -> &'static str {
        "Problem"
    }

    fn render(&self, param: Option<&str>) -> Markup {
        html! {
            section class="page problem" {
                @match param {
                    Some(id) => h1 { "Problem " (id) },
                    None => h1 { "Problem" },
                }
                p class="page-intro" { "Statement, constraints, and samples." }
            }
        }
    }
}
