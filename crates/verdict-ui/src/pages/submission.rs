use maud::{html, Markup};

use crate::page::Page;

pub struct Submission;

impl Page for Submission {
    fn slug(&self) -> &'static str {
        "submission"
    }

    fn title(&self) -> &'static str {
        "Submission"
    }

    fn render(&self, param: Option<&str>) -> Markup {
        html! {
            section class="page submission" {
                @match param {
                    Some(id) => h1 { "Submission " (id) },
                    None => h1 { "Submission" },
                }
                p class="page-intro" { "Source, verdict, and per-test results." }
            }
        }
    }
}
