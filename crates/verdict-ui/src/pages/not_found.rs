use maud::{html, Markup};

use crate::page::Page;

/// Rendered in the content slot for paths no route matches.
pub struct NotFound;

impl Page for NotFound {
    fn slug(&self) -> &'static str {
        "not-found"
    }

    fn title(&self) -> &'static str {
        "Page not found"
    }

    fn render(&self, _param: Option<&str>) -> Markup {
        html! {
            section class="page not-found" {
                h1 { "Page not found" }
                p class="page-intro" {
                    "That address doesn't exist. Try the "
                    a href="/problems" { "problem archive" }
                    "."
                }
            }
        }
    }
}
