use maud::{html, Markup};

use crate::page::Page;

/// Contest overview. With an id the page shows that contest; without one it
/// shows the contest calendar.
pub struct Contest;

impl Page for Contest {
    fn slug(&self) -> &'static str {
        "contest"
    }

    fn title(&self) -> &'static str {
        "Contests"
    }

    fn render(&self, param: Option<&str>) -> Markup {
        html! {
            section class="page contest" {
                @match param {
                    Some(id) => h1 { "Contest " (id) },
                    None => h1 { "Contests" },
                }
                p class="page-intro" { "Upcoming rounds and past standings." }
            }
        }
    }
}
