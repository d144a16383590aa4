use maud::{html, Markup};

use crate::page::Page;

pub struct Leaderboard;

impl Page for Leaderboard {
    fn slug(&self) -> &'static str {
        "leaderboard"
    }

    fn title(&self) -> &'static str {
        "Leaderboard"
    }

    fn render(&self, _param: Option<&str>) -> Markup {
        html! {
            section class="page leaderboard" {
                h1 { "Leaderboard" }
                p class="page-intro" { "Top solvers across the archive." }
            }
        }
    }
}
