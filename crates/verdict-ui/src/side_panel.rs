// Side panel
//
// Static panel rendered next to the content slot on every page.

use maud::{html, Markup};

pub fn render() -> Markup {
    html! {
        aside class="right-panel" {
            section class="panel-box" {
                h2 { "Welcome" }
                p { "Sign in to submit solutions and join rated contests." }
            }
            section class="panel-box" {
                h2 { "Getting started" }
                ul {
                    li { "Pick a problem from the archive" }
                    li { "Submit in any supported language" }
                    li { "Watch the verdict come back live" }
                }
            }
        }
    }
}
