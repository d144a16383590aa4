use maud::{html, Markup};

use crate::page::Page;

pub struct Login;

impl Page for Login {
    fn slug(&self) -> &'static str {
        "login"
    }

    fn title(&self) -> &'static str {
        "Login"
    }

    fn render(&self, _param: Option<&str>) -> Markup {
        html! {
            section class="page login" {
                h1 { "Login" }
                p class="page-intro" { "Sign in to your account." }
            }
        }
    }
}
