use maud::{html, Markup};

use crate::page::Page;

pub struct Register;

impl Page for Register {
    fn slug(&self) -> &'static str {
        "register"
    }

    fn title(&self) -> &'static str {
        "Register"
    }

    fn render(&self, _param: Option<&str>) -> Markup {
        html! {
            section class="page register" {
                h1 { "Register" }
                p class="page-intro" { "Create an account to start submitting." }
            }
        }
    }
}
