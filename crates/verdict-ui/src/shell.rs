// Persistent shell
//
// Full HTML document wrapping every page: head with stylesheet and the htmx
// runtime, then the navigation header, the side panel, and the routed
// content slot. The shell is sent once per full document; client-side
// navigation swaps only the slot, so header and side panel keep their DOM
// identity across page changes.

use maud::{html, Markup, DOCTYPE};

use crate::{header, side_panel};

/// htmx runtime powering reload-free navigation.
pub const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Stylesheet applied by class-name reference; served as a static asset.
pub const STYLESHEET_PATH: &str = "/assets/app.css";

/// Logo image displayed in the header; served as a static asset.
pub const LOGO_PATH: &str = "/assets/logo.svg";

/// CSS selector of the routed content slot. Navigation links aim their
/// swaps here.
pub const CONTENT_TARGET: &str = "#content";

/// Renders the full document around a page's markup.
pub fn document(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " · Verdict" }
                link rel="stylesheet" href=(STYLESHEET_PATH);
                script src=(HTMX_JS) defer {}
            }
            body {
                (header::render())
                div class="layout" {
                    (side_panel::render())
                    main id="content" class="content" {
                        (content)
                    }
                }
            }
        }
    }
}
