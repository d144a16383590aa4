// Navigation header
//
// A fixed set of navigation targets rendered on every page: the logo links
// home, then Problems / Contests / Leaderboard, then the login/register
// pair. Carries no state.

use maud::{html, Markup};

use crate::shell;

/// A navigation link that swaps only the content slot.
///
/// The plain `href` stays in place so the link still works as a normal
/// full-page request (no script, new tab, crawlers).
fn nav_link(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) hx-get=(href) hx-target=(shell::CONTENT_TARGET) hx-push-url="true" {
            (label)
        }
    }
}

/// Renders the navigation header.
pub fn render() -> Markup {
    html! {
        nav class="nav-container" {
            a href="/" hx-get="/" hx-target=(shell::CONTENT_TARGET) hx-push-url="true" {
                img src=(shell::LOGO_PATH) class="logo-img" alt="Verdict";
            }
            div class="nav-bar" {
                (nav_link("/problems", "Problems"))
                (nav_link("/contests", "Contests"))
                (nav_link("/leaderboard", "Leaderboard"))
                div class="nav-user" {
                    (nav_link("/login", "Login"))
                    span style="color: white" { " / " }
                    (nav_link("/register", "Register"))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_renders_six_link_targets() {
        let markup = render().into_string();
        assert_eq!(markup.matches("<a ").count(), 6);
    }

    #[test]
    fn test_header_link_targets() {
        let markup = render().into_string();
        for href in ["/", "/problems", "/contests", "/leaderboard", "/login", "/register"] {
            assert!(
                markup.contains(&format!("href=\"{href}\"")),
                "missing link to {href}"
            );
        }
    }

    #[test]
    fn test_logo_links_home() {
        let markup = render().into_string();
        assert!(markup.contains("logo-img"));
        assert!(markup.contains(&format!("src=\"{}\"", shell::LOGO_PATH)));
    }

    #[test]
    fn test_login_register_separator() {
        let markup = render().into_string();
        assert!(markup.contains(" / "));
        assert!(markup.contains("nav-user"));
    }

    #[test]
    fn test_links_swap_only_the_content_slot() {
        let markup = render().into_string();
        // Every link is boosted: one hx-get per anchor, all aimed at the slot
        assert_eq!(markup.matches("hx-get=").count(), 6);
        assert_eq!(
            markup.matches(&format!("hx-target=\"{}\"", shell::CONTENT_TARGET)).count(),
            6
        );
        assert_eq!(markup.matches("hx-push-url=\"true\"").count(), 6);
    }
}
