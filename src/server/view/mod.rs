//! Server-rendered HTML pages.
//!
//! Pages are Dioxus components rendered to a string with `dioxus-ssr`. They carry no
//! event handlers: every interaction is a plain link or form post handled by the
//! controllers in `controller/`.

pub mod home;
pub mod item;
pub mod layout;
pub mod member;
pub mod order;

use dioxus::prelude::Element;

use layout::SITE_NAME;

/// Renders a page element to a complete HTML document titled `title`.
///
/// Titles are fixed page names, never user input.
pub fn render(title: &str, page: Element) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{} | {}</title>",
            "</head>",
            "<body>{}</body>",
            "</html>"
        ),
        title,
        SITE_NAME,
        dioxus_ssr::render_element(page)
    )
}
