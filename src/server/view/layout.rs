use dioxus::prelude::*;

pub const SITE_NAME: &str = "jpashop";

/// Page body with the header shared by every page.
///
/// The surrounding document (`head`, `title`) is written by `view::render`.
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "container",
                h1 { {title} }
                {children}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "header",
            a {
                href: "/",
                class: "brand",
                {SITE_NAME}
            }
        }
    }
}

/// Error message shown above a form after a rejected submission.
#[component]
pub fn ErrorMessage(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p {
                class: "alert alert-error",
                role: "alert",
                {message}
            }
        }
    }
}
