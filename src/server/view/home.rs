use dioxus::prelude::*;

use crate::server::view::{layout::Layout, render};

pub fn home_page() -> String {
    render("Home", rsx! { Home {} })
}

#[component]
fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home",
            p { "Members, items, and orders." }
            ul {
                class: "menu",
                li { a { href: "/members/new", "Register member" } }
                li { a { href: "/members", "Member list" } }
                li { a { href: "/items/new", "Register item" } }
                li { a { href: "/items", "Item list" } }
                li { a { href: "/order", "Place order" } }
                li { a { href: "/orders", "Order list" } }
            }
        }
    }
}
