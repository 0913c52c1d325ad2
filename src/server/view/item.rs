use dioxus::prelude::*;

use crate::{
    model::item::BookFormDto,
    server::{
        model::item::{Item, ItemKind},
        view::{
            layout::{ErrorMessage, Layout},
            render,
        },
    },
};

/// Values shown in the book form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFormValues {
    pub name: String,
    pub price: String,
    pub stock_quantity: String,
    pub author: String,
    pub isbn: String,
}

impl BookFormValues {
    pub fn from_form(form: &BookFormDto) -> Self {
        Self {
            name: form.name.clone(),
            price: form.price.to_string(),
            stock_quantity: form.stock_quantity.to_string(),
            author: form.author.clone(),
            isbn: form.isbn.clone(),
        }
    }

    /// Prefills the form from a stored book. Non-book items leave the kind fields blank.
    pub fn from_item(item: &Item) -> Self {
        let (author, isbn) = match &item.kind {
            ItemKind::Book { author, isbn } => (author.clone(), isbn.clone()),
            _ => (String::new(), String::new()),
        };

        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            stock_quantity: item.stock_quantity.to_string(),
            author,
            isbn,
        }
    }
}

pub fn create_form_page(values: BookFormValues, error: Option<String>) -> String {
    render("Register item", rsx! {
        BookForm {
            title: "Register item",
            action: "/items/new",
            values,
            error,
        }
    })
}

pub fn update_form_page(id: i32, values: BookFormValues, error: Option<String>) -> String {
    render("Edit item", rsx! {
        BookForm {
            title: "Edit item",
            action: format!("/items/{}/edit", id),
            values,
            error,
        }
    })
}

pub fn list_page(items: Vec<Item>) -> String {
    render("Items", rsx! { ItemList { items } })
}

#[component]
fn BookForm(title: String, action: String, values: BookFormValues, error: Option<String>) -> Element {
    rsx! {
        Layout {
            title,
            ErrorMessage { message: error }
            form {
                action,
                method: "post",
                div {
                    class: "form-group",
                    label { r#for: "name", "Name" }
                    input { r#type: "text", id: "name", name: "name", required: true, value: values.name }
                }
                div {
                    class: "form-group",
                    label { r#for: "price", "Price" }
                    input { r#type: "number", id: "price", name: "price", min: "0", required: true, value: values.price }
                }
                div {
                    class: "form-group",
                    label { r#for: "stockQuantity", "Stock" }
                    input { r#type: "number", id: "stockQuantity", name: "stockQuantity", min: "0", required: true, value: values.stock_quantity }
                }
                div {
                    class: "form-group",
                    label { r#for: "author", "Author" }
                    input { r#type: "text", id: "author", name: "author", value: values.author }
                }
                div {
                    class: "form-group",
                    label { r#for: "isbn", "ISBN" }
                    input { r#type: "text", id: "isbn", name: "isbn", value: values.isbn }
                }
                button { r#type: "submit", class: "btn btn-primary", "Submit" }
            }
        }
    }
}

#[component]
fn ItemList(items: Vec<Item>) -> Element {
    rsx! {
        Layout {
            title: "Items",
            if items.is_empty() {
                p { class: "empty", "No items yet." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "#" }
                            th { "Kind" }
                            th { "Name" }
                            th { "Price" }
                            th { "Stock" }
                            th {}
                        }
                    }
                    tbody {
                        for item in items {
                            tr {
                                td { {item.id.to_string()} }
                                td { {item.kind.label()} }
                                td { {item.name.clone()} }
                                td { {item.price.to_string()} }
                                td { {item.stock_quantity.to_string()} }
                                td {
                                    if matches!(item.kind, ItemKind::Book { .. }) {
                                        a {
                                            href: format!("/items/{}/edit", item.id),
                                            class: "btn btn-sm",
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
