use dioxus::prelude::*;

use crate::server::{
    model::member::Member,
    view::{
        layout::{ErrorMessage, Layout},
        render,
    },
};

/// Values to put back into the registration form after a rejected post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFormValues {
    pub name: String,
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

pub fn create_form_page(values: MemberFormValues, error: Option<String>) -> String {
    render("Register member", rsx! { MemberForm { values, error } })
}

pub fn list_page(members: Vec<Member>) -> String {
    render("Members", rsx! { MemberList { members } })
}

#[component]
fn MemberForm(values: MemberFormValues, error: Option<String>) -> Element {
    rsx! {
        Layout {
            title: "Register member",
            ErrorMessage { message: error }
            form {
                action: "/members/new",
                method: "post",
                div {
                    class: "form-group",
                    label { r#for: "name", "Name" }
                    input {
                        r#type: "text",
                        id: "name",
                        name: "name",
                        placeholder: "Enter a name",
                        required: true,
                        value: values.name,
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "city", "City" }
                    input { r#type: "text", id: "city", name: "city", value: values.city }
                }
                div {
                    class: "form-group",
                    label { r#for: "street", "Street" }
                    input { r#type: "text", id: "street", name: "street", value: values.street }
                }
                div {
                    class: "form-group",
                    label { r#for: "zipcode", "Zipcode" }
                    input { r#type: "text", id: "zipcode", name: "zipcode", value: values.zipcode }
                }
                button { r#type: "submit", class: "btn btn-primary", "Submit" }
            }
        }
    }
}

#[component]
fn MemberList(members: Vec<Member>) -> Element {
    rsx! {
        Layout {
            title: "Members",
            if members.is_empty() {
                p { class: "empty", "No members yet." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "#" }
                            th { "Name" }
                            th { "City" }
                            th { "Street" }
                            th { "Zipcode" }
                        }
                    }
                    tbody {
                        for member in members {
                            tr {
                                td { {member.id.to_string()} }
                                td { {member.name.clone()} }
                                td { {member.address.as_ref().map(|a| a.city.clone()).unwrap_or_default()} }
                                td { {member.address.as_ref().map(|a| a.street.clone()).unwrap_or_default()} }
                                td { {member.address.as_ref().map(|a| a.zipcode.clone()).unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
