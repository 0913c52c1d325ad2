use dioxus::prelude::*;

use crate::server::{
    model::{
        item::Item,
        member::Member,
        order::{OrderListing, OrderSearch, OrderStatus},
    },
    view::{
        layout::{ErrorMessage, Layout},
        render,
    },
};

pub fn create_form_page(members: Vec<Member>, items: Vec<Item>, error: Option<String>) -> String {
    render("Place order", rsx! { OrderForm { members, items, error } })
}

pub fn list_page(orders: Vec<OrderListing>, search: OrderSearch) -> String {
    let member_name = search.member_name.unwrap_or_default();
    let order_status = search.order_status.map(status_value);

    render("Orders", rsx! { OrderList { orders, member_name, order_status } })
}

fn status_value(status: OrderStatus) -> String {
    match status {
        OrderStatus::Order => "ORDER".to_string(),
        OrderStatus::Cancel => "CANCEL".to_string(),
    }
}

#[component]
fn OrderForm(members: Vec<Member>, items: Vec<Item>, error: Option<String>) -> Element {
    rsx! {
        Layout {
            title: "Place order",
            ErrorMessage { message: error }
            form {
                action: "/order",
                method: "post",
                div {
                    class: "form-group",
                    label { r#for: "member", "Member" }
                    select {
                        id: "member",
                        name: "memberId",
                        required: true,
                        option { value: "", "Select a member" }
                        for member in members {
                            option { value: member.id.to_string(), {member.name.clone()} }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "item", "Item" }
                    select {
                        id: "item",
                        name: "itemId",
                        required: true,
                        option { value: "", "Select an item" }
                        for item in items {
                            option {
                                value: item.id.to_string(),
                                {format!("{} ({} in stock)", item.name, item.stock_quantity)}
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "count", "Count" }
                    input { r#type: "number", id: "count", name: "count", min: "1", value: "1", required: true }
                }
                button { r#type: "submit", class: "btn btn-primary", "Submit" }
            }
        }
    }
}

#[component]
fn OrderList(orders: Vec<OrderListing>, member_name: String, order_status: Option<String>) -> Element {
    let selected = order_status.unwrap_or_default();

    rsx! {
        Layout {
            title: "Orders",
            form {
                action: "/orders",
                method: "get",
                class: "search",
                input {
                    r#type: "text",
                    name: "memberName",
                    placeholder: "Member name",
                    value: member_name,
                }
                select {
                    name: "orderStatus",
                    option { value: "", selected: selected.is_empty(), "All" }
                    option { value: "ORDER", selected: selected == "ORDER", "Ordered" }
                    option { value: "CANCEL", selected: selected == "CANCEL", "Cancelled" }
                }
                button { r#type: "submit", class: "btn", "Search" }
            }
            if orders.is_empty() {
                p { class: "empty", "No orders found." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "#" }
                            th { "Member" }
                            th { "Item" }
                            th { "Price" }
                            th { "Count" }
                            th { "Status" }
                            th { "Date" }
                            th {}
                        }
                    }
                    tbody {
                        for listing in orders {
                            OrderRow { listing }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(listing: OrderListing) -> Element {
    let order = &listing.order;
    let item_names = listing
        .lines
        .iter()
        .map(|line| line.item_name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let order_price = listing
        .lines
        .first()
        .map(|line| line.order_price.to_string())
        .unwrap_or_default();
    let count: i32 = listing.lines.iter().map(|line| line.count).sum();
    let order_date = order.order_date.format("%Y-%m-%d %H:%M").to_string();
    let cancellable = order.status == OrderStatus::Order;

    rsx! {
        tr {
            td { {order.id.to_string()} }
            td { {listing.member_name.clone()} }
            td { {item_names} }
            td { {order_price} }
            td { {count.to_string()} }
            td { {status_value(order.status)} }
            td { {order_date} }
            td {
                if cancellable {
                    form {
                        action: format!("/orders/{}/cancel", order.id),
                        method: "post",
                        button { r#type: "submit", class: "btn btn-sm btn-error", "Cancel" }
                    }
                }
            }
        }
    }
}
