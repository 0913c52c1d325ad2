use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    model::order::{OrderFormDto, OrderSearchDto},
    server::{
        controller::form_rejection,
        error::AppError,
        model::order::OrderSearch,
        service::{
            item::ItemService,
            member::MemberService,
            order::{OrderService, PlaceOrderParam},
        },
        state::AppState,
        view::order::{create_form_page, list_page},
    },
};

/// GET /order - Order form listing every member and item
pub async fn create_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let members = MemberService::new(&state.db).find_members().await?;
    let items = ItemService::new(&state.db).find_items().await?;

    Ok(Html(create_form_page(members, items, None)))
}

/// POST /order - Place an order and redirect to the order list
///
/// A shortage or invalid count re-renders the form with the error message.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<OrderFormDto>,
) -> Result<Response, AppError> {
    let result = OrderService::new(&state.db)
        .order(PlaceOrderParam {
            member_id: form.member_id,
            item_id: form.item_id,
            count: form.count,
        })
        .await;

    match result {
        Ok(_) => Ok(Redirect::to("/orders").into_response()),
        Err(err) => {
            let (status, message) = form_rejection(err)?;
            let members = MemberService::new(&state.db).find_members().await?;
            let items = ItemService::new(&state.db).find_items().await?;

            Ok((status, Html(create_form_page(members, items, Some(message)))).into_response())
        }
    }
}

/// GET /orders?memberName=&orderStatus= - Order list filtered by member name and status
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrderSearchDto>,
) -> Result<Html<String>, AppError> {
    let search = OrderSearch::from_dto(query)?;
    let orders = OrderService::new(&state.db).find_orders(&search).await?;

    Ok(Html(list_page(orders, search)))
}

/// POST /orders/{id}/cancel - Cancel an order and redirect to the order list
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    OrderService::new(&state.db).cancel_order(id).await?;

    Ok(Redirect::to("/orders"))
}
