use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    model::item::BookFormDto,
    server::{
        controller::form_rejection,
        error::AppError,
        model::item::{CreateItemParam, UpdateItemParam},
        service::item::ItemService,
        state::AppState,
        view::item::{create_form_page, list_page, update_form_page, BookFormValues},
    },
};

/// GET /items/new - Book registration form
pub async fn create_form() -> Html<String> {
    Html(create_form_page(BookFormValues::default(), None))
}

/// POST /items/new - Register a book and redirect to the item list
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookFormDto>,
) -> Result<Response, AppError> {
    let values = BookFormValues::from_form(&form);

    match ItemService::new(&state.db)
        .save_item(CreateItemParam::book_from_form(form))
        .await
    {
        Ok(_) => Ok(Redirect::to("/items").into_response()),
        Err(err) => {
            let (status, message) = form_rejection(err)?;
            Ok((status, Html(create_form_page(values, Some(message)))).into_response())
        }
    }
}

/// GET /items - Item list
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = ItemService::new(&state.db).find_items().await?;

    Ok(Html(list_page(items)))
}

/// GET /items/{id}/edit - Book edit form prefilled with the stored values
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let item = ItemService::new(&state.db)
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

    Ok(Html(update_form_page(
        id,
        BookFormValues::from_item(&item),
        None,
    )))
}

/// POST /items/{id}/edit - Update a book and redirect to the item list
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookFormDto>,
) -> Result<Response, AppError> {
    let values = BookFormValues::from_form(&form);

    match ItemService::new(&state.db)
        .update_item(UpdateItemParam::book_from_form(id, form))
        .await
    {
        Ok(_) => Ok(Redirect::to("/items").into_response()),
        Err(err) => {
            let (status, message) = form_rejection(err)?;
            Ok((status, Html(update_form_page(id, values, Some(message)))).into_response())
        }
    }
}
