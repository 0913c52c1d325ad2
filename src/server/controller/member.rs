use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    model::member::MemberFormDto,
    server::{
        controller::form_rejection,
        error::AppError,
        model::member::CreateMemberParam,
        service::member::MemberService,
        state::AppState,
        view::member::{create_form_page, list_page, MemberFormValues},
    },
};

/// GET /members/new - Member registration form
pub async fn create_form() -> Html<String> {
    Html(create_form_page(MemberFormValues::default(), None))
}

/// POST /members/new - Register a member from the form
///
/// Redirects home on success. A blank or taken name re-renders the form with the
/// submitted values and the error message.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<MemberFormDto>,
) -> Result<Response, AppError> {
    let values = MemberFormValues {
        name: form.name.clone(),
        city: form.city.clone(),
        street: form.street.clone(),
        zipcode: form.zipcode.clone(),
    };

    match MemberService::new(&state.db)
        .join(CreateMemberParam::from_form(form))
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err) => {
            let (status, message) = form_rejection(err)?;
            Ok((status, Html(create_form_page(values, Some(message)))).into_response())
        }
    }
}

/// GET /members - Member list
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let members = MemberService::new(&state.db).find_members().await?;

    Ok(Html(list_page(members)))
}
