use axum::response::Html;

use crate::server::view::home::home_page;

/// GET / - Home page linking to every screen
pub async fn home() -> Html<String> {
    Html(home_page())
}
