use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        api::{member as member_api, order_simple},
        home, item, member, order,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "jpashop", description = "Member, item, and order API"),
    tags(
        (name = "member", description = "Member registration and listing"),
        (name = "order", description = "Order summaries")
    )
)]
struct ApiDoc;

/// Builds the application router: JSON API, API docs, and HTML pages.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(member_api::save_member_v1, member_api::members_v1))
        .routes(routes!(member_api::save_member_v2, member_api::members_v2))
        .routes(routes!(member_api::update_member_v2))
        .routes(routes!(order_simple::orders_v1))
        .routes(routes!(order_simple::orders_v2))
        .routes(routes!(order_simple::orders_v3))
        .routes(routes!(order_simple::orders_v4))
        .split_for_parts();

    let pages = Router::new()
        .route("/", get(home::home))
        .route("/members/new", get(member::create_form).post(member::create))
        .route("/members", get(member::list))
        .route("/items/new", get(item::create_form).post(item::create))
        .route("/items", get(item::list))
        .route(
            "/items/{id}/edit",
            get(item::update_form).post(item::update),
        )
        .route("/order", get(order::create_form).post(order::create))
        .route("/orders", get(order::list))
        .route("/orders/{id}/cancel", post(order::cancel));

    api_router
        .merge(pages)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
