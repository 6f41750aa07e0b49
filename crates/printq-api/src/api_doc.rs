//! OpenAPI document assembly.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::verify_token,
        crate::handlers::order_create::create_order,
        crate::handlers::order_get::get_order,
        crate::handlers::order_list::list_orders,
        crate::handlers::order_status::update_order_status,
        crate::handlers::order_delete::delete_all_orders,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::handlers::MessageResponse,
        crate::handlers::auth::LoginRequest,
        crate::handlers::order_status::UpdateStatusRequest,
    )),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "orders", description = "Print order management")
    )
)]
pub struct ApiDoc;
