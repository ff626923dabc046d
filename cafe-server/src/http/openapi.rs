//! OpenAPI document for the order API, served with Swagger UI

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::error::ErrorBody;
use super::routes::{health, orders};
use crate::db::Order;
use crate::models::CreateOrderRequest;

/// Where the raw JSON document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cafe API",
        description = "A simple API for managing coffee-shop orders"
    ),
    paths(orders::create_order, orders::list_orders, health::health),
    components(schemas(
        Order,
        CreateOrderRequest,
        orders::CreatedResponse,
        health::HealthResponse,
        ErrorBody
    )),
    tags((name = "orders", description = "Order operations"))
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui` plus the JSON document it reads.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_order_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"]["/cafe/pedido"]["post"].is_object());
        assert!(doc["paths"]["/cafe/pedidos"]["get"].is_object());
        assert_eq!(doc["info"]["title"], "Cafe API");
    }

    #[test]
    fn create_documents_client_and_server_errors() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &doc["paths"]["/cafe/pedido"]["post"]["responses"];

        for status in ["201", "400", "500"] {
            assert!(responses[status].is_object(), "missing {status}");
        }
    }

    #[test]
    fn order_schema_has_wire_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &doc["components"]["schemas"]["Order"]["properties"];

        for field in ["id", "item", "quantity"] {
            assert!(props[field].is_object(), "missing {field}");
        }
    }
}
