//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every todo endpoint, the health probes, and the schema
//! wrappers that describe domain types without coupling them to utoipa.
//! The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::todos::{
    CreateTodoRequestBody, TodoResponseBody, UpdateTodoRequestBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "HTTP interface for managing todo items."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::todos::toggle_todo_completion,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoResponseBody,
        CreateTodoRequestBody,
        UpdateTodoRequestBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "todos", description = "Operations on todo items"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the OpenAPI document structure.

    use super::*;

    #[test]
    fn document_registers_every_todo_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in ["/todos", "/todos/{id}", "/todos/{id}/toggle"] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn document_registers_health_probes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/health/ready"));
        assert!(paths.contains_key("/health/live"));
    }

    #[test]
    fn document_registers_error_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        // utoipa replaces :: with . in schema names
        assert!(schemas.contains_key("crate.domain.Error"));
        assert!(schemas.contains_key("TodoResponseBody"));
    }
}
