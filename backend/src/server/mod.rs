//! Server construction and middleware wiring.

mod config;

pub use config::{ApiSettings, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::{TodoCommand, TodoQuery};
use backend::domain::{TodoCommandService, TodoQueryService};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::todos::{
    create_todo, delete_todo, get_todo, list_todos, toggle_todo_completion, update_todo,
};
use backend::outbound::persistence::{DieselTodoRepository, InMemoryTodoRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the todo driving ports based on configuration.
///
/// Uses the PostgreSQL-backed repository when a pool is configured and the
/// in-memory store otherwise. Both services share one repository instance so
/// commands and queries observe the same records.
fn build_todo_ports(config: &ServerConfig) -> (Arc<dyn TodoCommand>, Arc<dyn TodoQuery>) {
    match &config.db_pool {
        Some(pool) => {
            let repo = Arc::new(DieselTodoRepository::new(pool.clone(), config.id_assignment));
            (
                Arc::new(TodoCommandService::new(Arc::clone(&repo))),
                Arc::new(TodoQueryService::new(repo)),
            )
        }
        None => {
            let repo = Arc::new(InMemoryTodoRepository::new(config.id_assignment));
            (
                Arc::new(TodoCommandService::new(Arc::clone(&repo))),
                Arc::new(TodoQueryService::new(repo)),
            )
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_todos)
        .service(get_todo)
        .service(create_todo)
        .service(update_todo)
        .service(delete_todo)
        .service(toggle_todo_completion)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let (todos, todos_query) = build_todo_ports(&config);
    let http_state = web::Data::new(HttpState::new(todos, todos_query));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
