use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::Html,
    routing::{get, post_service},
};
use tokio::net::TcpListener;

use super::BookshelfSchema;
use crate::config::ServerSettings;

/// Build the HTTP router: POST executes documents, GET serves GraphiQL when enabled.
pub fn router(schema: BookshelfSchema, settings: &ServerSettings) -> Router {
    let service = GraphQL::new(schema);

    let route = if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&settings.path).finish();
        get(move || {
            let page = page.clone();
            async move { Html(page) }
        })
        .post_service(service)
    } else {
        post_service(service)
    };

    Router::new().route(&settings.path, route)
}

pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> std::io::Result<()> {
    let listener = TcpListener::bind(settings.address()).await?;
    tracing::info!(address = %listener.local_addr()?, path = %settings.path, "GraphQL server listening");

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
