use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use bookshelf::config::ServerSettings;
use bookshelf::graphql::{build_schema, router};
use bookshelf::storage::EntityStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(graphiql: bool) -> Router {
    let settings = ServerSettings {
        graphiql,
        ..ServerSettings::default()
    };
    router(build_schema(EntityStore::seeded().into_shared()), &settings)
}

fn get_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/graphql")
        .body(Body::empty())
        .unwrap()
}

fn post_request(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_post_executes_query() {
    let response = app(true)
        .oneshot(post_request("{ book(id: 1) { name author { name } } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(
        body["data"],
        json!({
            "book": {
                "name": "Harry Potter and the Chamber of Secrets",
                "author": { "name": "J. K. Rowling" }
            }
        })
    );
}

#[tokio::test]
async fn test_post_mutation_reports_not_found() {
    let response = app(false)
        .oneshot(post_request("mutation { deleteBook(id: 99) { id } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(body["errors"][0]["extensions"]["code"], json!("NOT_FOUND"));
    assert_eq!(body["errors"][0]["path"], json!(["deleteBook"]));
}

#[tokio::test]
async fn test_get_serves_graphiql_page() {
    let response = app(true).oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.to_lowercase().contains("graphiql"));
    assert!(html.contains("/graphql"));
}

#[tokio::test]
async fn test_get_refused_when_graphiql_disabled() {
    let response = app(false).oneshot(get_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
