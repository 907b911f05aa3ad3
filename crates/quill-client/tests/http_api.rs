use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quill_client::views::{BrowseView, CreateForm, Field, Submission};
use quill_client::{ClientError, HttpPostsApi, PostsApi};

fn post_json(id: Uuid, tags: &[&str]) -> serde_json::Value {
    let now = Utc::now().to_rfc3339();
    json!({
        "_id": id,
        "title": "Hello",
        "content": "Hello world!",
        "author": "Ann",
        "tags": tags,
        "createdAt": now,
        "updatedAt": now,
        "slug": "hello",
    })
}

#[tokio::test]
async fn create_then_browse_shows_parsed_tags() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(json!({
            "title": "Hello",
            "content": "Hello world!",
            "author": "Ann",
            "tags": ["tech", "life"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(post_json(id, &["tech", "life"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "posts": [post_json(id, &["tech", "life"])] })),
        )
        .mount(&server)
        .await;

    let api = HttpPostsApi::new(&server.uri()).unwrap();

    let mut form = CreateForm::new();
    form.set_title("Hello");
    form.set_content("Hello world!");
    form.set_author("Ann");
    form.set_tags("tech, life");
    assert!(matches!(
        form.submit(&api).await,
        Submission::Created { .. }
    ));

    let mut view = BrowseView::new();
    view.load(&api).await;
    let cards = view.cards();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, id);
    assert_eq!(cards[0].tags, vec!["tech", "life"]);
}

#[tokio::test]
async fn field_errors_from_server_land_on_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "message": "Validation failed",
            "errors": ["Title cannot exceed 200 characters"],
            "fieldErrors": [
                { "field": "title", "message": "Title cannot exceed 200 characters" }
            ],
        })))
        .mount(&server)
        .await;

    let api = HttpPostsApi::new(&server.uri()).unwrap();
    let mut form = CreateForm::new();
    form.set_title("Hello");
    form.set_content("Hello world!");
    form.set_author("Ann");

    assert_eq!(form.submit(&api).await, Submission::Failed);
    assert_eq!(
        form.errors().get(Field::Title),
        Some("Title cannot exceed 200 characters")
    );
    assert!(form.errors().general.is_none());
}

#[tokio::test]
async fn not_found_and_server_errors_are_typed() {
    let server = MockServer::start().await;
    let missing = Uuid::new_v4();
    let broken = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/posts/{missing}")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "status": 404, "message": "Post not found" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/posts/{broken}")))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "status": 500, "message": "Internal server error" })),
        )
        .mount(&server)
        .await;

    let api = HttpPostsApi::new(&server.uri()).unwrap();

    assert!(matches!(api.get(missing).await, Err(ClientError::NotFound)));
    match api.delete(broken).await {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("expected a server error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_sends_only_given_fields() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/api/posts/{id}")))
        .and(body_json(json!({ "title": "Hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(id, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpPostsApi::new(&server.uri()).unwrap();
    let req = quill_shared::dto::UpdatePostRequest {
        title: Some("Hello".to_string()),
        ..Default::default()
    };

    let post = api.update(id, &req).await.unwrap();
    assert_eq!(post.id, id);
    assert!(post.tags.is_empty());
}

#[tokio::test]
async fn health_reads_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Backend server is running",
            "status": "OK",
            "version": "0.1.0",
            "timestamp": Utc::now().to_rfc3339(),
        })))
        .mount(&server)
        .await;

    let api = HttpPostsApi::new(&server.uri()).unwrap();
    let health = api.health().await.unwrap();
    assert_eq!(health.status, "OK");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let api = HttpPostsApi::new("http://127.0.0.1:1").unwrap();

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(
        err.to_string(),
        "Network error. Please check if the backend server is running."
    );

    let mut form = CreateForm::new();
    form.set_title("Hello");
    form.set_content("Hello world!");
    form.set_author("Ann");
    assert_eq!(form.submit(&api).await, Submission::Failed);
    assert_eq!(
        form.errors().general.as_deref(),
        Some("Network error. Please check if the backend server is running.")
    );
}
