use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use todo_server::{app, DeleteConfirmation, Item, MemoryStore};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    app(MemoryStore::shared())
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn delete_request(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = test_app().oneshot(get_request("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Item> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = test_app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Item = body_json(resp).await;
    assert_eq!(todo.text, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_missing_text_returns_400() {
    let resp = test_app()
        .oneshot(json_request("POST", "/todos", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn create_todo_empty_text_returns_400() {
    let resp = test_app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_create_leaves_collection_unchanged() {
    use tower::Service;

    let mut app = test_app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"text":""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    let todos: Vec<Item> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found() {
    let resp = test_app()
        .oneshot(json_request(
            "PATCH",
            "/todos/00000000-0000-0000-0000-000000000000",
            r#"{"text":"Nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn update_todo_bad_id_returns_400() {
    let resp = test_app()
        .oneshot(json_request("PATCH", "/todos/not-an-id", r#"{"completed":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn double_toggle_restores_completed() {
    use tower::Service;

    let mut app = test_app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"text":"Flip me"}"#))
        .await
        .unwrap();
    let created: Item = body_json(resp).await;
    assert!(!created.completed);

    for expected in [true, false] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "PATCH",
                &format!("/todos/{}", created.id),
                &format!(r#"{{"completed":{expected}}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Item = body_json(resp).await;
        assert_eq!(updated.completed, expected);
    }
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = test_app()
        .oneshot(delete_request("/todos/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_bad_id_returns_400() {
    let resp = test_app()
        .oneshot(delete_request("/todos/not-an-id"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = test_app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"text":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Item = body_json(resp).await;
    assert_eq!(created.text, "Walk dog");
    assert!(!created.completed);
    let id = created.id;

    // list — should contain the one todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Item> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);

    // update — partial: only completed
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            r#"{"completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.text, "Walk dog"); // unchanged
    assert!(updated.completed);

    // update — partial: only text
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/todos/{id}"),
            r#"{"text":"Walk cat"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.text, "Walk cat");
    assert!(updated.completed); // unchanged from previous update

    // delete — 200 with confirmation body
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request(&format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: DeleteConfirmation = body_json(resp).await;
    assert_eq!(confirmation.message, "Deleted");

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request(&format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    let err: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(err["error"], "Todo not found");

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Item> = body_json(resp).await;
    assert!(todos.is_empty());
}
