use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Customer};
use tower::ServiceExt;

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

// --- list ---

#[tokio::test]
async fn list_customers_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/customers").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let customers: Vec<Customer> = body_json(resp).await;
    assert!(customers.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_customer_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/customers",
            r#"{"name":"Alice","email":"a@x.com","phone":"123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let customer: Customer = body_json(resp).await;
    assert_eq!(customer.name, "Alice");
    assert_eq!(customer.email, "a@x.com");
    assert!(customer.notes.is_none());
}

#[tokio::test]
async fn create_customer_with_notes() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/customers",
            r#"{"name":"Bob","email":"b@x.com","phone":"456","notes":"prefers email"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let customer: Customer = body_json(resp).await;
    assert_eq!(customer.notes.as_deref(), Some("prefers email"));
}

#[tokio::test]
async fn create_customer_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/customers", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_customer_blank_name_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/customers",
            r#"{"name":"  ","email":"a@x.com","phone":"123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_customer_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/customers/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_customer_bad_uuid_returns_400() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/customers/not-a-uuid")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_customer_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/customers/00000000-0000-0000-0000-000000000000",
            r#"{"name":"Nobody","email":"n@x.com","phone":"000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_customer_blank_phone_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/customers/00000000-0000-0000-0000-000000000000",
            r#"{"name":"Alice","email":"a@x.com","phone":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_customer_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/customers/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/customers",
            r#"{"name":"Alice","email":"a@x.com","phone":"123","notes":"first contact"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Customer = body_json(resp).await;
    assert_eq!(created.name, "Alice");
    let id = created.id;

    // list — should contain the one customer
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/customers")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let customers: Vec<Customer> = body_json(resp).await;
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/customers/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Customer = body_json(resp).await;
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "Alice");

    // update — full replacement, id preserved
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/customers/{id}"),
            r#"{"name":"Alice Smith","email":"alice@x.com","phone":"456"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Customer = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.phone, "456");
    assert!(updated.notes.is_none()); // replaced, not merged

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/customers/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/customers/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri("/customers")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let customers: Vec<Customer> = body_json(resp).await;
    assert!(customers.is_empty());
}
