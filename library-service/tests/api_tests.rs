mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

fn dune() -> serde_json::Value {
    json!({
        "title": "Dune",
        "summary": "A desert planet and its spice",
        "author": "Frank Herbert",
        "totalPages": 412
    })
}

#[tokio::test]
async fn test_sign_up_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users/signup")
        .json(&json!({
            "login": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert!(!body["data"]["accessToken"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_sign_up_stores_hashed_password() {
    let app = TestApp::spawn().await;

    app.sign_up("nicola", "pass_word!").await;

    let user = app.users.find_by_login("nicola").expect("User not stored");
    assert_ne!(user.password_hash, "pass_word!");
    assert_eq!(user.password_hash.len(), 128);
    assert!(user.password_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_sign_up_token_subject_is_user_id() {
    let app = TestApp::spawn().await;

    let token = app.sign_up("nicola", "pass_word!").await;

    let user = app.users.find_by_login("nicola").expect("User not stored");
    let subject = app.token_codec.verify(&token).expect("Token must verify");
    assert_eq!(subject.id, user.id.to_string());
}

#[tokio::test]
async fn test_sign_up_duplicate_login() {
    let app = TestApp::spawn().await;

    app.sign_up("nicola", "pass_word!").await;

    let response = app
        .post("/api/users/signup")
        .json(&json!({
            "login": "nicola",
            "password": "other_pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_sign_up_blank_login() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users/signup")
        .json(&json!({
            "login": "   ",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Login must not be empty"));
}

#[tokio::test]
async fn test_sign_in_success() {
    let app = TestApp::spawn().await;

    app.sign_up("nicola", "pass_word!").await;

    let response = app
        .post("/api/users/signin")
        .json(&json!({
            "login": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["accessToken"].as_str().unwrap();

    let user = app.users.find_by_login("nicola").expect("User not stored");
    let subject = app.token_codec.verify(token).expect("Token must verify");
    assert_eq!(subject.id, user.id.to_string());
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let app = TestApp::spawn().await;

    app.sign_up("nicola", "Correct_Password!").await;

    let response = app
        .post("/api/users/signin")
        .json(&json!({
            "login": "nicola",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_sign_in_nonexistent_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users/signin")
        .json(&json!({
            "login": "nonexistent",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_books_without_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/books")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["data"]["message"], "Missing authentification");
}

#[tokio::test]
async fn test_books_with_empty_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/books")
        .header("Authorization", "")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Missing authentification");
}

#[tokio::test]
async fn test_books_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/books", "invalid")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_books_with_non_ascii_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/books")
        .header(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_books_with_expired_token() {
    let app = TestApp::spawn().await;

    app.sign_up("nicola", "pass_word!").await;
    let user = app.users.find_by_login("nicola").expect("User not stored");

    let expired = app
        .token_codec
        .issue_at(&user.id.to_string(), Utc::now() - Duration::hours(25))
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/api/books", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_books_with_token_for_unknown_user() {
    let app = TestApp::spawn().await;

    let token = app
        .token_codec
        .issue(&uuid::Uuid::new_v4().to_string())
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/api/books", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_create_book_success() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("nicola", "pass_word!").await;

    let response = app
        .post_authenticated("/api/books", &token)
        .json(&dune())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Dune");
    assert_eq!(body["data"]["author"], "Frank Herbert");
    assert_eq!(body["data"]["totalPages"], 412);
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_book_invalid_total_pages() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("nicola", "pass_word!").await;

    let response = app
        .post_authenticated("/api/books", &token)
        .json(&json!({
            "title": "Dune",
            "summary": "A desert planet and its spice",
            "author": "Frank Herbert",
            "totalPages": 0
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Total pages"));
}

#[tokio::test]
async fn test_get_book_invalid_id() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("nicola", "pass_word!").await;

    let response = app
        .get_authenticated("/api/books/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = TestApp::spawn().await;
    let token = app.sign_up("nicola", "pass_word!").await;

    let fake_uuid = uuid::Uuid::new_v4().to_string();
    let response = app
        .get_authenticated(&format!("/api/books/{}", fake_uuid), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"].is_string());
}

#[tokio::test]
async fn test_full_book_workflow() {
    let app = TestApp::spawn().await;

    // 1. Sign up
    app.sign_up("nicola", "pass_word!").await;

    // 2. Sign in
    let sign_in_response = app
        .post("/api/users/signin")
        .json(&json!({
            "login": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(sign_in_response.status(), StatusCode::OK);

    let sign_in_body: serde_json::Value = sign_in_response
        .json()
        .await
        .expect("Failed to parse response");
    let token = sign_in_body["data"]["accessToken"]
        .as_str()
        .unwrap()
        .to_string();

    // 3. Create a book
    let create_response = app
        .post_authenticated("/api/books", &token)
        .json(&dune())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let book_id = create_body["data"]["id"].as_str().unwrap().to_string();

    // 4. Read it back
    let get_response = app
        .get_authenticated(&format!("/api/books/{}", book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(get_response.status(), StatusCode::OK);

    let get_body: serde_json::Value = get_response.json().await.expect("Failed to parse response");
    assert_eq!(get_body["data"]["id"], book_id.as_str());
    assert_eq!(get_body["data"]["summary"], "A desert planet and its spice");

    // 5. List
    let list_response = app
        .get_authenticated("/api/books", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(list_response.status(), StatusCode::OK);

    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    // 6. Delete
    let delete_response = app
        .delete_authenticated(&format!("/api/books/{}", book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    // 7. Gone
    let gone_response = app
        .get_authenticated(&format!("/api/books/{}", book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(gone_response.status(), StatusCode::NOT_FOUND);

    let second_delete = app
        .delete_authenticated(&format!("/api/books/{}", book_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(second_delete.status(), StatusCode::NOT_FOUND);
}
