mod common;

use common::{envelope, TestApp};
use sample_api::services::{PostStore, StaticEnv};
use serde_json::json;

#[tokio::test]
async fn list_returns_seed_posts() {
    let app = TestApp::spawn().await;

    let body = envelope(app.get("/posts").await, 200, "success").await;

    let posts = body["data"].as_array().expect("data should be an array");
    assert_eq!(posts.len(), 3);
    for post in posts {
        assert!(post["id"].is_u64());
        assert!(post["title"].is_string());
        assert!(post["content"].is_string());
    }
    assert_eq!(posts[0]["title"], "初期投稿 from v1.0.5");
}

#[tokio::test]
async fn create_returns_201_and_appends() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/posts", &json!({ "title": "テスト投稿", "content": "テスト内容" }))
        .await;
    let body = envelope(response, 201, "success").await;

    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["title"], "テスト投稿");
    assert_eq!(body["data"]["content"], "テスト内容");

    let listed = envelope(app.get("/posts").await, 200, "success").await;
    let posts = listed["data"].as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[3], body["data"]);
}

#[tokio::test]
async fn ids_are_one_greater_than_prior_count() {
    let app = TestApp::spawn_with(StaticEnv::new(), PostStore::new()).await;

    for expected in 1..=5u64 {
        let response = app
            .post_json(
                "/posts",
                &json!({ "title": format!("t{}", expected), "content": "c" }),
            )
            .await;
        let body = envelope(response, 201, "success").await;
        assert_eq!(body["data"]["id"], expected);
    }

    assert_eq!(app.state.posts.len(), 5);
}

#[tokio::test]
async fn missing_fields_return_400() {
    let app = TestApp::spawn().await;

    let cases = [
        json!({ "title": "テスト投稿" }),
        json!({ "content": "テスト内容" }),
        json!({ "title": "", "content": "テスト内容" }),
        json!({ "title": "テスト投稿", "content": "" }),
        json!({}),
    ];

    for payload in cases {
        let body = envelope(app.post_json("/posts", &payload).await, 400, "error").await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("必須"), "unexpected error for {}: {}", payload, error);
    }

    assert_eq!(app.state.posts.len(), 3);
}

#[tokio::test]
async fn non_json_body_returns_400() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(format!("{}/posts", app.address))
        .body("title=x&content=y")
        .send()
        .await
        .unwrap();

    let body = envelope(response, 400, "error").await;
    assert!(body["error"].as_str().unwrap().contains("必須"));
}
