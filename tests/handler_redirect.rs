mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shorty::api::handlers::redirect_handler;
use shorty::domain::entities::UserId;
use shorty::domain::repositories::UrlStore;
use shorty::state::AppState;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let short_url = store
        .create_short_url(UserId::from(1), "https://example.com/target".to_string())
        .await
        .unwrap();
    let code = common::short_code_from_url(&short_url).to_string();

    let server = test_server(state);
    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (state, store) = common::create_test_state();
    let short_url = store
        .create_short_url(UserId::from(1), "https://example.com".to_string())
        .await
        .unwrap();
    let code = common::short_code_from_url(&short_url);

    let flipped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    let server = test_server(state);

    // Codes made only of digits flip to themselves.
    if flipped != code {
        server
            .get(&format!("/{flipped}"))
            .await
            .assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_after_overwrite_keeps_old_code() {
    let (state, store) = common::create_test_state();
    let first = store
        .create_short_url(UserId::from(1), "https://a.com".to_string())
        .await
        .unwrap();
    store
        .create_short_url(UserId::from(1), "https://a.com".to_string())
        .await
        .unwrap();

    let server = test_server(state);
    let response = server
        .get(&format!("/{}", common::short_code_from_url(&first)))
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://a.com");
}

#[tokio::test]
async fn test_redirect_empty_long_url_is_not_found() {
    let (state, store) = common::create_test_state();
    let short_url = store
        .create_short_url(UserId::from(1), String::new())
        .await
        .unwrap();
    let code = common::short_code_from_url(&short_url).to_string();

    let server = test_server(state);
    let response = server.get(&format!("/{code}")).await;

    response.assert_status_not_found();
}
