use api::catalog::Catalog;
use payloads::ClientError;
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, spawn_app_with_catalog, two_movie_listing,
    unordered_listing,
};

#[tokio::test]
async fn listing_preserves_catalog_order_and_cardinality()
-> anyhow::Result<()> {
    let movies = unordered_listing();
    let app = spawn_app_with_catalog(Catalog::Movies(movies.clone())).await;

    let listed = app.client.list_movies().await?;

    // Catalog order, not id order.
    assert_eq!(listed, movies);
    Ok(())
}

#[tokio::test]
async fn two_movie_listing_round_trips() -> anyhow::Result<()> {
    let movies = two_movie_listing();
    let app = spawn_app_with_catalog(Catalog::Movies(movies.clone())).await;

    let listed = app.client.list_movies().await?;

    assert_eq!(listed, movies);
    Ok(())
}

#[tokio::test]
async fn listing_body_has_no_extra_fields() -> anyhow::Result<()> {
    let app =
        spawn_app_with_catalog(Catalog::Movies(two_movie_listing())).await;

    let body: serde_json::Value = reqwest::get(format!(
        "http://127.0.0.1:{}/movies/list",
        app.port
    ))
    .await?
    .json()
    .await?;

    assert_eq!(
        body,
        serde_json::json!([
            {"id": 1, "title": "A"},
            {"id": 2, "title": "B"},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn empty_catalog_lists_no_movies() -> anyhow::Result<()> {
    let app = spawn_app_with_catalog(Catalog::Movies(Vec::new())).await;

    let listed = app.client.list_movies().await?;

    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn unavailable_catalog_returns_500() {
    let app = spawn_app_with_catalog(Catalog::Unavailable).await;

    let result = app.client.list_movies().await;

    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unavailable_catalog_reports_generic_message() {
    let app = spawn_app_with_catalog(Catalog::Unavailable).await;

    let err = app.client.list_movies().await.unwrap_err();

    match err {
        ClientError::APIError(_, body) => {
            assert_eq!(body, "Something went wrong")
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Nothing is listening here.
    let client = payloads::APIClient {
        address: "http://127.0.0.1:9".into(),
        inner_client: reqwest::Client::new(),
    };

    let err = client.list_movies().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
