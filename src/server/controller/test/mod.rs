use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use url::Url;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::server::{
    router::router,
    service::{auth::token::TokenService, geocode::GeocodeService, image::ImageStore},
    state::AppState,
};


const KNOWN_ADDRESS: &str = "1 Stadium Road, Grenoble";

/// Resources that must outlive the router under test.
struct TestApp {
    test: TestContext,
    uploads: TempDir,
    _geocoder: MockServer,
}

impl TestApp {
    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }
}

/// Starts a geocoding provider that only resolves `KNOWN_ADDRESS`.
async fn mock_geocoder() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", KNOWN_ADDRESS))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": 45.18, "lng": 5.72}}}]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    server
}

/// Builds the full API router over an in-memory database and a temporary upload directory.
async fn app() -> (TestApp, Router) {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let uploads = TempDir::new().unwrap();
    let geocoder = mock_geocoder().await;

    let url = Url::parse(&format!("{}/geocode/json", geocoder.uri())).unwrap();
    let state = AppState::new(
        test.db.clone().unwrap(),
        TokenService::new("test-secret", chrono::Duration::hours(1)),
        4,
        GeocodeService::new(reqwest::Client::new(), url, "test-key".to_string()),
        ImageStore::new(uploads.path()),
    );

    (
        TestApp {
            test,
            uploads,
            _geocoder: geocoder,
        },
        router().with_state(state),
    )
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Signs up an academy and returns `(academy_id, token)`.
async fn signup(app: &Router, email: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/academies/signup",
        None,
        Some(json!({
            "name": "Grenoble Foot Academy",
            "email": email,
            "password": "secret1",
            "image": "images/academy.png"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    (
        body["academyId"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

fn player_body(description: &str, address: &str) -> Value {
    json!({
        "title": "T",
        "description": description,
        "address": address,
        "image": "images/t.png"
    })
}
