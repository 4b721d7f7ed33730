use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        artists, exhibitions, health::health, login::login, news, orders, paintings,
        pickup_points, rates, shop,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Everything under `/api/admin` except `login` requires a bearer token;
/// the check lives in the handler extractors rather than a middleware
/// layer.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Public storefront routes
    let public_routes = Router::new()
        .route("/artists", get(artists::list))
        .route("/artists/{id}", get(artists::get))
        .route("/artists/{id}/paintings", get(artists::paintings))
        .route("/paintings", get(paintings::list))
        .route("/paintings/{id}", get(paintings::get))
        .route("/exhibitions", get(exhibitions::list))
        .route("/exhibitions/{id}", get(exhibitions::get))
        .route("/exhibitions/{id}/paintings", get(exhibitions::paintings))
        .route("/news", get(news::list))
        .route("/news/{id}", get(news::get))
        .route("/shop", get(shop::list))
        .route("/shop/{id}", get(shop::get))
        .route("/pickup-points", get(pickup_points::list))
        .route("/pickup-points/{id}", get(pickup_points::get))
        .route("/orders", post(orders::checkout))
        .route("/rates", get(rates::get));

    // Back-office routes; login is the only unauthenticated one
    let admin_routes = Router::new()
        .route("/login", post(login))
        .route("/artists", post(artists::create))
        .route(
            "/artists/{id}",
            put(artists::update).delete(artists::delete),
        )
        .route("/paintings", post(paintings::create))
        .route(
            "/paintings/{id}",
            put(paintings::update).delete(paintings::delete),
        )
        .route("/exhibitions", post(exhibitions::create))
        .route(
            "/exhibitions/{id}",
            put(exhibitions::update).delete(exhibitions::delete),
        )
        .route(
            "/exhibitions/{id}/paintings",
            put(exhibitions::set_paintings),
        )
        .route("/news", post(news::create))
        .route("/news/{id}", put(news::update).delete(news::delete))
        .route("/shop", post(shop::create))
        .route("/shop/{id}", put(shop::update).delete(shop::delete))
        .route("/pickup-points", post(pickup_points::create))
        .route(
            "/pickup-points/{id}",
            put(pickup_points::update).delete(pickup_points::delete),
        )
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::get).delete(orders::delete))
        .route("/orders/{id}/status", put(orders::update_status));

    Router::new()
        .route("/health", get(health))
        .nest("/api", public_routes.merge(Router::new().nest("/admin", admin_routes)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Request},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use vernissage_auth::issue_token;
    use vernissage_core::auth::AdminUser;
    use vernissage_core::storage::AdminUserRepository;

    async fn body_json(response: axum::response::Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn admin_token(state: &AppState) -> String {
        issue_token(uuid::Uuid::new_v4(), "curator", &state.auth).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app(AppState::for_tests().await);
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_artists_empty() {
        let app = create_app(AppState::for_tests().await);
        let response = app.oneshot(get_request("/api/artists")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn test_admin_routes_require_token() {
        let app = create_app(AppState::for_tests().await);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/admin/artists",
                None,
                json!({"name": "Maria Vane"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_and_fetch_artist() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/artists",
                Some(&token),
                json!({"name": "Maria Vane", "bio": "Painter of quiet rooms"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(get_request(&format!("/api/artists/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["name"], "Maria Vane");
    }

    #[tokio::test]
    async fn test_get_missing_painting_is_404() {
        let app = create_app(AppState::for_tests().await);
        let response = app
            .oneshot(get_request(&format!(
                "/api/paintings/{}",
                uuid::Uuid::new_v4()
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_exhibition_painting_assignment() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let artist = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/artists",
                    Some(&token),
                    json!({"name": "Abel Marsh"}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let painting = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/paintings",
                    Some(&token),
                    json!({"artist_id": artist["id"], "title": "Window at Dusk"}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let exhibition = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/exhibitions",
                    Some(&token),
                    json!({
                        "title": "Spring Salon",
                        "starts_on": "2026-03-01",
                        "ends_on": "2026-04-15"
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;

        let exhibition_id = exhibition["id"].as_str().unwrap();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/admin/exhibitions/{exhibition_id}/paintings"),
                Some(&token),
                json!({"painting_ids": [painting["id"]]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(
            app.oneshot(get_request(&format!(
                "/api/exhibitions/{exhibition_id}/paintings"
            )))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["title"], "Window at Dusk");
    }

    #[tokio::test]
    async fn test_exhibition_rejects_inverted_dates() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/admin/exhibitions",
                Some(&token),
                json!({
                    "title": "Backwards",
                    "starts_on": "2026-04-15",
                    "ends_on": "2026-03-01"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_decrements_stock_and_reprices() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Exhibition catalog", "price_cents": 2500, "stock": 10}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                None,
                json!({
                    "customer_name": "Ann",
                    "customer_email": "ann@example.com",
                    "delivery": {"method": "courier", "address": "3 Mill Lane"},
                    "items": [{"shop_item_id": item["id"], "quantity": 3}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let order = body_json(response).await;
        assert_eq!(order["total_cents"], 7500);
        assert_eq!(order["status"], "new");
        assert_eq!(order["items"][0]["quantity"], 3);

        let item_id = item["id"].as_str().unwrap();
        let stored = body_json(
            app.oneshot(get_request(&format!("/api/shop/{item_id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(stored["stock"], 7);
    }

    #[tokio::test]
    async fn test_checkout_rejects_insufficient_stock() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Poster", "price_cents": 1200, "stock": 1}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                None,
                json!({
                    "customer_name": "Bo",
                    "customer_email": "bo@example.com",
                    "delivery": {"method": "courier", "address": "9 Dock Road"},
                    "items": [{"shop_item_id": item["id"], "quantity": 5}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_rejects_overflowing_quantity() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Sticker", "price_cents": 2, "stock": 10}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                None,
                json!({
                    "customer_name": "Fae",
                    "customer_email": "fae@example.com",
                    "delivery": {"method": "courier", "address": "2 Fen Court"},
                    "items": [{"shop_item_id": item["id"], "quantity": i64::MAX / 2 + 5}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_enforces_minimum_order() {
        let state = AppState::for_tests_with_minimum(5_000).await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Postcard", "price_cents": 300, "stock": 50}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                None,
                json!({
                    "customer_name": "Cy",
                    "customer_email": "cy@example.com",
                    "delivery": {"method": "courier", "address": "1 Pier Walk"},
                    "items": [{"shop_item_id": item["id"], "quantity": 2}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_checkout_rejects_unknown_pickup_point() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Tote bag", "price_cents": 1800, "stock": 5}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                None,
                json!({
                    "customer_name": "Di",
                    "customer_email": "di@example.com",
                    "delivery": {"method": "pickup", "pickup_point_id": uuid::Uuid::new_v4()},
                    "items": [{"shop_item_id": item["id"], "quantity": 1}]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_order_lifecycle_via_admin_api() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let item = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/shop",
                    Some(&token),
                    json!({"title": "Print", "price_cents": 4500, "stock": 3}),
                ))
                .await
                .unwrap(),
        )
        .await;

        let order = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/orders",
                    None,
                    json!({
                        "customer_name": "Eva",
                        "customer_email": "eva@example.com",
                        "delivery": {"method": "courier", "address": "4 Garden Row"},
                        "items": [{"shop_item_id": item["id"], "quantity": 1}]
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let order_id = order["id"].as_str().unwrap().to_string();

        // Listing requires authentication
        let response = app
            .clone()
            .oneshot(get_request("/api/admin/orders"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let listed = body_json(
            app.clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/admin/orders")
                        .header(AUTHORIZATION, format!("Bearer {token}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let updated = body_json(
            app.clone()
                .oneshot(json_request(
                    "PUT",
                    &format!("/api/admin/orders/{order_id}/status"),
                    Some(&token),
                    json!({"status": "shipped"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(updated["status"], "shipped");

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/orders/{order_id}"))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let state = AppState::for_tests().await;
        let hash = vernissage_auth::hash_password("gallery-pass").unwrap();
        state
            .admins
            .create_admin(&AdminUser::new("curator", hash))
            .await
            .unwrap();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/login",
                None,
                json!({"username": "curator", "password": "gallery-pass"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let token = json["token"].as_str().unwrap();

        // The issued token opens admin routes
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/artists",
                Some(token),
                json!({"name": "Maria Vane"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Wrong password is rejected
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/admin/login",
                None,
                json!({"username": "curator", "password": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rates_rejects_unsupported_currency() {
        let app = create_app(AppState::for_tests().await);
        let response = app
            .oneshot(get_request("/api/rates?base=XXX"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rates_base_check_follows_configured_list() {
        let mut state = AppState::for_tests().await;
        state.config.supported_currencies = vec!["EUR".to_string()];
        let app = create_app(state);

        // USD is in the default list but not in this configuration
        let response = app
            .oneshot(get_request("/api/rates?base=USD"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_artist_delete_blocked_by_paintings() {
        let state = AppState::for_tests().await;
        let token = admin_token(&state);
        let app = create_app(state);

        let artist = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/admin/artists",
                    Some(&token),
                    json!({"name": "Zoe Quist"}),
                ))
                .await
                .unwrap(),
        )
        .await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/paintings",
                Some(&token),
                json!({"artist_id": artist["id"], "title": "Harbor"}),
            ))
            .await
            .unwrap();

        let artist_id = artist["id"].as_str().unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/artists/{artist_id}"))
                    .header(AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
