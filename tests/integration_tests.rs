// Integration tests for Pet Match: service orchestration and HTTP routes

use actix_web::{http::StatusCode, test, web, App};
use jsonwebtoken::{encode, EncodingKey, Header};
use pet_match::auth::{Claims, JwtVerifier};
use pet_match::core::Ranker;
use pet_match::models::{AdopterProfile, AnimalCandidate, RecommendationsResponse};
use pet_match::routes::{self, AppState};
use pet_match::services::{AnimalCatalog, MemoryStore, ProfileStore, RecommendationService};
use std::sync::Arc;

const SECRET: &str = "integration-secret";

fn catalog() -> Vec<AnimalCandidate> {
    // Newest first
    vec![
        AnimalCandidate::new(6, "Thor", "cachorro").with_size("grande").with_age("3"),
        AnimalCandidate::new(5, "Luna", "gato").with_size("pequeno"),
        AnimalCandidate::new(4, "Bidu", "cachorro").with_size("pequeno").with_age("10"),
        AnimalCandidate::new(3, "Rex", "dog")
            .with_size("large")
            .with_good_with_children(true)
            .with_energy("high"),
        AnimalCandidate::new(2, "Mia", "cat").with_size("small").with_good_with_children(false),
        AnimalCandidate::new(1, "Pipoca", "coelho"),
    ]
}

fn active_family() -> AdopterProfile {
    AdopterProfile {
        housing_type: Some("Casa com quintal".to_string()),
        has_children: Some(true),
        weekly_hours_available: Some(25),
        lifestyle: Some("Ativo".to_string()),
        updated_at: None,
    }
}

fn build_service(store: Arc<MemoryStore>) -> RecommendationService {
    let profiles: Arc<dyn ProfileStore> = store.clone();
    let catalog: Arc<dyn AnimalCatalog> = store;
    RecommendationService::new(profiles, catalog, Ranker::with_default_weights())
}

fn app_state(store: Arc<MemoryStore>) -> AppState {
    AppState {
        recommendations: Arc::new(build_service(store.clone())),
        profiles: store.clone(),
        catalog: store,
        auth: Arc::new(JwtVerifier::new(SECRET)),
    }
}

fn bearer(user_id: i64) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as u64,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes()))
        .unwrap();
    format!("Bearer {}", token)
}

#[::core::prelude::v1::test]
fn test_anonymous_caller_gets_recent_listings() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    let service = build_service(store);

    let response = tokio_test::block_on(service.recommend(None, None)).unwrap();

    let ids: Vec<i64> = response.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![6, 5, 4, 3, 2]);
    assert!(response.ids.is_empty());
    assert!(response.scores.is_empty());
}

#[::core::prelude::v1::test]
fn test_caller_without_profile_matches_anonymous_output() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    let service = build_service(store);

    let anonymous = tokio_test::block_on(service.recommend(None, Some(3))).unwrap();
    let no_profile = tokio_test::block_on(service.recommend(Some(99), Some(3))).unwrap();

    assert_eq!(anonymous, no_profile);
}

#[::core::prelude::v1::test]
fn test_caller_with_profile_gets_ranked_results() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    tokio_test::block_on(store.upsert_profile(1, &active_family())).unwrap();
    let service = build_service(store);

    let response = tokio_test::block_on(service.recommend(Some(1), Some(3))).unwrap();

    assert_eq!(response.items.len(), 3);
    assert_eq!(response.ids, response.items.iter().map(|a| a.id).collect::<Vec<_>>());
    assert_eq!(response.scores.len(), 3);
    assert_eq!(response.ids[0], 3);
    for pair in response.scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[::core::prelude::v1::test]
fn test_zero_count_and_empty_catalog() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    tokio_test::block_on(store.upsert_profile(1, &active_family())).unwrap();
    let service = build_service(store);

    let none = tokio_test::block_on(service.recommend(Some(1), Some(0))).unwrap();
    assert!(none.items.is_empty());

    let empty = build_service(Arc::new(MemoryStore::new()));
    let response = tokio_test::block_on(empty.recommend(None, Some(5))).unwrap();
    assert_eq!(response, RecommendationsResponse::recent(vec![]));
}

#[::core::prelude::v1::test]
fn test_pool_cap_bounds_ranking_pool() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    tokio_test::block_on(store.upsert_profile(1, &active_family())).unwrap();
    let service = build_service(store).with_limits(5, 2);

    let response = tokio_test::block_on(service.recommend(Some(1), Some(10))).unwrap();

    assert_eq!(response.items.len(), 2);
    assert!(response.ids.iter().all(|id| *id == 6 || *id == 5));
}

#[::core::prelude::v1::test]
fn test_default_ranker_returns_requested_count_despite_filter() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    let calm_apartment = AdopterProfile {
        housing_type: Some("Apartamento".to_string()),
        has_children: Some(false),
        weekly_hours_available: Some(3),
        lifestyle: Some("Calmo".to_string()),
        updated_at: None,
    };
    tokio_test::block_on(store.upsert_profile(1, &calm_apartment)).unwrap();
    let service = build_service(store);

    let response = tokio_test::block_on(service.recommend(Some(1), Some(6))).unwrap();

    assert_eq!(response.items.len(), 6);
    // Cats and small dogs lead, the filtered-out animals follow
    assert_eq!(&response.ids[..3], &[5, 2, 4]);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let store = Arc::new(MemoryStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_recommendations_endpoint_states() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    store.upsert_profile(1, &active_family()).await.unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    // Anonymous
    let req = test::TestRequest::get().uri("/api/v1/recommendations?n=2").to_request();
    let body: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.items.len(), 2);
    assert!(body.ids.is_empty());

    // Authenticated with profile
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?n=2")
        .insert_header(("Authorization", bearer(1)))
        .to_request();
    let body: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.ids.len(), 2);
    assert_eq!(body.ids[0], 3);

    // Invalid token
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Negative count is a malformed query
    let req = test::TestRequest::get().uri("/api/v1/recommendations?n=-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_profile_endpoints() {
    let store = Arc::new(MemoryStore::with_animals(catalog()));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    // Requires authentication
    let req = test::TestRequest::get().uri("/api/v1/adopter-profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Nothing saved yet
    let req = test::TestRequest::get()
        .uri("/api/v1/adopter-profile")
        .insert_header(("Authorization", bearer(5)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Invalid payload
    let req = test::TestRequest::put()
        .uri("/api/v1/adopter-profile")
        .insert_header(("Authorization", bearer(5)))
        .set_json(serde_json::json!({
            "housingType": "Apartamento",
            "weeklyHoursAvailable": 10,
            "lifestyle": ""
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Save, then read back
    let req = test::TestRequest::put()
        .uri("/api/v1/adopter-profile")
        .insert_header(("Authorization", bearer(5)))
        .set_json(serde_json::json!({
            "housingType": "Apartamento",
            "hasChildren": false,
            "weeklyHoursAvailable": 3,
            "lifestyle": "Calmo"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/adopter-profile")
        .insert_header(("Authorization", bearer(5)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["userId"], 5);
    assert_eq!(body["profile"]["lifestyle"], "Calmo");

    // The saved profile now drives recommendations: cats lead for a calm apartment
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?n=1")
        .insert_header(("Authorization", bearer(5)))
        .to_request();
    let body: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.ids.len(), 1);
    assert!(body.items[0].species_kind() == pet_match::models::Species::Cat);
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let store = Arc::new(MemoryStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/adopter-profile")
        .insert_header(("Authorization", bearer(5)))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
