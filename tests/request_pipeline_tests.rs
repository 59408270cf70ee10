//! Integration tests for the shared request pipeline: headers, status
//! classification, response metadata and concurrent use.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_rest::rest::resources::{
    ApplicationChargeListParams, ApplicationChargeService, Blog, BlogListParams, BlogService,
};
use shopify_rest::rest::ResourceService;
use shopify_rest::{
    AccessToken, ApiError, ApiVersion, HostUrl, HttpClient, HttpMethod, HttpRequest, RestClient,
    ShopDomain, ShopifyConfig,
};

fn config_for(server: &MockServer) -> ShopifyConfig {
    ShopifyConfig::builder()
        .shop(ShopDomain::new("pipeline-shop").unwrap())
        .access_token(AccessToken::new("shpat_pipeline").unwrap())
        .api_version(ApiVersion::V2025_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap()
}

fn expected_user_agent() -> String {
    format!(
        "MyApp/1.0 | Shopify REST Services v{} | Rust {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION")
    )
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_request_carries_token_accept_and_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/count.json"))
        .and(header("X-Shopify-Access-Token", "shpat_pipeline"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", expected_user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    assert_eq!(blogs.count().await.unwrap(), 0);
}

#[tokio::test]
async fn raw_client_sends_prepared_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/shop.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "39/40")
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({"shop": {"id": 1}})),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build();
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.request_id(), Some("req-1"));
    let limit = response.api_call_limit.unwrap();
    assert_eq!((limit.request_count, limit.bucket_size), (39, 40));
    assert!(limit.is_near_capacity());
    assert_eq!(response.json().unwrap()["shop"]["id"], 1);
}

#[tokio::test]
async fn saturated_call_limit_header_is_reported_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/count.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "4294967295/40")
                .set_body_json(json!({"count": 2})),
        )
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    assert_eq!(blogs.count().await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Status classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn throttled_response_carries_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "2.0")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    let error = blogs.list(&BlogListParams::default()).await.unwrap_err();

    assert!(matches!(error, ApiError::Throttled(_)), "got {error:?}");
    assert_eq!(error.retry_after(), Some(2.0));
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/1.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": "[API] Invalid API key or access token (unrecognized login or wrong password)"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/2.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": "This action requires merchant approval for read_content scope."
        })))
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();

    let error = blogs.get(1).await.unwrap_err();
    assert!(matches!(error, ApiError::Unauthorized(_)), "got {error:?}");
    assert_eq!(error.status(), Some(401));

    let error = blogs.get(2).await.unwrap_err();
    assert!(matches!(error, ApiError::Unauthorized(_)), "got {error:?}");
    assert_eq!(error.status(), Some(403));
}

#[tokio::test]
async fn server_error_maps_to_service_with_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/count.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    let error = blogs.count().await.unwrap_err();

    assert!(matches!(error, ApiError::Service(_)), "got {error:?}");
    assert_eq!(
        error.detail().and_then(|d| d.message()),
        Some("upstream unavailable")
    );
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    let error = blogs.get(5).await.unwrap_err();

    assert!(matches!(error, ApiError::Decode { .. }), "got {error:?}");
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("pipeline-shop").unwrap())
        .access_token(AccessToken::new("shpat_pipeline").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();

    let blogs = BlogService::new(&config).unwrap();
    let error = blogs.count().await.unwrap_err();

    assert!(matches!(error, ApiError::Transport(_)), "got {error:?}");
}

#[tokio::test]
async fn undeclared_action_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let blogs: ResourceService<Blog> = ResourceService::new(&config_for(&server)).unwrap();
    let error = blogs.perform(1, "activate").await.unwrap_err();

    assert!(
        matches!(error, ApiError::Validation { resource: "Blog", .. }),
        "got {error:?}"
    );
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test]
async fn services_sharing_a_client_run_concurrently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blogs": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/application_charges.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"application_charges": [{"id": 2}, {"id": 3}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server)).unwrap();
    let blogs = BlogService::with_client(client.clone());
    let charges = ApplicationChargeService::with_client(client);

    let blog_params = BlogListParams::default();
    let charge_params = ApplicationChargeListParams::default();
    let (blog_list, charge_list, count) = tokio::join!(
        blogs.list(&blog_params),
        charges.list(&charge_params),
        blogs.count(),
    );

    assert_eq!(blog_list.unwrap().len(), 1);
    assert_eq!(charge_list.unwrap().len(), 2);
    assert_eq!(count.unwrap(), 1);
}

#[tokio::test]
async fn service_can_move_into_spawned_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/blogs/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(3)
        .mount(&server)
        .await;

    let blogs = BlogService::new(&config_for(&server)).unwrap();
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let blogs = blogs.clone();
            tokio::spawn(async move { blogs.count().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 4);
    }
}
