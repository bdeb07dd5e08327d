//! Store creation form: validation, the debounced availability fragment,
//! and the submit-time re-check.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use reqwest::header::LOCATION;
use store_builder_integration_tests::{TestContext, valid_store_form};

// ============================================================================
// Form Rendering
// ============================================================================

#[tokio::test]
async fn test_home_links_to_form() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Welcome to Store Builder"));
    assert!(body.contains(r#"href="/createstore""#));
}

#[tokio::test]
async fn test_form_renders_debounced_domain_input() {
    let ctx = TestContext::with_env(&[("DOMAIN_CHECK_DEBOUNCE_MS", "300")]).await;

    let resp = ctx.client.get(ctx.url("/createstore")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Create Your Online Store"));
    assert!(body.contains(r#"hx-trigger="input changed delay:300ms""#));
    assert!(body.contains(r#"hx-sync="this:replace""#));
    assert!(body.contains(".expressitbd.com"));
    for option in ["Bangladesh", "USA", "Fashion", "Books", "BDT", "GBP"] {
        assert!(body.contains(&format!(r#"value="{option}""#)), "missing {option}");
    }

    // rendering the form never calls the checker
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[tokio::test]
async fn test_form_resets_domain_feedback_on_edit() {
    let ctx = TestContext::new().await;

    let body = ctx
        .client
        .get(ctx.url("/createstore"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(r#"<script src="/static/js/domain-check.js" defer></script>"#));
    assert!(body.contains(r#"data-check-failed="Error checking domain""#));

    let resp = ctx
        .client
        .get(ctx.url("/static/js/domain-check.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let script = resp.text().await.unwrap();
    assert!(script.contains(r#"addEventListener("input""#));
    assert!(script.contains("htmx:responseError"));
}

// ============================================================================
// Submit
// ============================================================================

#[tokio::test]
async fn test_empty_submit_lists_every_error() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&[("name", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.text().await.unwrap();
    for message in [
        "Store name is required",
        "Domain is required",
        "Country is required",
        "Category is required",
        "Currency is required",
        "Email is required",
    ] {
        assert!(body.contains(message), "missing {message:?}");
    }
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[tokio::test]
async fn test_invalid_fields_keep_user_input() {
    let ctx = TestContext::new().await;

    let mut form = valid_store_form("my-shop");
    form[0].1 = "ab".to_string();
    form[5].1 = "owner@cornershop".to_string();

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Store name must be at least 3 characters long"));
    assert!(body.contains("Domain must contain only letters and numbers"));
    assert!(body.contains("Email must be in a valid format"));
    assert!(body.contains(r#"value="my-shop""#));
    assert!(body.contains(r#"<option value="Bangladesh" selected>"#));
}

#[tokio::test]
async fn test_taken_domain_blocks_submit() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("cornershop.expressitbd.com", true).await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&valid_store_form("cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Domain is already taken"));
    assert!(body.contains(r#"value="Corner Shop""#));
}

#[tokio::test]
async fn test_available_domain_redirects_to_product() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("cornershop.expressitbd.com", false).await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&valid_store_form("cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/product");
    assert_eq!(ctx.upstream_calls().await, 1);
}

#[tokio::test]
async fn test_submit_keeps_upstream_request_id() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("cornershop.expressitbd.com", false).await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .header("x-request-id", "req-cornershop-1")
        .form(&valid_store_form("cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["x-request-id"], "req-cornershop-1");
}

#[tokio::test]
async fn test_checker_failure_shows_retry_alert() {
    let ctx = TestContext::new().await;
    ctx.stub_domain_failure("cornershop.expressitbd.com").await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&valid_store_form("cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Failed to create store. Please try again."));
    assert!(!body.contains("Domain is already taken"));
}

#[tokio::test]
async fn test_custom_parent_domain_is_checked() {
    let ctx = TestContext::with_env(&[("DOMAIN_PARENT", "shops.example.com")]).await;
    ctx.stub_domain("cornershop.shops.example.com", false).await;

    let resp = ctx
        .client
        .post(ctx.url("/createstore"))
        .form(&valid_store_form("cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

// ============================================================================
// Availability Fragment
// ============================================================================

#[tokio::test]
async fn test_fragment_reports_available() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("freshname.expressitbd.com", false).await;

    let resp = ctx
        .client
        .get(ctx.url("/createstore/domain?domain=freshname"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"id="domain-status""#));
    assert!(body.contains("status--success"));
    assert!(body.contains("Domain is available!"));
}

#[tokio::test]
async fn test_fragment_reports_taken() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("cornershop.expressitbd.com", true).await;

    let body = ctx
        .client
        .get(ctx.url("/createstore/domain?domain=cornershop"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("status--error"));
    assert!(body.contains("Domain is already taken"));
}

#[tokio::test]
async fn test_fragment_skips_checker_for_invalid_input() {
    let ctx = TestContext::new().await;

    let body = ctx
        .client
        .get(ctx.url("/createstore/domain?domain=my-shop"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Domain must contain only letters and numbers"));

    let body = ctx
        .client
        .get(ctx.url("/createstore/domain?domain="))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("status--none"));

    assert_eq!(ctx.upstream_calls().await, 0);
}

#[tokio::test]
async fn test_fragment_reports_checker_failure() {
    let ctx = TestContext::new().await;
    ctx.stub_domain_failure("cornershop.expressitbd.com").await;

    let resp = ctx
        .client
        .get(ctx.url("/createstore/domain?domain=cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Error checking domain"));
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_check_domain() {
    let ctx = TestContext::new().await;
    ctx.stub_domain("cornershop.expressitbd.com", true).await;

    let resp = ctx
        .client
        .get(ctx.url("/api/domains/cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["hostname"], "cornershop.expressitbd.com");
    assert_eq!(body["taken"], true);
    assert_eq!(body["available"], false);
}

#[tokio::test]
async fn test_api_rejects_invalid_subdomain() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/domains/my_shop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_checker_failure_is_bad_gateway() {
    let ctx = TestContext::new().await;
    ctx.stub_domain_failure("cornershop.expressitbd.com").await;

    let resp = ctx
        .client
        .get(ctx.url("/api/domains/cornershop"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.text().await.unwrap(), "External service error");
}
