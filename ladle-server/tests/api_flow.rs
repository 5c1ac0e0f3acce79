//! End-to-end API flows against an in-memory database
//!
//! Drives the routed application the way a client would: register,
//! configure pricing, publish a menu, then quote / check availability /
//! book from the public storefront.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use ladle_server::api::build_router;
use ladle_server::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let config = Config::with_overrides("/tmp/ladle-test", 0);
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("state should initialize");
    build_router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("encode")))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

/// A date far enough ahead that availability checks accept it
fn future_date() -> String {
    (chrono::Utc::now().date_naive() + chrono::Days::new(30))
        .format("%Y-%m-%d")
        .to_string()
}

async fn register(app: &Router, email: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "business_name": "Spice Route Catering",
            "owner_name": "Asha",
            "email": email,
            "password": "super-secret-1",
            "phone": "555-0100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    assert_eq!(body["success"], true);

    let token = body["data"]["token"].as_str().expect("token").to_string();
    let caterer_id = body["data"]["caterer"]["id"]
        .as_str()
        .expect("caterer id")
        .to_string();
    (token, caterer_id)
}

async fn add_menu_item(app: &Router, token: &str, name: &str, price: f64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/menu-items",
        Some(token),
        Some(json!({ "name": name, "price": price, "dietary": "veg" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "menu item create failed: {body}");
    body["data"]["id"].as_str().expect("item id").to_string()
}

#[tokio::test]
async fn test_health_is_public_and_everything_else_is_not() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");

    for uri in ["/api/orders", "/api/menu-items", "/api/profile"] {
        let (status, body) = send(&app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} should be gated");
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_login_round_trip() {
    let app = test_app().await;
    register(&app, "login@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "Login@Example.com", "password": "super-secret-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().expect("token");

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "login@example.com");

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "login@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_storefront_menu_hides_unavailable_items() {
    let app = test_app().await;
    let (token, caterer_id) = register(&app, "menu@example.com").await;

    add_menu_item(&app, &token, "Paneer Tikka", 220.0).await;
    let hidden = add_menu_item(&app, &token, "Seasonal Special", 300.0).await;
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/menu-items/{hidden}"),
        Some(&token),
        Some(json!({ "is_available": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/public/caterers/{caterer_id}/menu"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["caterer"]["business_name"], "Spice Route Catering");
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Paneer Tikka");

    // The caterer's own view still shows both
    let (_, body) = send(&app, "GET", "/api/menu-items", Some(&token), None).await;
    assert_eq!(body["data"].as_array().expect("items").len(), 2);
}

#[tokio::test]
async fn test_quote_selects_largest_qualifying_tier() {
    let app = test_app().await;
    let (token, caterer_id) = register(&app, "quote@example.com").await;

    let main = add_menu_item(&app, &token, "Dal Makhani", 100.0).await;
    let side = add_menu_item(&app, &token, "Naan", 20.0).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/profile/pricing",
        Some(&token),
        Some(json!({
            "misc_cost": 200.0,
            "dynamic_pricing": [
                { "min_guests": 10, "discount_percent": 5.0 },
                { "min_guests": 50, "discount_percent": 10.0 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/quote"),
        None,
        Some(json!({
            "guest_count": 60,
            "items": [
                { "item_id": main, "quantity": 1 },
                { "item_id": side, "quantity": 1 },
                { "item_id": "menu_item:ghost", "quantity": 5 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "quote failed: {body}");

    let quote = &body["data"];
    // (100 + 20) * 60 guests; the unknown item is silently dropped
    assert_eq!(quote["subtotal"], 7200.0);
    assert_eq!(quote["misc_cost"], 200.0);
    // 60 guests qualifies for both tiers; the min=50 tier wins
    assert_eq!(quote["discount_percent"], 10.0);
    assert_eq!(quote["discount_amount"], 740.0);
    assert_eq!(quote["total_cost"], 6660.0);
    assert_eq!(quote["per_plate_cost"], 120.0);
    assert_eq!(quote["items"].as_array().expect("lines").len(), 2);
}

#[tokio::test]
async fn test_booking_flow_numbers_availability_and_timeline() {
    let app = test_app().await;
    let (token, caterer_id) = register(&app, "booking@example.com").await;
    let item = add_menu_item(&app, &token, "Biryani", 150.0).await;
    let date = future_date();

    let availability_uri =
        format!("/api/public/caterers/{caterer_id}/availability?date={date}");

    let (status, body) = send(&app, "GET", &availability_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booked"], 0);
    assert_eq!(body["data"]["is_available"], true);

    let booking = json!({
        "customer": {
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "555-0101"
        },
        "event": { "event_date": date, "event_type": "wedding" },
        "items": [ { "item_id": item, "quantity": 2 } ],
        "guest_count": 40,
        "deposit": 500.0
    });

    let mut first_order_id = String::new();
    for expected_number in ["O-01", "O-02", "O-03"] {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/public/caterers/{caterer_id}/bookings"),
            None,
            Some(booking.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "booking failed: {body}");

        let order = &body["data"];
        assert_eq!(order["order_number"], expected_number);
        assert_eq!(order["status"], "pending");
        assert_eq!(order["timeline"].as_array().expect("timeline").len(), 1);

        // Pricing re-derived on the server: 150 * 2 * 40 = 12000
        assert_eq!(order["pricing"]["subtotal"], 12000.0);
        assert_eq!(order["pricing"]["total"], 12000.0);
        assert_eq!(order["pricing"]["balance"], 11500.0);

        if expected_number == "O-01" {
            first_order_id = order["id"].as_str().expect("order id").to_string();
        }
    }

    // Default cap is 3: the day is now full
    let (status, body) = send(&app, "GET", &availability_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booked"], 3);
    assert_eq!(body["data"]["is_available"], false);

    // The caterer sees all three orders
    let (status, body) = send(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("orders").len(), 3);

    // Lifecycle: pending -> confirmed appends to the timeline
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/orders/{first_order_id}/status"),
        Some(&token),
        Some(json!({ "status": "confirmed", "note": "deposit received" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "status update failed: {body}");
    assert_eq!(body["data"]["status"], "confirmed");
    let timeline = body["data"]["timeline"].as_array().expect("timeline");
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0]["status"], "pending");
    assert_eq!(timeline[1]["note"], "deposit received");

    // Skipping ahead is rejected with a typed 422
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/orders/{first_order_id}/status"),
        Some(&token),
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);

    // Lookup by number reflects the appended timeline
    let (status, body) = send(
        &app,
        "GET",
        "/api/orders/by-number/O-01",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["timeline"].as_array().expect("timeline").len(), 2);
}

#[tokio::test]
async fn test_bookings_reject_past_dates_and_empty_items() {
    let app = test_app().await;
    let (token, caterer_id) = register(&app, "validation@example.com").await;
    let item = add_menu_item(&app, &token, "Biryani", 150.0).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/bookings"),
        None,
        Some(json!({
            "customer": { "name": "Ravi", "email": "ravi@example.com", "phone": "555" },
            "event": { "event_date": "2020-01-01" },
            "items": [ { "item_id": item, "quantity": 1 } ],
            "guest_count": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/bookings"),
        None,
        Some(json!({
            "customer": { "name": "Ravi", "email": "ravi@example.com", "phone": "555" },
            "event": { "event_date": future_date() },
            "items": [],
            "guest_count": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feedback_and_contact_inboxes() {
    let app = test_app().await;
    let (token, caterer_id) = register(&app, "inbox@example.com").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/feedback"),
        None,
        Some(json!({ "customer_name": "Ravi", "rating": 5, "comment": "Great food" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/contact"),
        None,
        Some(json!({
            "name": "Meera",
            "email": "meera@example.com",
            "message": "Do you cater corporate lunches?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Out-of-range rating is rejected
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/public/caterers/{caterer_id}/feedback"),
        None,
        Some(json!({ "customer_name": "Ravi", "rating": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/api/feedback", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let feedback = body["data"].as_array().expect("feedback");
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0]["rating"], 5);

    let (status, body) = send(&app, "GET", "/api/contact", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("messages").len(), 1);

    // An unknown caterer is a 404 on the public surface
    let (status, _) = send(
        &app,
        "GET",
        "/api/public/caterers/caterer:ghost/menu",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
