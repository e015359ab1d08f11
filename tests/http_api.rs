use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hotel_booking_demo::{app, config::Config, middleware::SESSION_HEADER, AppState};

fn test_app() -> Router {
    let mut config = Config::default();
    config.chat.reply_delay_ms = 0;
    app(AppState::new(config))
}

async fn send(app: &Router, method: Method, uri: &str, session: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = session {
        builder = builder.header(SESSION_HEADER, id);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn open_session(app: &Router) -> String {
    let (status, body) = send(app, Method::POST, "/api/sessions", None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["createdAt"].is_string());
    body["sessionId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_and_banner() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn hotel_listing_filters_and_sorts() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/hotels?location=HaNoI", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["hotels"][0]["location"], "Hoan Kiem District, Hanoi");

    let (_, body) = send(&app, Method::GET, "/api/hotels?sort=price-high&maxPrice=300", None, None).await;
    let prices: Vec<u64> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["price"].as_u64().unwrap())
        .collect();
    assert_eq!(prices, vec![299, 279, 249, 199]);
}

#[tokio::test]
async fn blank_sidebar_fields_mean_no_filter() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/hotels?location=&minPrice=&maxPrice=&rating=&sort=recommended",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 9);

    let (status, body) = send(&app, Method::GET, "/api/hotels?minPrice=&maxPrice=300", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn malformed_input_gets_a_json_error() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/hotels?minPrice=cheap", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "bad_request");

    let (status, body) = send(&app, Method::GET, "/api/hotels/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "bad_request");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn hotel_detail_and_missing_hotel() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/hotels/3", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"].as_array().unwrap().len(), 3);

    let (status, body) = send(&app, Method::GET, "/api/hotels/77", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn quick_search_reports_date_error_inline() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/search?location=saigon&checkIn=2024-05-03&checkOut=2024-05-01",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Check-out date must be after check-in date");

    let (status, body) = send(&app, Method::GET, "/api/search?location=ho%20chi%20minh&guests=4", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hotels"][0]["name"], "Park Hyatt Saigon");
}

#[tokio::test]
async fn quick_search_with_blank_dates_skips_the_range_check() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/search?location=hanoi&checkIn=&checkOut=&guests=2",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["hotels"][0]["name"], "Sofitel Legend Metropole Hanoi");

    let (status, body) = send(&app, Method::GET, "/api/search?checkIn=2024-05-01&checkOut=&guests=", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn hotel_page_reservation_is_confirmed_not_stored() {
    let app = test_app();
    let form = json!({
        "email": "guest@example.com",
        "fullName": "John Doe",
        "checkIn": "2024-06-01",
        "checkOut": "2024-06-04",
        "specialRequests": "Late arrival"
    });
    let (status, body) = send(&app, Method::POST, "/api/hotels/1/reservations", None, Some(form.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Room has been booked successfully");

    let mut bad = form;
    bad["checkOut"] = json!("2024-06-01");
    let (status, body) = send(&app, Method::POST, "/api/hotels/1/reservations", None, Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_date_range");
}

#[tokio::test]
async fn session_endpoints_require_the_header() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/bookings", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "missing_session");

    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, _) = send(&app, Method::GET, "/api/bookings", Some(&unknown), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_entry_follows_navigation_params() {
    let app = test_app();
    let (_, body) = send(&app, Method::GET, "/api/bookings/new", None, None).await;
    assert_eq!(body["kind"], "hotelSelection");
    assert_eq!(body["hotels"].as_array().unwrap().len(), 9);

    let (_, body) = send(&app, Method::GET, "/api/bookings/new?hotelId=2&roomId=2", None, None).await;
    assert_eq!(body["kind"], "draft");
    assert_eq!(body["booking"]["id"], "new");
    assert_eq!(body["booking"]["roomType"], "Ocean Pool Villa");
    assert_eq!(body["booking"]["totalPrice"], 0);
}

#[tokio::test]
async fn booking_lifecycle_create_modify_cancel() {
    let app = test_app();
    let session = open_session(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/bookings",
        Some(&session),
        Some(json!({
            "id": "new",
            "hotelId": 1,
            "roomId": 1,
            "checkIn": "2024-03-20",
            "checkOut": "2024-03-25",
            "guests": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking"]["id"], "3");
    assert_eq!(body["booking"]["totalPrice"], 1750);
    assert_eq!(body["booking"]["status"], "upcoming");

    // inverted dates are rejected and nothing changes
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/bookings",
        Some(&session),
        Some(json!({ "id": "3", "checkIn": "2024-03-25", "checkOut": "2024-03-25", "guests": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send(&app, Method::GET, "/api/bookings/3", Some(&session), None).await;
    assert_eq!(body["checkIn"], "2024-03-20");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/bookings",
        Some(&session),
        Some(json!({ "id": "3", "checkIn": "2024-03-21", "checkOut": "2024-03-24", "guests": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["guests"], 4);
    assert_eq!(body["booking"]["totalPrice"], 1750);

    let (status, body) = send(&app, Method::PATCH, "/api/bookings/3/cancel", Some(&session), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["status"], "cancelled");

    let (status, body) = send(&app, Method::PATCH, "/api/bookings/3/cancel", Some(&session), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["status"], "cancelled");

    let (_, body) = send(&app, Method::GET, "/api/bookings", Some(&session), None).await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn modifying_an_unknown_booking_is_not_found() {
    let app = test_app();
    let session = open_session(&app).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/bookings",
        Some(&session),
        Some(json!({ "id": "9", "checkIn": "2024-03-21", "checkOut": "2024-03-24", "guests": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn support_chat_budget_flow() {
    let app = test_app();
    let session = open_session(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/support/messages",
        Some(&session),
        Some(json!({ "text": "I can spend $300" })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["message"]["id"], 2);
    assert_eq!(body["message"]["sender"], "user");

    send(
        &app,
        Method::POST,
        "/api/support/messages",
        Some(&session),
        Some(json!({ "text": "actually $1000" })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/api/support/messages", Some(&session), None).await;
    assert_eq!(body["budget"], 300);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 5);
    let suggestion = messages[2]["text"].as_str().unwrap();
    assert!(suggestion.contains("$280/night"));
    assert!(suggestion.contains("$250/night"));
    assert!(suggestion.contains("$220/night"));
    assert!(!suggestion.contains("$350/night"));
}

#[tokio::test]
async fn closed_session_is_gone() {
    let app = test_app();
    let session = open_session(&app).await;
    let uri = format!("/api/sessions/{session}");

    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, "/api/support/messages", Some(&session), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_password_mismatch_is_an_alert() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "email": "guest@example.com",
            "fullName": "John Doe",
            "phoneNumber": "0123",
            "password": "a",
            "confirmPassword": "b"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Passwords do not match!");
    assert_eq!(body["alert"], true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "nope", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");
}
