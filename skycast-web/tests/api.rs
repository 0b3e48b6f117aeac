//! Router-level tests against a canned weather backend.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use skycast_core::{
    ForecastStep, HourlyForecast, HourlySample, LookupError, WeatherBackend, WeatherCard,
    WeatherService,
};
use skycast_web::routes::{ServerContext, router};

/// Resolves any query except "nowhere" to a single-sample forecast.
#[derive(Debug)]
struct StubBackend;

#[async_trait]
impl WeatherBackend for StubBackend {
    async fn fetch_current(&self, query: &str) -> Result<WeatherCard, LookupError> {
        if query == "nowhere" {
            return Err(LookupError::CityNotFound(query.to_string()));
        }
        Ok(WeatherCard {
            name: "Paris".to_string(),
            icon_url: None,
            raw: serde_json::json!({ "main": { "temp": 18.3 } }),
            fetched_at: Utc::now(),
        })
    }

    async fn fetch_hourly(
        &self,
        query: &str,
        _step: ForecastStep,
    ) -> Result<HourlyForecast, LookupError> {
        if query == "nowhere" {
            return Err(LookupError::CityNotFound(query.to_string()));
        }
        Ok(HourlyForecast {
            city_name: "Paris".to_string(),
            samples: vec![HourlySample {
                timestamp: 1_700_000_000,
                temperature: 18.3,
                humidity: 60,
                wind_speed: 3.4,
                weather_condition: serde_json::Value::Null,
            }],
        })
    }
}

fn app() -> Router {
    let ctx = Arc::new(ServerContext {
        service: Arc::new(WeatherService::new(Arc::new(StubBackend))),
        translator: None,
    });
    router(ctx, Path::new("assets"))
}

async fn get_state(app: &Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(Request::get("/api/state").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("state is JSON")
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn health_answers_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn state_starts_empty() {
    let state = get_state(&app()).await;

    assert_eq!(state["cards"], serde_json::json!([]));
    assert_eq!(state["hourly_cards"], serde_json::json!([]));
    assert_eq!(state["history"], serde_json::json!([]));
    assert_eq!(state["forecast_step"], "three_hour");
}

#[tokio::test]
async fn search_redirects_and_fills_the_state() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_form("/search", "city_name=paris"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let state = get_state(&app).await;
    assert_eq!(state["cards"][0]["name"], "Paris");
    assert_eq!(state["hourly_cards"][0]["city_name"], "Paris");
    assert_eq!(state["history"], serde_json::json!(["Paris"]));
}

#[tokio::test]
async fn failed_search_still_redirects_and_changes_nothing() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_form("/search", "city_name=nowhere"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let state = get_state(&app).await;
    assert_eq!(state["cards"], serde_json::json!([]));
    assert_eq!(state["history"], serde_json::json!([]));
}

#[tokio::test]
async fn hourly_action_touches_only_the_hourly_list() {
    let app = app();

    app.clone()
        .oneshot(post_form("/hourly", "city_name=paris"))
        .await
        .expect("response");

    let state = get_state(&app).await;
    assert_eq!(state["cards"], serde_json::json!([]));
    assert_eq!(state["hourly_cards"][0]["city_name"], "Paris");
}

#[tokio::test]
async fn step_change_is_visible_in_the_state() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_form("/forecast-step", "step=hourly"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let state = get_state(&app).await;
    assert_eq!(state["forecast_step"], "hourly");
}

#[tokio::test]
async fn clear_empties_the_lists() {
    let app = app();

    app.clone()
        .oneshot(post_form("/search", "city_name=paris"))
        .await
        .expect("response");
    app.clone()
        .oneshot(Request::post("/clear").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let state = get_state(&app).await;
    assert_eq!(state["cards"], serde_json::json!([]));
    assert_eq!(state["hourly_cards"], serde_json::json!([]));
    assert_eq!(state["history"], serde_json::json!([]));
}

#[tokio::test]
async fn translate_without_config_is_unavailable() {
    let response = app()
        .oneshot(
            Request::post("/translate-page")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"htmlContent":"<p>Hello</p>"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("error body is JSON");
    assert_eq!(body["status"], 503);
}
