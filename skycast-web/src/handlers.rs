//! HTTP handlers.
//!
//! The four dashboard actions never surface a structured error: a failed
//! lookup is logged and the client is redirected to the current state, where
//! the expected card simply does not appear. Only the translation endpoint
//! reports failures to its caller, because its client swaps the page content
//! based on the response.

use axum::Json;
use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::{Deserialize, Serialize};

use skycast_core::{ForecastStep, StateSnapshot};

use crate::error::HttpError;
use crate::routes::SharedContext;

pub async fn health() -> &'static str {
    "OK"
}

/// The render-data contract: the full state, never partial.
pub async fn state(State(ctx): State<SharedContext>) -> Json<StateSnapshot> {
    Json(ctx.service.snapshot())
}

#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city_name: String,
}

pub async fn search(State(ctx): State<SharedContext>, Form(form): Form<CityForm>) -> Redirect {
    // A partial success (card landed, forecast didn't) is already logged by
    // the service; only a fully failed search shows up here.
    if let Err(err) = ctx.service.search(form.city_name.trim()).await {
        tracing::warn!(city = %form.city_name, error = %err, "search failed");
    }
    Redirect::to("/")
}

pub async fn add_hourly(State(ctx): State<SharedContext>, Form(form): Form<CityForm>) -> Redirect {
    if let Err(err) = ctx.service.add_hourly(form.city_name.trim()).await {
        tracing::warn!(city = %form.city_name, error = %err, "hourly lookup failed");
    }
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct StepForm {
    pub step: ForecastStep,
}

pub async fn set_step(State(ctx): State<SharedContext>, Form(form): Form<StepForm>) -> Redirect {
    if let Err(err) = ctx.service.set_step(form.step).await {
        tracing::warn!(step = %form.step, error = %err, "forecast refresh failed");
    }
    Redirect::to("/")
}

pub async fn clear(State(ctx): State<SharedContext>) -> Redirect {
    ctx.service.clear();
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePageRequest {
    pub html_content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePageResponse {
    pub translated_html: String,
}

/// Whole-page translation. The page posts its rendered HTML and swaps in
/// the translated version on success.
pub async fn translate_page(
    State(ctx): State<SharedContext>,
    Json(req): Json<TranslatePageRequest>,
) -> Result<Json<TranslatePageResponse>, HttpError> {
    let translator = ctx
        .translator
        .as_ref()
        .ok_or_else(|| HttpError::Unavailable("translation is not configured".to_string()))?;

    let translated_html = translator.translate_html(&req.html_content).await?;
    Ok(Json(TranslatePageResponse { translated_html }))
}
