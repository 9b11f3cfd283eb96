use crate::forecast;
use crate::index::render_main;
use askama::Template;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::{Form, Router, routing::get};
use serde::Deserialize;

pub const DEFAULT_DAYS: f64 = 3.0;

pub fn routes() -> Router {
    Router::new().route("/", get(get_forecast).post(create_forecast))
}

#[derive(Template)]
#[template(path = "forecast.html")]
struct ForecastTemplate {
    report: Option<String>,
    city: String,
    days: f64,
}

pub fn forecast_page(report: Option<String>, city: &str, days: f64) -> String {
    ForecastTemplate {
        report,
        city: city.to_string(),
        days,
    }
    .render()
    .expect("Template rendering should always succeed")
}

async fn get_forecast(headers: HeaderMap) -> impl IntoResponse {
    let content = forecast_page(None, "", DEFAULT_DAYS);
    let content = if headers.get("hx-request").is_some() {
        content
    } else {
        render_main(content)
    };
    Html(content).into_response()
}

#[derive(Deserialize, Debug)]
struct ForecastForm {
    city: String,
    days: f64,
}

async fn create_forecast(headers: HeaderMap, Form(form): Form<ForecastForm>) -> impl IntoResponse {
    let report = forecast::generate(&mut rand::rng(), &form.city, form.days);

    let content = forecast_page(Some(report), &form.city, form.days);
    let content = if headers.get("hx-request").is_some() {
        content
    } else {
        render_main(content)
    };
    Html(content).into_response()
}
