use crate::forecast::{self, ForecastReport};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use chrono::Local;
use serde::Deserialize;

pub fn routes() -> Router {
    Router::new().route("/", get(get_forecast_route))
}

#[derive(Deserialize, Debug)]
struct ForecastQuery {
    city: String,
    days: f64,
}

async fn get_forecast_route(
    Query(query): Query<ForecastQuery>,
) -> (StatusCode, Json<Result<ForecastReport, String>>) {
    let payload = forecast::report(
        &mut rand::rng(),
        &query.city,
        query.days,
        Local::now().date_naive(),
    )
    .map_err(|err| err.to_string());
    let status_code = match payload {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status_code, Json(payload))
}
