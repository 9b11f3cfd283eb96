use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::forecast_routes;

#[derive(Template)]
#[template(path = "index.html", escape = "none")]
struct IndexTemplate {
    content: String,
}

pub async fn get_index() -> Response {
    Html(render_main(forecast_routes::forecast_page(
        None,
        "",
        forecast_routes::DEFAULT_DAYS,
    )))
    .into_response()
}

pub fn render_main(content: String) -> String {
    IndexTemplate { content }
        .render()
        .expect("Template should always succeed")
}
