use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub mod home_controller;
pub mod dashboard_controller;
pub mod market_controller;

pub(crate) fn template_error(e: impl std::fmt::Display) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response()
}
