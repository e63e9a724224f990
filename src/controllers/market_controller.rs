use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{controllers::template_error, services::backend::OrderBackend, AppState};

fn unavailable_snippet(what: &str) -> Response {
    (
        StatusCode::OK,
        Html(format!(r#"<div class="text-danger">{what} indisponível</div>"#)),
    )
        .into_response()
}

// GET /saldo (HTMX partial)
pub async fn get_balance(State(state): State<AppState>) -> Response {
    let balance = match state.backend.balance().await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("balance fetch failed: {}", e);
            return unavailable_snippet("Saldo");
        }
    };

    match state.hbs.render("partials/balance", &balance) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => template_error(e),
    }
}

// GET /preco (HTMX partial, polled)
pub async fn get_price(State(state): State<AppState>) -> Response {
    let ticker = match state.market.price(&state.settings.symbol).await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("price fetch failed: {}", e);
            return unavailable_snippet("Preço");
        }
    };

    match state.hbs.render(
        "partials/price",
        &json!({ "symbol": ticker.symbol, "price": ticker.price }),
    ) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => template_error(e),
    }
}
