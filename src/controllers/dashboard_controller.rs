use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    controllers::template_error,
    dashboard::SubmitOutcome,
    models::OrderKind,
    prompt::RequestPrompt,
    render::{self, AlertLevel, HistorySwap},
    AppState,
};

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn hx_trigger_value(events: &[&str]) -> HeaderValue {
    // HX-Trigger expects JSON: {"evt":true,...}
    let map: serde_json::Map<String, serde_json::Value> = events
        .iter()
        .map(|ev| (ev.to_string(), serde_json::Value::Bool(true)))
        .collect();
    HeaderValue::from_str(&serde_json::Value::Object(map).to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("{}"))
}

// GET / (SSR page, body only for HTMX)
pub async fn get_dashboard_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut dash = state.dashboard();
    // a failed refresh renders an empty table; the page can be reloaded
    let _ = dash.refresh_history().await;
    let rows = dash.rows();

    let buttons: Vec<serde_json::Value> = OrderKind::ALL
        .iter()
        .map(|k| {
            json!({
                "kind": k.as_str(),
                "label": k.label(),
                "confirm": k.confirm_message(),
            })
        })
        .collect();

    let body = match state.hbs.render(
        "pages/dashboard",
        &json!({
            "symbol": state.settings.symbol,
            "default_qty": state.settings.default_qty,
            "buttons": buttons,
            "rows": rows,
        }),
    ) {
        Ok(s) => s,
        Err(e) => return template_error(e),
    };

    if is_htmx(&headers) {
        return (StatusCode::OK, Html(body)).into_response();
    }

    match render::render_full(&state, "Painel de Operação", body) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => template_error(e),
    }
}

// GET /ordens (HTMX partial)
pub async fn get_history_rows(State(state): State<AppState>) -> Response {
    let mut dash = state.dashboard();
    let _ = dash.refresh_history().await;
    let rows = dash.rows();

    match render::render_history_rows(&state, &rows) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => template_error(e),
    }
}

#[derive(Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub quantidade: String,
    #[serde(default)]
    pub confirmado: Option<String>,
}

// POST /ordens/:kind
pub async fn post_order(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Form(form): Form<OrderForm>,
) -> Response {
    let kind: OrderKind = match kind.parse() {
        Ok(k) => k,
        Err(e) => {
            tracing::warn!("{}", e);
            return match render::render_alerts(&state, AlertLevel::Danger, &["Operação desconhecida.".to_string()]) {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => template_error(e),
            };
        }
    };

    let prompt = RequestPrompt::from_form_value(form.confirmado.as_deref());

    // Starts empty: an executed order refreshes the full history, while a
    // suggestion or automatic request only holds its own local row.
    let mut dash = state.dashboard();
    let outcome = dash.submit_order(&prompt, kind, &form.quantidade).await;

    let level = if outcome.is_success() {
        AlertLevel::Success
    } else {
        AlertLevel::Danger
    };

    let mut html = match render::render_alerts(&state, level, &prompt.into_alerts()) {
        Ok(s) => s,
        Err(e) => return template_error(e),
    };

    let swap = match outcome {
        SubmitOutcome::Executed { refreshed: true } => Some(HistorySwap::Replace),
        SubmitOutcome::Suggested(_) | SubmitOutcome::AutomaticRequested => Some(HistorySwap::Prepend),
        _ => None,
    };
    if let Some(swap) = swap {
        match render::render_history_oob(&state, &dash.rows(), swap) {
            Ok(s) => html.push_str(&s),
            Err(e) => return template_error(e),
        }
    }

    let mut headers = HeaderMap::new();
    if matches!(outcome, SubmitOutcome::Executed { .. }) {
        headers.insert("HX-Trigger", hx_trigger_value(&["ordersUpdated"]));
    }

    (StatusCode::OK, headers, Html(html)).into_response()
}
