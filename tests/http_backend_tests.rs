use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Form, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use painel::error::{extract_error_message, RequestError, GENERIC_ORDER_ERROR};
use painel::models::OrderKind;
use painel::services::{backend::{HttpBackend, OrderBackend}, market_data::MarketDataClient};

#[derive(Clone)]
struct Upstream {
    history_body: String,
    order_status: StatusCode,
    order_body: String,
    forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Upstream {
    fn new() -> Self {
        Self {
            history_body: "[]".to_string(),
            order_status: StatusCode::OK,
            order_body: r#"{"ok":true}"#.to_string(),
            forms: Arc::new(Mutex::new(vec![])),
            queries: Arc::new(Mutex::new(vec![])),
        }
    }
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn historico(State(up): State<Upstream>) -> Response {
    json_response(StatusCode::OK, up.history_body.clone())
}

async fn executar_ordem(State(up): State<Upstream>, Form(form): Form<HashMap<String, String>>) -> Response {
    up.forms.lock().unwrap().push(form);
    json_response(up.order_status, up.order_body.clone())
}

async fn sugestao(State(up): State<Upstream>, Query(q): Query<HashMap<String, String>>) -> Response {
    up.queries.lock().unwrap().push(q);
    json_response(StatusCode::OK, r#"{"sugestao":"Aguardar"}"#.to_string())
}

async fn saldo() -> Response {
    json_response(
        StatusCode::OK,
        r#"{"saldo_btc":"0.5","saldo_usdt":1200.25,"saldo_futures_usdt":"0"}"#.to_string(),
    )
}

async fn ativar() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn ticker(Query(q): Query<HashMap<String, String>>) -> Response {
    let symbol = q.get("symbol").cloned().unwrap_or_default();
    json_response(
        StatusCode::OK,
        format!(r#"{{"symbol":"{symbol}","price":"67600.01000000"}}"#),
    )
}

async fn spawn_upstream(up: Upstream) -> String {
    let app = Router::new()
        .route("/historico", get(historico))
        .route("/executar_ordem", post(executar_ordem))
        .route("/sugestao", get(sugestao))
        .route("/saldo", get(saldo))
        .route("/operacoes_automatico/ativar", post(ativar))
        .route("/api/v3/ticker/price", get(ticker))
        .with_state(up);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn history_decodes_order_array() {
    let mut up = Upstream::new();
    up.history_body = r#"[
        {"tipo":"Compra","ativo":"BTCUSDT","valor":"0.001","preco":"67600","hora":"10:12"},
        {"tipo":"Venda","ativo":"BTCUSDT","valor":0.002,"preco":67650.5,"hora":"10:15"}
    ]"#
    .to_string();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    let orders = backend.history().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].kind, "Compra");
    assert_eq!(orders[1].quantity, "0.002");
    assert_eq!(orders[1].price, "67650.5");
}

#[tokio::test]
async fn history_that_is_not_an_array_is_a_decode_error() {
    let mut up = Upstream::new();
    up.history_body = r#"{"erro":"sessão expirada"}"#.to_string();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    let err = backend.history().await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn execute_order_posts_form_fields() {
    let up = Upstream::new();
    let forms = up.forms.clone();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    backend.execute_order(OrderKind::Buy, "0.001").await.unwrap();
    backend.execute_order(OrderKind::Sell, "0.25").await.unwrap();

    let forms = forms.lock().unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].get("tipo").map(String::as_str), Some("compra"));
    assert_eq!(forms[0].get("quantidade").map(String::as_str), Some("0.001"));
    assert_eq!(forms[1].get("tipo").map(String::as_str), Some("venda"));
    assert_eq!(forms[1].get("quantidade").map(String::as_str), Some("0.25"));
}

#[tokio::test]
async fn execute_order_failure_carries_server_message() {
    let mut up = Upstream::new();
    up.order_status = StatusCode::BAD_REQUEST;
    up.order_body = r#"{"erro":"Saldo insuficiente"}"#.to_string();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    let err = backend.execute_order(OrderKind::Buy, "10").await.unwrap_err();

    match &err {
        RequestError::Status { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("Saldo insuficiente"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Saldo insuficiente");
}

#[tokio::test]
async fn execute_order_plain_text_failure_falls_back_to_generic() {
    let mut up = Upstream::new();
    up.order_status = StatusCode::INTERNAL_SERVER_ERROR;
    up.order_body = "Internal Server Error".to_string();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    let err = backend.execute_order(OrderKind::Sell, "1").await.unwrap_err();

    assert!(matches!(err, RequestError::Status { status: 500, message: None }));
    assert_eq!(err.user_message(), GENERIC_ORDER_ERROR);
}

#[tokio::test]
async fn suggestion_and_automatic_are_not_order_posts() {
    let up = Upstream::new();
    let forms = up.forms.clone();
    let queries = up.queries.clone();
    let backend = HttpBackend::new(spawn_upstream(up).await);

    let err = backend.execute_order(OrderKind::Suggestion, "1").await.unwrap_err();
    assert!(matches!(err, RequestError::Unsupported(_)));

    let payload = backend.suggestion("BTCUSDT").await.unwrap();
    assert_eq!(payload["sugestao"], "Aguardar");
    assert_eq!(
        queries.lock().unwrap()[0].get("symbol").map(String::as_str),
        Some("BTCUSDT")
    );

    backend.activate_automatic().await.unwrap();
    assert!(forms.lock().unwrap().is_empty());
}

#[tokio::test]
async fn balance_accepts_numeric_values() {
    let backend = HttpBackend::new(spawn_upstream(Upstream::new()).await);

    let balance = backend.balance().await.unwrap();

    assert_eq!(balance.saldo_btc, "0.5");
    assert_eq!(balance.saldo_usdt, "1200.25");
    assert_eq!(balance.saldo_futures_usdt, "0");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // nothing listens on port 9 locally
    let backend = HttpBackend::new("http://127.0.0.1:9");

    let err = backend.history().await.unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(err.user_message(), GENERIC_ORDER_ERROR);
}

#[tokio::test]
async fn market_data_reads_ticker_price() {
    let base = spawn_upstream(Upstream::new()).await;
    let market = MarketDataClient::new(format!("{base}/"));

    let ticker = market.price("btcusdt").await.unwrap();

    assert_eq!(ticker.symbol, "BTCUSDT");
    assert_eq!(ticker.price, "67600.01000000");
}

#[test]
fn error_message_extraction() {
    assert_eq!(extract_error_message(r#"{"error":"bad qty"}"#).as_deref(), Some("bad qty"));
    assert_eq!(extract_error_message(r#"{"message":" x "}"#).as_deref(), Some("x"));
    assert_eq!(extract_error_message(r#""texto puro""#).as_deref(), Some("texto puro"));
    assert_eq!(extract_error_message(r#"{"ok":false}"#), None);
    assert_eq!(extract_error_message(r#"{"erro":""}"#), None);
    assert_eq!(extract_error_message("<html>500</html>"), None);
    assert_eq!(extract_error_message(""), None);
}
