use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // upstream order/history backend
    pub backend_url: String,
    // polled price source (Binance public ticker shape)
    pub market_data_url: String,

    pub symbol: String,
    pub default_qty: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let backend_url = env::var("BACKEND_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    let market_data_url = env::var("MARKET_DATA_URL")
        .unwrap_or_else(|_| "https://api.binance.com".to_string());

    let symbol = env::var("SYMBOL")
        .ok()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "BTCUSDT".to_string());

    let default_qty = env::var("DEFAULT_QTY").unwrap_or_else(|_| "0.001".to_string());

    Settings {
        host,
        port,
        backend_url: trim_base(backend_url),
        market_data_url: trim_base(market_data_url),
        symbol,
        default_qty,
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
