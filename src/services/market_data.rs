use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::de::de_text;

#[derive(Clone)]
pub struct MarketDataClient {
    http: Client,
    base_url: String,
}

impl MarketDataClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn price(&self, symbol: &str) -> Result<TickerPrice, String> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err("missing symbol".to_string());
        }

        let url = format!("{}/api/v3/ticker/price", self.base_url);
        let res = self
            .http
            .get(url)
            .query(&[("symbol", symbol.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("ticker request failed: {status} {body}"));
        }

        let ticker = res.json::<TickerPrice>().await.map_err(|e| e.to_string())?;
        if ticker.price.trim().is_empty() {
            return Err("ticker response has no price".to_string());
        }
        Ok(ticker)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TickerPrice {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, deserialize_with = "de_text")]
    pub price: String,
}
