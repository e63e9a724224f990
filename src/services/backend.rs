use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::{
    error::{extract_error_message, RequestError},
    models::{Balance, Order, OrderKind},
};

/// Upstream surface the dashboard talks to.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn history(&self) -> Result<Vec<Order>, RequestError>;
    async fn execute_order(&self, kind: OrderKind, quantity: &str) -> Result<(), RequestError>;
    async fn suggestion(&self, symbol: &str) -> Result<Value, RequestError>;
    async fn activate_automatic(&self) -> Result<(), RequestError>;
    async fn balance(&self) -> Result<Balance, RequestError>;
}

#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Non-2xx => Status error carrying whatever message the body offers.
async fn check_status(res: Response) -> Result<Response, RequestError> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    Err(RequestError::Status {
        status,
        message: extract_error_message(&body),
    })
}

#[async_trait]
impl OrderBackend for HttpBackend {
    async fn history(&self) -> Result<Vec<Order>, RequestError> {
        let res = self.http.get(self.url("/historico")).send().await?;
        let res = check_status(res).await?;

        let body = res.text().await?;
        serde_json::from_str::<Vec<Order>>(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn execute_order(&self, kind: OrderKind, quantity: &str) -> Result<(), RequestError> {
        let Some(tipo) = kind.wire_tipo() else {
            return Err(RequestError::Unsupported(kind.to_string()));
        };

        let res = self
            .http
            .post(self.url("/executar_ordem"))
            .form(&[("tipo", tipo), ("quantidade", quantity)])
            .send()
            .await?;

        check_status(res).await?;
        Ok(())
    }

    async fn suggestion(&self, symbol: &str) -> Result<Value, RequestError> {
        let res = self
            .http
            .get(self.url("/sugestao"))
            .query(&[("symbol", symbol)])
            .send()
            .await?;
        let res = check_status(res).await?;

        let body = res.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn activate_automatic(&self) -> Result<(), RequestError> {
        let res = self
            .http
            .post(self.url("/operacoes_automatico/ativar"))
            .send()
            .await?;

        check_status(res).await?;
        Ok(())
    }

    async fn balance(&self) -> Result<Balance, RequestError> {
        let res = self.http.get(self.url("/saldo")).send().await?;
        let res = check_status(res).await?;

        let body = res.text().await?;
        serde_json::from_str::<Balance>(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}
