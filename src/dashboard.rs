//! The dashboard's controller: owns the visible order history and turns
//! button presses into calls against the order backend.

use chrono::Local;
use serde_json::Value;

use crate::{
    error::{validate_quantity, RequestError, ValidationError},
    models::{HistoryRow, Order, OrderKind},
    prompt::UserPrompt,
    services::backend::OrderBackend,
};

pub const ORDER_EXECUTED: &str = "Ordem executada!";
pub const SUGGESTION_UNAVAILABLE: &str = "Sugestão indisponível no momento.";
pub const AUTOMATIC_REQUESTED: &str = "Modo automático solicitado.";
pub const LIVE_PRICE: &str = "ao vivo";

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Quantity failed validation; nothing was sent.
    Rejected(ValidationError),
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The order went through. `refreshed` is false when the follow-up
    /// history read failed.
    Executed { refreshed: bool },
    Suggested(Value),
    AutomaticRequested,
    Failed(RequestError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Executed { .. } | SubmitOutcome::Suggested(_) | SubmitOutcome::AutomaticRequested
        )
    }
}

pub struct DashboardController<B> {
    backend: B,
    symbol: String,
    history: Vec<Order>,
}

impl<B: OrderBackend> DashboardController<B> {
    pub fn new(backend: B, symbol: impl Into<String>) -> Self {
        Self {
            backend,
            symbol: symbol.into(),
            history: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn history(&self) -> &[Order] {
        &self.history
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        self.history.iter().map(HistoryRow::from).collect()
    }

    /// Replaces the history with the backend's. On any failure the previous
    /// list stays as it was.
    pub async fn refresh_history(&mut self) -> Result<(), RequestError> {
        match self.backend.history().await {
            Ok(orders) => {
                tracing::debug!("history refreshed: {} orders", orders.len());
                self.history = orders;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("history refresh failed, keeping previous view: {}", e);
                Err(e)
            }
        }
    }

    pub async fn submit_order<P: UserPrompt>(
        &mut self,
        prompt: &P,
        kind: OrderKind,
        quantity: &str,
    ) -> SubmitOutcome {
        if let Err(e) = validate_quantity(quantity) {
            tracing::info!("{} rejected: {}", kind, e);
            prompt.alert(e.user_message());
            return SubmitOutcome::Rejected(e);
        }
        let qty_str = quantity.trim();

        if !prompt.confirm(kind.confirm_message()) {
            return SubmitOutcome::Cancelled;
        }

        match kind {
            OrderKind::Buy | OrderKind::Sell => self.execute(prompt, kind, qty_str).await,
            OrderKind::Suggestion => self.suggest(prompt, qty_str).await,
            OrderKind::Automatic => self.automatic(prompt, qty_str).await,
        }
    }

    async fn execute<P: UserPrompt>(&mut self, prompt: &P, kind: OrderKind, qty_str: &str) -> SubmitOutcome {
        if let Err(e) = self.backend.execute_order(kind, qty_str).await {
            tracing::error!("{} {} failed: {}", kind, qty_str, e);
            prompt.alert(&e.user_message());
            return SubmitOutcome::Failed(e);
        }

        tracing::info!("{} {} {} executed", kind, qty_str, self.symbol);
        prompt.alert(ORDER_EXECUTED);

        // a failed refresh is logged inside; the order itself went through
        let refreshed = self.refresh_history().await.is_ok();
        SubmitOutcome::Executed { refreshed }
    }

    async fn suggest<P: UserPrompt>(&mut self, prompt: &P, qty_str: &str) -> SubmitOutcome {
        let payload = match self.backend.suggestion(&self.symbol).await {
            Ok(v) if !v.is_null() => v,
            Ok(_) => {
                let e = RequestError::Decode("empty suggestion payload".to_string());
                tracing::warn!("suggestion failed: {}", e);
                prompt.alert(SUGGESTION_UNAVAILABLE);
                return SubmitOutcome::Failed(e);
            }
            Err(e) => {
                tracing::warn!("suggestion failed: {}", e);
                prompt.alert(SUGGESTION_UNAVAILABLE);
                return SubmitOutcome::Failed(e);
            }
        };

        if let Some(text) = suggestion_text(&payload) {
            prompt.alert(&text);
        }

        self.push_local(OrderKind::Suggestion, qty_str);
        SubmitOutcome::Suggested(payload)
    }

    async fn automatic<P: UserPrompt>(&mut self, prompt: &P, qty_str: &str) -> SubmitOutcome {
        if let Err(e) = self.backend.activate_automatic().await {
            tracing::warn!("automatic mode request failed: {}", e);
            prompt.alert(&e.user_message());
            return SubmitOutcome::Failed(e);
        }

        prompt.alert(AUTOMATIC_REQUESTED);
        self.push_local(OrderKind::Automatic, qty_str);
        SubmitOutcome::AutomaticRequested
    }

    // Optimistic row; gone on the next refresh.
    fn push_local(&mut self, kind: OrderKind, qty_str: &str) {
        self.history.insert(
            0,
            Order {
                kind: kind.label().to_string(),
                asset: self.symbol.clone(),
                quantity: qty_str.to_string(),
                price: LIVE_PRICE.to_string(),
                time: Local::now().format("%H:%M").to_string(),
            },
        );
    }
}

fn suggestion_text(payload: &Value) -> Option<String> {
    let text = match payload {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => ["sugestao", "mensagem", "message", "texto"]
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str())),
        _ => None,
    }?;

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
