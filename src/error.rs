use thiserror::Error;

pub const GENERIC_ORDER_ERROR: &str = "Erro ao executar ordem";
pub const INVALID_QUANTITY: &str = "Informe uma quantidade válida.";

/// Quantity rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quantity is missing")]
    Missing,

    #[error("quantity is not a number: {0}")]
    NotANumber(String),

    #[error("quantity must be positive: {0}")]
    NotPositive(String),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        INVALID_QUANTITY
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("invalid response payload: {0}")]
    Decode(String),

    #[error("{0} is not sent to the order endpoint")]
    Unsupported(String),
}

impl RequestError {
    /// Text shown to the user: the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Status {
                message: Some(m), ..
            } => m.clone(),
            _ => GENERIC_ORDER_ERROR.to_string(),
        }
    }
}

/// Parses a quantity the way the order form expects: trimmed, finite, > 0.
pub fn validate_quantity(raw: &str) -> Result<f64, ValidationError> {
    let qty_str = raw.trim();
    if qty_str.is_empty() {
        return Err(ValidationError::Missing);
    }

    let qty: f64 = qty_str
        .parse()
        .map_err(|_| ValidationError::NotANumber(qty_str.to_string()))?;

    if !qty.is_finite() {
        return Err(ValidationError::NotANumber(qty_str.to_string()));
    }
    if qty <= 0.0 {
        return Err(ValidationError::NotPositive(qty_str.to_string()));
    }

    Ok(qty)
}

/// Best-effort error text from a failed response body.
///
/// Accepts a JSON object carrying one of the usual message keys, or a bare
/// JSON string. Anything else (plain text, HTML, empty) yields `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    let text = match &value {
        serde_json::Value::String(s) => Some(s.as_str()),
        serde_json::Value::Object(map) => ["erro", "error", "mensagem", "message", "detail"]
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str())),
        _ => None,
    }?;

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
