use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Buy,
    Sell,
    Suggestion,
    Automatic,
}

impl OrderKind {
    pub const ALL: [OrderKind; 4] = [
        OrderKind::Buy,
        OrderKind::Sell,
        OrderKind::Suggestion,
        OrderKind::Automatic,
    ];

    /// Button name, also used as the `/ordens/:kind` path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderKind::Buy => "buy",
            OrderKind::Sell => "sell",
            OrderKind::Suggestion => "suggest",
            OrderKind::Automatic => "auto",
        }
    }

    pub fn confirm_message(self) -> &'static str {
        match self {
            OrderKind::Buy => "Confirmar compra?",
            OrderKind::Sell => "Confirmar venda?",
            OrderKind::Suggestion => "Pedir sugestão para a IA?",
            OrderKind::Automatic => "Ativar modo automático?",
        }
    }

    /// Value of the `tipo` form field; only buy/sell reach the order endpoint.
    pub fn wire_tipo(self) -> Option<&'static str> {
        match self {
            OrderKind::Buy => Some("compra"),
            OrderKind::Sell => Some("venda"),
            OrderKind::Suggestion | OrderKind::Automatic => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderKind::Buy => "Comprar",
            OrderKind::Sell => "Vender",
            OrderKind::Suggestion => "Sugestão IA",
            OrderKind::Automatic => "Automático",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "compra" => Ok(OrderKind::Buy),
            "sell" | "venda" => Ok(OrderKind::Sell),
            "suggest" | "suggestion" | "sugestao" => Ok(OrderKind::Suggestion),
            "auto" | "automatic" | "automatico" => Ok(OrderKind::Automatic),
            other => Err(format!("unknown order kind: {other}")),
        }
    }
}
