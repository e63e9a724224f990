use serde::{Deserialize, Serialize};

use super::de::de_text;

/// One entry of the order history, as the backend sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "tipo", default, deserialize_with = "de_text")]
    pub kind: String,
    #[serde(rename = "ativo", default, deserialize_with = "de_text")]
    pub asset: String,
    #[serde(rename = "valor", default, deserialize_with = "de_text")]
    pub quantity: String,
    #[serde(rename = "preco", default, deserialize_with = "de_text")]
    pub price: String,
    #[serde(rename = "hora", default, deserialize_with = "de_text")]
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Buy,
    Sell,
    Neutral,
}

impl RowClass {
    /// Case-insensitive substring match on the raw `tipo`. "venda" wins over "compra".
    pub fn classify(kind: &str) -> Self {
        let lower = kind.to_lowercase();
        if lower.contains("venda") {
            RowClass::Sell
        } else if lower.contains("compra") {
            RowClass::Buy
        } else {
            RowClass::Neutral
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RowClass::Buy => "tipo-compra",
            RowClass::Sell => "tipo-venda",
            RowClass::Neutral => "",
        }
    }
}

/// Display row handed to the `history_rows` template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub tipo: String,
    pub ativo: String,
    pub valor: String,
    pub preco: String,
    pub hora: String,
    pub css_class: &'static str,
}

impl HistoryRow {
    pub fn class(&self) -> RowClass {
        RowClass::classify(&self.tipo)
    }
}

impl From<&Order> for HistoryRow {
    fn from(o: &Order) -> Self {
        HistoryRow {
            tipo: o.kind.clone(),
            ativo: o.asset.clone(),
            valor: o.quantity.clone(),
            preco: o.price.clone(),
            hora: o.time.clone(),
            css_class: RowClass::classify(&o.kind).css_class(),
        }
    }
}
