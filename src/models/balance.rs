use serde::{Deserialize, Serialize};

use super::de::de_text;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, deserialize_with = "de_text")]
    pub saldo_btc: String,
    #[serde(default, deserialize_with = "de_text")]
    pub saldo_usdt: String,
    #[serde(default, deserialize_with = "de_text")]
    pub saldo_futures_usdt: String,
}
